//! Writing the rendered manual to disk.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::ManualError;

/// Writes `bytes` to `path` so the file only ever appears complete.
///
/// The data goes to a sibling `.tmp` file first, which is synced and then
/// renamed over `path`.  On failure the temporary file is removed and `path`
/// is left untouched.  Missing parent directories are not created.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), ManualError> {
    let temp_path = temp_path_for(path);
    debug!("writing {} bytes to {}", bytes.len(), temp_path.display());

    let result = write_file(&temp_path, bytes).and_then(|()| fs::rename(&temp_path, path));
    if let Err(err) = result {
        if temp_path.exists() {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                warn!(
                    "Failed to remove temporary file {}: {}",
                    temp_path.display(),
                    cleanup
                );
            }
        }
        return Err(ManualError::io(path, err));
    }
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_complete_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manual.pdf");

        write_atomically(&path, b"%PDF-1.3 body").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.3 body");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manual.pdf");
        fs::write(&path, b"old").unwrap();

        write_atomically(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn missing_directory_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("manual.pdf");

        let err = write_atomically(&path, b"data").unwrap_err();

        match err {
            ManualError::Io { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!path.exists());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn directory_target_leaves_no_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manual.pdf");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        assert!(write_atomically(&path, b"data").is_err());
        assert!(path.is_dir());
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let path = Path::new("/srv/out/Python_Lab_Manual.pdf");
        assert_eq!(
            temp_path_for(path),
            PathBuf::from("/srv/out/Python_Lab_Manual.pdf.tmp")
        );
    }
}
