//! Error type shared by the assembly, rendering and persistence steps.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[cfg(feature = "bookmarks")]
use crate::bookmarks::BookmarkError;

/// Errors that can occur while producing the lab manual.
#[derive(Debug)]
pub enum ManualError {
    /// The output document could not be written.
    Io {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },
    /// No usable font family could be loaded.
    FontLoad(genpdf::error::Error),
    /// Laying out or encoding the PDF failed.
    Render(genpdf::error::Error),
    /// A style name was registered twice.
    DuplicateStyle(String),
    /// A paragraph referenced a style that was never registered.
    UnknownStyle(String),
    /// Section bookmarks could not be embedded.
    #[cfg(feature = "bookmarks")]
    Bookmarks(BookmarkError),
}

impl ManualError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ManualError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "Failed to write {}", path.display()),
            Self::FontLoad(err) => write!(f, "Failed to load fonts: {err}"),
            Self::Render(err) => write!(f, "Failed to render PDF: {err}"),
            Self::DuplicateStyle(name) => write!(f, "Style '{name}' is already registered"),
            Self::UnknownStyle(name) => write!(f, "Style '{name}' is not registered"),
            #[cfg(feature = "bookmarks")]
            Self::Bookmarks(err) => write!(f, "Failed to embed bookmarks: {err}"),
        }
    }
}

impl std::error::Error for ManualError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::FontLoad(err) | Self::Render(err) => Some(err),
            Self::DuplicateStyle(_) | Self::UnknownStyle(_) => None,
            #[cfg(feature = "bookmarks")]
            Self::Bookmarks(err) => Some(err),
        }
    }
}

#[cfg(feature = "bookmarks")]
impl From<BookmarkError> for ManualError {
    fn from(err: BookmarkError) -> Self {
        Self::Bookmarks(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_error_exposes_source() {
        let err = ManualError::io(
            "/nowhere/manual.pdf",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to write /nowhere/manual.pdf");
        assert_eq!(err.source().map(|s| s.to_string()), Some("denied".into()));
    }

    #[test]
    fn style_errors_name_the_style() {
        let err = ManualError::UnknownStyle("Heading 9".into());
        assert!(err.to_string().contains("Heading 9"));
        assert!(err.source().is_none());
    }
}
