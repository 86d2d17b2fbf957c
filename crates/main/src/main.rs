use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use lab_manual::content::FEATURES;
use tracing_subscriber::EnvFilter;

/// Generates the Python programming lab manual.
///
/// The manual is written to a fixed location. Fonts are looked up under
/// `assets/fonts` next to the binary or in the crate, in the directory named by
/// `LAB_MANUAL_FONTS_DIR`, and in the system font directories.
#[derive(Parser)]
#[command(author, version, about = "Generates the Python programming lab manual PDF")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lab_manual=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match lab_manual::create_lab_manual(lab_manual::DEFAULT_OUTPUT_PATH) {
        Ok(path) => {
            println!("Lab manual created: {}", path.display());
            println!();
            println!("Features included:");
            for feature in FEATURES {
                println!("  ✓ {feature}");
            }
        }
        Err(err) => {
            let _ = write_failure(&mut io::stdout().lock(), &err);
            std::process::exit(1);
        }
    }
}

/// Writes the failure message followed by its chain of causes.
fn write_failure(out: &mut impl Write, error: &(dyn Error + 'static)) -> io::Result<()> {
    writeln!(out, "Error creating lab manual: {error}")?;
    let mut current = error;
    while let Some(source) = current.source() {
        writeln!(out, "  caused by: {source}")?;
        current = source;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct SaveFailed(io::Error);

    impl fmt::Display for SaveFailed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Failed to write manual.pdf")
        }
    }

    impl Error for SaveFailed {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn failure_report_lists_every_cause() {
        let err = SaveFailed(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let mut out = Vec::new();
        write_failure(&mut out, &err).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Error creating lab manual: Failed to write manual.pdf\n  caused by: denied\n"
        );
    }
}
