//! Font loading utilities for the `lab_manual` crate.
//!
//! The manual uses two families: a sans-serif family for prose and headings
//! and a monospaced family for code.  Each is resolved from the first source
//! that provides all four faces:
//!
//! 1. the bundled family (`Roboto` / `RobotoMono`) in `$LAB_MANUAL_FONTS_DIR`,
//!    `assets/fonts` next to the executable, or `assets/fonts` in the crate;
//! 2. the Liberation family from the usual system font directories;
//! 3. the Windows family (`Arial` / `Consolas`) from
//!    `$LAB_MANUAL_WINDOWS_FONTS_DIR` or `%WINDIR%\Fonts`.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use log::{debug, warn};

use crate::model::Typeface;

/// Overrides the directory searched first for the bundled fonts.
pub const FONTS_DIR_ENV: &str = "LAB_MANUAL_FONTS_DIR";
/// Overrides the directory searched for the Windows fallback fonts.
pub const WINDOWS_FONTS_DIR_ENV: &str = "LAB_MANUAL_WINDOWS_FONTS_DIR";

struct FamilySpec {
    name: &'static str,
    regular: &'static str,
    bold: &'static str,
    italic: &'static str,
    bold_italic: &'static str,
}

impl FamilySpec {
    fn files(&self) -> [&'static str; 4] {
        [self.regular, self.bold, self.italic, self.bold_italic]
    }
}

struct TypefaceSources {
    bundled: FamilySpec,
    system: FamilySpec,
    windows: FamilySpec,
}

const SANS: TypefaceSources = TypefaceSources {
    bundled: FamilySpec {
        name: "Roboto",
        regular: "Roboto-Regular.ttf",
        bold: "Roboto-Bold.ttf",
        italic: "Roboto-Italic.ttf",
        bold_italic: "Roboto-BoldItalic.ttf",
    },
    system: FamilySpec {
        name: "Liberation Sans",
        regular: "LiberationSans-Regular.ttf",
        bold: "LiberationSans-Bold.ttf",
        italic: "LiberationSans-Italic.ttf",
        bold_italic: "LiberationSans-BoldItalic.ttf",
    },
    windows: FamilySpec {
        name: "Arial",
        regular: "arial.ttf",
        bold: "arialbd.ttf",
        italic: "ariali.ttf",
        bold_italic: "arialbi.ttf",
    },
};

const MONOSPACE: TypefaceSources = TypefaceSources {
    bundled: FamilySpec {
        name: "Roboto Mono",
        regular: "RobotoMono-Regular.ttf",
        bold: "RobotoMono-Bold.ttf",
        italic: "RobotoMono-Italic.ttf",
        bold_italic: "RobotoMono-BoldItalic.ttf",
    },
    system: FamilySpec {
        name: "Liberation Mono",
        regular: "LiberationMono-Regular.ttf",
        bold: "LiberationMono-Bold.ttf",
        italic: "LiberationMono-Italic.ttf",
        bold_italic: "LiberationMono-BoldItalic.ttf",
    },
    windows: FamilySpec {
        name: "Consolas",
        regular: "consola.ttf",
        bold: "consolab.ttf",
        italic: "consolai.ttf",
        bold_italic: "consolaz.ttf",
    },
};

const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/liberation2",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/liberation-mono",
    "/usr/local/share/fonts",
];

fn sources(typeface: Typeface) -> &'static TypefaceSources {
    match typeface {
        Typeface::Sans => &SANS,
        Typeface::Monospace => &MONOSPACE,
    }
}

/// Directory holding the fonts bundled with the crate sources.
pub fn bundled_fonts_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn bundled_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env_path(FONTS_DIR_ENV) {
        candidates.push(path);
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets/fonts");
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
    }

    let manifest_candidate = bundled_fonts_source_dir();
    if !candidates.contains(&manifest_candidate) {
        candidates.push(manifest_candidate);
    }

    candidates
}

fn system_directory_candidates() -> Vec<PathBuf> {
    SYSTEM_FONT_DIRS.iter().map(PathBuf::from).collect()
}

fn windows_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = env_path(WINDOWS_FONTS_DIR_ENV) {
        candidates.push(path);
    }

    #[cfg(windows)]
    {
        for var in ["WINDIR", "SystemRoot"] {
            if let Some(root) = env_path(var) {
                let candidate = root.join("Fonts");
                if !candidates.contains(&candidate) {
                    candidates.push(candidate);
                }
            }
        }
    }

    candidates
}

fn missing_font_files(directory: &Path, spec: &FamilySpec) -> Vec<&'static str> {
    spec.files()
        .into_iter()
        .filter(|name| !directory.join(name).is_file())
        .collect()
}

/// Finds the first directory that holds every face of `spec`.
///
/// Rejected candidates are appended to `attempts` for the error message.
fn find_directory(
    spec: &FamilySpec,
    candidates: Vec<PathBuf>,
    attempts: &mut Vec<String>,
) -> Option<PathBuf> {
    for candidate in candidates {
        if !candidate.is_dir() {
            attempts.push(format!("{} (directory missing)", candidate.display()));
            continue;
        }

        let missing = missing_font_files(&candidate, spec);
        if missing.is_empty() {
            return Some(candidate);
        }
        attempts.push(format!(
            "{} (missing {} files [{}])",
            candidate.display(),
            spec.name,
            missing.join(", ")
        ));
    }
    None
}

fn load_face(directory: &Path, file: &str, spec: &FamilySpec) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load {} font at {}: {}",
                spec.name,
                path.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

fn load_family(directory: &Path, spec: &FamilySpec) -> Result<FontFamily<FontData>, Error> {
    Ok(FontFamily {
        regular: load_face(directory, spec.regular, spec)?,
        bold: load_face(directory, spec.bold, spec)?,
        italic: load_face(directory, spec.italic, spec)?,
        bold_italic: load_face(directory, spec.bold_italic, spec)?,
    })
}

fn locate(typeface: Typeface) -> Result<(PathBuf, &'static FamilySpec), Error> {
    let sources = sources(typeface);
    let mut attempts = Vec::new();

    let searches = [
        (&sources.bundled, bundled_directory_candidates()),
        (&sources.system, system_directory_candidates()),
        (&sources.windows, windows_directory_candidates()),
    ];

    for (index, (spec, candidates)) in searches.into_iter().enumerate() {
        if let Some(directory) = find_directory(spec, candidates, &mut attempts) {
            if index > 0 {
                warn!(
                    "Bundled {} fonts unavailable; falling back to '{}' from {} for {} text.",
                    sources.bundled.name,
                    spec.name,
                    directory.display(),
                    typeface.requested_family()
                );
            }
            return Ok((directory, spec));
        }
    }

    let summary = if attempts.is_empty() {
        "no search paths were available".to_owned()
    } else {
        attempts.join(", ")
    };

    Err(Error::new(
        format!(
            "Unable to locate a font family for {} text. Checked: {}. Copy the bundled fonts to assets/fonts or set {}.",
            typeface.requested_family(),
            summary,
            FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
    ))
}

/// Loads the closest available font family for `typeface`.
pub fn family_for(typeface: Typeface) -> Result<FontFamily<FontData>, Error> {
    let (directory, spec) = locate(typeface)?;
    debug!(
        "loading {} for {} text from {}",
        spec.name,
        typeface.requested_family(),
        directory.display()
    );
    load_family(&directory, spec)
}

/// Font data for both typefaces the manual uses.
pub struct FontFamilies {
    pub sans: FontFamily<FontData>,
    pub monospace: FontFamily<FontData>,
}

/// Loads the sans and monospace families.
pub fn load_families() -> Result<FontFamilies, Error> {
    Ok(FontFamilies {
        sans: family_for(Typeface::Sans)?,
        monospace: family_for(Typeface::Monospace)?,
    })
}

/// Indicates whether both typefaces can be resolved from some font source.
pub fn fonts_available() -> bool {
    locate(Typeface::Sans).is_ok() && locate(Typeface::Monospace).is_ok()
}
