//! Assembles the complete manual and writes it to disk.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::blocks::{add_page_break, add_styled_paragraph};
use crate::composer::compose_lab_section;
use crate::content::{
    LessonRecord, CONCLUSION, CONCLUSION_TITLE, CONCLUSION_TOC_PAGE, CONCLUSION_TOC_TOPIC,
    COURSE_INFO, LESSONS, MANUAL_SUBTITLE, MANUAL_TITLE, TOC_TITLE,
};
use crate::error::ManualError;
use crate::model::{
    BlockKind, HorizontalAlignment, ManualDocument, Overrides, PageMargins, Rgb, Typeface,
};
use crate::pdf::{PdfBuilder, RenderedPdf};
use crate::persist;
use crate::styles::{register_styles, EXPLANATION_STYLE, TITLE_STYLE};

/// Where the binary writes the manual.
pub const DEFAULT_OUTPUT_PATH: &str = "/media/notsaaadkhan/DATA/UniPython/Python_Lab_Manual.pdf";

/// Width the table of contents pads each label to with dots.
const TOC_LEADER_WIDTH: usize = 50;

const FRONT_MATTER_COLOR: Rgb = Rgb(102, 102, 102);

/// Builds the in-memory manual for the given lessons.
///
/// Lessons are laid out in the order given, one section each, separated by
/// page breaks.
pub fn build_manual(records: &[LessonRecord]) -> Result<ManualDocument, ManualError> {
    let mut document = ManualDocument::new();
    register_styles(&mut document)?;
    document.set_margins(PageMargins::uniform_inches(1.0));

    add_title_page(&mut document);
    add_table_of_contents(&mut document, &contents_entries(records));

    for (index, record) in records.iter().enumerate() {
        compose_lab_section(&mut document, record);
        if index + 1 < records.len() {
            add_page_break(&mut document);
        }
    }

    add_page_break(&mut document);
    add_styled_paragraph(
        &mut document,
        BlockKind::Title,
        CONCLUSION_TITLE,
        Some(TITLE_STYLE),
        Overrides::new(),
    );
    add_styled_paragraph(
        &mut document,
        BlockKind::Paragraph,
        CONCLUSION.trim(),
        Some(EXPLANATION_STYLE),
        Overrides::new(),
    );

    debug!(
        "assembled manual with {} sections and {} top-level blocks",
        records.len(),
        document.blocks().len()
    );
    Ok(document)
}

fn add_title_page(document: &mut ManualDocument) {
    add_styled_paragraph(
        document,
        BlockKind::Title,
        MANUAL_TITLE,
        Some(TITLE_STYLE),
        Overrides::new(),
    );
    add_styled_paragraph(
        document,
        BlockKind::Paragraph,
        MANUAL_SUBTITLE,
        None,
        front_matter(14),
    );
    add_styled_paragraph(
        document,
        BlockKind::Paragraph,
        COURSE_INFO,
        None,
        front_matter(12),
    );
    add_page_break(document);
}

fn front_matter(size_pt: u8) -> Overrides {
    Overrides::new()
        .typeface(Typeface::Sans)
        .size(size_pt)
        .color(FRONT_MATTER_COLOR)
        .aligned(HorizontalAlignment::Center)
}

/// One line of the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentsEntry {
    /// Numbered label, e.g. `2. String Operations`.
    pub label: String,
    /// Page the entry lists.
    pub page: &'static str,
    /// Title of the part the entry points at.
    pub target: &'static str,
}

/// Lists the given lessons followed by the conclusion.
///
/// Lessons keep the number from their `LAB n:` heading; a heading without one
/// continues the count from the previous entry.  The conclusion comes one
/// after the last lesson.
pub fn contents_entries(records: &[LessonRecord]) -> Vec<ContentsEntry> {
    let mut entries = Vec::with_capacity(records.len() + 1);
    let mut number = 0;
    for record in records {
        number = lesson_number(record.title).unwrap_or(number + 1);
        entries.push(ContentsEntry {
            label: format!("{number}. {}", record.toc_topic),
            page: record.toc_page,
            target: record.title,
        });
    }
    entries.push(ContentsEntry {
        label: format!("{}. {CONCLUSION_TOC_TOPIC}", number + 1),
        page: CONCLUSION_TOC_PAGE,
        target: CONCLUSION_TITLE,
    });
    entries
}

fn lesson_number(title: &str) -> Option<u32> {
    let (prefix, _) = title.strip_prefix("LAB ")?.split_once(':')?;
    prefix.trim().parse().ok()
}

fn add_table_of_contents(document: &mut ManualDocument, entries: &[ContentsEntry]) {
    add_styled_paragraph(
        document,
        BlockKind::Title,
        TOC_TITLE,
        Some(TITLE_STYLE),
        Overrides::new(),
    );
    for entry in entries {
        add_styled_paragraph(
            document,
            BlockKind::TocEntry,
            toc_line(&entry.label, entry.page),
            None,
            Overrides::new().typeface(Typeface::Sans).size(11),
        );
    }
    add_page_break(document);
}

/// Formats a contents line as the label, a dot leader and the page number.
///
/// The leader pads the label to a fixed character count; it does not measure
/// rendered widths.
pub fn toc_line(label: &str, page: &str) -> String {
    let dots = TOC_LEADER_WIDTH.saturating_sub(label.chars().count());
    format!("{label}{}{page}", ".".repeat(dots))
}

/// Builds the manual from the built-in lessons, renders it and writes it to `path`.
///
/// The file at `path` is only replaced once the complete document has been
/// written; a failed save leaves no partial output behind.
pub fn create_lab_manual(path: impl AsRef<Path>) -> Result<PathBuf, ManualError> {
    let path = path.as_ref();
    info!("Creating Python lab manual");

    let document = build_manual(LESSONS)?;
    let rendered = PdfBuilder::new().render(&document)?;
    log_contents_drift(&contents_entries(LESSONS), &rendered);

    #[cfg(feature = "bookmarks")]
    let bytes = crate::bookmarks::apply_section_bookmarks(&rendered.bytes, &rendered.section_pages)?;
    #[cfg(not(feature = "bookmarks"))]
    let bytes = rendered.bytes;

    persist::write_atomically(path, &bytes)?;
    info!("Lab manual saved as {} ({} bytes)", path.display(), bytes.len());
    Ok(path.to_path_buf())
}

fn log_contents_drift(entries: &[ContentsEntry], rendered: &RenderedPdf) {
    for entry in entries {
        if let Some(actual) = rendered.page_of(entry.target) {
            if actual.to_string() != entry.page {
                debug!(
                    "contents lists '{}' on page {}, rendered on page {actual}",
                    entry.label, entry.page
                );
            }
        }
    }
}
