//! Lays out one lesson as a manual section.

use crate::blocks::{add_labeled_paragraph, add_styled_paragraph};
use crate::content::{LessonRecord, CODE_LABEL, SOURCE_LABEL_PREFIX, SUMMARY_LABEL};
use crate::model::{
    Block, BlockKind, BlockSink, ManualDocument, Overrides, Rgb, Section, StyledParagraph,
    Typeface,
};
use crate::styles::{CODE_BLOCK_STYLE, EXPLANATION_STYLE, SECTION_HEADING_STYLE};

const SOURCE_LABEL_COLOR: Rgb = Rgb(102, 102, 102);
const CODE_LABEL_COLOR: Rgb = Rgb(0, 51, 102);
const CODE_TEXT_COLOR: Rgb = Rgb(51, 51, 51);
const SUMMARY_LABEL_COLOR: Rgb = Rgb(0, 102, 51);

/// Appends the section for `record` to the document.
///
/// Every lesson gets the same five blocks: heading, source file label,
/// explanation, code listing and summary.
pub fn compose_lab_section(document: &mut ManualDocument, record: &LessonRecord) {
    let mut section = Section::new(record.title);

    add_styled_paragraph(
        &mut section,
        BlockKind::Heading,
        record.title,
        Some(SECTION_HEADING_STYLE),
        Overrides::new(),
    );
    add_styled_paragraph(
        &mut section,
        BlockKind::Label,
        format!("{SOURCE_LABEL_PREFIX}{}", record.source_name),
        None,
        Overrides::new()
            .typeface(Typeface::Sans)
            .size(10)
            .color(SOURCE_LABEL_COLOR),
    );
    add_styled_paragraph(
        &mut section,
        BlockKind::Paragraph,
        record.explanation.trim(),
        Some(EXPLANATION_STYLE),
        Overrides::new(),
    );
    add_labeled_paragraph(
        &mut section,
        label(CODE_LABEL, 11, CODE_LABEL_COLOR),
        StyledParagraph::new(BlockKind::Code, record.code)
            .with_style(CODE_BLOCK_STYLE.to_owned())
            .with_overrides(
                Overrides::new()
                    .typeface(Typeface::Monospace)
                    .size(10)
                    .color(CODE_TEXT_COLOR),
            ),
    );
    add_labeled_paragraph(
        &mut section,
        label(SUMMARY_LABEL, 12, SUMMARY_LABEL_COLOR),
        StyledParagraph::new(BlockKind::Paragraph, record.summary.trim())
            .with_style(EXPLANATION_STYLE.to_owned()),
    );

    document.push_block(Block::Section(section));
}

fn label(text: &str, size_pt: u8, color: Rgb) -> StyledParagraph {
    StyledParagraph::new(BlockKind::Label, text).with_overrides(
        Overrides::new()
            .typeface(Typeface::Sans)
            .size(size_pt)
            .bold()
            .color(color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LESSONS;

    fn composed(record: &LessonRecord) -> Section {
        let mut document = ManualDocument::new();
        compose_lab_section(&mut document, record);
        let section = document.sections().next().cloned().expect("one section");
        section
    }

    #[test]
    fn emits_five_blocks_in_fixed_order() {
        let section = composed(&LESSONS[1]);
        let blocks = section.blocks();
        assert_eq!(blocks.len(), 5);

        let Block::Paragraph(heading) = &blocks[0] else {
            panic!("heading first");
        };
        assert_eq!(heading.text(), "LAB 2: STRING OPERATIONS");
        assert_eq!(heading.style(), Some(SECTION_HEADING_STYLE));

        let Block::Paragraph(source) = &blocks[1] else {
            panic!("source label second");
        };
        assert_eq!(source.text(), "Source File: second.ipynb");
        assert_eq!(source.overrides().color, Some(SOURCE_LABEL_COLOR));

        let Block::Paragraph(explanation) = &blocks[2] else {
            panic!("explanation third");
        };
        assert!(explanation.text().starts_with("This lab focuses"));
        assert!(explanation.text().ends_with("string method chaining"));

        let Block::Labeled(code) = &blocks[3] else {
            panic!("code block fourth");
        };
        assert_eq!(code.label().text(), "Code:");
        assert_eq!(code.label().overrides().bold, Some(true));
        assert_eq!(code.body().style(), Some(CODE_BLOCK_STYLE));

        let Block::Labeled(summary) = &blocks[4] else {
            panic!("summary fifth");
        };
        assert_eq!(summary.label().text(), "Summary and Analysis:");
        assert!(summary.body().text().starts_with("Key Takeaways:"));
    }

    #[test]
    fn code_is_kept_verbatim() {
        for record in LESSONS {
            let section = composed(record);
            let Block::Labeled(code) = &section.blocks()[3] else {
                panic!("code block expected");
            };
            assert_eq!(code.body().text().as_bytes(), record.code.as_bytes());
            assert_eq!(code.body().kind(), BlockKind::Code);
        }
    }
}
