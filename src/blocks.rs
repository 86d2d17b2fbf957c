//! Helpers that append styled content to a document or section.

use crate::model::{
    Block, BlockKind, BlockSink, LabeledParagraph, Overrides, StyledParagraph,
};

/// Appends a paragraph rendered with the named style and the given overrides.
///
/// Passing `None` as the style renders the paragraph with the document
/// defaults, which the overrides may still adjust.
pub fn add_styled_paragraph(
    sink: &mut impl BlockSink,
    kind: BlockKind,
    text: impl Into<String>,
    style: Option<&str>,
    overrides: Overrides,
) {
    let paragraph = StyledParagraph::new(kind, text)
        .with_style(style.map(str::to_owned))
        .with_overrides(overrides);
    sink.push_block(Block::Paragraph(paragraph));
}

/// Appends a label paragraph together with the body paragraph it introduces.
pub fn add_labeled_paragraph(
    sink: &mut impl BlockSink,
    label: StyledParagraph,
    body: StyledParagraph,
) {
    sink.push_block(Block::Labeled(LabeledParagraph::new(label, body)));
}

/// Appends an unconditional page break.
pub fn add_page_break(sink: &mut impl BlockSink) {
    sink.push_block(Block::PageBreak);
}
