//! Data structures describing the logical content of the lab manual.
//!
//! The types in this module form a renderer-independent model of the manual.
//! They intentionally avoid referencing `genpdf` directly so the assembled
//! document can be inspected and compared in tests without loading fonts or
//! producing PDF bytes.  [`crate::pdf`] converts the model into `genpdf`
//! elements once assembly is complete.

use crate::styles::StyleSheet;

const MM_PER_INCH: f64 = 25.4;

/// Paragraph alignment supported by the manual's styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
}

/// The two typefaces the manual uses.
///
/// The requested family names mirror the word-processor fonts the manual was
/// designed with.  The font loader resolves each role to the closest family
/// that is actually available on the machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Typeface {
    /// Proportional sans-serif text.
    #[default]
    Sans,
    /// Monospaced text used for code listings.
    Monospace,
}

impl Typeface {
    /// Returns the family name the manual asks for.
    pub fn requested_family(self) -> &'static str {
        match self {
            Typeface::Sans => "Arial",
            Typeface::Monospace => "Consolas",
        }
    }
}

/// An RGB color with one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Page margins in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl PageMargins {
    /// Creates margins with the same width, given in inches, on every side.
    pub fn uniform_inches(inches: f64) -> Self {
        let mm = inches * MM_PER_INCH;
        Self {
            top: mm,
            right: mm,
            bottom: mm,
            left: mm,
        }
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::uniform_inches(1.0)
    }
}

/// What a paragraph represents within the manual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Title,
    Heading,
    Paragraph,
    Label,
    Code,
    TocEntry,
}

/// Per-paragraph attributes layered on top of the paragraph's named style.
///
/// Every field left as `None` inherits the value from the style (or from the
/// document defaults when the paragraph has no style).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub typeface: Option<Typeface>,
    pub size_pt: Option<u8>,
    pub bold: Option<bool>,
    pub color: Option<Rgb>,
    pub alignment: Option<HorizontalAlignment>,
}

impl Overrides {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the typeface and returns the updated overrides.
    pub fn typeface(mut self, typeface: Typeface) -> Self {
        self.typeface = Some(typeface);
        self
    }

    /// Sets the font size in points and returns the updated overrides.
    pub fn size(mut self, size_pt: u8) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    /// Marks the run as bold.
    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    /// Sets the run color and returns the updated overrides.
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the paragraph alignment and returns the updated overrides.
    pub fn aligned(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// A paragraph of plain text rendered with a named style plus overrides.
///
/// Line breaks in `text` are kept: every `\n` starts a new line when rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledParagraph {
    kind: BlockKind,
    text: String,
    style: Option<String>,
    overrides: Overrides,
}

impl StyledParagraph {
    /// Creates an unstyled paragraph of the given kind.
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            style: None,
            overrides: Overrides::default(),
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the name of the registered style, if any.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn overrides(&self) -> Overrides {
        self.overrides
    }

    /// Sets the style name and returns the updated paragraph.
    pub fn with_style(mut self, style: impl Into<Option<String>>) -> Self {
        self.style = style.into();
        self
    }

    /// Sets the overrides and returns the updated paragraph.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// A bold label immediately followed by the paragraph it introduces.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledParagraph {
    label: StyledParagraph,
    body: StyledParagraph,
}

impl LabeledParagraph {
    pub fn new(label: StyledParagraph, body: StyledParagraph) -> Self {
        Self { label, body }
    }

    pub fn label(&self) -> &StyledParagraph {
        &self.label
    }

    pub fn body(&self) -> &StyledParagraph {
        &self.body
    }
}

/// Individual content blocks that make up the manual.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Styled paragraph content.
    Paragraph(StyledParagraph),
    /// Label plus body, kept together as one unit.
    Labeled(LabeledParagraph),
    /// A titled group of blocks, one per lesson.
    Section(Section),
    /// Explicit page break request.
    PageBreak,
}

/// Destination for appended blocks.
///
/// Both the document itself and the sections inside it accept blocks, which
/// lets the renderer helpers in [`crate::blocks`] target either.
pub trait BlockSink {
    /// Appends a block at the end of the sink.
    fn push_block(&mut self, block: Block);
}

/// Logical representation of one lesson section.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    title: String,
    blocks: Vec<Block>,
}

impl Section {
    /// Creates an empty section with the provided title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Returns the title of the section.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the blocks contained in the section.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Appends a block and returns the updated section.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

impl BlockSink for Section {
    fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

/// The assembled manual: page layout, style table and ordered content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManualDocument {
    margins: PageMargins,
    styles: StyleSheet,
    blocks: Vec<Block>,
}

impl ManualDocument {
    /// Creates an empty document with default margins and no styles.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn margins(&self) -> PageMargins {
        self.margins
    }

    /// Applies the given margins to every page of the document.
    pub fn set_margins(&mut self, margins: PageMargins) {
        self.margins = margins;
    }

    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleSheet {
        &mut self.styles
    }

    /// Returns the top-level blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterates over the lesson sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Section(section) => Some(section),
            _ => None,
        })
    }

    /// Iterates over all top-level paragraphs of the given kind.
    pub fn paragraphs_of_kind(&self, kind: BlockKind) -> impl Iterator<Item = &StyledParagraph> {
        self.blocks.iter().filter_map(move |block| match block {
            Block::Paragraph(paragraph) if paragraph.kind() == kind => Some(paragraph),
            _ => None,
        })
    }

    /// Counts the explicit page breaks at the top level of the document.
    pub fn page_break_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| matches!(block, Block::PageBreak))
            .count()
    }
}

impl BlockSink for ManualDocument {
    fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_margins_convert_inches() {
        let margins = PageMargins::uniform_inches(1.0);
        assert_eq!(margins.top, 25.4);
        assert_eq!(margins.left, margins.right);
        assert_eq!(margins.bottom, margins.top);
    }

    #[test]
    fn sections_skip_other_blocks() {
        let mut document = ManualDocument::new();
        document.push_block(Block::PageBreak);
        document.push_block(Block::Section(Section::new("One")));
        document.push_block(Block::Paragraph(StyledParagraph::new(
            BlockKind::Paragraph,
            "text",
        )));
        document.push_block(Block::Section(Section::new("Two")));

        let titles: Vec<_> = document.sections().map(Section::title).collect();
        assert_eq!(titles, ["One", "Two"]);
        assert_eq!(document.page_break_count(), 1);
    }

    #[test]
    fn overrides_layer_builder_calls() {
        let overrides = Overrides::new()
            .typeface(Typeface::Monospace)
            .size(10)
            .bold()
            .color(Rgb(1, 2, 3))
            .aligned(HorizontalAlignment::Center);
        assert_eq!(overrides.typeface, Some(Typeface::Monospace));
        assert_eq!(overrides.size_pt, Some(10));
        assert_eq!(overrides.bold, Some(true));
        assert_eq!(overrides.color, Some(Rgb(1, 2, 3)));
        assert_eq!(overrides.alignment, Some(HorizontalAlignment::Center));
    }
}
