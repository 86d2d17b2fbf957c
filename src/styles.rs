//! Named paragraph styles used throughout the manual.

use crate::error::ManualError;
use crate::model::{HorizontalAlignment, ManualDocument, Rgb, Typeface};

/// Style applied to the manual title, the contents heading and the conclusion heading.
pub const TITLE_STYLE: &str = "CustomTitle";
/// Style applied to lesson headings.
pub const SECTION_HEADING_STYLE: &str = "SectionHeading";
/// Style applied to code listings.
pub const CODE_BLOCK_STYLE: &str = "CodeBlock";
/// Style applied to running prose.
pub const EXPLANATION_STYLE: &str = "Explanation";

/// Visual attributes of a named paragraph style.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleDefinition {
    pub name: String,
    pub typeface: Typeface,
    pub size_pt: u8,
    pub bold: bool,
    pub color: Option<Rgb>,
    pub alignment: HorizontalAlignment,
    pub spacing_before_pt: f64,
    pub spacing_after_pt: f64,
    pub left_indent_mm: f64,
    pub line_spacing: f64,
}

impl StyleDefinition {
    /// Creates a left-aligned, regular-weight style with no spacing.
    pub fn new(name: impl Into<String>, typeface: Typeface, size_pt: u8) -> Self {
        Self {
            name: name.into(),
            typeface,
            size_pt,
            bold: false,
            color: None,
            alignment: HorizontalAlignment::Left,
            spacing_before_pt: 0.0,
            spacing_after_pt: 0.0,
            left_indent_mm: 0.0,
            line_spacing: 1.0,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the space above and below the paragraph, in points.
    pub fn with_spacing(mut self, before_pt: f64, after_pt: f64) -> Self {
        self.spacing_before_pt = before_pt;
        self.spacing_after_pt = after_pt;
        self
    }

    pub fn with_left_indent_mm(mut self, indent: f64) -> Self {
        self.left_indent_mm = indent;
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// The attributes of unstyled paragraphs.
    pub fn document_default() -> Self {
        Self::new("Normal", Typeface::Sans, 11)
    }
}

/// Ordered table of registered styles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
    styles: Vec<StyleDefinition>,
}

impl StyleSheet {
    /// Registers a style, rejecting names that are already taken.
    pub fn register(&mut self, style: StyleDefinition) -> Result<(), ManualError> {
        if self.get(&style.name).is_some() {
            return Err(ManualError::DuplicateStyle(style.name));
        }
        self.styles.push(style);
        Ok(())
    }

    /// Looks up a style by name.
    pub fn get(&self, name: &str) -> Option<&StyleDefinition> {
        self.styles.iter().find(|style| style.name == name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.iter()
    }
}

/// The four styles the manual is laid out with.
pub fn standard_styles() -> [StyleDefinition; 4] {
    [
        StyleDefinition::new(TITLE_STYLE, Typeface::Sans, 20)
            .bold()
            .with_color(Rgb(0, 51, 102))
            .with_alignment(HorizontalAlignment::Center)
            .with_spacing(0.0, 20.0),
        StyleDefinition::new(SECTION_HEADING_STYLE, Typeface::Sans, 16)
            .bold()
            .with_color(Rgb(204, 51, 0))
            .with_spacing(20.0, 10.0),
        StyleDefinition::new(CODE_BLOCK_STYLE, Typeface::Monospace, 10)
            .with_left_indent_mm(12.7)
            .with_spacing(6.0, 6.0),
        StyleDefinition::new(EXPLANATION_STYLE, Typeface::Sans, 11)
            .with_spacing(0.0, 10.0)
            .with_line_spacing(1.15),
    ]
}

/// Registers the standard styles on the document's style table.
pub fn register_styles(document: &mut ManualDocument) -> Result<(), ManualError> {
    for style in standard_styles() {
        document.styles_mut().register(style)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_four_named_styles() {
        let mut document = ManualDocument::new();
        register_styles(&mut document).expect("fresh document accepts styles");

        let names: Vec<_> = document.styles().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                TITLE_STYLE,
                SECTION_HEADING_STYLE,
                CODE_BLOCK_STYLE,
                EXPLANATION_STYLE
            ]
        );
    }

    #[test]
    fn code_style_is_monospaced_and_indented() {
        let mut document = ManualDocument::new();
        register_styles(&mut document).unwrap();
        let code = document.styles().get(CODE_BLOCK_STYLE).unwrap();
        assert_eq!(code.typeface, Typeface::Monospace);
        assert_eq!(code.size_pt, 10);
        assert!(code.left_indent_mm > 0.0);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut document = ManualDocument::new();
        register_styles(&mut document).unwrap();
        let err = register_styles(&mut document).unwrap_err();
        assert!(matches!(err, ManualError::DuplicateStyle(ref name) if name == TITLE_STYLE));
        assert_eq!(document.styles().len(), 4);
    }
}
