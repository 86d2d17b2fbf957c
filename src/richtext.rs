//! Resolution of named styles and overrides into `genpdf` text styles.
//!
//! A paragraph's effective look is its named style (or the document default)
//! with the paragraph's [`Overrides`] layered on top.  [`ResolvedStyle`] keeps
//! the result in renderer-independent units; [`ResolvedStyle::text_style`]
//! converts it into a [`genpdf::style::Style`] once the fonts are known.

use genpdf::fonts::{Font, FontFamily};
use genpdf::style::{Color, Style};
use genpdf::Alignment;

use crate::error::ManualError;
use crate::model::{HorizontalAlignment, Overrides, Rgb, StyledParagraph, Typeface};
use crate::styles::{StyleDefinition, StyleSheet};

/// Font families loaded into the `genpdf` document.
///
/// The sans family is the document default, so only the monospace handle needs
/// to be kept around.
#[derive(Clone, Copy, Debug)]
pub struct LoadedFonts {
    pub monospace: FontFamily<Font>,
}

/// The effective attributes of one paragraph.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
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

impl ResolvedStyle {
    fn from_definition(definition: &StyleDefinition) -> Self {
        Self {
            typeface: definition.typeface,
            size_pt: definition.size_pt,
            bold: definition.bold,
            color: definition.color,
            alignment: definition.alignment,
            spacing_before_pt: definition.spacing_before_pt,
            spacing_after_pt: definition.spacing_after_pt,
            left_indent_mm: definition.left_indent_mm,
            line_spacing: definition.line_spacing,
        }
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(typeface) = overrides.typeface {
            self.typeface = typeface;
        }
        if let Some(size) = overrides.size_pt {
            self.size_pt = size;
        }
        if let Some(bold) = overrides.bold {
            self.bold = bold;
        }
        if let Some(color) = overrides.color {
            self.color = Some(color);
        }
        if let Some(alignment) = overrides.alignment {
            self.alignment = alignment;
        }
        self
    }

    /// Builds the `genpdf` text style for this paragraph.
    pub fn text_style(&self, fonts: &LoadedFonts) -> Style {
        let mut style = Style::new()
            .with_font_size(self.size_pt)
            .with_line_spacing(self.line_spacing);
        if self.typeface == Typeface::Monospace {
            style.set_font_family(fonts.monospace);
        }
        if self.bold {
            style.set_bold();
        }
        if let Some(Rgb(r, g, b)) = self.color {
            style.set_color(Color::Rgb(r, g, b));
        }
        style
    }

    pub fn pdf_alignment(&self) -> Alignment {
        match self.alignment {
            HorizontalAlignment::Left => Alignment::Left,
            HorizontalAlignment::Center => Alignment::Center,
        }
    }
}

/// Computes the effective style of `paragraph` against the registered styles.
pub fn resolve(
    paragraph: &StyledParagraph,
    styles: &StyleSheet,
) -> Result<ResolvedStyle, ManualError> {
    let base = match paragraph.style() {
        Some(name) => styles
            .get(name)
            .cloned()
            .ok_or_else(|| ManualError::UnknownStyle(name.to_owned()))?,
        None => StyleDefinition::document_default(),
    };
    Ok(ResolvedStyle::from_definition(&base).apply(paragraph.overrides()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockKind, ManualDocument};
    use crate::styles::{register_styles, CODE_BLOCK_STYLE, TITLE_STYLE};

    fn sheet() -> StyleSheet {
        let mut document = ManualDocument::new();
        register_styles(&mut document).unwrap();
        document.styles().clone()
    }

    #[test]
    fn unstyled_paragraph_uses_document_default() {
        let paragraph = StyledParagraph::new(BlockKind::Paragraph, "plain");
        let resolved = resolve(&paragraph, &sheet()).unwrap();
        assert_eq!(resolved.typeface, Typeface::Sans);
        assert_eq!(resolved.size_pt, 11);
        assert!(!resolved.bold);
        assert_eq!(resolved.color, None);
    }

    #[test]
    fn overrides_win_over_named_style() {
        let paragraph = StyledParagraph::new(BlockKind::Code, "x = 1")
            .with_style(CODE_BLOCK_STYLE.to_owned())
            .with_overrides(Overrides::new().color(Rgb(51, 51, 51)).size(9));
        let resolved = resolve(&paragraph, &sheet()).unwrap();
        assert_eq!(resolved.typeface, Typeface::Monospace);
        assert_eq!(resolved.size_pt, 9);
        assert_eq!(resolved.color, Some(Rgb(51, 51, 51)));
        assert_eq!(resolved.spacing_before_pt, 6.0);
    }

    #[test]
    fn title_style_is_centered() {
        let paragraph =
            StyledParagraph::new(BlockKind::Title, "T").with_style(TITLE_STYLE.to_owned());
        let resolved = resolve(&paragraph, &sheet()).unwrap();
        assert!(matches!(resolved.pdf_alignment(), Alignment::Center));
        assert!(resolved.bold);
    }

    #[test]
    fn unknown_style_is_reported() {
        let paragraph =
            StyledParagraph::new(BlockKind::Paragraph, "?").with_style("Missing".to_owned());
        let err = resolve(&paragraph, &sheet()).unwrap_err();
        assert!(matches!(err, ManualError::UnknownStyle(ref name) if name == "Missing"));
    }
}
