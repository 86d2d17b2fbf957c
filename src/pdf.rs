//! Conversion of an assembled [`ManualDocument`] into PDF bytes with `genpdf`.

use genpdf::elements::PageBreak;
use genpdf::error::Error;
use genpdf::style;
use genpdf::{self, Margins, PageDecorator, PaperSize, Size};
use log::debug;

use crate::elements::{
    mm_from_f64, points_to_mm, BlockSpacing, MarkedPage, PageCounter, PageMarker, TextBlock,
};
use crate::error::ManualError;
use crate::fonts;
use crate::model::{Block, BlockKind, ManualDocument, PageMargins, StyledParagraph};
use crate::richtext::{self, LoadedFonts};
use crate::styles::StyleSheet;

/// Title stored in the PDF metadata unless overridden.
pub const DEFAULT_PDF_TITLE: &str = "Python Programming Lab Manual";

/// Page on which a titled part of the manual starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionPage {
    pub title: String,
    /// 1-based page number, if the part was laid out at all.
    pub page: Option<usize>,
}

/// A rendered manual.
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    /// Start pages of the title page, the contents, every lesson and the conclusion.
    pub section_pages: Vec<SectionPage>,
}

impl RenderedPdf {
    /// Returns the recorded start page of the part with the given title.
    pub fn page_of(&self, title: &str) -> Option<usize> {
        self.section_pages
            .iter()
            .find(|entry| entry.title == title)
            .and_then(|entry| entry.page)
    }
}

/// Renders [`ManualDocument`]s with configurable paper size and metadata.
#[derive(Default)]
pub struct PdfBuilder {
    paper_size: Option<Size>,
    title: Option<String>,
}

impl PdfBuilder {
    /// Creates a builder that renders on US Letter paper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paper size used for every page.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Lays out `document` and encodes it as PDF.
    pub fn render(self, document: &ManualDocument) -> Result<RenderedPdf, ManualError> {
        let families = fonts::load_families().map_err(ManualError::FontLoad)?;
        let mut pdf = genpdf::Document::new(families.sans);
        let fonts = LoadedFonts {
            monospace: pdf.add_font_family(families.monospace),
        };

        pdf.set_title(self.title.as_deref().unwrap_or(DEFAULT_PDF_TITLE));
        pdf.set_paper_size(self.paper_size.unwrap_or_else(|| PaperSize::Letter.into()));

        let counter = PageCounter::new();
        pdf.set_page_decorator(ConfiguredPageDecorator::new(
            pdf_margins(document.margins()),
            counter.clone(),
        ));

        let mut writer = ElementWriter {
            pdf: &mut pdf,
            styles: document.styles(),
            fonts,
            counter,
            marks: Vec::new(),
        };
        for block in document.blocks() {
            writer.push_block(block)?;
        }
        let marks = writer.marks;

        let mut bytes = Vec::new();
        pdf.render(&mut bytes).map_err(ManualError::Render)?;

        let section_pages: Vec<SectionPage> = marks
            .into_iter()
            .map(|(title, page)| SectionPage {
                title,
                page: page.get(),
            })
            .collect();
        for entry in &section_pages {
            debug!("'{}' starts on page {:?}", entry.title, entry.page);
        }

        Ok(RenderedPdf {
            bytes,
            section_pages,
        })
    }
}

fn pdf_margins(margins: PageMargins) -> Margins {
    Margins::trbl(
        mm_from_f64(margins.top),
        mm_from_f64(margins.right),
        mm_from_f64(margins.bottom),
        mm_from_f64(margins.left),
    )
}

/// Pushes model blocks onto a `genpdf` document in order.
struct ElementWriter<'a> {
    pdf: &'a mut genpdf::Document,
    styles: &'a StyleSheet,
    fonts: LoadedFonts,
    counter: PageCounter,
    marks: Vec<(String, MarkedPage)>,
}

impl ElementWriter<'_> {
    fn push_block(&mut self, block: &Block) -> Result<(), ManualError> {
        match block {
            Block::Paragraph(paragraph) => {
                if paragraph.kind() == BlockKind::Title {
                    self.mark(paragraph.text().replace('\n', " "));
                }
                self.push_paragraph(paragraph)
            }
            Block::Labeled(labeled) => {
                self.push_paragraph(labeled.label())?;
                self.push_paragraph(labeled.body())
            }
            Block::Section(section) => {
                self.mark(section.title().to_owned());
                for block in section.blocks() {
                    self.push_block(block)?;
                }
                Ok(())
            }
            Block::PageBreak => {
                self.pdf.push(PageBreak::new());
                Ok(())
            }
        }
    }

    fn push_paragraph(&mut self, paragraph: &StyledParagraph) -> Result<(), ManualError> {
        let resolved = richtext::resolve(paragraph, self.styles)?;
        let spacing = BlockSpacing {
            before: points_to_mm(resolved.spacing_before_pt),
            after: points_to_mm(resolved.spacing_after_pt),
            left_indent: resolved.left_indent_mm,
        };
        self.pdf.push(TextBlock::new(
            paragraph.text(),
            resolved.text_style(&self.fonts),
            resolved.pdf_alignment(),
            spacing,
        ));
        Ok(())
    }

    fn mark(&mut self, title: String) {
        let (marker, page) = PageMarker::new(self.counter.clone());
        self.pdf.push(marker);
        self.marks.push((title, page));
    }
}

/// Page decorator that applies the document margins and counts pages.
struct ConfiguredPageDecorator {
    margins: Margins,
    counter: PageCounter,
}

impl ConfiguredPageDecorator {
    fn new(margins: Margins, counter: PageCounter) -> Self {
        Self { margins, counter }
    }
}

impl PageDecorator for ConfiguredPageDecorator {
    fn decorate_page<'a>(
        &mut self,
        _context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        _style: style::Style,
    ) -> Result<genpdf::render::Area<'a>, Error> {
        self.counter.advance();
        area.add_margins(self.margins);
        Ok(area)
    }
}
