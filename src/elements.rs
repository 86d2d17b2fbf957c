//! Element implementations built on top of `genpdf` primitives.
//!
//! This module adds a multi-line text block that keeps explicit line breaks and
//! leading indentation (which `genpdf`'s word wrapping would otherwise fold
//! away) and an invisible marker that records the page it lands on.

use std::cell::Cell;
use std::rc::Rc;

use genpdf::elements::{Break, LinearLayout, PaddedElement, Paragraph, StyledElement};
use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{render, Alignment, Element, Margins, Mm, RenderResult};

const MM_PER_POINT: f64 = 25.4 / 72.0;
const TAB_WIDTH: usize = 4;
const NO_BREAK_SPACE: char = '\u{a0}';

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

pub(crate) fn points_to_mm(points: f64) -> f64 {
    points * MM_PER_POINT
}

/// Splits `text` into lines, keeping blank lines and leading indentation.
///
/// Leading spaces and tabs are replaced by no-break spaces so the line keeps
/// its indentation after wrapping.  A trailing `\r` is dropped.
pub fn verbatim_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let body = line.trim_start_matches([' ', '\t']);
            let indent: usize = line[..line.len() - body.len()]
                .chars()
                .map(|ch| if ch == '\t' { TAB_WIDTH } else { 1 })
                .sum();
            let mut out = String::with_capacity(indent + body.len());
            out.extend(std::iter::repeat(NO_BREAK_SPACE).take(indent));
            out.push_str(body);
            out
        })
        .collect()
}

/// Spacing and indentation around a [`TextBlock`], in millimetres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockSpacing {
    pub before: f64,
    pub after: f64,
    pub left_indent: f64,
}

/// A block of text where every input line starts a new line.
///
/// Each line still wraps when it is wider than the available area.  Empty
/// lines take up one line of the block's style.
pub struct TextBlock {
    inner: PaddedElement<StyledElement<LinearLayout>>,
}

impl TextBlock {
    /// Creates a text block from `text` rendered with `style` and `alignment`.
    pub fn new(text: &str, style: Style, alignment: Alignment, spacing: BlockSpacing) -> Self {
        let mut layout = LinearLayout::vertical();
        for line in verbatim_lines(text) {
            if line.is_empty() {
                layout.push(Break::new(1));
            } else {
                layout.push(Paragraph::new(line).aligned(alignment));
            }
        }

        let margins = Margins::trbl(
            mm_from_f64(spacing.before),
            mm_from_f64(0.0),
            mm_from_f64(spacing.after),
            mm_from_f64(spacing.left_indent),
        );
        Self {
            inner: layout.styled(style).padded(margins),
        }
    }
}

impl Element for TextBlock {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        self.inner.render(context, area, style)
    }
}

/// Page counter shared between the page decorator and [`PageMarker`]s.
#[derive(Clone, Debug, Default)]
pub struct PageCounter(Rc<Cell<usize>>);

impl PageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances to the next page and returns its 1-based number.
    pub fn advance(&self) -> usize {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    /// Returns the 1-based number of the page being laid out, or 0 before the first page.
    pub fn current(&self) -> usize {
        self.0.get()
    }
}

/// Handle through which the page recorded by a [`PageMarker`] is read back.
#[derive(Clone, Debug, Default)]
pub struct MarkedPage(Rc<Cell<Option<usize>>>);

impl MarkedPage {
    pub fn get(&self) -> Option<usize> {
        self.0.get()
    }
}

/// Zero-sized element that records the page it is laid out on.
pub struct PageMarker {
    counter: PageCounter,
    page: MarkedPage,
}

impl PageMarker {
    /// Creates a marker and the handle used to read its page after rendering.
    pub fn new(counter: PageCounter) -> (Self, MarkedPage) {
        let page = MarkedPage::default();
        let marker = Self {
            counter,
            page: page.clone(),
        };
        (marker, page)
    }
}

impl Element for PageMarker {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        _area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        if self.page.0.get().is_none() {
            self.page.0.set(Some(self.counter.current()));
        }
        Ok(RenderResult::default())
    }
}
