/*!
 * Fixed layout of a record on pages.
 *
 * Coordinates are PDF points with the origin at the bottom-left corner, so the
 * cursor starts near the top of the page and moves down.
 */

use log::debug;

use super::metrics;
use super::DEFAULT_TITLE;
use crate::record::{FieldList, Record};

/// ISO A4 width in points
pub const A4_WIDTH: f32 = 595.2756;

/// ISO A4 height in points
pub const A4_HEIGHT: f32 = 841.8898;

/// Default page margin in points
pub const DEFAULT_MARGIN: f32 = 50.0;

/// Title font size
pub const TITLE_FONT_SIZE: f32 = 20.0;

/// Font size for labels and values
pub const BODY_FONT_SIZE: f32 = 12.0;

/// Horizontal offset of the value column from the left margin
pub const VALUE_OFFSET: f32 = 150.0;

/// Vertical distance between consecutive lines
pub const LINE_HEIGHT: f32 = 25.0;

/// Distance from the top margin to the divider under the title
pub const DIVIDER_DROP: f32 = 10.0;

/// Distance from the top margin to the first field line
pub const FIRST_LINE_DROP: f32 = 40.0;

/// Page geometry and title of the generated document
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Title drawn on the first page
    pub title: String,
    /// Page width in points
    pub page_width: f32,
    /// Page height in points
    pub page_height: f32,
    /// Margin applied on every side
    pub margin: f32,
}

impl PageLayout {
    pub fn new(title: impl Into<String>, page_width: f32, page_height: f32, margin: f32) -> Self {
        Self {
            title: title.into(),
            page_width,
            page_height,
            margin,
        }
    }

    /// Cursor position of the first line on every page
    pub fn top_cursor(&self) -> f32 {
        self.page_height - self.margin - FIRST_LINE_DROP
    }

    /// X coordinate of the value column
    pub fn value_x(&self) -> f32 {
        self.margin + VALUE_OFFSET
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, A4_WIDTH, A4_HEIGHT, DEFAULT_MARGIN)
    }
}

/// Title and divider, present on the first page only
#[derive(Debug, Clone, PartialEq)]
pub struct TitleBlock {
    pub text: String,
    /// Left edge of the centered title
    pub x: f32,
    /// Title baseline
    pub y: f32,
    /// Divider height
    pub divider_y: f32,
    pub divider_start: f32,
    pub divider_end: f32,
}

/// One `label: value` line placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub label: &'static str,
    pub value: String,
    /// Baseline of the line
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedPage {
    pub lines: Vec<PlacedLine>,
}

/// A record laid out on pages, shared by the PDF and text serializers
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    layout: PageLayout,
    title: TitleBlock,
    pages: Vec<RenderedPage>,
}

impl RenderedDocument {
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn title(&self) -> &TitleBlock {
        &self.title
    }

    pub fn pages(&self) -> &[RenderedPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every placed line in document order, across pages
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|page| page.lines.iter())
    }
}

/// Lay out the record's values in field list order.
///
/// A new page starts when the cursor has dropped below the bottom margin before
/// a line is placed; the title block is not repeated on later pages.
pub fn render(record: &Record, fields: FieldList, layout: &PageLayout) -> RenderedDocument {
    let title_width = metrics::bold_text_width(&layout.title, TITLE_FONT_SIZE);
    let title = TitleBlock {
        text: layout.title.clone(),
        x: (layout.page_width - title_width) / 2.0,
        y: layout.page_height - layout.margin,
        divider_y: layout.page_height - layout.margin - DIVIDER_DROP,
        divider_start: layout.margin,
        divider_end: layout.page_width - layout.margin,
    };

    let mut pages = vec![RenderedPage::default()];
    let mut y = layout.top_cursor();

    for field in fields.iter() {
        if y < layout.margin {
            pages.push(RenderedPage::default());
            y = layout.top_cursor();
        }

        if let Some(page) = pages.last_mut() {
            page.lines.push(PlacedLine {
                label: field,
                value: record.get(field).to_string(),
                y,
            });
        }

        y -= LINE_HEIGHT;
    }

    debug!("Laid out {} fields on {} page(s)", fields.len(), pages.len());

    RenderedDocument {
        layout: layout.clone(),
        title,
        pages,
    }
}
