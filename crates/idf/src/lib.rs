//! Intermediate Document Format (IDF)
//! The in-memory representation of document content after section assembly
//! but before layout. Section builders emit these primitives; the layout
//! engine positions them and the renderer draws them.

use quotepress_style::ParagraphStyle;
use quotepress_types::Color;

/// One block-level element in the assembled content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentElement {
    /// A run of text in one paragraph style. Embedded newlines are honored
    /// as hard line breaks.
    Paragraph(Paragraph),
    /// Vertical whitespace, in points.
    Spacer(f32),
    /// A decorative horizontal band blending between two colors and back.
    AccentLine(AccentLine),
    /// A styled table.
    Table(TableElement),
    /// An image (or its placeholder when the source is unusable).
    Image(ImageElement),
    /// A hard page break.
    PageBreak,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style: ParagraphStyle,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: ParagraphStyle) -> Self {
        Self { text: text.into(), style }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccentLine {
    pub width: f32,
    pub height: f32,
    pub start: Color,
    pub end: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A stroked rule: line width plus color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const fn uniform(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }
}

/// Table chrome. Text styling inside cells is entirely the builders'
/// responsibility; this struct only carries fills and rules.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    /// Base background for every row.
    pub background: Option<Color>,
    /// Interior grid lines.
    pub grid: Option<Rule>,
    /// Outer box border.
    pub box_border: Option<Rule>,
    /// Cell padding.
    pub padding: Edges,
    /// Fill for the first row, replacing the base background.
    pub header_background: Option<Color>,
    /// Fill for even body rows.
    pub alt_row_background: Option<Color>,
    /// Fill for the last row, replacing the base background.
    pub last_row_background: Option<Color>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            background: None,
            grid: None,
            box_border: None,
            padding: Edges::symmetric(10.0, 12.0),
            header_background: None,
            alt_row_background: None,
            last_row_background: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableElement {
    pub rows: Vec<TableRow>,
    /// Column widths in points; the table width is their sum.
    pub column_widths: Vec<f32>,
    pub style: TableStyle,
    pub align: HorizontalAlign,
}

impl TableElement {
    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    /// Optional floor for the computed row height.
    pub min_height: Option<f32>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells, min_height: None }
    }
}

/// A cell is a stack of independently styled text lines; each line wraps
/// within the column on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub lines: Vec<CellText>,
}

impl TableCell {
    pub fn text(text: impl Into<String>, style: ParagraphStyle) -> Self {
        Self { lines: vec![CellText { text: text.into(), style }] }
    }

    pub fn stacked(lines: Vec<CellText>) -> Self {
        Self { lines }
    }

    pub fn empty() -> Self {
        Self { lines: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellText {
    pub text: String,
    pub style: ParagraphStyle,
}

impl CellText {
    pub fn new(text: impl Into<String>, style: ParagraphStyle) -> Self {
        Self { text: text.into(), style }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageData {
    /// Raw JPEG bytes with pixel dimensions, embeddable as-is.
    Jpeg { data: Vec<u8>, px_width: u32, px_height: u32 },
    /// Anything the renderer cannot embed; drawn as a labeled box.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub data: ImageData,
    /// Display size in points.
    pub width: f32,
    pub height: f32,
    pub align: HorizontalAlign,
}
