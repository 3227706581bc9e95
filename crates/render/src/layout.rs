//! Flow layout: turns a linear stream of content elements into positioned
//! primitives on fixed-size pages.
//!
//! Coordinates are top-down points; the renderer flips into PDF space.
//! Text measurement is approximate (average glyph advance), which is
//! plenty for wrapping body copy and sizing table rows.

use quotepress_idf::{
    AccentLine, ContentElement, Edges, HorizontalAlign, ImageElement, Paragraph, TableElement,
};
use quotepress_style::{ParagraphStyle, TextAlign};
use quotepress_types::Color;

/// Average glyph advance as a fraction of the font size.
const CHAR_WIDTH_RATIO: f32 = 0.6;

const GRADIENT_STEPS: usize = 50;

pub fn approx_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * CHAR_WIDTH_RATIO
}

/// Page geometry in points, top-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub margins: Edges,
}

impl PageLayout {
    /// US Letter with the stock quote margins.
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margins: Edges {
                top: 57.6,
                right: 36.0,
                bottom: 43.2,
                left: 36.0,
            },
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }

    pub fn content_bottom(&self) -> f32 {
        self.height - self.margins.bottom
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::letter()
    }
}

/// A drawable item with its resolved position. `y` is the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Positioned {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub primitive: Primitive,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text {
        text: String,
        style: ParagraphStyle,
    },
    Rect {
        fill: Option<Color>,
        stroke: Option<(Color, f32)>,
    },
    Line {
        color: Color,
        width: f32,
    },
    Image {
        data: quotepress_idf::ImageData,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: usize,
    pub primitives: Vec<Positioned>,
}

/// Greedy word wrap against an approximate advance width. A single word
/// wider than the line is emitted on its own line rather than split.
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if approx_text_width(&candidate, font_size) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Paginates content elements top to bottom, breaking to a new page when
/// an element does not fit above the bottom margin.
pub struct LayoutEngine {
    layout: PageLayout,
    pages: Vec<Page>,
    cursor_y: f32,
    page_touched: bool,
}

impl LayoutEngine {
    pub fn new(layout: PageLayout) -> Self {
        let cursor_y = layout.margins.top;
        Self {
            layout,
            pages: vec![Page {
                number: 1,
                primitives: Vec::new(),
            }],
            cursor_y,
            page_touched: false,
        }
    }

    pub fn paginate(mut self, elements: &[ContentElement]) -> Vec<Page> {
        for element in elements {
            match element {
                ContentElement::Paragraph(p) => self.place_paragraph(p),
                ContentElement::Spacer(height) => self.cursor_y += height,
                ContentElement::AccentLine(line) => self.place_accent_line(line),
                ContentElement::Table(table) => self.place_table(table),
                ContentElement::Image(image) => self.place_image(image),
                ContentElement::PageBreak => self.force_new_page(),
            }
        }
        self.pages
    }

    fn current_page(&mut self) -> &mut Page {
        // One page always exists.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn push(&mut self, item: Positioned) {
        self.page_touched = true;
        self.current_page().primitives.push(item);
    }

    fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        self.pages.push(Page {
            number,
            primitives: Vec::new(),
        });
        self.cursor_y = self.layout.margins.top;
        self.page_touched = false;
    }

    /// Starts a fresh page unless the current one is still pristine.
    fn force_new_page(&mut self) {
        if self.page_touched {
            self.new_page();
        }
    }

    fn needs_break(&self, height: f32) -> bool {
        self.cursor_y + height > self.layout.content_bottom()
    }

    fn line_x(&self, width: f32, align: TextAlign) -> f32 {
        let avail = self.layout.content_width();
        match align {
            TextAlign::Left => self.layout.margins.left,
            TextAlign::Center => self.layout.margins.left + (avail - width) / 2.0,
            TextAlign::Right => self.layout.margins.left + avail - width,
        }
    }

    fn block_x(&self, width: f32, align: HorizontalAlign) -> f32 {
        let avail = self.layout.content_width();
        match align {
            HorizontalAlign::Left => self.layout.margins.left,
            HorizontalAlign::Center => self.layout.margins.left + (avail - width) / 2.0,
            HorizontalAlign::Right => self.layout.margins.left + avail - width,
        }
    }

    fn place_paragraph(&mut self, paragraph: &Paragraph) {
        let style = &paragraph.style;
        self.cursor_y += style.space_before;

        // Embedded newlines are hard breaks; each segment wraps on its own.
        let lines: Vec<String> = paragraph
            .text
            .split('\n')
            .flat_map(|segment| wrap_text(segment, style.size, self.layout.content_width()))
            .collect();
        for line in lines {
            if self.needs_break(style.leading) {
                self.new_page();
            }
            let width = approx_text_width(&line, style.size);
            let x = self.line_x(width, style.align);
            let y = self.cursor_y;
            self.push(Positioned {
                x,
                y,
                width,
                height: style.leading,
                primitive: Primitive::Text {
                    text: line,
                    style: style.clone(),
                },
            });
            self.cursor_y += style.leading;
        }

        self.cursor_y += style.space_after;
    }

    /// A horizontal gradient bar, approximated as a run of flat slices.
    /// The blend runs start to end and back, mirrored around the middle.
    fn place_accent_line(&mut self, line: &AccentLine) {
        if self.needs_break(line.height) {
            self.new_page();
        }
        let x0 = self.layout.margins.left;
        let y = self.cursor_y;
        let step_w = line.width / GRADIENT_STEPS as f32;
        for i in 0..GRADIENT_STEPS {
            let progress = i as f32 / GRADIENT_STEPS as f32;
            let factor = if progress < 0.5 {
                progress * 2.0
            } else {
                (1.0 - progress) * 2.0
            };
            let color = line.start.mix(&line.end, factor);
            self.push(Positioned {
                x: x0 + i as f32 * step_w,
                y,
                width: step_w + 0.5,
                height: line.height,
                primitive: Primitive::Rect {
                    fill: Some(color),
                    stroke: None,
                },
            });
        }
        self.cursor_y += line.height;
    }

    fn place_image(&mut self, image: &ImageElement) {
        if self.needs_break(image.height) {
            self.new_page();
        }
        let x = self.block_x(image.width, image.align);
        let y = self.cursor_y;
        self.push(Positioned {
            x,
            y,
            width: image.width,
            height: image.height,
            primitive: Primitive::Image {
                data: image.data.clone(),
            },
        });
        self.cursor_y += image.height;
    }

    fn row_height(&self, table: &TableElement, row_index: usize) -> f32 {
        let row = &table.rows[row_index];
        let padding = &table.style.padding;
        let mut content = 0.0f32;
        for (cell, col_width) in row.cells.iter().zip(&table.column_widths) {
            let inner = (col_width - padding.left - padding.right).max(1.0);
            let mut cell_h = 0.0f32;
            for line in &cell.lines {
                let wrapped = wrap_text(&line.text, line.style.size, inner);
                cell_h += wrapped.len() as f32 * line.style.leading;
            }
            content = content.max(cell_h);
        }
        let height = content + padding.top + padding.bottom;
        row.min_height.map_or(height, |min| height.max(min))
    }

    /// Tables taller than the remaining space move to a fresh page first;
    /// tables taller than a whole page split at row boundaries, repeating
    /// the header row on every continuation page.
    fn place_table(&mut self, table: &TableElement) {
        if table.rows.is_empty() {
            return;
        }
        let heights: Vec<f32> = (0..table.rows.len())
            .map(|i| self.row_height(table, i))
            .collect();
        let total: f32 = heights.iter().sum();
        if self.needs_break(total) && self.page_touched {
            self.new_page();
        }

        let bottom = self.layout.content_bottom();
        let repeat_header = table.style.header_background.is_some() && table.rows.len() > 1;

        let mut band: Vec<usize> = Vec::new();
        let mut band_h = 0.0f32;
        // Rows carried over from the previous band (the repeated header).
        let mut carried = 0usize;
        for (i, row_h) in heights.iter().enumerate() {
            if band.len() > carried && self.cursor_y + band_h + row_h > bottom {
                self.emit_table_band(table, &heights, &band);
                self.new_page();
                band.clear();
                band_h = 0.0;
                carried = 0;
                if repeat_header {
                    band.push(0);
                    band_h = heights[0];
                    carried = 1;
                }
            }
            band.push(i);
            band_h += row_h;
        }
        self.emit_table_band(table, &heights, &band);
    }

    /// Draws one contiguous run of table rows at the cursor. `band` holds
    /// indices into `table.rows`; highlight roles follow the original row
    /// positions so alternation survives a page split.
    fn emit_table_band(&mut self, table: &TableElement, heights: &[f32], band: &[usize]) {
        let total: f32 = band.iter().map(|&i| heights[i]).sum();
        let width = table.width();
        let x0 = self.block_x(width, table.align);
        let y0 = self.cursor_y;
        let style = &table.style;
        let last = table.rows.len() - 1;

        // Row fills first so grid lines and text paint on top.
        let mut y = y0;
        for &i in band {
            let height = heights[i];
            let fill = if i == 0 && style.header_background.is_some() {
                style.header_background
            } else if i == last && style.last_row_background.is_some() {
                style.last_row_background
            } else if i % 2 == 1 && style.alt_row_background.is_some() {
                style.alt_row_background
            } else {
                style.background
            };
            if let Some(color) = fill {
                self.push(Positioned {
                    x: x0,
                    y,
                    width,
                    height,
                    primitive: Primitive::Rect {
                        fill: Some(color),
                        stroke: None,
                    },
                });
            }
            y += height;
        }

        if let Some(grid) = &style.grid {
            let mut y = y0;
            for &i in band.iter().take(band.len() - 1) {
                y += heights[i];
                self.push(Positioned {
                    x: x0,
                    y,
                    width,
                    height: 0.0,
                    primitive: Primitive::Line {
                        color: grid.color,
                        width: grid.width,
                    },
                });
            }
            let mut x = x0;
            for col_width in table.column_widths.iter().take(table.column_widths.len() - 1) {
                x += col_width;
                self.push(Positioned {
                    x,
                    y: y0,
                    width: 0.0,
                    height: total,
                    primitive: Primitive::Line {
                        color: grid.color,
                        width: grid.width,
                    },
                });
            }
        }

        if let Some(border) = &style.box_border {
            self.push(Positioned {
                x: x0,
                y: y0,
                width,
                height: total,
                primitive: Primitive::Rect {
                    fill: None,
                    stroke: Some((border.color, border.width)),
                },
            });
        }

        let padding = &style.padding;
        let mut row_y = y0;
        for &i in band {
            let row = &table.rows[i];
            let height = heights[i];
            let mut cell_x = x0;
            for (cell, col_width) in row.cells.iter().zip(&table.column_widths) {
                let inner = (col_width - padding.left - padding.right).max(1.0);
                let mut content_h = 0.0f32;
                let mut wrapped_lines = Vec::new();
                for line in &cell.lines {
                    let wrapped = wrap_text(&line.text, line.style.size, inner);
                    content_h += wrapped.len() as f32 * line.style.leading;
                    wrapped_lines.push((wrapped, line.style.clone()));
                }
                // Center the stack of lines vertically in the row.
                let mut text_y = row_y + (height - content_h).max(0.0) / 2.0;
                for (wrapped, line_style) in wrapped_lines {
                    for text in wrapped {
                        let text_w = approx_text_width(&text, line_style.size);
                        let text_x = match line_style.align {
                            TextAlign::Left => cell_x + padding.left,
                            TextAlign::Center => cell_x + padding.left + (inner - text_w) / 2.0,
                            TextAlign::Right => cell_x + padding.left + inner - text_w,
                        };
                        self.push(Positioned {
                            x: text_x,
                            y: text_y,
                            width: text_w,
                            height: line_style.leading,
                            primitive: Primitive::Text {
                                text,
                                style: line_style.clone(),
                            },
                        });
                        text_y += line_style.leading;
                    }
                }
                cell_x += col_width;
            }
            row_y += height;
        }

        self.cursor_y = y0 + total;
    }
}
