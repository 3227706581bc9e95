//! Line item table with toggleable quantity, unit price and total columns.

use quotepress_idf::{
    CellText, ContentElement, Edges, HorizontalAlign, Paragraph, Rule, TableCell, TableElement,
    TableRow, TableStyle,
};
use quotepress_style::TextAlign;

use crate::configs::DetailsConfig;
use crate::context::BuildContext;
use crate::format::{format_currency, format_quantity};

use super::{bold, title_with_accent};

const DESCRIPTION_WIDTH: f32 = 252.0;
const QUANTITY_WIDTH: f32 = 43.2;
const AMOUNT_WIDTH: f32 = 86.4;

const DESCRIPTION_MAX_CHARS: usize = 80;

/// Display truncation only; the underlying data is untouched.
fn truncate_description(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_MAX_CHARS {
        let cut: String = text.chars().take(DESCRIPTION_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

pub fn build(config: &DetailsConfig, ctx: &BuildContext) -> Vec<ContentElement> {
    let quote = ctx.quote;
    let mut elements = title_with_accent("DETALLE", 108.0, ctx);

    if quote.items.is_empty() {
        elements.push(ContentElement::Paragraph(Paragraph::new(
            "No hay lineas en esta cotizacion.",
            ctx.styles.note.clone(),
        )));
        return elements;
    }

    let styles = ctx.styles;
    let palette = ctx.palette;

    let header_left = styles.table_header.clone().aligned(TextAlign::Left);
    let header_center = styles.table_header.clone();
    let header_right = styles.table_header.clone().aligned(TextAlign::Right);
    let cell_center = styles.cell.clone().aligned(TextAlign::Center);
    let cell_right = styles.cell.clone().aligned(TextAlign::Right);

    let mut column_widths = vec![DESCRIPTION_WIDTH];
    let mut header = vec![TableCell::text("DESCRIPCION", header_left)];
    if config.show_quantity {
        column_widths.push(QUANTITY_WIDTH);
        header.push(TableCell::text("CANT.", header_center));
    }
    if config.show_unit_price {
        column_widths.push(AMOUNT_WIDTH);
        header.push(TableCell::text("PRECIO UNIT.", header_right.clone()));
    }
    if config.show_total {
        column_widths.push(AMOUNT_WIDTH);
        header.push(TableCell::text("SUBTOTAL", header_right));
    }

    let mut rows = vec![TableRow::new(header)];
    for item in &quote.items {
        let mut name_lines = vec![CellText::new(item.name.as_str(), bold(&styles.cell))];
        if config.show_description {
            if let Some(description) = &item.description {
                if !description.trim().is_empty() {
                    name_lines.push(CellText::new(
                        truncate_description(description),
                        styles.cell_small.clone(),
                    ));
                }
            }
        }

        let mut cells = vec![TableCell::stacked(name_lines)];
        if config.show_quantity {
            cells.push(TableCell::text(
                format_quantity(item.quantity),
                cell_center.clone(),
            ));
        }
        if config.show_unit_price {
            cells.push(TableCell::text(
                format_currency(item.unit_price),
                cell_right.clone(),
            ));
        }
        if config.show_total {
            cells.push(TableCell::text(
                format_currency(item.subtotal),
                cell_right.clone(),
            ));
        }
        rows.push(TableRow::new(cells));
    }

    elements.push(ContentElement::Table(TableElement {
        rows,
        column_widths,
        style: TableStyle {
            background: None,
            grid: Some(Rule {
                width: 0.5,
                color: palette.border,
            }),
            box_border: Some(Rule {
                width: 1.0,
                color: palette.border_light,
            }),
            padding: Edges::symmetric(6.0, 8.0),
            header_background: Some(palette.primary_dark),
            alt_row_background: Some(palette.bg_card),
            last_row_background: None,
        },
        align: HorizontalAlign::Left,
    }));

    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighty_chars_pass_untouched() {
        let text = "x".repeat(80);
        assert_eq!(truncate_description(&text), text);
    }

    #[test]
    fn eighty_one_chars_truncate_with_ellipsis() {
        let text = "x".repeat(81);
        let truncated = truncate_description(&text);
        assert_eq!(truncated.chars().count(), 83);
        assert!(truncated.ends_with("..."));
        assert_eq!(&truncated[..80], &text[..80]);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let text = "á".repeat(81);
        let truncated = truncate_description(&text);
        assert_eq!(truncated.chars().count(), 83);
    }
}
