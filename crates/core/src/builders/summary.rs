//! Summary section: optional description plus the three KPI figures.

use quotepress_idf::{
    ContentElement, HorizontalAlign, Paragraph, Rule, TableCell, TableElement, TableRow,
    TableStyle,
};
use quotepress_style::{FontFamily, ParagraphStyle, TextAlign};

use crate::context::BuildContext;
use crate::format::format_currency;

use super::title_with_accent;

const KPI_COLUMN_WIDTH: f32 = 158.4;

pub fn build(ctx: &BuildContext) -> Vec<ContentElement> {
    let quote = ctx.quote;
    let palette = ctx.palette;
    let mut elements = title_with_accent("RESUMEN", 108.0, ctx);

    if let Some(description) = &quote.description {
        if !description.trim().is_empty() {
            elements.push(ContentElement::Paragraph(Paragraph::new(
                description.as_str(),
                ctx.styles.body.clone(),
            )));
            elements.push(ContentElement::Spacer(8.0));
        }
    }

    let value_style = |color| {
        ParagraphStyle::new(FontFamily::HelveticaBold, 20.0, 24.0, color)
            .aligned(TextAlign::Center)
    };
    let label_style = ctx.styles.label.clone().aligned(TextAlign::Center);

    let values = TableRow {
        cells: vec![
            TableCell::text(
                quote.items.len().to_string(),
                value_style(palette.primary_light),
            ),
            TableCell::text(format_currency(quote.subtotal), value_style(palette.text)),
            TableCell::text(format_currency(quote.total), value_style(palette.primary)),
        ],
        min_height: Some(43.2),
    };
    let labels = TableRow {
        cells: vec![
            TableCell::text("Lineas", label_style.clone()),
            TableCell::text("Subtotal", label_style.clone()),
            TableCell::text("Total", label_style),
        ],
        min_height: Some(28.8),
    };

    elements.push(ContentElement::Table(TableElement {
        rows: vec![values, labels],
        column_widths: vec![KPI_COLUMN_WIDTH; 3],
        style: TableStyle {
            background: Some(palette.bg_card),
            box_border: Some(Rule {
                width: 1.0,
                color: palette.border_subtle,
            }),
            ..TableStyle::default()
        },
        align: HorizontalAlign::Center,
    }));

    elements
}
