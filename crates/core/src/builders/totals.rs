//! Totals block: right-aligned amount rows with a highlighted final total.

use quotepress_idf::{
    ContentElement, Edges, HorizontalAlign, TableCell, TableElement, TableRow, TableStyle,
};
use quotepress_style::TextAlign;

use crate::configs::TotalsConfig;
use crate::context::BuildContext;
use crate::format::{format_currency, format_quantity};

use super::bold;

const LABEL_WIDTH: f32 = 108.0;
const AMOUNT_WIDTH: f32 = 108.0;

pub fn build(config: &TotalsConfig, ctx: &BuildContext) -> Vec<ContentElement> {
    let quote = ctx.quote;
    let styles = ctx.styles;

    let label = styles.cell.clone().colored(ctx.palette.text_dim);
    let amount = styles.cell.clone().aligned(TextAlign::Right);

    let mut rows = Vec::new();
    if config.show_subtotal {
        rows.push(TableRow::new(vec![
            TableCell::text("Subtotal", label.clone()),
            TableCell::text(format_currency(quote.subtotal), amount.clone()),
        ]));
    }
    if config.show_discount && quote.discount_amount > 0.0 {
        rows.push(TableRow::new(vec![
            TableCell::text("Descuento", label.clone()),
            TableCell::text(format_currency(-quote.discount_amount), amount.clone()),
        ]));
    }
    if config.show_tax && quote.tax_amount > 0.0 {
        let rate = quote.tax_rate.unwrap_or(16.0);
        rows.push(TableRow::new(vec![
            TableCell::text(format!("IVA ({}%)", format_quantity(rate)), label),
            TableCell::text(format_currency(quote.tax_amount), amount),
        ]));
    }

    let total_label = bold(&styles.cell).colored(ctx.palette.text);
    let total_amount = total_label.clone().aligned(TextAlign::Right);
    rows.push(TableRow::new(vec![
        TableCell::text(format!("TOTAL ({})", quote.currency), total_label),
        TableCell::text(format_currency(quote.total), total_amount),
    ]));

    vec![
        ContentElement::Spacer(14.0),
        ContentElement::Table(TableElement {
            rows,
            column_widths: vec![LABEL_WIDTH, AMOUNT_WIDTH],
            style: TableStyle {
                padding: Edges::symmetric(6.0, 10.0),
                last_row_background: Some(ctx.palette.primary_dark),
                ..TableStyle::default()
            },
            align: HorizontalAlign::Right,
        }),
    ]
}
