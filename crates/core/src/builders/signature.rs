//! Acceptance section: agreement text and the client/provider signature
//! block.

use quotepress_idf::{
    CellText, ContentElement, HorizontalAlign, Paragraph, TableCell, TableElement, TableRow,
    TableStyle,
};

use crate::configs::SignatureConfig;
use crate::context::BuildContext;

use super::{bold, title_with_accent};

const SIGNATURE_COLUMN_WIDTH: f32 = 237.6;
const SIGNATURE_RULE: &str = "_______________________________";
const DATE_RULE: &str = "Fecha: ____________________";

pub fn build(config: &SignatureConfig, ctx: &BuildContext) -> Vec<ContentElement> {
    let styles = ctx.styles;
    let mut elements = title_with_accent("ACEPTACION", 108.0, ctx);

    elements.push(ContentElement::Paragraph(Paragraph::new(
        "Al firmar este documento, el cliente acepta los terminos, precios y \
         alcance descritos en esta cotizacion.",
        styles.body.clone(),
    )));
    elements.push(ContentElement::Spacer(28.0));

    let mut client_lines = vec![CellText::new("CLIENTE", styles.label.clone())];
    let mut provider_lines = vec![CellText::new("PROVEEDOR", styles.label.clone())];

    if config.show_signature_line {
        client_lines.push(CellText::new(SIGNATURE_RULE, styles.cell.clone()));
        provider_lines.push(CellText::new(SIGNATURE_RULE, styles.cell.clone()));
    }

    client_lines.push(CellText::new(
        ctx.quote.client_name(),
        bold(&styles.cell_small),
    ));
    client_lines.push(CellText::new(config.signature_label.as_str(), styles.cell_small.clone()));

    let provider_name = match ctx.tenant {
        Some(tenant) => tenant.name.as_str(),
        None => ctx.quote.preparer_name(),
    };
    provider_lines.push(CellText::new(provider_name, bold(&styles.cell_small)));
    provider_lines.push(CellText::new(
        config.signature_label.as_str(),
        styles.cell_small.clone(),
    ));

    if config.show_date_line {
        client_lines.push(CellText::new(DATE_RULE, styles.cell_small.clone()));
        provider_lines.push(CellText::new(DATE_RULE, styles.cell_small.clone()));
    }

    elements.push(ContentElement::Table(TableElement {
        rows: vec![TableRow::new(vec![
            TableCell::stacked(client_lines),
            TableCell::stacked(provider_lines),
        ])],
        column_widths: vec![SIGNATURE_COLUMN_WIDTH, SIGNATURE_COLUMN_WIDTH],
        style: TableStyle::default(),
        align: HorizontalAlign::Center,
    }));

    elements
}
