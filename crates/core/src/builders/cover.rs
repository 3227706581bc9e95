//! Cover page: branding, hero title, metadata and the prepared-for block.

use quotepress_idf::{
    AccentLine, CellText, ContentElement, HorizontalAlign, Paragraph, TableCell, TableElement,
    TableRow, TableStyle,
};
use quotepress_style::status_badge;
use quotepress_types::BillingAddress;

use crate::configs::CoverConfig;
use crate::context::BuildContext;
use crate::format::format_date;

use super::bold;

const PREP_COLUMN_WIDTH: f32 = 237.6;
const LOGO_HEIGHT: f32 = 86.4;

pub fn build(config: &CoverConfig, ctx: &BuildContext) -> Vec<ContentElement> {
    let styles = ctx.styles;
    let quote = ctx.quote;
    let mut elements = vec![ContentElement::Spacer(72.0)];

    if config.show_logo {
        if let Some(logo) = ctx.logo {
            elements.push(ContentElement::Image(
                logo.clone().into_element(LOGO_HEIGHT, HorizontalAlign::Center),
            ));
            elements.push(ContentElement::Spacer(16.0));
        }
    }

    if let Some(tenant) = ctx.tenant {
        elements.push(ContentElement::Paragraph(Paragraph::new(
            tenant.name.to_uppercase(),
            styles.tenant_name.clone(),
        )));
        elements.push(ContentElement::Spacer(8.0));
    }

    elements.push(ContentElement::Paragraph(Paragraph::new(
        "COTIZACION",
        styles.hero_title.clone(),
    )));
    if config.show_quote_number {
        elements.push(ContentElement::Paragraph(Paragraph::new(
            quote.quote_number.as_str(),
            styles.quote_number.clone(),
        )));
    }
    elements.push(ContentElement::Spacer(6.0));
    elements.push(ContentElement::Paragraph(Paragraph::new(
        quote.title.as_str(),
        styles.hero_subtitle.clone(),
    )));

    elements.push(ContentElement::Spacer(12.0));
    elements.push(ContentElement::AccentLine(AccentLine {
        width: 144.0,
        height: 4.0,
        start: ctx.palette.primary,
        end: ctx.palette.secondary,
    }));
    elements.push(ContentElement::Spacer(16.0));

    let (badge_color, badge_label) = status_badge(quote.status);
    elements.push(ContentElement::Paragraph(Paragraph::new(
        format!("Estado: {badge_label}"),
        bold(&styles.meta).colored(badge_color),
    )));

    if config.show_date {
        let mut parts = vec![format!("v{}", quote.version)];
        parts.push(format!("Emitida: {}", format_date(Some(&quote.issue_date))));
        if quote.expiry_date.is_some() {
            parts.push(format!(
                "Vigencia: {}",
                format_date(quote.expiry_date.as_deref())
            ));
        }
        elements.push(ContentElement::Paragraph(Paragraph::new(
            parts.join("  |  "),
            styles.meta.clone(),
        )));
    }

    elements.push(ContentElement::Spacer(48.0));
    elements.push(ContentElement::Table(prepared_table(config, ctx)));

    elements.push(ContentElement::Spacer(36.0));
    elements.push(ContentElement::Paragraph(Paragraph::new(
        "---  DOCUMENTO CONFIDENCIAL  ---",
        styles.meta.clone(),
    )));

    elements.push(ContentElement::PageBreak);
    elements
}

/// Two-column "Preparado para" / "Preparado por" block.
fn prepared_table(config: &CoverConfig, ctx: &BuildContext) -> TableElement {
    let styles = ctx.styles;
    let quote = ctx.quote;

    let mut client_lines = vec![
        CellText::new("PREPARADO PARA", styles.label.clone()),
        CellText::new(quote.client_name(), bold(&styles.cell)),
    ];
    if config.show_client_address {
        if let Some(address) = &quote.billing_address {
            if let Some(line) = address_line(address) {
                client_lines.push(CellText::new(line, styles.cell_small.clone()));
            }
        }
    }
    if let Some(email) = &quote.contact_email {
        client_lines.push(CellText::new(email.as_str(), styles.cell_small.clone()));
    }
    if let Some(phone) = &quote.contact_phone {
        client_lines.push(CellText::new(phone.as_str(), styles.cell_small.clone()));
    }

    let mut preparer_lines = vec![CellText::new("PREPARADO POR", styles.label.clone())];
    match ctx.tenant {
        Some(tenant) => {
            preparer_lines.push(CellText::new(tenant.name.as_str(), bold(&styles.cell)));
            if let Some(address) = &tenant.address {
                preparer_lines.push(CellText::new(address.as_str(), styles.cell_small.clone()));
            }
            for contact in [&tenant.phone, &tenant.email, &tenant.website]
                .into_iter()
                .flatten()
            {
                preparer_lines.push(CellText::new(contact.as_str(), styles.cell_small.clone()));
            }
        }
        None => {
            preparer_lines.push(CellText::new(quote.preparer_name(), bold(&styles.cell)));
        }
    }

    TableElement {
        rows: vec![TableRow::new(vec![
            TableCell::stacked(client_lines),
            TableCell::stacked(preparer_lines),
        ])],
        column_widths: vec![PREP_COLUMN_WIDTH, PREP_COLUMN_WIDTH],
        style: TableStyle {
            background: Some(ctx.palette.bg_card),
            ..TableStyle::default()
        },
        align: HorizontalAlign::Center,
    }
}

/// Joins the printable address fragments with " | ": street, then
/// city/state (comma-joined), then postal code and country.
fn address_line(address: &BillingAddress) -> Option<String> {
    let mut fragments: Vec<String> = Vec::new();
    if let Some(street) = address.street_line() {
        fragments.push(street.to_string());
    }
    let locality: Vec<&str> = [address.city.as_deref(), address.state.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !locality.is_empty() {
        fragments.push(locality.join(", "));
    }
    let region: Vec<&str> = [address.postal_code.as_deref(), address.country.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !region.is_empty() {
        fragments.push(region.join(" "));
    }
    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join(" | "))
    }
}
