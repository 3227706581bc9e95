//! Terms and notes, emitted only when the quote carries either.

use quotepress_idf::{ContentElement, Paragraph};

use crate::configs::TermsConfig;
use crate::context::BuildContext;

use super::title_with_accent;

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

pub fn build(config: &TermsConfig, ctx: &BuildContext) -> Vec<ContentElement> {
    let terms = non_empty(ctx.quote.terms.as_ref());
    let notes = non_empty(ctx.quote.notes.as_ref());
    if terms.is_none() && notes.is_none() {
        return Vec::new();
    }

    let mut elements = title_with_accent(&config.terms_title.to_uppercase(), 144.0, ctx);
    if let Some(terms) = terms {
        elements.push(ContentElement::Paragraph(Paragraph::new(
            terms,
            ctx.styles.body.clone(),
        )));
    }
    if let Some(notes) = notes {
        elements.push(ContentElement::Paragraph(Paragraph::new(
            format!("Notas: {notes}"),
            ctx.styles.note.clone(),
        )));
    }
    elements
}
