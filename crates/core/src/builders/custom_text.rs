//! Caller-provided free text: optional heading plus plain paragraphs.
//! Content is treated as plain text, one paragraph per non-empty line.

use quotepress_idf::{ContentElement, Paragraph};

use crate::configs::CustomTextConfig;
use crate::context::BuildContext;

use super::title_with_accent;

pub fn build(config: &CustomTextConfig, ctx: &BuildContext) -> Vec<ContentElement> {
    let mut elements = Vec::new();

    if let Some(title) = &config.title {
        if !title.trim().is_empty() {
            elements.extend(title_with_accent(&title.to_uppercase(), 108.0, ctx));
        }
    }

    for line in config.content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        elements.push(ContentElement::Paragraph(Paragraph::new(
            line,
            ctx.styles.body.clone(),
        )));
    }

    elements
}
