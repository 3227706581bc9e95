//! Top of the pipeline: section resolution, assembly, layout and render.

use std::path::Path;

use quotepress_idf::ContentElement;
use quotepress_render::{DocumentMetadata, LayoutEngine, PageLayout, PdfRenderer};
use quotepress_style::{FontConfig, Palette, SpacingConfig, TextStyles, Theme};

use crate::builders::build_section;
use crate::context::BuildContext;
use crate::decorator::QuotePageDecorator;
use crate::error::PipelineError;
use crate::logo::Logo;
use crate::request::GenerateRequest;
use crate::section::{SectionDescriptor, SectionType, default_sections};

/// Filters, orders and dispatches the section list. The sort is stable:
/// equal `order` values keep their input positions.
pub fn assemble(
    sections: &[SectionDescriptor],
    ctx: &BuildContext,
) -> Result<Vec<ContentElement>, PipelineError> {
    let mut ordered: Vec<&SectionDescriptor> = sections.iter().filter(|s| s.enabled).collect();
    ordered.sort_by_key(|s| s.order);

    let mut elements = Vec::new();
    for descriptor in ordered {
        elements.extend(build_section(descriptor, ctx)?);
    }
    Ok(elements)
}

fn resolve_sections(request: &GenerateRequest) -> Vec<SectionDescriptor> {
    if !request.sections.is_empty() {
        return request.sections.clone();
    }
    let mut sections = default_sections();
    // Legacy flags predate the section list and only apply to defaults.
    sections.retain(|s| match s.kind {
        SectionType::Terms => request.include_terms,
        SectionType::Signature => request.include_signature,
        _ => true,
    });
    sections
}

fn open_logo(request: &GenerateRequest) -> Option<Logo> {
    let url = request.tenant.as_ref()?.logo_url.as_deref()?;
    let path = Path::new(url);
    if path.is_file() {
        Some(Logo::open(path))
    } else {
        log::warn!("logo {url:?} is not a readable file, cover will omit it");
        None
    }
}

/// Picks theme, palette, fonts and spacing for one build. Without
/// explicit styles the theme built-ins are used verbatim; seed
/// derivation only runs for caller-supplied color configs.
fn resolve_style(
    request: &GenerateRequest,
) -> Result<(Theme, Palette, FontConfig, SpacingConfig), PipelineError> {
    match &request.styles {
        Some(config) => Ok((
            config.theme,
            Palette::resolve(config.colors.as_ref(), config.theme)?,
            config.fonts.clone().unwrap_or_default(),
            config.spacing.clone().unwrap_or_default(),
        )),
        None => Ok((
            request.theme,
            Palette::resolve(None, request.theme)?,
            FontConfig::default(),
            SpacingConfig::default(),
        )),
    }
}

/// Runs one full document build. Any failure aborts the whole build;
/// there is no partial output.
pub fn generate(request: &GenerateRequest) -> Result<Vec<u8>, PipelineError> {
    let (theme, palette, fonts, spacing) = resolve_style(request)?;
    let styles = TextStyles::build(&palette, &fonts, &spacing);

    let logo = open_logo(request);
    let ctx = BuildContext {
        quote: &request.quote,
        tenant: request.tenant.as_ref(),
        palette: &palette,
        styles: &styles,
        theme,
        logo: logo.as_ref(),
    };

    let sections = resolve_sections(request);
    let elements = assemble(&sections, &ctx)?;

    let layout = PageLayout::letter();
    let pages = LayoutEngine::new(layout).paginate(&elements);
    log::debug!(
        "quote {} laid out across {} page(s)",
        request.quote.quote_number,
        pages.len()
    );

    let decorator = QuotePageDecorator::new(
        palette,
        theme,
        request.tenant.clone(),
        request.quote.quote_number.clone(),
    );
    let metadata = DocumentMetadata {
        title: format!("Cotizacion {}", request.quote.quote_number),
        author: request
            .tenant
            .as_ref()
            .map(|t| t.name.clone())
            .unwrap_or_default(),
    };
    let bytes = PdfRenderer::new(layout, metadata)
        .with_decorator(&decorator)
        .render(&pages)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotepress_style::Theme;
    use serde_json::json;

    fn test_quote() -> quotepress_types::Quote {
        serde_json::from_value(json!({
            "id": "q1",
            "tenantId": "t1",
            "quoteNumber": "Q-2026-001",
            "title": "Implementacion CRM",
            "status": "sent",
            "currency": "MXN",
            "subtotal": 1000.0,
            "discountAmount": 0.0,
            "taxAmount": 160.0,
            "total": 1160.0,
            "issueDate": "2026-02-01",
            "items": [],
            "createdBy": "u1",
            "createdAt": "2026-02-01T00:00:00Z",
            "updatedAt": "2026-02-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn ctx_fixture<'a>(
        palette: &'a Palette,
        styles: &'a TextStyles,
        quote: &'a quotepress_types::Quote,
    ) -> BuildContext<'a> {
        BuildContext {
            quote,
            tenant: None,
            palette,
            styles,
            theme: Theme::Dark,
            logo: None,
        }
    }

    #[test]
    fn disabled_sections_are_dropped() {
        let palette = Theme::Dark.builtin_palette();
        let styles = TextStyles::build(&palette, &Default::default(), &Default::default());
        let quote = test_quote();
        let ctx = ctx_fixture(&palette, &styles, &quote);

        let mut sections = default_sections();
        for section in &mut sections {
            section.enabled = false;
        }
        let elements = assemble(&sections, &ctx).unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn equal_orders_keep_input_position() {
        let palette = Theme::Dark.builtin_palette();
        let styles = TextStyles::build(&palette, &Default::default(), &Default::default());
        let quote = test_quote();
        let ctx = ctx_fixture(&palette, &styles, &quote);

        let first = SectionDescriptor::new(
            SectionType::CustomText,
            1,
            json!({ "content": "primero" }),
        );
        let second = SectionDescriptor::new(
            SectionType::CustomText,
            1,
            json!({ "content": "segundo" }),
        );
        let elements = assemble(&[first, second], &ctx).unwrap();
        let texts: Vec<&str> = elements
            .iter()
            .filter_map(|e| match e {
                ContentElement::Paragraph(p) => Some(p.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["primero", "segundo"]);
    }

    #[test]
    fn unknown_sections_contribute_nothing() {
        let palette = Theme::Dark.builtin_palette();
        let styles = TextStyles::build(&palette, &Default::default(), &Default::default());
        let quote = test_quote();
        let ctx = ctx_fixture(&palette, &styles, &quote);

        let descriptor: SectionDescriptor =
            serde_json::from_value(json!({ "type": "hologram" })).unwrap();
        let elements = assemble(&[descriptor], &ctx).unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn styleless_request_resolves_the_builtin_palette() {
        let mut request = GenerateRequest::new(test_quote());
        request.theme = Theme::Light;
        let (theme, palette, _, _) = resolve_style(&request).unwrap();
        assert_eq!(theme, Theme::Light);
        assert_eq!(palette, Theme::Light.builtin_palette());

        request.theme = Theme::Dark;
        let (_, palette, _, _) = resolve_style(&request).unwrap();
        assert_eq!(palette, Theme::Dark.builtin_palette());
    }

    #[test]
    fn legacy_flags_trim_default_sections() {
        let mut request = GenerateRequest::new(test_quote());
        request.include_terms = false;
        request.include_signature = false;
        let kinds: Vec<SectionType> = resolve_sections(&request)
            .iter()
            .map(|s| s.kind)
            .collect();
        assert!(!kinds.contains(&SectionType::Terms));
        assert!(!kinds.contains(&SectionType::Signature));
        assert!(kinds.contains(&SectionType::Cover));
    }

    #[test]
    fn explicit_sections_ignore_legacy_flags() {
        let mut request = GenerateRequest::new(test_quote());
        request.include_terms = false;
        request.sections = vec![SectionDescriptor::new(SectionType::Terms, 0, json!({}))];
        let kinds: Vec<SectionType> = resolve_sections(&request)
            .iter()
            .map(|s| s.kind)
            .collect();
        assert_eq!(kinds, vec![SectionType::Terms]);
    }

    #[test]
    fn generation_is_deterministic() {
        let request = GenerateRequest::new(test_quote());
        let first = generate(&request).unwrap();
        let second = generate(&request).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with(b"%PDF-"));
    }
}
