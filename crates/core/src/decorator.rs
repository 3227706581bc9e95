//! Per-page chrome: background, top gradient band, accent bar, running
//! header and footer.

use itertools::Itertools;

use quotepress_render::{PageDecorator, PageLayout, Positioned, Primitive, approx_text_width};
use quotepress_style::{FontFamily, Palette, ParagraphStyle, Theme};
use quotepress_types::Tenant;

const GRADIENT_STEPS: usize = 30;
const GRADIENT_HEIGHT: f32 = 144.0;
const ACCENT_BAR_HEIGHT: f32 = 3.0;
const HEADER_RULE_Y: f32 = 43.2;
const FOOTER_RULE_OFFSET: f32 = 28.8;

pub struct QuotePageDecorator {
    palette: Palette,
    theme: Theme,
    tenant: Option<Tenant>,
    quote_number: String,
}

impl QuotePageDecorator {
    pub fn new(
        palette: Palette,
        theme: Theme,
        tenant: Option<Tenant>,
        quote_number: String,
    ) -> Self {
        Self {
            palette,
            theme,
            tenant,
            quote_number,
        }
    }

    fn footer_text(&self) -> String {
        let joined = self
            .tenant
            .iter()
            .flat_map(|t| {
                [
                    Some(t.name.as_str()),
                    t.phone.as_deref(),
                    t.email.as_deref(),
                    t.website.as_deref(),
                ]
            })
            .flatten()
            .join(" | ");
        if joined.is_empty() {
            "Documento Confidencial".to_string()
        } else {
            joined
        }
    }

    fn text_at(x: f32, y: f32, text: String, style: ParagraphStyle) -> Positioned {
        let width = approx_text_width(&text, style.size);
        let height = style.leading;
        Positioned {
            x,
            y,
            width,
            height,
            primitive: Primitive::Text { text, style },
        }
    }
}

impl PageDecorator for QuotePageDecorator {
    fn decorate(&self, page_number: usize, layout: &PageLayout) -> Vec<Positioned> {
        let palette = &self.palette;
        let mut items = vec![Positioned {
            x: 0.0,
            y: 0.0,
            width: layout.width,
            height: layout.height,
            primitive: Primitive::Rect {
                fill: Some(palette.bg_primary),
                stroke: None,
            },
        }];

        // Top band fading the brand tone into the background. Light themes
        // stay flat.
        if self.theme.is_dark() {
            let step_h = GRADIENT_HEIGHT / GRADIENT_STEPS as f32;
            for i in 0..GRADIENT_STEPS {
                let alpha = 0.12 * (1.0 - i as f32 / GRADIENT_STEPS as f32);
                let color = palette.bg_primary.mix(&palette.primary_dark, alpha);
                items.push(Positioned {
                    x: 0.0,
                    y: i as f32 * step_h,
                    width: layout.width,
                    height: step_h + 0.5,
                    primitive: Primitive::Rect {
                        fill: Some(color),
                        stroke: None,
                    },
                });
            }
        }

        items.push(Positioned {
            x: 0.0,
            y: 0.0,
            width: layout.width,
            height: ACCENT_BAR_HEIGHT,
            primitive: Primitive::Rect {
                fill: Some(palette.primary),
                stroke: None,
            },
        });

        if page_number > 1 {
            items.push(Positioned {
                x: layout.margins.left,
                y: HEADER_RULE_Y,
                width: layout.content_width(),
                height: 0.0,
                primitive: Primitive::Line {
                    color: palette.border,
                    width: 0.5,
                },
            });
            let number_style = ParagraphStyle::new(
                FontFamily::HelveticaBold,
                9.0,
                12.0,
                palette.primary_light,
            );
            items.push(Self::text_at(
                layout.margins.left,
                28.0,
                self.quote_number.clone(),
                number_style,
            ));
            let page_style =
                ParagraphStyle::new(FontFamily::Helvetica, 9.0, 12.0, palette.text_dim);
            let label = format!("Pagina {page_number}");
            let label_w = approx_text_width(&label, page_style.size);
            items.push(Self::text_at(
                layout.width - layout.margins.right - label_w,
                28.0,
                label,
                page_style,
            ));
        }

        let footer_rule_y = layout.height - FOOTER_RULE_OFFSET;
        items.push(Positioned {
            x: layout.margins.left,
            y: footer_rule_y,
            width: layout.content_width(),
            height: 0.0,
            primitive: Primitive::Line {
                color: palette.border_subtle,
                width: 0.5,
            },
        });
        let footer_style = ParagraphStyle::new(FontFamily::Helvetica, 7.0, 9.0, palette.text_dim);
        let footer = self.footer_text();
        let footer_w = approx_text_width(&footer, footer_style.size);
        items.push(Self::text_at(
            (layout.width - footer_w) / 2.0,
            footer_rule_y + 5.0,
            footer,
            footer_style,
        ));

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decorator(theme: Theme, tenant: Option<Tenant>) -> QuotePageDecorator {
        QuotePageDecorator::new(theme.builtin_palette(), theme, tenant, "Q-2026-001".into())
    }

    fn texts(items: &[Positioned]) -> Vec<&str> {
        items
            .iter()
            .filter_map(|p| match &p.primitive {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn first_page_has_no_running_header() {
        let items = decorator(Theme::Dark, None).decorate(1, &PageLayout::letter());
        assert!(!texts(&items).iter().any(|t| t.starts_with("Pagina")));
    }

    #[test]
    fn later_pages_carry_number_and_quote_reference() {
        let items = decorator(Theme::Dark, None).decorate(3, &PageLayout::letter());
        let texts = texts(&items);
        assert!(texts.contains(&"Pagina 3"));
        assert!(texts.contains(&"Q-2026-001"));
    }

    #[test]
    fn light_theme_skips_the_gradient_band() {
        let layout = PageLayout::letter();
        let dark = decorator(Theme::Dark, None).decorate(1, &layout).len();
        let light = decorator(Theme::Light, None).decorate(1, &layout).len();
        assert_eq!(dark - light, GRADIENT_STEPS);
    }

    #[test]
    fn footer_joins_tenant_contact_fields() {
        let tenant = Tenant {
            name: "Acme SA".into(),
            phone: Some("555-0100".into()),
            email: Some("ventas@acme.mx".into()),
            ..Tenant::default()
        };
        let decorator = decorator(Theme::Dark, Some(tenant));
        assert_eq!(decorator.footer_text(), "Acme SA | 555-0100 | ventas@acme.mx");
        let bare = QuotePageDecorator::new(
            Theme::Dark.builtin_palette(),
            Theme::Dark,
            None,
            String::new(),
        );
        assert_eq!(bare.footer_text(), "Documento Confidencial");
    }
}
