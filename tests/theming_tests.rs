mod common;

use common::fixtures::{minimal_quote, sample_quote};
use common::{TestResult, generate};
use quotepress::{ColorConfig, Palette, Theme};
use serde_json::json;

#[test]
fn seeded_primary_lightens_upward() {
    let config = ColorConfig {
        primary: "#ff0000".to_string(),
        ..ColorConfig::default()
    };
    let palette = Palette::resolve(Some(&config), Theme::Dark).unwrap();
    let seed = quotepress::Color::rgb(0xff, 0x00, 0x00);
    assert!(palette.primary_light.r >= seed.r);
    assert!(palette.primary_light.g >= seed.g);
    assert!(palette.primary_light.b >= seed.b);
}

#[test]
fn no_seed_copies_the_builtin_palette() {
    let resolved = Palette::resolve(None, Theme::Light).unwrap();
    let builtin = Theme::Light.builtin_palette();
    assert_eq!(resolved.primary, builtin.primary);
    assert_eq!(resolved.bg_primary, builtin.bg_primary);
    assert_eq!(resolved.text, builtin.text);
}

#[test]
fn light_theme_renders_the_same_sections() -> TestResult {
    let dark = generate(&json!({ "quote": sample_quote() }))?.text();
    let light = generate(&json!({ "quote": sample_quote(), "theme": "light" }))?.text();
    for needle in ["COTIZACION", "RESUMEN", "DETALLE", "ACEPTACION"] {
        assert!(dark.contains(needle));
        assert!(light.contains(needle));
    }
    Ok(())
}

#[test]
fn theme_only_request_matches_explicit_builtin_styles() -> TestResult {
    // A bare theme selection and an empty style config for the same theme
    // must resolve identically, down to the bytes.
    let bare = generate(&json!({ "quote": sample_quote(), "theme": "light" }))?;
    let explicit = generate(&json!({
        "quote": sample_quote(),
        "styles": { "theme": "light" }
    }))?;
    assert_eq!(bare.bytes, explicit.bytes);
    Ok(())
}

#[test]
fn custom_styles_still_produce_a_valid_document() -> TestResult {
    let request = json!({
        "quote": minimal_quote(),
        "styles": {
            "theme": "dark",
            "colors": {
                "primary": "#e11d48",
                "background": "#111827",
                "text": "#f9fafb"
            },
            "fonts": { "sizes": { "title": 30.0, "heading": 18.0, "body": 10.0, "small": 8.0 } }
        }
    });
    let pdf = generate(&request)?;
    assert!(pdf.page_count() >= 1);
    assert!(pdf.text().contains("Q-MIN-1"));
    Ok(())
}

#[test]
fn invalid_secondary_seed_is_rejected() {
    let config = ColorConfig {
        secondary: Some("#12345".to_string()),
        ..ColorConfig::default()
    };
    assert!(Palette::resolve(Some(&config), Theme::Dark).is_err());
}
