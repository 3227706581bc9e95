mod common;

use common::fixtures::{sample_quote, sample_tenant};
use common::{TestResult, generate};
use serde_json::json;

#[test]
fn explicit_sections_replace_the_defaults() -> TestResult {
    let request = json!({
        "quote": sample_quote(),
        "tenant": sample_tenant(),
        "sections": [
            { "type": "summary", "order": 0 },
            { "type": "totals", "order": 1 }
        ]
    });
    let text = generate(&request)?.text();
    assert!(text.contains("RESUMEN"));
    assert!(text.contains("TOTAL (MXN)"));
    assert!(!text.contains("COTIZACION"));
    assert!(!text.contains("ACEPTACION"));
    Ok(())
}

#[test]
fn disabled_sections_are_skipped() -> TestResult {
    let request = json!({
        "quote": sample_quote(),
        "sections": [
            { "type": "summary", "order": 0 },
            { "type": "details", "order": 1, "enabled": false }
        ]
    });
    let text = generate(&request)?.text();
    assert!(text.contains("RESUMEN"));
    assert!(!text.contains("DETALLE"));
    Ok(())
}

#[test]
fn order_field_controls_placement() -> TestResult {
    let request = json!({
        "quote": sample_quote(),
        "sections": [
            { "type": "details", "order": 5 },
            { "type": "summary", "order": 1 }
        ]
    });
    let text = generate(&request)?.text();
    let summary = text.find("RESUMEN").unwrap();
    let details = text.find("DETALLE").unwrap();
    assert!(summary < details);
    Ok(())
}

#[test]
fn unknown_section_types_are_ignored() -> TestResult {
    let request = json!({
        "quote": sample_quote(),
        "sections": [
            { "type": "summary", "order": 0 },
            { "type": "qr_code", "order": 1 }
        ]
    });
    let text = generate(&request)?.text();
    assert!(text.contains("RESUMEN"));
    Ok(())
}

#[test]
fn custom_text_section_renders_line_by_line() -> TestResult {
    let request = json!({
        "quote": sample_quote(),
        "sections": [
            {
                "type": "custom_text",
                "order": 0,
                "config": {
                    "title": "Garantia",
                    "content": "Cobertura de 12 meses.\n\nAplican restricciones."
                }
            }
        ]
    });
    let text = generate(&request)?.text();
    assert!(text.contains("GARANTIA"));
    assert!(text.contains("Cobertura de 12 meses."));
    assert!(text.contains("Aplican restricciones."));
    Ok(())
}

#[test]
fn details_columns_can_be_toggled_off() -> TestResult {
    let request = json!({
        "quote": sample_quote(),
        "sections": [
            {
                "type": "details",
                "order": 0,
                "config": { "showQuantity": false, "showUnitPrice": false }
            }
        ]
    });
    let text = generate(&request)?.text();
    assert!(text.contains("DESCRIPCION"));
    assert!(!text.contains("CANT."));
    assert!(!text.contains("PRECIO UNIT."));
    assert!(text.contains("SUBTOTAL"));
    Ok(())
}

#[test]
fn show_total_hides_the_line_total_column() -> TestResult {
    let request = json!({
        "quote": sample_quote(),
        "sections": [
            {
                "type": "details",
                "order": 0,
                "config": { "showTotal": false }
            }
        ]
    });
    let text = generate(&request)?.text();
    assert!(text.contains("DESCRIPCION"));
    assert!(text.contains("CANT."));
    assert!(text.contains("PRECIO UNIT."));
    assert!(!text.contains("SUBTOTAL"));
    Ok(())
}

#[test]
fn legacy_flags_disable_default_terms_and_signature() -> TestResult {
    let request = json!({
        "quote": sample_quote(),
        "includeTerms": false,
        "includeSignature": false
    });
    let text = generate(&request)?.text();
    assert!(!text.contains("TERMINOS"));
    assert!(!text.contains("ACEPTACION"));
    Ok(())
}

#[test]
fn bad_section_config_type_is_an_error() {
    let request = json!({
        "quote": sample_quote(),
        "sections": [
            { "type": "cover", "order": 0, "config": { "showLogo": "si" } }
        ]
    });
    assert!(generate(&request).is_err());
}

#[test]
fn long_item_lists_keep_every_row() -> TestResult {
    let mut quote = sample_quote();
    let items: Vec<_> = (1..=45)
        .map(|i| {
            json!({
                "id": format!("li-{i}"),
                "name": format!("Partida {i}"),
                "quantity": 1.0,
                "unitPrice": 100.0,
                "subtotal": 100.0,
                "total": 100.0
            })
        })
        .collect();
    quote["items"] = json!(items);
    let request = json!({
        "quote": quote,
        "sections": [ { "type": "details", "order": 0 } ]
    });
    let pdf = generate(&request)?;
    assert!(pdf.page_count() > 1);
    let text = pdf.text();
    assert!(text.contains("Partida 1"));
    assert!(text.contains("Partida 45"));
    Ok(())
}

#[test]
fn quote_without_items_gets_the_empty_note() -> TestResult {
    let mut quote = sample_quote();
    quote["items"] = json!([]);
    let request = json!({
        "quote": quote,
        "sections": [ { "type": "details", "order": 0 } ]
    });
    let text = generate(&request)?.text();
    assert!(text.contains("No hay lineas en esta cotizacion."));
    Ok(())
}
