//! Typed views over the free-form section config maps.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::PipelineError;

fn parse<T: for<'de> Deserialize<'de>>(
    kind: &str,
    config: &Map<String, Value>,
) -> Result<T, PipelineError> {
    serde_json::from_value(Value::Object(config.clone()))
        .map_err(|e| PipelineError::Config(format!("{kind}: {e}")))
}

fn truthy() -> bool {
    true
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CoverConfig {
    #[serde(default = "truthy")]
    pub show_logo: bool,
    #[serde(default = "truthy")]
    pub show_date: bool,
    #[serde(default = "truthy")]
    pub show_quote_number: bool,
    #[serde(default = "truthy")]
    pub show_client_address: bool,
}

impl CoverConfig {
    pub fn from_map(config: &Map<String, Value>) -> Result<Self, PipelineError> {
        parse("cover", config)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DetailsConfig {
    #[serde(default = "truthy")]
    pub show_quantity: bool,
    #[serde(default = "truthy")]
    pub show_unit_price: bool,
    #[serde(default = "truthy")]
    pub show_total: bool,
    #[serde(default = "truthy")]
    pub show_description: bool,
}

impl DetailsConfig {
    pub fn from_map(config: &Map<String, Value>) -> Result<Self, PipelineError> {
        parse("details", config)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TotalsConfig {
    #[serde(default = "truthy")]
    pub show_subtotal: bool,
    #[serde(default = "truthy")]
    pub show_discount: bool,
    #[serde(default = "truthy")]
    pub show_tax: bool,
}

impl TotalsConfig {
    pub fn from_map(config: &Map<String, Value>) -> Result<Self, PipelineError> {
        parse("totals", config)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TermsConfig {
    #[serde(default = "default_terms_title")]
    pub terms_title: String,
}

fn default_terms_title() -> String {
    "Terminos y Condiciones".to_string()
}

impl TermsConfig {
    pub fn from_map(config: &Map<String, Value>) -> Result<Self, PipelineError> {
        parse("terms", config)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SignatureConfig {
    #[serde(default = "truthy")]
    pub show_signature_line: bool,
    #[serde(default = "truthy")]
    pub show_date_line: bool,
    #[serde(default = "default_signature_label")]
    pub signature_label: String,
}

fn default_signature_label() -> String {
    "Nombre y Firma".to_string()
}

impl SignatureConfig {
    pub fn from_map(config: &Map<String, Value>) -> Result<Self, PipelineError> {
        parse("signature", config)
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomTextConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl CustomTextConfig {
    pub fn from_map(config: &Map<String, Value>) -> Result<Self, PipelineError> {
        parse("custom_text", config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn missing_flags_default_on() {
        let cover = CoverConfig::from_map(&Map::new()).unwrap();
        assert!(cover.show_logo && cover.show_date);
        let totals = TotalsConfig::from_map(&Map::new()).unwrap();
        assert!(totals.show_subtotal && totals.show_discount && totals.show_tax);
    }

    #[test]
    fn details_total_toggle_uses_the_show_total_key() {
        let details = DetailsConfig::from_map(&map(json!({ "showTotal": false }))).unwrap();
        assert!(!details.show_total);
        assert!(details.show_quantity && details.show_unit_price && details.show_description);
    }

    #[test]
    fn wrong_type_is_a_config_error() {
        let bad = map(json!({ "showLogo": "yes" }));
        let err = CoverConfig::from_map(&bad).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
        assert!(err.to_string().contains("cover"));
    }

    #[test]
    fn terms_title_falls_back_to_spanish_default() {
        let terms = TermsConfig::from_map(&Map::new()).unwrap();
        assert_eq!(terms.terms_title, "Terminos y Condiciones");
        let custom = TermsConfig::from_map(&map(json!({ "termsTitle": "Condiciones" }))).unwrap();
        assert_eq!(custom.terms_title, "Condiciones");
    }

    #[test]
    fn custom_text_tolerates_empty_map() {
        let config = CustomTextConfig::from_map(&Map::new()).unwrap();
        assert!(config.title.is_none());
        assert!(config.content.is_empty());
    }
}
