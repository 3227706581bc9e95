//! Section registry: which blocks make up a document and in what order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Cover,
    Summary,
    Details,
    Totals,
    Terms,
    Signature,
    CustomText,
    /// Anything this build does not know about. Skipped with a warning so
    /// documents from newer callers still render.
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionType,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub order: i32,
    /// Free-form per-section options, interpreted by the matching builder.
    #[serde(default)]
    pub config: Map<String, Value>,
}

fn default_enabled() -> bool {
    true
}

impl SectionDescriptor {
    pub fn new(kind: SectionType, order: i32, config: Value) -> Self {
        let config = match config {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            id: String::new(),
            kind,
            enabled: true,
            order,
            config,
        }
    }
}

/// The stock section list used when a request supplies none.
pub fn default_sections() -> Vec<SectionDescriptor> {
    vec![
        SectionDescriptor::new(
            SectionType::Cover,
            0,
            json!({
                "showLogo": true,
                "showDate": true,
                "showQuoteNumber": true,
                "showClientAddress": true,
            }),
        ),
        SectionDescriptor::new(SectionType::Summary, 1, json!({})),
        SectionDescriptor::new(
            SectionType::Details,
            2,
            json!({
                "showQuantity": true,
                "showUnitPrice": true,
                "showTotal": true,
                "showDescription": true,
            }),
        ),
        SectionDescriptor::new(
            SectionType::Totals,
            3,
            json!({
                "showSubtotal": true,
                "showDiscount": true,
                "showTax": true,
            }),
        ),
        SectionDescriptor::new(
            SectionType::Terms,
            4,
            json!({ "termsTitle": "Terminos y Condiciones" }),
        ),
        SectionDescriptor::new(
            SectionType::Signature,
            5,
            json!({
                "showSignatureLine": true,
                "showDateLine": true,
                "signatureLabel": "Firma Autorizada",
            }),
        ),
    ]
}
