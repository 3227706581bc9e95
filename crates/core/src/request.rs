//! Wire-level request for one document build.

use serde::Deserialize;

use quotepress_style::{StyleConfig, Theme};
use quotepress_types::{Quote, Tenant};

use crate::assembler;
use crate::error::PipelineError;
use crate::section::SectionDescriptor;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub quote: Quote,
    #[serde(default)]
    pub tenant: Option<Tenant>,
    /// Explicit section list; empty means "use the defaults".
    #[serde(default)]
    pub sections: Vec<SectionDescriptor>,
    #[serde(default)]
    pub styles: Option<StyleConfig>,
    #[serde(default)]
    pub theme: Theme,
    /// Legacy toggles honored only when `sections` is empty.
    #[serde(default = "truthy")]
    pub include_terms: bool,
    #[serde(default = "truthy")]
    pub include_signature: bool,
    /// Carried for the transport layer; generation always returns the
    /// full byte stream either way.
    #[serde(default)]
    pub preview_mode: bool,
}

fn truthy() -> bool {
    true
}

impl GenerateRequest {
    pub fn new(quote: Quote) -> Self {
        Self {
            quote,
            tenant: None,
            sections: Vec::new(),
            styles: None,
            theme: Theme::default(),
            include_terms: true,
            include_signature: true,
            preview_mode: false,
        }
    }

    pub fn suggested_filename(&self) -> String {
        format!("{}.pdf", self.quote.quote_number)
    }
}

pub fn generate_pdf(request: &GenerateRequest) -> Result<Vec<u8>, PipelineError> {
    assembler::generate(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_request_fills_defaults() {
        let request: GenerateRequest = serde_json::from_value(json!({
            "quote": {
                "id": "q1",
                "tenantId": "t1",
                "quoteNumber": "Q-7",
                "title": "Proyecto",
                "subtotal": 100.0,
                "total": 116.0,
                "issueDate": "2026-01-10",
                "createdBy": "u1",
                "createdAt": "2026-01-10T00:00:00Z",
                "updatedAt": "2026-01-10T00:00:00Z"
            }
        }))
        .unwrap();
        assert!(request.sections.is_empty());
        assert_eq!(request.theme, Theme::Dark);
        assert!(request.include_terms && request.include_signature);
        assert!(!request.preview_mode);
        assert_eq!(request.suggested_filename(), "Q-7.pdf");
    }
}
