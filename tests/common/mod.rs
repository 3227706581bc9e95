pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use quotepress::GenerateRequest;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }

    /// Save the PDF to a file for manual inspection.
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{name}.pdf"), &self.bytes)
    }
}

/// Parse a JSON request value and run the full generation pipeline.
pub fn generate(request: &Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let request: GenerateRequest = serde_json::from_value(request.clone())?;
    let bytes = quotepress::generate_pdf(&request)?;
    GeneratedPdf::from_bytes(bytes)
}
