//! quotepress: section-driven quote PDF generation.
//!
//! The workspace splits along the pipeline: `quotepress-types` holds the
//! data model, `quotepress-style` resolves color palettes and paragraph
//! styles, `quotepress-idf` is the intermediate content format the
//! section builders emit, `quotepress-render` lays pages out and writes
//! the PDF, and `quotepress-core` ties them together behind
//! [`GenerateRequest`].

pub use quotepress_core::{
    BuildContext, GenerateRequest, Logo, PipelineError, QuotePageDecorator, SectionDescriptor,
    SectionType, TempLogo, assemble, default_sections, generate_pdf,
};
pub use quotepress_idf as idf;
pub use quotepress_render::{
    DocumentMetadata, LayoutEngine, Page, PageDecorator, PageLayout, PdfRenderer, RenderError,
};
pub use quotepress_style::{
    ColorConfig, FontConfig, Palette, SpacingConfig, StyleConfig, StyleError, TextStyles, Theme,
};
pub use quotepress_types::{Color, Quote, QuoteStatus, Tenant};
