//! Layout and PDF output for quote documents.

pub mod error;
pub mod layout;
pub mod renderer;

pub use error::RenderError;
pub use layout::{
    LayoutEngine, Page, PageLayout, Positioned, Primitive, approx_text_width, wrap_text,
};
pub use renderer::{DocumentMetadata, PageDecorator, PdfRenderer, to_win_ansi};
