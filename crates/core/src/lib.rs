//! Quote document pipeline: section registry, builders, assembly and the
//! page decorator, glued to the layout and render crates.

pub mod assembler;
pub mod builders;
pub mod configs;
pub mod context;
pub mod decorator;
pub mod error;
pub mod format;
pub mod logo;
pub mod request;
pub mod section;

pub use assembler::{assemble, generate};
pub use context::BuildContext;
pub use decorator::QuotePageDecorator;
pub use error::PipelineError;
pub use logo::{Logo, TempLogo};
pub use request::{GenerateRequest, generate_pdf};
pub use section::{SectionDescriptor, SectionType, default_sections};
