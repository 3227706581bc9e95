pub mod config;
pub mod error;
pub mod palette;
pub mod status;
pub mod text;
pub mod theme;

pub use config::{ColorConfig, FontConfig, FontSizes, SpacingConfig, StyleConfig};
pub use error::StyleError;
pub use palette::Palette;
pub use status::status_badge;
pub use text::{FontFamily, ParagraphStyle, TextAlign, TextStyles};
pub use theme::Theme;
