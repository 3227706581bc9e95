//! Caller-facing style configuration: seed colors, fonts and spacing.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// Seed colors for palette resolution. Values are hex strings; validation
/// happens in [`crate::Palette::resolve`].
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ColorConfig {
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default)]
    pub muted: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
    #[serde(default)]
    pub table_header: Option<String>,
    #[serde(default)]
    pub table_row_alt: Option<String>,
}

fn default_primary() -> String {
    "#10b981".to_string()
}

fn default_background() -> String {
    "#0f172a".to_string()
}

fn default_text() -> String {
    "#e5e7eb".to_string()
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: Some("#7c3aed".to_string()),
            accent: Some("#14b8a6".to_string()),
            background: default_background(),
            text: default_text(),
            muted: Some("#9ca3af".to_string()),
            border: Some("#334155".to_string()),
            table_header: Some("#1f2937".to_string()),
            table_row_alt: Some("#111827".to_string()),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontSizes {
    pub title: f32,
    pub heading: f32,
    pub body: f32,
    pub small: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self { title: 36.0, heading: 20.0, body: 11.0, small: 9.0 }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    #[serde(default)]
    pub sizes: FontSizes,
}

/// Spacing knobs, in points.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpacingConfig {
    pub margins: f32,
    pub padding: f32,
    pub line_height: f32,
    pub section_gap: f32,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self { margins: 20.0, padding: 15.0, line_height: 1.4, section_gap: 20.0 }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub colors: Option<ColorConfig>,
    #[serde(default)]
    pub fonts: Option<FontConfig>,
    #[serde(default)]
    pub spacing: Option<SpacingConfig>,
}

impl StyleConfig {
    /// Configuration that resolves to the built-in palette of `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }
}
