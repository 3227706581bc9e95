//! Runtime palette resolution.
//!
//! A [`Palette`] is the full set of named colors one document build uses. It
//! is resolved once per request, either by deriving every tone from a handful
//! of caller-supplied seed colors or by copying a built-in theme palette, and
//! is immutable afterwards.

use crate::config::ColorConfig;
use crate::error::StyleError;
use crate::theme::Theme;
use quotepress_types::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    // Surfaces
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_card: Color,
    pub bg_elevated: Color,

    // Brand
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,
    pub primary_glow: Color,
    pub secondary: Color,
    pub accent: Color,

    // Text tones, strongest to faintest
    pub text: Color,
    pub text_soft: Color,
    pub text_body: Color,
    pub text_muted: Color,
    pub text_dim: Color,
    pub text_faint: Color,

    // Borders
    pub border: Color,
    pub border_light: Color,
    pub border_subtle: Color,
}

/// Simulate reduced opacity by blending toward the theme's dominant surface:
/// black on dark themes, white on light themes.
fn blend_opacity(color: Color, factor: f32, theme: Theme) -> Color {
    if theme.is_dark() {
        color.darken(1.0 - factor)
    } else {
        color.lighten(1.0 - factor)
    }
}

fn parse_seed(field: &'static str, value: &str) -> Result<Color, StyleError> {
    Color::from_hex(value).map_err(|message| StyleError::InvalidColor { field, message })
}

fn parse_opt_seed(
    field: &'static str,
    value: Option<&String>,
) -> Result<Option<Color>, StyleError> {
    value.map(|v| parse_seed(field, v)).transpose()
}

impl Palette {
    /// Resolve the palette for one document build.
    ///
    /// With a seed config every dependent tone is derived from the supplied
    /// colors; without one the theme's built-in palette is copied verbatim.
    /// All seeds are validated up front so a malformed hex string fails here,
    /// never mid-render.
    pub fn resolve(config: Option<&ColorConfig>, theme: Theme) -> Result<Palette, StyleError> {
        let Some(config) = config else {
            return Ok(theme.builtin_palette());
        };

        let primary = parse_seed("primary", &config.primary)?;
        let background = parse_seed("background", &config.background)?;
        let text = parse_seed("text", &config.text)?;
        let secondary = parse_opt_seed("secondary", config.secondary.as_ref())?;
        let accent = parse_opt_seed("accent", config.accent.as_ref())?;
        let muted = parse_opt_seed("muted", config.muted.as_ref())?;
        let border = parse_opt_seed("border", config.border.as_ref())?;
        let table_header = parse_opt_seed("tableHeader", config.table_header.as_ref())?;
        let table_row_alt = parse_opt_seed("tableRowAlt", config.table_row_alt.as_ref())?;

        let dark = theme.is_dark();
        let secondary = secondary.unwrap_or(primary);
        let accent = accent.unwrap_or(primary);
        let muted = muted.unwrap_or_else(|| text.adjust(0.6));
        let border = border.unwrap_or_else(|| background.adjust(if dark { 0.8 } else { 0.9 }));
        let table_header =
            table_header.unwrap_or_else(|| background.adjust(if dark { 0.85 } else { 0.95 }));
        let table_row_alt =
            table_row_alt.unwrap_or_else(|| background.adjust(if dark { 0.95 } else { 0.98 }));

        Ok(Palette {
            bg_primary: background,
            bg_secondary: table_header,
            bg_card: table_row_alt,
            bg_elevated: background.adjust(if dark { 0.7 } else { 0.85 }),

            primary,
            primary_light: primary.lighten(0.2),
            primary_dark: primary.darken(0.3),
            primary_glow: primary.lighten(0.4),
            secondary,
            accent,

            text,
            text_soft: blend_opacity(text, 0.9, theme),
            text_body: blend_opacity(text, 0.8, theme),
            text_muted: muted,
            text_dim: blend_opacity(muted, 0.85, theme),
            text_faint: blend_opacity(muted, 0.7, theme),

            border,
            border_light: border.adjust(0.9),
            border_subtle: border.adjust(1.1),
        })
    }
}
