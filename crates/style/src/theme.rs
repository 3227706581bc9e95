//! The two built-in theme palettes.
//!
//! Each variant carries a *total* palette: every named color is a defined
//! constant, so unseeded resolution is a plain copy with no optional lookups.

use crate::palette::Palette;
use quotepress_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Dark mode palette (slate backgrounds, emerald brand).
const DARK: Palette = Palette {
    bg_primary: Color::rgb(0x0f, 0x17, 0x2a),
    bg_secondary: Color::rgb(0x1e, 0x29, 0x3b),
    bg_card: Color::rgb(0x1e, 0x29, 0x3b),
    bg_elevated: Color::rgb(0x33, 0x41, 0x55),
    primary: Color::rgb(0x10, 0xb9, 0x81),
    primary_light: Color::rgb(0x34, 0xd3, 0x99),
    primary_dark: Color::rgb(0x04, 0x78, 0x57),
    primary_glow: Color::rgb(0x6e, 0xe7, 0xb7),
    secondary: Color::rgb(0x7c, 0x3a, 0xed),
    accent: Color::rgb(0x14, 0xb8, 0xa6),
    text: Color::rgb(0xff, 0xff, 0xff),
    text_soft: Color::rgb(0xf1, 0xf5, 0xf9),
    text_body: Color::rgb(0xcb, 0xd5, 0xe1),
    text_muted: Color::rgb(0x94, 0xa3, 0xb8),
    text_dim: Color::rgb(0x64, 0x74, 0x8b),
    text_faint: Color::rgb(0x47, 0x55, 0x69),
    border: Color::rgb(0x33, 0x41, 0x55),
    border_light: Color::rgb(0x47, 0x55, 0x69),
    border_subtle: Color::rgb(0x1e, 0x29, 0x3b),
};

/// Light mode palette (white backgrounds, same brand colors).
const LIGHT: Palette = Palette {
    bg_primary: Color::rgb(0xff, 0xff, 0xff),
    bg_secondary: Color::rgb(0xf8, 0xfa, 0xfc),
    bg_card: Color::rgb(0xff, 0xff, 0xff),
    bg_elevated: Color::rgb(0xf1, 0xf5, 0xf9),
    primary: Color::rgb(0x10, 0xb9, 0x81),
    primary_light: Color::rgb(0x34, 0xd3, 0x99),
    primary_dark: Color::rgb(0x04, 0x78, 0x57),
    primary_glow: Color::rgb(0x6e, 0xe7, 0xb7),
    secondary: Color::rgb(0x7c, 0x3a, 0xed),
    accent: Color::rgb(0x14, 0xb8, 0xa6),
    text: Color::rgb(0x0f, 0x17, 0x2a),
    text_soft: Color::rgb(0xf1, 0xf5, 0xf9),
    text_body: Color::rgb(0x47, 0x55, 0x69),
    text_muted: Color::rgb(0x94, 0xa3, 0xb8),
    text_dim: Color::rgb(0x94, 0xa3, 0xb8),
    text_faint: Color::rgb(0x47, 0x55, 0x69),
    border: Color::rgb(0xe2, 0xe8, 0xf0),
    border_light: Color::rgb(0x47, 0x55, 0x69),
    border_subtle: Color::rgb(0xf1, 0xf5, 0xf9),
};

impl Theme {
    pub fn builtin_palette(&self) -> Palette {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}
