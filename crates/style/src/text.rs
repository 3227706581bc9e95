//! Paragraph styles built once per document from the resolved palette.

use crate::config::{FontConfig, SpacingConfig};
use crate::palette::Palette;
use quotepress_types::Color;
use serde::{Deserialize, Serialize};

/// The base-14 faces the renderer knows how to address.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

impl FontFamily {
    /// PostScript name used in the PDF font dictionary.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::HelveticaBold => "Helvetica-Bold",
            FontFamily::HelveticaOblique => "Helvetica-Oblique",
            FontFamily::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Internal resource name referenced by `Tf` operations.
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontFamily::Helvetica => "F1",
            FontFamily::HelveticaBold => "F2",
            FontFamily::HelveticaOblique => "F3",
            FontFamily::HelveticaBoldOblique => "F4",
        }
    }

    pub fn all() -> [FontFamily; 4] {
        [
            FontFamily::Helvetica,
            FontFamily::HelveticaBold,
            FontFamily::HelveticaOblique,
            FontFamily::HelveticaBoldOblique,
        ]
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub font: FontFamily,
    pub size: f32,
    pub leading: f32,
    pub color: Color,
    pub align: TextAlign,
    pub space_before: f32,
    pub space_after: f32,
}

impl ParagraphStyle {
    pub fn new(font: FontFamily, size: f32, leading: f32, color: Color) -> Self {
        Self {
            font,
            size,
            leading,
            color,
            align: TextAlign::Left,
            space_before: 0.0,
            space_after: 0.0,
        }
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn sized(mut self, size: f32, leading: f32) -> Self {
        self.size = size;
        self.leading = leading;
        self
    }

    pub fn spaced(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }
}

/// The named paragraph styles one document build uses, resolved against a
/// palette. Constructed once per request and passed to every section builder.
#[derive(Debug, Clone)]
pub struct TextStyles {
    pub body: ParagraphStyle,
    pub hero_title: ParagraphStyle,
    pub hero_subtitle: ParagraphStyle,
    pub quote_number: ParagraphStyle,
    pub section_title: ParagraphStyle,
    pub tenant_name: ParagraphStyle,
    pub meta: ParagraphStyle,
    pub label: ParagraphStyle,
    pub note: ParagraphStyle,
    pub footer: ParagraphStyle,
    pub cell: ParagraphStyle,
    pub cell_small: ParagraphStyle,
    pub table_header: ParagraphStyle,
}

impl TextStyles {
    pub fn build(palette: &Palette, fonts: &FontConfig, spacing: &SpacingConfig) -> Self {
        let sizes = &fonts.sizes;
        let leading = |size: f32| (size * spacing.line_height).round();

        Self {
            body: ParagraphStyle::new(
                FontFamily::Helvetica,
                sizes.body,
                17.0,
                palette.text_body,
            )
            .spaced(0.0, 6.0),
            hero_title: ParagraphStyle::new(
                FontFamily::HelveticaBold,
                sizes.title,
                44.0,
                palette.text,
            )
            .aligned(TextAlign::Center),
            hero_subtitle: ParagraphStyle::new(
                FontFamily::Helvetica,
                16.0,
                22.0,
                palette.text_muted,
            )
            .aligned(TextAlign::Center),
            quote_number: ParagraphStyle::new(
                FontFamily::HelveticaBold,
                14.0,
                18.0,
                palette.primary_light,
            )
            .aligned(TextAlign::Center),
            section_title: ParagraphStyle::new(
                FontFamily::HelveticaBold,
                sizes.heading,
                26.0,
                palette.text,
            )
            .spaced(spacing.section_gap, 12.0),
            tenant_name: ParagraphStyle::new(
                FontFamily::HelveticaBold,
                sizes.body,
                leading(sizes.body),
                palette.text_muted,
            )
            .aligned(TextAlign::Center),
            meta: ParagraphStyle::new(
                FontFamily::Helvetica,
                sizes.small,
                12.0,
                palette.text_dim,
            )
            .aligned(TextAlign::Center),
            label: ParagraphStyle::new(
                FontFamily::Helvetica,
                sizes.small,
                12.0,
                palette.text_dim,
            ),
            note: ParagraphStyle::new(
                FontFamily::HelveticaOblique,
                sizes.small,
                13.0,
                palette.text_dim,
            )
            .spaced(0.0, 8.0),
            footer: ParagraphStyle::new(
                FontFamily::Helvetica,
                8.0,
                11.0,
                palette.text_dim,
            )
            .aligned(TextAlign::Center),
            cell: ParagraphStyle::new(
                FontFamily::Helvetica,
                sizes.small,
                12.0,
                palette.text_body,
            ),
            cell_small: ParagraphStyle::new(
                FontFamily::Helvetica,
                8.0,
                10.0,
                palette.text_dim,
            ),
            table_header: ParagraphStyle::new(
                FontFamily::HelveticaBold,
                10.0,
                13.0,
                palette.text,
            )
            .aligned(TextAlign::Center),
        }
    }
}
