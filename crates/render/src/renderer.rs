//! Writes laid-out pages into a PDF document via `lopdf`.
//!
//! Text uses the base-14 Helvetica family with WinAnsi encoding, so no
//! font files need to be embedded. JPEG images pass through untouched as
//! DCTDecode image XObjects.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

use quotepress_idf::ImageData;
use quotepress_style::FontFamily;
use quotepress_types::Color;

use crate::error::RenderError;
use crate::layout::{Page, PageLayout, Positioned, Primitive, approx_text_width};

/// Fraction of the font size between the top of a laid-out text line and
/// its baseline.
const BASELINE_RATIO: f32 = 0.8;

const PLACEHOLDER_GRAY: Color = Color::rgb(148, 163, 184);

/// Per-page chrome drawn underneath the flowed content: backgrounds,
/// headers, footers. Page numbers are 1-based.
pub trait PageDecorator {
    fn decorate(&self, page_number: usize, layout: &PageLayout) -> Vec<Positioned>;
}

#[derive(Debug, Clone, Default)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
}

pub struct PdfRenderer<'a> {
    layout: PageLayout,
    metadata: DocumentMetadata,
    decorator: Option<&'a dyn PageDecorator>,
}

impl<'a> PdfRenderer<'a> {
    pub fn new(layout: PageLayout, metadata: DocumentMetadata) -> Self {
        Self {
            layout,
            metadata,
            decorator: None,
        }
    }

    pub fn with_decorator(mut self, decorator: &'a dyn PageDecorator) -> Self {
        self.decorator = Some(decorator);
        self
    }

    pub fn render(&self, pages: &[Page]) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for family in FontFamily::all() {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => family.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(family.resource_name(), Object::Reference(font_id));
        }

        // Decorator primitives go first so flowed content paints on top.
        let combined: Vec<Vec<Positioned>> = pages
            .iter()
            .map(|page| {
                let mut items = match self.decorator {
                    Some(decorator) => decorator.decorate(page.number, &self.layout),
                    None => Vec::new(),
                };
                items.extend(page.primitives.iter().cloned());
                items
            })
            .collect();

        let mut xobject_dict = Dictionary::new();
        let mut image_names: Vec<String> = Vec::new();
        for items in &combined {
            for item in items {
                if let Primitive::Image {
                    data:
                        ImageData::Jpeg {
                            data,
                            px_width,
                            px_height,
                        },
                } = &item.primitive
                {
                    let name = format!("Im{}", image_names.len() + 1);
                    let stream = Stream::new(
                        dictionary! {
                            "Type" => "XObject",
                            "Subtype" => "Image",
                            "Width" => *px_width as i64,
                            "Height" => *px_height as i64,
                            "ColorSpace" => "DeviceRGB",
                            "BitsPerComponent" => 8,
                            "Filter" => "DCTDecode",
                        },
                        data.clone(),
                    )
                    .with_compression(false);
                    let stream_id = doc.add_object(stream);
                    xobject_dict.set(name.clone(), Object::Reference(stream_id));
                    image_names.push(name);
                }
            }
        }

        let resources_id = doc.add_object(dictionary! {
            "Font" => Object::Dictionary(font_dict),
            "XObject" => Object::Dictionary(xobject_dict),
        });

        let mut next_image = image_names.into_iter();
        let mut kids: Vec<Object> = Vec::new();
        for items in &combined {
            let mut operations = Vec::new();
            for item in items {
                self.emit(&mut operations, item, &mut next_image);
            }
            let content = Content { operations };
            let encoded = content
                .encode()
                .map_err(|e| RenderError::Pdf(e.to_string()))?;
            let stream_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => Object::Reference(stream_id),
                "Resources" => Object::Reference(resources_id),
                "MediaBox" => vec![
                    Object::Real(0.0),
                    Object::Real(0.0),
                    self.layout.width.into(),
                    self.layout.height.into(),
                ],
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(to_win_ansi(&self.metadata.title)),
            "Author" => Object::string_literal(to_win_ansi(&self.metadata.author)),
            "Producer" => Object::string_literal("quotepress"),
        });
        doc.trailer.set("Info", Object::Reference(info_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }

    fn emit(
        &self,
        ops: &mut Vec<Operation>,
        item: &Positioned,
        next_image: &mut impl Iterator<Item = String>,
    ) {
        let page_h = self.layout.height;
        match &item.primitive {
            Primitive::Rect { fill, stroke } => {
                let y = page_h - item.y - item.height;
                if let Some(color) = fill {
                    let (r, g, b) = color.channels();
                    ops.push(Operation::new(
                        "rg",
                        vec![r.into(), g.into(), b.into()],
                    ));
                }
                if let Some((color, width)) = stroke {
                    let (r, g, b) = color.channels();
                    ops.push(Operation::new(
                        "RG",
                        vec![r.into(), g.into(), b.into()],
                    ));
                    ops.push(Operation::new("w", vec![(*width).into()]));
                }
                ops.push(Operation::new(
                    "re",
                    vec![
                        item.x.into(),
                        y.into(),
                        item.width.into(),
                        item.height.into(),
                    ],
                ));
                let op = match (fill.is_some(), stroke.is_some()) {
                    (true, true) => "B",
                    (true, false) => "f",
                    _ => "S",
                };
                ops.push(Operation::new(op, vec![]));
            }
            Primitive::Line { color, width } => {
                let (r, g, b) = color.channels();
                ops.push(Operation::new(
                    "RG",
                    vec![r.into(), g.into(), b.into()],
                ));
                ops.push(Operation::new("w", vec![(*width).into()]));
                ops.push(Operation::new(
                    "m",
                    vec![item.x.into(), (page_h - item.y).into()],
                ));
                ops.push(Operation::new(
                    "l",
                    vec![
                        (item.x + item.width).into(),
                        (page_h - item.y - item.height).into(),
                    ],
                ));
                ops.push(Operation::new("S", vec![]));
            }
            Primitive::Text { text, style } => {
                let (r, g, b) = style.color.channels();
                let baseline = page_h - item.y - style.size * BASELINE_RATIO;
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new(
                    "Tf",
                    vec![style.font.resource_name().into(), style.size.into()],
                ));
                ops.push(Operation::new(
                    "rg",
                    vec![r.into(), g.into(), b.into()],
                ));
                ops.push(Operation::new(
                    "Td",
                    vec![item.x.into(), baseline.into()],
                ));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(to_win_ansi(text))],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            Primitive::Image { data } => match data {
                ImageData::Jpeg { .. } => {
                    if let Some(name) = next_image.next() {
                        let y = page_h - item.y - item.height;
                        ops.push(Operation::new("q", vec![]));
                        ops.push(Operation::new(
                            "cm",
                            vec![
                                item.width.into(),
                                Object::Real(0.0),
                                Object::Real(0.0),
                                item.height.into(),
                                item.x.into(),
                                y.into(),
                            ],
                        ));
                        ops.push(Operation::new("Do", vec![name.as_str().into()]));
                        ops.push(Operation::new("Q", vec![]));
                    }
                }
                ImageData::Placeholder => self.emit_placeholder(ops, item),
            },
        }
    }

    /// A bordered gray box with a "LOGO" label, drawn when no usable
    /// image bytes are available.
    fn emit_placeholder(&self, ops: &mut Vec<Operation>, item: &Positioned) {
        let page_h = self.layout.height;
        let (r, g, b) = PLACEHOLDER_GRAY.channels();
        let y = page_h - item.y - item.height;
        ops.push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
        ops.push(Operation::new("w", vec![Object::Real(1.0)]));
        ops.push(Operation::new(
            "re",
            vec![
                item.x.into(),
                y.into(),
                item.width.into(),
                item.height.into(),
            ],
        ));
        ops.push(Operation::new("S", vec![]));

        let label = "LOGO";
        let size = 10.0;
        let label_w = approx_text_width(label, size);
        let label_x = item.x + (item.width - label_w) / 2.0;
        let label_y = y + item.height / 2.0 - size * 0.35;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![FontFamily::HelveticaBold.resource_name().into(), size.into()],
        ));
        ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        ops.push(Operation::new("Td", vec![label_x.into(), label_y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(to_win_ansi(label))],
        ));
        ops.push(Operation::new("ET", vec![]));
    }
}

/// Maps a string onto WinAnsi bytes, replacing anything outside Latin-1
/// with a question mark.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 255 { code as u8 } else { b'?' }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotepress_style::ParagraphStyle;

    fn sample_page() -> Page {
        let style = ParagraphStyle::new(
            FontFamily::Helvetica,
            11.0,
            15.4,
            Color::rgb(255, 255, 255),
        );
        Page {
            number: 1,
            primitives: vec![Positioned {
                x: 36.0,
                y: 57.6,
                width: 100.0,
                height: 15.4,
                primitive: Primitive::Text {
                    text: "Hola mundo".into(),
                    style,
                },
            }],
        }
    }

    #[test]
    fn win_ansi_keeps_latin1_and_replaces_the_rest() {
        assert_eq!(to_win_ansi("Cafe"), b"Cafe".to_vec());
        assert_eq!(to_win_ansi("Café"), vec![b'C', b'a', b'f', 0xE9]);
        assert_eq!(to_win_ansi("日本"), vec![b'?', b'?']);
    }

    #[test]
    fn renders_a_loadable_document() {
        let renderer = PdfRenderer::new(
            PageLayout::letter(),
            DocumentMetadata {
                title: "Cotizacion Q-001".into(),
                author: "Acme".into(),
            },
        );
        let bytes = renderer.render(&[sample_page()]).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn decorator_output_precedes_page_content() {
        struct Background;
        impl PageDecorator for Background {
            fn decorate(&self, _page: usize, layout: &PageLayout) -> Vec<Positioned> {
                vec![Positioned {
                    x: 0.0,
                    y: 0.0,
                    width: layout.width,
                    height: layout.height,
                    primitive: Primitive::Rect {
                        fill: Some(Color::rgb(15, 23, 42)),
                        stroke: None,
                    },
                }]
            }
        }
        let background = Background;
        let renderer = PdfRenderer::new(PageLayout::letter(), DocumentMetadata::default())
            .with_decorator(&background);
        let bytes = renderer.render(&[sample_page()]).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = doc.get_pages()[&1];
        let content = doc.get_page_content(page_id).unwrap();
        let ops = Content::decode(&content).unwrap().operations;
        let fill_pos = ops.iter().position(|o| o.operator == "re").unwrap();
        let text_pos = ops.iter().position(|o| o.operator == "BT").unwrap();
        assert!(fill_pos < text_pos);
    }

    #[test]
    fn titles_land_in_the_info_dictionary() {
        let renderer = PdfRenderer::new(
            PageLayout::letter(),
            DocumentMetadata {
                title: "Cotizacion Q-042".into(),
                author: "Ventas SA".into(),
            },
        );
        let bytes = renderer.render(&[sample_page()]).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let info = doc
            .trailer
            .get(b"Info")
            .and_then(|o| o.as_reference())
            .and_then(|id| doc.get_object(id))
            .and_then(|o| o.as_dict())
            .unwrap();
        let title = info.get(b"Title").and_then(|o| o.as_str()).unwrap();
        assert_eq!(title, b"Cotizacion Q-042");
    }
}
