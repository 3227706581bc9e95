//! Logo resource handling.
//!
//! Only JPEG passes through to the document, as its bytes embed directly
//! in a DCTDecode XObject. Anything else degrades to a placeholder box;
//! a missing or unreadable logo must never abort a build.

use std::io::Write;
use std::path::Path;

use quotepress_idf::{HorizontalAlign, ImageData, ImageElement};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct Logo {
    data: ImageData,
}

impl Logo {
    pub fn open(path: &Path) -> Logo {
        match std::fs::read(path) {
            Ok(bytes) => Logo::from_bytes(&bytes),
            Err(e) => {
                log::warn!("logo {} unreadable, using placeholder: {e}", path.display());
                Logo {
                    data: ImageData::Placeholder,
                }
            }
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Logo {
        match jpeg_dimensions(bytes) {
            Some((px_width, px_height)) => Logo {
                data: ImageData::Jpeg {
                    data: bytes.to_vec(),
                    px_width,
                    px_height,
                },
            },
            None => {
                log::warn!("logo is not a baseline JPEG, using placeholder");
                Logo {
                    data: ImageData::Placeholder,
                }
            }
        }
    }

    pub fn placeholder() -> Logo {
        Logo {
            data: ImageData::Placeholder,
        }
    }

    /// Sizes the logo to the given display height, keeping the pixel
    /// aspect ratio. Placeholders come out square.
    pub fn into_element(self, height: f32, align: HorizontalAlign) -> ImageElement {
        let width = match &self.data {
            ImageData::Jpeg {
                px_width,
                px_height,
                ..
            } if *px_height > 0 => height * *px_width as f32 / *px_height as f32,
            _ => height,
        };
        ImageElement {
            data: self.data,
            width,
            height,
            align,
        }
    }
}

/// A logo fetched from elsewhere, parked on disk for the lifetime of one
/// request. The backing temp file is removed on drop.
pub struct TempLogo {
    file: NamedTempFile,
}

impl TempLogo {
    pub fn from_bytes(bytes: &[u8]) -> std::io::Result<TempLogo> {
        let mut file = NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(TempLogo { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn open(&self) -> Logo {
        Logo::open(self.file.path())
    }
}

/// Reads pixel dimensions out of a JPEG's SOF marker. Returns `None` for
/// anything that is not a well-formed JPEG.
fn jpeg_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < 4 || data[0] != 0xFF || data[1] != 0xD8 {
        return None;
    }
    let mut pos = 2;
    while pos + 3 < data.len() {
        if data[pos] != 0xFF {
            return None;
        }
        let marker = data[pos + 1];
        match marker {
            // Fill bytes and standalone markers carry no payload.
            0xFF => {
                pos += 1;
                continue;
            }
            0x01 | 0xD0..=0xD8 => {
                pos += 2;
                continue;
            }
            // SOF markers, except the non-frame ones in the same range.
            0xC0..=0xCF if marker != 0xC4 && marker != 0xC8 && marker != 0xCC => {
                if pos + 9 > data.len() {
                    return None;
                }
                let height = u16::from_be_bytes([data[pos + 5], data[pos + 6]]) as u32;
                let width = u16::from_be_bytes([data[pos + 7], data[pos + 8]]) as u32;
                if width == 0 || height == 0 {
                    return None;
                }
                return Some((width, height));
            }
            _ => {
                let length = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
                if length < 2 {
                    return None;
                }
                pos += 2 + length;
            }
        }
    }
    None
}
