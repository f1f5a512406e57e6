//! Shared types used across cardframe.
//! Includes the raw capture buffer (`RawImage`), hex colours (`HexColor`),
//! directional `Margins`, the eight `FramePiece` names and batch `Job`s.
use std::fmt;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Raw pixel buffer as handed over by a capture source.
///
/// Samples are interleaved 8-bit; `channels` is 3 (RGB) or 4 (RGBA). The buffer is
/// never mutated by the pipeline, every stage produces a fresh image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub data: Vec<u8>,
}

impl RawImage {
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Decode an encoded image (PNG) into an RGBA raw buffer.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes).map_err(Error::invalid_image)?;
        Ok(Self::from(decoded.to_rgba8()))
    }

    /// Validate the metadata against the buffer and expand it to RGBA.
    pub fn to_rgba(&self) -> Result<RgbaImage> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::invalid_image(format!(
                "zero-sized image {}x{}",
                self.width, self.height
            )));
        }

        let expected = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|pixels| pixels.checked_mul(self.channels as usize))
            .ok_or_else(|| Error::invalid_image("image dimensions overflow"))?;

        if self.data.len() != expected {
            return Err(Error::invalid_image(format!(
                "buffer holds {} bytes, {}x{}x{} needs {}",
                self.data.len(),
                self.width,
                self.height,
                self.channels,
                expected
            )));
        }

        match self.channels {
            4 => RgbaImage::from_raw(self.width, self.height, self.data.clone())
                .ok_or_else(|| Error::invalid_image("RGBA buffer rejected")),
            3 => {
                let mut rgba = Vec::with_capacity(expected / 3 * 4);
                for px in self.data.chunks_exact(3) {
                    rgba.extend_from_slice(&[px[0], px[1], px[2], u8::MAX]);
                }
                RgbaImage::from_raw(self.width, self.height, rgba)
                    .ok_or_else(|| Error::invalid_image("RGB buffer rejected"))
            }
            other => Err(Error::invalid_image(format!(
                "unsupported channel count {}",
                other
            ))),
        }
    }
}

impl From<RgbaImage> for RawImage {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(width, height, 4, img.into_raw())
    }
}

/// Colour written as `#rrggbb` or `#rrggbbaa` in config files.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub Rgba<u8>);

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Rgba([r, g, b, u8::MAX]))
    }

    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument {
            arg: "color",
            value: s.to_string(),
        };

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(invalid());
        }

        let mut channels = [u8::MAX; 4];
        for (i, slot) in channels.iter_mut().enumerate().take(hex.len() / 2) {
            *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Self(Rgba(channels)))
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0.0;
        if a == u8::MAX {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

/// Per-side pixel amounts.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    pub const fn uniform(amount: u32) -> Self {
        Self {
            top: amount,
            right: amount,
            bottom: amount,
            left: amount,
        }
    }

    pub const fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

/// The eight tiles of a frame set, named after their asset files.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FramePiece {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl FramePiece {
    pub const ALL: [FramePiece; 8] = [
        FramePiece::Top,
        FramePiece::Right,
        FramePiece::Bottom,
        FramePiece::Left,
        FramePiece::TopLeft,
        FramePiece::TopRight,
        FramePiece::BottomLeft,
        FramePiece::BottomRight,
    ];

    pub const fn file_stem(self) -> &'static str {
        match self {
            FramePiece::Top => "top",
            FramePiece::Right => "right",
            FramePiece::Bottom => "bottom",
            FramePiece::Left => "left",
            FramePiece::TopLeft => "top-left",
            FramePiece::TopRight => "top-right",
            FramePiece::BottomLeft => "bottom-left",
            FramePiece::BottomRight => "bottom-right",
        }
    }

    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            FramePiece::TopLeft
                | FramePiece::TopRight
                | FramePiece::BottomLeft
                | FramePiece::BottomRight
        )
    }
}

impl fmt::Display for FramePiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// One unit of batch work: an item inside a collection (e.g. a day of the catalog).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Job {
    pub collection: String,
    pub item: String,
}

impl Job {
    pub fn new(collection: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            item: item.into(),
        }
    }

    /// Name of the stored artifact. Items are flat, so equal names overwrite.
    pub fn output_name(&self) -> &str {
        &self.item
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_background_hex() {
        let c = HexColor::parse("#2a1908").unwrap();
        assert_eq!(c.0, Rgba([0x2a, 0x19, 0x08, 0xff]));
        assert_eq!(c.to_string(), "#2a1908");
    }

    #[test]
    fn parses_hex_with_alpha() {
        let c = HexColor::parse("#00000080").unwrap();
        assert_eq!(c.0, Rgba([0, 0, 0, 0x80]));
        assert_eq!(c.to_string(), "#00000080");
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(HexColor::parse("2a1908").is_err());
        assert!(HexColor::parse("#2a19").is_err());
        assert!(HexColor::parse("#zz1908").is_err());
    }

    #[test]
    fn rgb_raw_expands_to_opaque_rgba() {
        let raw = RawImage::new(2, 1, 3, vec![1, 2, 3, 4, 5, 6]);
        let rgba = raw.to_rgba().unwrap();
        assert_eq!(rgba.get_pixel(1, 0), &Rgba([4, 5, 6, 255]));
    }

    #[test]
    fn short_buffer_is_invalid() {
        let raw = RawImage::new(4, 4, 4, vec![0; 10]);
        assert!(matches!(raw.to_rgba(), Err(Error::InvalidImage { .. })));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            RawImage::from_encoded(b"not an image"),
            Err(Error::InvalidImage { .. })
        ));
    }
}
