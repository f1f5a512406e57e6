use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{HexColor, Margins};

/// Background colour of the catalog screenshots.
pub const BACKGROUND_COLOR: HexColor = HexColor::rgb(0x2a, 0x19, 0x08);

/// Extra space added around the trimmed card content.
pub const IMAGE_PADDING: u32 = 20;

/// Width of the frame corners and of the left/right segments.
pub const FRAME_WIDTH: u32 = 25;

/// Height of the frame corners.
pub const FRAME_HEIGHT: u32 = 37;

/// Space the frame art covers on each side of the padded content.
pub const FRAME_OPAQUE: Margins = Margins {
    top: 14,
    right: 9,
    bottom: 27,
    left: 9,
};

/// Per-channel tolerance used when telling background from content.
pub const TRIM_THRESHOLD: u8 = 1;

/// Layout constants for framing, suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub image_padding: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_opaque: Margins,
    pub background: HexColor,
    pub trim_threshold: u8,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            image_padding: IMAGE_PADDING,
            frame_width: FRAME_WIDTH,
            frame_height: FRAME_HEIGHT,
            frame_opaque: FRAME_OPAQUE,
            background: BACKGROUND_COLOR,
            trim_threshold: TRIM_THRESHOLD,
        }
    }
}

impl LayoutConfig {
    /// Read a JSON layout; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: LayoutConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_width == 0 {
            return Err(Error::InvalidArgument {
                arg: "frame_width",
                value: self.frame_width.to_string(),
            });
        }
        if self.frame_height == 0 {
            return Err(Error::InvalidArgument {
                arg: "frame_height",
                value: self.frame_height.to_string(),
            });
        }
        Ok(())
    }

    /// Smallest extended canvas the frame can be laid onto: edge spans are
    /// non-negative and neither pair of corners overlaps.
    pub fn min_canvas(&self) -> (u32, u32) {
        let fw = self.frame_width;
        let fh = self.frame_height;
        (
            fw.saturating_mul(2),
            fw.saturating_add(fh).max(fh.saturating_mul(2)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r##"{ "image_padding": 8, "background": "#ffffff" }"##).unwrap();

        let config = LayoutConfig::from_json_file(&path).unwrap();
        assert_eq!(config.image_padding, 8);
        assert_eq!(config.background, HexColor::rgb(255, 255, 255));
        assert_eq!(config.frame_opaque, FRAME_OPAQUE);
        assert_eq!(config.frame_width, FRAME_WIDTH);
    }

    #[test]
    fn zero_frame_width_is_rejected() {
        let config = LayoutConfig {
            frame_width: 0,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidArgument { arg: "frame_width", .. })
        ));
    }

    #[test]
    fn min_canvas_keeps_corners_apart() {
        assert_eq!(LayoutConfig::default().min_canvas(), (50, 74));

        // wide corners: the edge span bound dominates
        let squat = LayoutConfig {
            frame_width: 40,
            frame_height: 10,
            ..LayoutConfig::default()
        };
        assert_eq!(squat.min_canvas(), (80, 50));
    }

    #[test]
    fn oversized_frame_saturates_instead_of_overflowing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{ "frame_width": 4294967295, "frame_height": 4294967295 }"#)
            .unwrap();

        let config = LayoutConfig::from_json_file(&path).unwrap();
        assert_eq!(config.min_canvas(), (u32::MAX, u32::MAX));
    }

    #[test]
    fn serializes_background_as_hex() {
        let json = serde_json::to_string(&LayoutConfig::default()).unwrap();
        assert!(json.contains("\"#2a1908\""));
    }
}
