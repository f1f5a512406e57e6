use image::RgbaImage;
use image::imageops;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::RawImage;

/// Drop the bottom pixel row of a capture.
///
/// Screenshots occasionally carry one stray row at the bottom edge that is not
/// background, which would keep the trimmer from isolating the card.
pub fn clean_bottom_edge(raw: &RawImage) -> Result<RgbaImage> {
    if raw.height <= 1 {
        return Err(Error::invalid_image(format!(
            "height {} leaves nothing after removing the bottom row",
            raw.height
        )));
    }

    let rgba = raw.to_rgba()?;
    let (width, height) = rgba.dimensions();
    debug!("Cleaning bottom edge: {}x{} -> {}x{}", width, height, width, height - 1);

    Ok(imageops::crop_imm(&rgba, 0, 0, width, height - 1).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn removes_exactly_one_row() {
        let mut img = RgbaImage::from_pixel(4, 3, Rgba([1, 1, 1, 255]));
        img.put_pixel(0, 2, Rgba([200, 0, 0, 255]));
        let cleaned = clean_bottom_edge(&RawImage::from(img.clone())).unwrap();

        assert_eq!(cleaned.dimensions(), (4, 2));
        assert_eq!(cleaned.get_pixel(0, 0), img.get_pixel(0, 0));
        assert!(cleaned.pixels().all(|p| *p == Rgba([1, 1, 1, 255])));
    }

    #[test]
    fn single_row_is_invalid() {
        let raw = RawImage::from(RgbaImage::new(5, 1));
        assert!(matches!(
            clean_bottom_edge(&raw),
            Err(Error::InvalidImage { .. })
        ));
    }

    #[test]
    fn malformed_buffer_is_invalid() {
        let raw = RawImage::new(5, 5, 4, vec![0; 7]);
        assert!(matches!(
            clean_bottom_edge(&raw),
            Err(Error::InvalidImage { .. })
        ));
    }
}
