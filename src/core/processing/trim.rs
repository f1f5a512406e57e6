use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::core::processing::padding::extend_canvas;
use crate::error::{Error, Result};
use crate::types::Margins;

/// Bounding box of the non-background pixels of an image.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ContentBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A pixel counts as background when every channel is within `threshold` of
/// `background`. An absolute per-channel test keeps thin anti-aliased line art
/// on the content side.
#[inline]
pub fn is_background(px: &Rgba<u8>, background: Rgba<u8>, threshold: u8) -> bool {
    px.0
        .iter()
        .zip(background.0.iter())
        .all(|(&a, &b)| a.abs_diff(b) <= threshold)
}

pub fn content_bounds(img: &RgbaImage, background: Rgba<u8>, threshold: u8) -> Option<ContentBounds> {
    let (mut min_x, mut min_y) = (u32::MAX, u32::MAX);
    let (mut max_x, mut max_y) = (0u32, 0u32);
    let mut found = false;

    for (x, y, px) in img.enumerate_pixels() {
        if is_background(px, background, threshold) {
            continue;
        }
        found = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    found.then(|| ContentBounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Trim the uniform background border, then pad `padding` background pixels back
/// on every side.
pub fn trim_and_pad(
    img: &RgbaImage,
    background: Rgba<u8>,
    threshold: u8,
    padding: u32,
) -> Result<RgbaImage> {
    let bounds = content_bounds(img, background, threshold).ok_or(Error::EmptyContent)?;

    debug!(
        "Trimmed content: {}x{} at ({}, {}) from {}x{}",
        bounds.width,
        bounds.height,
        bounds.x,
        bounds.y,
        img.width(),
        img.height()
    );

    let content = imageops::crop_imm(img, bounds.x, bounds.y, bounds.width, bounds.height).to_image();
    Ok(extend_canvas(&content, Margins::uniform(padding), background))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BG: Rgba<u8> = Rgba([0x2a, 0x19, 0x08, 0xff]);
    const FG: Rgba<u8> = Rgba([0xee, 0xdd, 0xcc, 0xff]);

    fn card(width: u32, height: u32, x: u32, y: u32, w: u32, h: u32) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(width, height, BG);
        for yy in y..y + h {
            for xx in x..x + w {
                img.put_pixel(xx, yy, FG);
            }
        }
        img
    }

    #[test]
    fn finds_content_box() {
        let img = card(40, 30, 5, 7, 10, 4);
        assert_eq!(
            content_bounds(&img, BG, 1),
            Some(ContentBounds {
                x: 5,
                y: 7,
                width: 10,
                height: 4
            })
        );
    }

    #[test]
    fn near_background_counts_as_background() {
        let mut img = RgbaImage::from_pixel(6, 6, BG);
        img.put_pixel(2, 2, Rgba([0x2b, 0x18, 0x08, 0xff]));
        assert_eq!(content_bounds(&img, BG, 1), None);
        assert!(content_bounds(&img, BG, 0).is_some());
    }

    #[test]
    fn faint_line_art_survives() {
        let mut img = RgbaImage::from_pixel(10, 10, BG);
        img.put_pixel(1, 8, Rgba([0x2d, 0x19, 0x08, 0xff]));
        img.put_pixel(7, 2, Rgba([0x2d, 0x19, 0x08, 0xff]));
        let bounds = content_bounds(&img, BG, 1).unwrap();
        assert_eq!((bounds.x, bounds.y, bounds.width, bounds.height), (1, 2, 7, 7));
    }

    #[test]
    fn pads_with_background() {
        let out = trim_and_pad(&card(50, 40, 10, 10, 8, 6), BG, 1, 3).unwrap();
        assert_eq!(out.dimensions(), (14, 12));
        assert_eq!(out.get_pixel(0, 0), &BG);
        assert_eq!(out.get_pixel(3, 3), &FG);
        assert_eq!(out.get_pixel(10, 8), &FG);
        assert_eq!(out.get_pixel(11, 9), &BG);
    }

    #[test]
    fn all_background_is_empty_content() {
        let img = RgbaImage::from_pixel(8, 8, BG);
        assert!(matches!(trim_and_pad(&img, BG, 1, 20), Err(Error::EmptyContent)));
    }

    proptest! {
        #[test]
        fn padding_is_exact(
            (width, height, x, y, w, h) in (2u32..40, 2u32..40).prop_flat_map(|(width, height)| {
                (Just(width), Just(height), 0..width, 0..height)
            }).prop_flat_map(|(width, height, x, y)| {
                (Just(width), Just(height), Just(x), Just(y), 1..=width - x, 1..=height - y)
            }),
            padding in 0u32..25,
        ) {
            let out = trim_and_pad(&card(width, height, x, y, w, h), BG, 1, padding).unwrap();
            prop_assert_eq!(out.dimensions(), (w + 2 * padding, h + 2 * padding));
        }

        #[test]
        fn trimming_twice_keeps_content_size(
            (width, height, x, y, w, h) in (2u32..40, 2u32..40).prop_flat_map(|(width, height)| {
                (Just(width), Just(height), 0..width, 0..height)
            }).prop_flat_map(|(width, height, x, y)| {
                (Just(width), Just(height), Just(x), Just(y), 1..=width - x, 1..=height - y)
            }),
            padding in 0u32..10,
        ) {
            let once = trim_and_pad(&card(width, height, x, y, w, h), BG, 1, padding).unwrap();
            let twice = trim_and_pad(&once, BG, 1, padding).unwrap();
            prop_assert_eq!(once.dimensions(), twice.dimensions());

            let a = content_bounds(&once, BG, 1).unwrap();
            let b = content_bounds(&twice, BG, 1).unwrap();
            prop_assert_eq!((a.width, a.height), (b.width, b.height));
        }
    }
}
