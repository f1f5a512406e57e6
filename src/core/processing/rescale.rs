//! Fitting of frame edge tiles to an exact span.
//!
//! Edge tiles are pixel art, so they are never resampled: a tile that is too long
//! is cropped around its centre, a tile that is too short is extended by repeating
//! its outermost column (or row) so the texture continues into the new space.
use image::{RgbaImage, imageops};
use tracing::debug;

/// Long axis of an edge tile.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Axis {
    /// Top and bottom tiles run along x.
    Horizontal,
    /// Left and right tiles run along y.
    Vertical,
}

impl Axis {
    pub fn span(self, img: &RgbaImage) -> u32 {
        match self {
            Axis::Horizontal => img.width(),
            Axis::Vertical => img.height(),
        }
    }
}

/// Pixels skipped at the start when cropping `tile_span` down to `target_span`.
pub fn crop_offset(tile_span: u32, target_span: u32) -> u32 {
    tile_span.saturating_sub(target_span).div_ceil(2)
}

/// Leading extension for top/bottom tiles: half the missing span, rounded up.
pub fn centered_lead(tile_span: u32, target_span: u32) -> u32 {
    target_span.saturating_sub(tile_span).div_ceil(2)
}

/// Leading (top) extension for left/right tiles.
///
/// The centred amount is measured against the whole canvas height and the top
/// corner footprint is taken off it; the bottom side absorbs whatever is left of
/// `target_span`. Clamped so the result stays inside the missing span.
pub fn side_lead(canvas_height: u32, tile_span: u32, target_span: u32, frame_width: u32) -> u32 {
    let missing = target_span.saturating_sub(tile_span);
    let centered = i64::from(canvas_height.saturating_sub(tile_span).div_ceil(2));
    (centered - i64::from(frame_width)).clamp(0, i64::from(missing)) as u32
}

/// Fit `tile` to exactly `target_span` pixels along `axis`.
///
/// `lead` only matters when the tile is extended; it is the number of replicated
/// pixels placed before the tile and is capped at the missing span.
pub fn fit_tile(tile: &RgbaImage, axis: Axis, target_span: u32, lead: u32) -> RgbaImage {
    let tile_span = axis.span(tile);
    let (tile_w, tile_h) = tile.dimensions();

    if tile_span > target_span {
        debug!("Shrinking frame border to fit {}", target_span);
        let offset = crop_offset(tile_span, target_span);
        return match axis {
            Axis::Horizontal => imageops::crop_imm(tile, offset, 0, target_span, tile_h).to_image(),
            Axis::Vertical => imageops::crop_imm(tile, 0, offset, tile_w, target_span).to_image(),
        };
    }

    debug!("Expanding frame border to fill {}", target_span);
    let (out_w, out_h) = match axis {
        Axis::Horizontal => (target_span, tile_h),
        Axis::Vertical => (tile_w, target_span),
    };
    if tile_span == 0 {
        return RgbaImage::new(out_w, out_h);
    }

    let lead = lead.min(target_span - tile_span);
    let last = tile_span - 1;
    RgbaImage::from_fn(out_w, out_h, |x, y| match axis {
        Axis::Horizontal => *tile.get_pixel(x.saturating_sub(lead).min(last), y),
        Axis::Vertical => *tile.get_pixel(x, y.saturating_sub(lead).min(last)),
    })
}

/// Fit a top or bottom tile to the width between the two corners.
pub fn fit_top_bottom(tile: &RgbaImage, target_width: u32) -> RgbaImage {
    let lead = centered_lead(tile.width(), target_width);
    fit_tile(tile, Axis::Horizontal, target_width, lead)
}

/// Fit a left or right tile to the height between the top and bottom corners.
pub fn fit_left_right(
    tile: &RgbaImage,
    canvas_height: u32,
    target_height: u32,
    frame_width: u32,
) -> RgbaImage {
    let lead = side_lead(canvas_height, tile.height(), target_height, frame_width);
    fit_tile(tile, Axis::Vertical, target_height, lead)
}
