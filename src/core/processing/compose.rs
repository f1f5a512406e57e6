use image::{RgbaImage, imageops};
use tracing::debug;

use crate::core::params::LayoutConfig;
use crate::core::processing::rescale::{fit_left_right, fit_top_bottom};
use crate::error::{Error, Result};
use crate::io::assets::FrameAssetSet;
use crate::types::FramePiece;

/// Where a tile lands on the canvas, in pixels from the top-left corner.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Placement {
    pub piece: FramePiece,
    pub x: u32,
    pub y: u32,
}

/// Reject canvases on which the corners would overlap or leave a negative span
/// for the edges.
pub fn check_frame_fits(width: u32, height: u32, layout: &LayoutConfig) -> Result<()> {
    let (min_width, min_height) = layout.min_canvas();
    if width < min_width || height < min_height {
        return Err(Error::FrameTooLargeForImage {
            width,
            height,
            min_width,
            min_height,
        });
    }
    Ok(())
}

/// Layer order and positions for a `width` x `height` canvas: the four edges
/// first, corners last so they sit on top.
pub fn frame_layout(width: u32, height: u32, layout: &LayoutConfig) -> [Placement; 8] {
    let fw = layout.frame_width;
    let fh = layout.frame_height;
    let right = width.saturating_sub(fw);
    let bottom = height.saturating_sub(fh);

    let at = |piece, x, y| Placement { piece, x, y };
    [
        at(FramePiece::Top, fw, 0),
        at(FramePiece::Bottom, fw, bottom),
        at(FramePiece::Left, 0, fw),
        at(FramePiece::Right, right, fw),
        at(FramePiece::TopLeft, 0, 0),
        at(FramePiece::TopRight, right, 0),
        at(FramePiece::BottomRight, right, bottom),
        at(FramePiece::BottomLeft, 0, bottom),
    ]
}

/// Lay the frame over an extended canvas.
pub fn compose_frame(
    canvas: &RgbaImage,
    frame: &FrameAssetSet,
    layout: &LayoutConfig,
) -> Result<RgbaImage> {
    let (width, height) = canvas.dimensions();
    check_frame_fits(width, height, layout)?;

    let span_x = width
        .saturating_sub(layout.frame_width)
        .saturating_sub(layout.frame_width);
    let span_y = height
        .saturating_sub(layout.frame_width)
        .saturating_sub(layout.frame_height);
    debug!(
        "Framing {}x{} canvas with '{}' (edge spans {}x{})",
        width,
        height,
        frame.name(),
        span_x,
        span_y
    );

    let mut out = canvas.clone();
    for placement in frame_layout(width, height, layout) {
        let tile = frame.piece(placement.piece);
        let fitted;
        let layer = match placement.piece {
            FramePiece::Top | FramePiece::Bottom => {
                fitted = fit_top_bottom(tile, span_x);
                &fitted
            }
            FramePiece::Left | FramePiece::Right => {
                fitted = fit_left_right(tile, height, span_y, layout.frame_width);
                &fitted
            }
            _ => tile,
        };
        imageops::overlay(
            &mut out,
            layer,
            i64::from(placement.x),
            i64::from(placement.y),
        );
    }

    Ok(out)
}
