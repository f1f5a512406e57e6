use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::types::Margins;

/// Fully transparent fill used around the content for the frame area.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Grow `src` by `margins`, filling the new area with `fill`.
pub fn extend_canvas(src: &RgbaImage, margins: Margins, fill: Rgba<u8>) -> RgbaImage {
    let (cols, rows) = src.dimensions();
    let out_cols = cols + margins.horizontal();
    let out_rows = rows + margins.vertical();

    debug!(
        "Extending canvas: {}x{} -> {}x{} (top={}, right={}, bottom={}, left={})",
        cols, rows, out_cols, out_rows, margins.top, margins.right, margins.bottom, margins.left
    );

    let mut padded = RgbaImage::from_pixel(out_cols, out_rows, fill);

    // Copy per row using slice copies to minimize per-pixel indexing
    let src_stride = cols as usize * 4;
    let dst_stride = out_cols as usize * 4;
    let src_data = src.as_raw();
    let dst_data: &mut [u8] = &mut padded;
    for row in 0..rows as usize {
        let src_offset = row * src_stride;
        let dst_offset = (row + margins.top as usize) * dst_stride + margins.left as usize * 4;
        dst_data[dst_offset..dst_offset + src_stride]
            .copy_from_slice(&src_data[src_offset..src_offset + src_stride]);
    }

    padded
}

/// Canvas extender stage: reserve the frame-opaque margins with a transparent fill.
pub fn extend_for_frame(src: &RgbaImage, frame_opaque: Margins) -> RgbaImage {
    extend_canvas(src, frame_opaque, TRANSPARENT)
}
