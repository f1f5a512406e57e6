// Shared fixtures for integration tests
#![allow(dead_code)]

use std::path::Path;

use cardframe::{FrameAssetSet, FramePiece, LayoutConfig, RawImage};
use image::{Rgba, RgbaImage};

pub const BG: Rgba<u8> = Rgba([0x2a, 0x19, 0x08, 0xff]);

/// Opaque silver-ish tile sized like the real assets: 25x37 corners,
/// 411-wide top/bottom and 253-tall sides.
pub fn silver_tile(piece: FramePiece, layout: &LayoutConfig) -> RgbaImage {
    let shade = 180 + piece.file_stem().len() as u8;
    let (w, h) = match piece {
        _ if piece.is_corner() => (layout.frame_width, layout.frame_height),
        FramePiece::Left | FramePiece::Right => (layout.frame_width, 253),
        _ => (411, layout.frame_height),
    };
    RgbaImage::from_fn(w, h, |x, y| {
        Rgba([shade, shade.wrapping_add((x % 7) as u8), shade.wrapping_add((y % 5) as u8), 255])
    })
}

pub fn silver_set(layout: &LayoutConfig) -> FrameAssetSet {
    FrameAssetSet::from_fn("silver", layout, |piece| Ok(silver_tile(piece, layout))).unwrap()
}

pub fn write_silver_set(root: &Path, layout: &LayoutConfig) {
    let dir = root.join("silver");
    std::fs::create_dir_all(&dir).unwrap();
    for piece in FramePiece::ALL {
        silver_tile(piece, layout)
            .save(dir.join(format!("{}.png", piece.file_stem())))
            .unwrap();
    }
}

/// `width` x `height` screenshot with a `border`-pixel background margin around
/// a textured card.
pub fn screenshot(width: u32, height: u32, border: u32) -> RawImage {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let inside = x >= border && x < width - border && y >= border && y < height - border;
        if inside {
            Rgba([200, (x % 256) as u8, (y % 256) as u8, 255])
        } else {
            BG
        }
    });
    RawImage::from(img)
}
