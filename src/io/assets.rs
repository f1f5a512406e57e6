//! Frame asset sets: the eight tiles (four corners, four edges) drawn around
//! every card. A set is loaded once at startup and shared read-only by all jobs.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{debug, info};

use crate::core::params::LayoutConfig;
use crate::error::{Error, Result};
use crate::types::FramePiece;

#[derive(Debug, Clone)]
pub struct FrameAssetSet {
    name: String,
    top: RgbaImage,
    right: RgbaImage,
    bottom: RgbaImage,
    left: RgbaImage,
    top_left: RgbaImage,
    top_right: RgbaImage,
    bottom_left: RgbaImage,
    bottom_right: RgbaImage,
}

impl FrameAssetSet {
    /// Load `<root>/<set>/<piece>.png` for every piece.
    pub fn load(root: &Path, set: &str, layout: &LayoutConfig) -> Result<Self> {
        let dir = root.join(set);
        info!("Loading frame set '{}' from {:?}", set, dir);
        Self::from_fn(set, layout, |piece| load_piece(&piece_path(&dir, piece), piece))
    }

    /// Build a set from a tile provider, validating every tile against `layout`.
    pub fn from_fn<F>(name: &str, layout: &LayoutConfig, mut tile: F) -> Result<Self>
    where
        F: FnMut(FramePiece) -> Result<RgbaImage>,
    {
        let mut get = |piece: FramePiece| -> Result<RgbaImage> {
            let img = tile(piece).map_err(|e| match e {
                err @ Error::AssetLoad { .. } => err,
                other => asset_error(piece, other),
            })?;
            validate_piece(piece, &img, layout)?;
            debug!("Frame piece '{}' is {}x{}", piece, img.width(), img.height());
            Ok(img)
        };

        Ok(Self {
            name: name.to_string(),
            top: get(FramePiece::Top)?,
            right: get(FramePiece::Right)?,
            bottom: get(FramePiece::Bottom)?,
            left: get(FramePiece::Left)?,
            top_left: get(FramePiece::TopLeft)?,
            top_right: get(FramePiece::TopRight)?,
            bottom_left: get(FramePiece::BottomLeft)?,
            bottom_right: get(FramePiece::BottomRight)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn piece(&self, piece: FramePiece) -> &RgbaImage {
        match piece {
            FramePiece::Top => &self.top,
            FramePiece::Right => &self.right,
            FramePiece::Bottom => &self.bottom,
            FramePiece::Left => &self.left,
            FramePiece::TopLeft => &self.top_left,
            FramePiece::TopRight => &self.top_right,
            FramePiece::BottomLeft => &self.bottom_left,
            FramePiece::BottomRight => &self.bottom_right,
        }
    }
}

pub fn piece_path(dir: &Path, piece: FramePiece) -> PathBuf {
    dir.join(format!("{}.png", piece.file_stem()))
}

fn load_piece(path: &Path, piece: FramePiece) -> Result<RgbaImage> {
    if !path.is_file() {
        return Err(asset_error(piece, format!("missing file {:?}", path)));
    }
    let img = image::open(path).map_err(|e| asset_error(piece, e))?;
    Ok(img.to_rgba8())
}

fn validate_piece(piece: FramePiece, img: &RgbaImage, layout: &LayoutConfig) -> Result<()> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(asset_error(piece, "tile is empty"));
    }

    let fits = match piece {
        _ if piece.is_corner() => w == layout.frame_width && h == layout.frame_height,
        FramePiece::Left | FramePiece::Right => w == layout.frame_width,
        // top/bottom tiles sit inside the corner rows
        _ => h <= layout.frame_height,
    };

    if fits {
        Ok(())
    } else {
        Err(asset_error(
            piece,
            format!(
                "unexpected size {}x{} for frame {}x{}",
                w, h, layout.frame_width, layout.frame_height
            ),
        ))
    }
}

fn asset_error<E: std::fmt::Display>(piece: FramePiece, reason: E) -> Error {
    Error::AssetLoad {
        piece: piece.to_string(),
        reason: reason.to_string(),
    }
}
