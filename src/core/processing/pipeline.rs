use image::RgbaImage;
use tracing::debug;

use crate::core::params::LayoutConfig;
use crate::core::processing::clean::clean_bottom_edge;
use crate::core::processing::compose::compose_frame;
use crate::core::processing::padding::extend_for_frame;
use crate::core::processing::trim::trim_and_pad;
use crate::error::Result;
use crate::io::assets::FrameAssetSet;
use crate::io::writers::png::encode_png;
use crate::types::RawImage;

/// Everything needed to frame one capture.
#[derive(Debug, Clone, Copy)]
pub struct CompositeRequest<'a> {
    pub raw: &'a RawImage,
    pub frame: &'a FrameAssetSet,
    pub layout: &'a LayoutConfig,
}

impl<'a> CompositeRequest<'a> {
    pub fn new(raw: &'a RawImage, frame: &'a FrameAssetSet, layout: &'a LayoutConfig) -> Self {
        Self { raw, frame, layout }
    }
}

/// Clean, trim, extend and frame a capture.
pub fn composite(request: &CompositeRequest<'_>) -> Result<RgbaImage> {
    let layout = request.layout;

    let cleaned = clean_bottom_edge(request.raw)?;
    let trimmed = trim_and_pad(
        &cleaned,
        layout.background.0,
        layout.trim_threshold,
        layout.image_padding,
    )?;
    let extended = extend_for_frame(&trimmed, layout.frame_opaque);

    let framed = compose_frame(&extended, request.frame, layout)?;
    debug!(
        "Composited {}x{} capture into {}x{} card",
        request.raw.width,
        request.raw.height,
        framed.width(),
        framed.height()
    );
    Ok(framed)
}

/// Full pipeline down to PNG bytes.
pub fn composite_to_png(request: &CompositeRequest<'_>) -> Result<Vec<u8>> {
    encode_png(&composite(request)?)
}
