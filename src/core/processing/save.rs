use tracing::info;

use crate::core::processing::pipeline::{CompositeRequest, composite_to_png};
use crate::error::Result;
use crate::io::sink::Sink;

/// Run the whole pipeline for one capture and hand the PNG to `sink` under `name`.
pub fn composite_and_store(name: &str, request: &CompositeRequest<'_>, sink: &dyn Sink) -> Result<()> {
    let png = composite_to_png(request)?;
    sink.store(name, &png)?;
    info!("composite_and_store: '{}' saved ({} bytes)", name, png.len());
    Ok(())
}
