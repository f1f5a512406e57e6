#![doc = r#"
cardframe — turns catalog screenshots into framed card images.

Each capture goes through a fixed pipeline: the stray bottom row is cleaned off,
the uniform background margin is trimmed and replaced by a fixed padding, the
canvas is extended by the frame's opaque margins, and a frame made of eight
tiles (four corners, four edges fitted to the canvas) is laid on top. The
result is encoded as PNG and handed to a sink.

Quick start: frame one file
---------------------------
```rust,no_run
use std::path::Path;
use cardframe::{FrameAssetSet, LayoutConfig, frame_file_to_path};

fn main() -> cardframe::Result<()> {
    let layout = LayoutConfig::default();
    let frame = FrameAssetSet::load(Path::new("images"), "silver", &layout)?;

    frame_file_to_path(
        Path::new("captures/1/Dire Bat.png"),
        Path::new("cards/Dire Bat.png"),
        &frame,
        &layout,
    )
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use cardframe::{LayoutConfig, process_directory_to_path};

fn main() -> cardframe::Result<()> {
    let report = process_directory_to_path(
        Path::new("captures"),
        Path::new("cards"),
        Path::new("images"),
        "silver",
        &LayoutConfig::default(),
        Vec::new(), // all collections
    )?;

    println!("processed={} errors={}", report.processed, report.errors());
    for failure in &report.failures {
        eprintln!("{}: {}", failure.job, failure.error);
    }
    Ok(())
}
```

Custom collaborators
--------------------
Anything that can produce a `RawImage` for a `Job` can feed the pipeline, and
anything that can persist bytes can receive the cards:

```rust
use cardframe::{CaptureSource, Job, MemorySink, RawImage, Result};

struct Blank;

impl CaptureSource for Blank {
    fn capture(&self, _job: &Job) -> Result<RawImage> {
        Ok(RawImage::new(2, 2, 4, vec![0; 16]))
    }
}

let sink = MemorySink::new();
# let _ = (Blank, sink);
```

Error handling
--------------
All public functions return `cardframe::Result<T>`. Per-item errors
(`InvalidImage`, `EmptyContent`, `FrameTooLargeForImage`) are collected by the
batch helpers; `AssetLoad` means no card can be produced at all.

Useful modules
--------------
- [`api`] — high-level entry points and batch processing.
- [`core`] — layout parameters and the individual pipeline stages.
- [`io`] — frame assets, capture/job/sink collaborators, PNG writer.
- [`types`] — `RawImage`, `HexColor`, `Margins`, `FramePiece`, `Job`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::LayoutConfig;
pub use crate::core::processing::pipeline::CompositeRequest;
pub use error::{Error, Result};
pub use types::{FramePiece, HexColor, Job, Margins, RawImage};

// Collaborators
pub use io::{
    CaptureSource, DirectoryCapture, DirectoryJobs, DirectorySink, FrameAssetSet, JobEnumerator,
    MemorySink, Sink,
};

// High-level API re-exports
pub use api::{
    BatchReport, JobFailure, frame_encoded, frame_file_to_path, process_directory_to_path,
    process_job, process_jobs,
};
pub use crate::core::processing::pipeline::{composite, composite_to_png};
