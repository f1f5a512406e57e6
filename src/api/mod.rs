//! High-level, ergonomic library API: frame a single capture file, frame
//! in-memory buffers, and run whole batches with per-item failure isolation.
//! Prefer these entrypoints over the low-level processing modules.
use std::path::Path;

use rayon::prelude::*;
use tracing::{error, info, warn};

use crate::core::params::LayoutConfig;
use crate::core::processing::pipeline::{CompositeRequest, composite, composite_to_png};
use crate::core::processing::save::composite_and_store;
use crate::error::{Error, Result};
use crate::io::assets::FrameAssetSet;
use crate::io::capture::{CaptureSource, DirectoryCapture};
use crate::io::jobs::{DirectoryJobs, JobEnumerator};
use crate::io::sink::{DirectorySink, Sink};
use crate::io::writers::png::write_png;
use crate::types::{Job, RawImage};

/// Frame an encoded screenshot held in memory and return the PNG bytes.
pub fn frame_encoded(bytes: &[u8], frame: &FrameAssetSet, layout: &LayoutConfig) -> Result<Vec<u8>> {
    let raw = RawImage::from_encoded(bytes)?;
    composite_to_png(&CompositeRequest::new(&raw, frame, layout))
}

/// Frame a single screenshot file into `output`.
pub fn frame_file_to_path(
    input: &Path,
    output: &Path,
    frame: &FrameAssetSet,
    layout: &LayoutConfig,
) -> Result<()> {
    let raw = RawImage::from_encoded(&std::fs::read(input)?)?;
    let framed = composite(&CompositeRequest::new(&raw, frame, layout))?;
    write_png(output, &framed)?;
    info!(
        "Framed {:?} -> {:?} ({}x{})",
        input,
        output,
        framed.width(),
        framed.height()
    );
    Ok(())
}

/// One item that could not be framed.
#[derive(Debug)]
pub struct JobFailure {
    pub job: Job,
    pub error: Error,
}

/// Batch processing report
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub failures: Vec<JobFailure>,
}

impl BatchReport {
    pub fn errors(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.processed + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Capture, frame and store a single job.
pub fn process_job(
    job: &Job,
    capture: &dyn CaptureSource,
    sink: &dyn Sink,
    frame: &FrameAssetSet,
    layout: &LayoutConfig,
) -> Result<()> {
    let raw = capture.capture(job)?;
    composite_and_store(
        job.output_name(),
        &CompositeRequest::new(&raw, frame, layout),
        sink,
    )
}

/// Frame every job concurrently. A failing job never stops the others; all
/// results are settled and failures are collected in the report.
pub fn process_jobs(
    jobs: &[Job],
    capture: &dyn CaptureSource,
    sink: &dyn Sink,
    frame: &FrameAssetSet,
    layout: &LayoutConfig,
) -> BatchReport {
    info!("Framing {} items with '{}'", jobs.len(), frame.name());

    let outcomes: Vec<(&Job, Result<()>)> = jobs
        .par_iter()
        .map(|job| (job, process_job(job, capture, sink, frame, layout)))
        .collect();

    let mut report = BatchReport::default();
    for (job, outcome) in outcomes {
        match outcome {
            Ok(()) => {
                info!("Captured card for: \"{}\"", job);
                report.processed += 1;
            }
            Err(e) => {
                warn!("Error framing {}: {}", job, e);
                report.failures.push(JobFailure {
                    job: job.clone(),
                    error: e,
                });
            }
        }
    }

    if report.is_success() {
        info!("Finished framing all {} cards", report.processed);
    } else {
        error!(
            "Failed to frame {} of {} cards",
            report.errors(),
            report.total()
        );
    }
    report
}

/// Frame every capture under `captures` (one subdirectory per collection) into
/// `output_dir`. Loading the frame set is fatal; item failures are reported.
pub fn process_directory_to_path(
    captures: &Path,
    output_dir: &Path,
    frames_root: &Path,
    frame_set: &str,
    layout: &LayoutConfig,
    collections: Vec<String>,
) -> Result<BatchReport> {
    layout.validate()?;
    let frame = FrameAssetSet::load(frames_root, frame_set, layout)?;
    let jobs = DirectoryJobs::new(captures)
        .with_collections(collections)
        .jobs()?;
    let sink = DirectorySink::new(output_dir)?;
    let capture = DirectoryCapture::new(captures);

    Ok(process_jobs(&jobs, &capture, &sink, &frame, layout))
}
