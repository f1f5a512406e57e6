use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{Job, RawImage};

/// Produces the raw screenshot for a job.
pub trait CaptureSource: Send + Sync {
    fn capture(&self, job: &Job) -> Result<RawImage>;
}

/// Reads previously captured screenshots from `<root>/<collection>/<item>.png`.
#[derive(Debug, Clone)]
pub struct DirectoryCapture {
    root: PathBuf,
}

impl DirectoryCapture {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, job: &Job) -> PathBuf {
        self.root
            .join(&job.collection)
            .join(format!("{}.png", job.item))
    }
}

impl CaptureSource for DirectoryCapture {
    fn capture(&self, job: &Job) -> Result<RawImage> {
        let bytes = std::fs::read(self.path_for(job))?;
        RawImage::from_encoded(&bytes).map_err(|e| match e {
            Error::InvalidImage { reason } => Error::InvalidImage {
                reason: format!("{}: {}", job, reason),
            },
            other => other,
        })
    }
}
