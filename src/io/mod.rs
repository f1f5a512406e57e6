//! I/O layer: frame asset loading, the capture/job/sink collaborators with
//! their filesystem implementations, and output `writers`.
pub mod assets;
pub use assets::FrameAssetSet;

pub mod capture;
pub use capture::{CaptureSource, DirectoryCapture};

pub mod jobs;
pub use jobs::{DirectoryJobs, JobEnumerator};

pub mod sink;
pub use sink::{DirectorySink, MemorySink, Sink};

pub mod writers;
