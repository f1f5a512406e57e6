//! Core compositing building blocks: layout parameters and the processing
//! stages. These are the primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
