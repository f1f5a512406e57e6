//! Output encoders.
pub mod png;
