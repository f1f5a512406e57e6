//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every compositor failure is reported per item; only `AssetLoad` is meant to be
//! fatal for a whole run.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid image: {reason}")]
    InvalidImage { reason: String },

    #[error("Image contains nothing but background")]
    EmptyContent,

    #[error(
        "Frame does not fit a {width}x{height} canvas (needs at least {min_width}x{min_height})"
    )]
    FrameTooLargeForImage {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    #[error("Failed to load frame piece '{piece}': {reason}")]
    AssetLoad { piece: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}

impl Error {
    pub fn invalid_image<E: std::fmt::Display>(reason: E) -> Self {
        Error::InvalidImage {
            reason: reason.to_string(),
        }
    }
}
