use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("{failed} of {total} cards failed")]
    BatchFailed { failed: usize, total: usize },

    #[error(transparent)]
    Frame(#[from] cardframe::Error),
}
