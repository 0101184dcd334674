//! CLI error types.

use lexplay_godbolt::GodboltError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Godbolt(#[from] GodboltError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
