//! Error types for Compiler Explorer operations.

use lexplay_assemble::ExtractError;

/// Error from Compiler Explorer API operations.
#[derive(Debug, thiserror::Error)]
pub enum GodboltError {
    /// HTTP request failed (network error, timeout, malformed response body).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// A fetched share session does not hold an assembler-produced source.
    #[error("malformed share session")]
    MalformedSession(#[from] MalformedSessionError),
}

/// Why a fetched share session could not be reversed into a snippet.
#[derive(Debug, thiserror::Error)]
pub enum MalformedSessionError {
    /// The shortlink record holds no sessions.
    #[error("shortlink holds no sessions")]
    NoSessions,

    /// The stored session has no executor, so there is no stdin payload.
    #[error("session holds no executors")]
    NoExecutors,

    /// The stored source lacks the macro line or the sentinel section.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
