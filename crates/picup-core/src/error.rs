//! Error types for a run and for a single upload.

use thiserror::Error;

/// Failure of a single upload. Never aborts a run; the pipeline turns it into a skip.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Curl reported an error (connect, resolve, timeout, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),

    /// Endpoint answered with a non-200 status.
    #[error("HTTP {code}: {body}")]
    Status { code: u32, body: String },

    /// Endpoint answered 200 with a falsy `success`.
    #[error("{message}")]
    Rejected { message: String },

    /// Body was not the expected JSON shape.
    #[error("invalid response from endpoint: {reason}")]
    InvalidResponse { reason: String },
}

impl UploadError {
    /// True for network-level failures (the endpoint was not reached or did not answer).
    pub fn is_transport(&self) -> bool {
        matches!(self, UploadError::Transport(_))
    }
}

/// Errors that abort a whole run.
#[derive(Debug, Error)]
pub enum RunError {
    /// No current document to scan.
    #[error("No active file")]
    NoActiveDocument,
}
