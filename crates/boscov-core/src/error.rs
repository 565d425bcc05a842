//! Error Types
//!
//! Failures surfaced by the client. None of them are retried: every error is
//! terminal for the user action that triggered it.

use thiserror::Error;

/// Failure talking to the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The body could not be read or did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided message, if the backend sent one with an error status
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Failure decoding a bearer token payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("payload is not valid base64url: {0}")]
    Base64(String),
    #[error("payload is not valid UTF-8")]
    Utf8,
    #[error("payload is not a JSON object: {0}")]
    Json(String),
}

/// Failure reading or writing persisted client state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("could not serialize session: {0}")]
    Serialize(String),
}

/// Failure of the movie removal workflow
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CascadeError {
    /// Loading the ratings or genre links of the movie failed; nothing was deleted
    #[error("could not load dependents of movie {movie_id}: {source}")]
    Fetch { movie_id: u32, source: ApiError },
    /// One or more delete requests failed; earlier steps stay applied
    #[error("{} of {} delete steps failed", .report.failures.len(), .report.planned)]
    Partial { report: crate::cascade::CascadeReport },
}
