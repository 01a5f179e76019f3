use thiserror::Error;

/// Failure modes of the catalog and backend clients. The UI collapses
/// all of these into banner or overlay messages; the distinction only
/// matters for logging and for the "could not load details" special case.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}")]
    Status { status: reqwest::StatusCode },

    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
