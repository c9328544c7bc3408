// SPDX-License-Identifier: MIT

//! Client error types.
//!
//! Every operation returns exactly one of these. The client performs no
//! retries; a failed call is surfaced to the caller after at most one
//! client-side side effect (session teardown on 401).

/// Error returned by any NETRA API operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network or transport failure (no HTTP response was received).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP status other than 401, body passed through verbatim.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The backend answered 401. The local session has already been torn
    /// down by the time the caller sees this.
    #[error("session expired or unauthorized")]
    SessionExpired,

    /// The response body did not match any shape the client knows how to
    /// decode.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::SessionExpired => Some(401),
            _ => None,
        }
    }
}
