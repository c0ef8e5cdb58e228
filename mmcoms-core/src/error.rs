use std::path::PathBuf;

use thiserror::Error;

/// Base error for every failed API call.
///
/// Callers that only care whether a call failed can match on `Error` as a
/// whole; [`Error::Authentication`] is split out so a rejected token can be
/// told apart from every other failure.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint answered 401.
    #[error("invalid authentication token")]
    Authentication,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Any failure other than a rejected token.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0:#}")]
    Transport(#[source] anyhow::Error),

    #[error("invalid JSON in response body: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to read attachment {}: {source}", .path.display())]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication)
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication => Some(401),
            Error::Api(ApiError::Status { status, .. }) => Some(*status),
            Error::Api(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
