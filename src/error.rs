// src/error.rs
use thiserror::Error;

/// Everything that can go wrong between the sheet endpoint and a normalized record set.
///
/// Page controllers never show these to the user; they collapse any variant to the
/// page's fixed message and log the error itself.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Endpoint answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Network { status: u16, url: String },

    /// Connection, TLS or body-read failure below HTTP.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body could not be unwrapped, or the payload reported an error.
    #[error("malformed sheet payload: {0}")]
    Parse(String),

    #[error("invalid sheet JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A project id is absent from the cached set.
    #[error("no project with id `{0}`")]
    NotFound(String),
}

impl SheetError {
    /// HTTP status when the failure came from the endpoint itself.
    pub fn status(&self) -> Option<u16> {
        match self {
            SheetError::Network { status, .. } => Some(*status),
            _ => None,
        }
    }
}
