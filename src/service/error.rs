use thiserror::Error;

use crate::analysis::DecodeError;

/// Errors that can occur while talking to the analysis service.
///
/// None of these are shown to the user verbatim; the submission boundary
/// logs them and substitutes a fixed message.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request could not be sent or the body could not be read
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body arrived but is not a usable analysis response
    #[error("Malformed response: {0}")]
    Decode(#[from] DecodeError),

    /// Non-success status from an endpoint that requires one
    #[error("Unexpected status {status} from '{url}'")]
    UnexpectedStatus { url: String, status: u16 },
}

impl ServiceError {
    /// Short classification for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Client(_) => "client_error",
            ServiceError::Transport { source, .. } if source.is_timeout() => "timeout",
            ServiceError::Transport { source, .. } if source.is_connect() => "connection_error",
            ServiceError::Transport { .. } => "transport_error",
            ServiceError::Decode(_) => "decode_error",
            ServiceError::UnexpectedStatus { .. } => "unexpected_status",
        }
    }
}
