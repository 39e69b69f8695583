use thiserror::Error;

/// Errors returned by [`PredicatClient`](crate::PredicatClient).
#[derive(Debug, Error)]
pub enum Error {
    /// The server could not be reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// The server answered with an unexpected status and no error body.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The server rejected the request with an error message.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// The client could not be built.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request was rejected before being sent.
    #[error("{0}")]
    InvalidInput(String),
}

impl Error {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
