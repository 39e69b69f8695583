use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use predicat_rules::RuleError;

/// Errors that can occur when running the predicat server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O error (e.g. binding the listener).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The rule set could not be loaded.
    #[error("rule error: {0}")]
    Rules(#[from] RuleError),

    /// The client sent input the translator does not accept.
    #[error("{0}")]
    BadRequest(String),

    /// An unexpected failure while serving a request.
    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Io(_) | Self::Rules(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
