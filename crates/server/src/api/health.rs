use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::schemas::{HealthResponse, InfoResponse};

/// Message served by `GET /api/`.
pub const INFO_MESSAGE: &str = "Traducteur de Logique de Premier Ordre - API Active";

/// `GET /health` -- returns service status and the number of loaded rules.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    summary = "Health check",
    description = "Returns service status and the size of the loaded rule catalogue.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "ok".into(),
        rules: state.translator.rules().len(),
    };
    (StatusCode::OK, Json(body))
}

/// `GET /api/` -- liveness message.
#[utoipa::path(
    get,
    path = "/api/",
    tag = "Health",
    summary = "API info",
    responses(
        (status = 200, description = "The API is up", body = InfoResponse)
    )
)]
pub async fn info() -> impl IntoResponse {
    let body = InfoResponse {
        message: INFO_MESSAGE.into(),
    };
    (StatusCode::OK, Json(body))
}
