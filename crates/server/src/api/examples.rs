use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use predicat_core::canonical_examples;

use super::schemas::ExamplesResponse;

/// `GET /api/examples` -- illustrative sentences with display translations.
#[utoipa::path(
    get,
    path = "/api/examples",
    tag = "Translation",
    summary = "Example sentences",
    responses(
        (status = 200, description = "Example translations", body = ExamplesResponse)
    )
)]
pub async fn examples() -> impl IntoResponse {
    let body = ExamplesResponse {
        examples: canonical_examples(),
    };
    (StatusCode::OK, Json(body))
}
