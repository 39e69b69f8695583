use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::schemas::SymbolsResponse;

const DESCRIPTION: &str = "Symboles de logique de premier ordre utilisés dans les traductions";

/// `GET /api/symbols` -- the logic symbol table, in table order.
#[utoipa::path(
    get,
    path = "/api/symbols",
    tag = "Translation",
    summary = "Symbol table",
    responses(
        (status = 200, description = "Symbol name to glyph", body = SymbolsResponse)
    )
)]
pub async fn symbols(State(state): State<AppState>) -> impl IntoResponse {
    let body = SymbolsResponse {
        symbols: state.translator.symbols().clone(),
        description: DESCRIPTION.into(),
    };
    (StatusCode::OK, Json(body))
}
