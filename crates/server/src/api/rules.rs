use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::schemas::{RuleSummary, RulesResponse};

/// `GET /api/rules` -- list the loaded rules in priority order.
#[utoipa::path(
    get,
    path = "/api/rules",
    tag = "Rules",
    summary = "List rules",
    description = "Returns the translation rules in the order they are tried.",
    responses(
        (status = 200, description = "Rule catalogue", body = RulesResponse)
    )
)]
pub async fn list_rules(State(state): State<AppState>) -> impl IntoResponse {
    let rules = state
        .translator
        .rules()
        .iter()
        .enumerate()
        .map(|(position, r)| RuleSummary {
            position,
            name: r.name.clone(),
            kind: r.kind.to_string(),
            pattern: r.pattern.as_str().to_owned(),
            template: r.template.to_string(),
            explanation: r.explanation.to_string(),
            description: r.description.clone(),
        })
        .collect();

    (StatusCode::OK, Json(RulesResponse { rules }))
}
