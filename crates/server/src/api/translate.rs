use axum::Json;
use axum::extract::State;
use tracing::info;

use predicat_core::{EMPTY_SENTENCE_MESSAGE, TranslationRequest, TranslationResult};

use super::AppState;
use super::schemas::ErrorResponse;
use crate::error::ServerError;

/// `POST /api/translate` -- translate a French sentence into first-order logic.
///
/// Sentences no rule recognizes still get a 200 with the fallback result.
#[utoipa::path(
    post,
    path = "/api/translate",
    tag = "Translation",
    summary = "Translate a sentence",
    description = "Normalizes the sentence, applies the first matching rule and returns the formula, an explanation and the logic symbols it uses.",
    request_body(content = TranslationRequest, description = "Sentence to translate"),
    responses(
        (status = 200, description = "Translation result", body = TranslationResult),
        (status = 400, description = "Empty sentence", body = ErrorResponse),
        (status = 500, description = "Translation failed", body = ErrorResponse)
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResult>, ServerError> {
    if request.is_blank() {
        return Err(ServerError::BadRequest(EMPTY_SENTENCE_MESSAGE.into()));
    }

    let result = state.translator.translate(&request.sentence);
    info!(
        sentence = %result.original_sentence,
        fallback = result.is_fallback(),
        "sentence translated"
    );
    Ok(Json(result))
}
