// POST /api/keywords — preview what an article body would produce.
//
// Returns the keywords the configured extractor derives and, if the text
// would be rejected, the banned word that rejects it. Nothing is stored.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
    /// Overrides the configured keyword limit
    pub limit: Option<usize>,
}

pub async fn extract_keywords(
    State(state): State<AppState>,
    payload: Result<Json<KeywordsRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return api_error(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    let keywords = state.articles.keywords_for(&request.text, request.limit);
    let banned_word = state.articles.banned_words().first_in(&request.text);

    Json(serde_json::json!({
        "keywords": keywords,
        "bannedWord": banned_word,
    }))
    .into_response()
}
