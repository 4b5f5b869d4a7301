// Blog article handlers.
//
// GET    /api/blog-articles            — list, optional ?status= filter
// POST   /api/blog-articles            — create (201)
// GET    /api/blog-articles/{id}       — single article
// PATCH  /api/blog-articles/{id}       — partial update
// DELETE /api/blog-articles/{id}       — soft delete (204)
// PUT    /api/blog-articles/{id}/cover — raw image body, Content-Type picks the extension

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::articles::{CreateArticle, UpdateArticle};
use crate::db::models::ArticleStatus;
use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct ListQuery {
    /// draft | published | archived | deleted
    pub status: Option<String>,
}

/// GET /api/blog-articles — every non-deleted article unless ?status= says otherwise.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Response {
    let status = match params.status.as_deref().map(str::parse::<ArticleStatus>) {
        Some(Ok(status)) => Some(status),
        Some(Err(e)) => return api_error(StatusCode::BAD_REQUEST, &e),
        None => None,
    };

    match state.articles.list(status).await {
        Ok(articles) => Json(articles).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /api/blog-articles — create an article; keywords and slug are derived.
pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<CreateArticle>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return api_error(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    match state.articles.create(request).await {
        Ok(article) => (StatusCode::CREATED, Json(article)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/blog-articles/{id}
pub async fn get_article(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.articles.get(id).await {
        Ok(article) => Json(article).into_response(),
        Err(e) => e.into_response(),
    }
}

/// PATCH /api/blog-articles/{id} — new content is gated and re-keyworded.
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateArticle>, JsonRejection>,
) -> Response {
    let Json(patch) = match payload {
        Ok(json) => json,
        Err(rejection) => return api_error(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    match state.articles.update(id, patch).await {
        Ok(article) => Json(article).into_response(),
        Err(e) => e.into_response(),
    }
}

/// DELETE /api/blog-articles/{id}
pub async fn delete_article(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.articles.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// PUT /api/blog-articles/{id}/cover
pub async fn upload_cover(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    match state.articles.attach_cover(id, content_type, &body).await {
        Ok(article) => Json(article).into_response(),
        Err(e) => e.into_response(),
    }
}
