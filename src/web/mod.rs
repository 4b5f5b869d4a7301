// Web server — Axum JSON API for blog articles.
//
// All /api/* routes serve JSON. Errors use the shape {"error": "..."}.
// There is no authentication layer; put the server behind a proxy that
// handles it if one is needed.

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::articles::{ArticleError, ArticleService};

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub articles: ArticleService,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(articles: ArticleService, port: u16, bind: &str) -> Result<()> {
    let app = build_router(AppState { articles });

    let addr = format!("{bind}:{port}");
    info!("Inkpress API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/blog-articles",
            get(handlers::articles::list_articles).post(handlers::articles::create_article),
        )
        .route(
            "/api/blog-articles/{id}",
            get(handlers::articles::get_article)
                .patch(handlers::articles::update_article)
                .delete(handlers::articles::delete_article),
        )
        .route(
            "/api/blog-articles/{id}/cover",
            put(handlers::articles::upload_cover),
        )
        .route("/api/keywords", post(handlers::keywords::extract_keywords));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::PATCH,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

impl IntoResponse for ArticleError {
    fn into_response(self) -> Response {
        let status = match &self {
            ArticleError::BannedWord(_) | ArticleError::Invalid(_) => StatusCode::BAD_REQUEST,
            ArticleError::NotFound => StatusCode::NOT_FOUND,
            ArticleError::SlugTaken(_) => StatusCode::CONFLICT,
            ArticleError::UnsupportedMedia(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ArticleError::Storage(e) => {
                error!(error = %e, "Storage error while handling article request");
                return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
            }
        };
        api_error(status, &self.to_string())
    }
}
