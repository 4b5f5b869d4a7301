// Article workflow — request types, errors, and the service that ties the
// content gate, keyword extraction, slugging, validation and storage together.

pub mod cover;
pub mod service;
pub mod slug;
pub mod validate;

pub use service::ArticleService;

use serde::Deserialize;
use thiserror::Error;

use crate::keywords::banned::BannedWordRejected;

/// Body of `POST /api/blog-articles`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticle {
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub status: String,
    /// Defaults to the time of creation when absent
    pub publication_date: Option<String>,
}

/// Body of `PATCH /api/blog-articles/{id}`. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub publication_date: Option<String>,
}

/// Everything that can go wrong in the article workflow.
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error(transparent)]
    BannedWord(#[from] BannedWordRejected),

    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("Blog article not found")]
    NotFound,

    #[error("An article with slug '{0}' already exists")]
    SlugTaken(String),

    #[error("Unsupported cover picture type '{0}'")]
    UnsupportedMedia(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
