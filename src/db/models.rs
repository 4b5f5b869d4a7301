// Data models — Rust structs that map to database rows.
//
// These are the types that flow through the application. They're separate
// from the database queries so other modules can use them without depending
// on rusqlite directly. Field names serialize as camelCase to match the
// public JSON API.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogArticle {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    /// Most frequent words of `content` (JSON-encoded in the DB)
    pub keywords: Vec<String>,
    pub status: ArticleStatus,
    pub publication_date: DateTime<Utc>,
    pub creation_date: DateTime<Utc>,
    /// File name under the uploads directory, if a cover was uploaded
    pub cover_picture_ref: Option<String>,
}

/// An article that has been validated but not yet inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub status: ArticleStatus,
    pub publication_date: DateTime<Utc>,
}

/// Article lifecycle state. `Deleted` is a soft delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
    Archived,
    Deleted,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 4] = [
        ArticleStatus::Draft,
        ArticleStatus::Published,
        ArticleStatus::Archived,
        ArticleStatus::Deleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
            ArticleStatus::Archived => "archived",
            ArticleStatus::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            "archived" => Ok(ArticleStatus::Archived),
            "deleted" => Ok(ArticleStatus::Deleted),
            other => Err(format!(
                "status must be one of draft, published, archived, deleted (got '{other}')"
            )),
        }
    }
}
