// Database trait — backend-agnostic async interface for article storage.
//
// Implementor: SqliteDatabase (wraps rusqlite). Methods are async so a
// synchronous connection behind a Mutex and a native async driver would both
// fit behind this one interface.
//
// The trait mirrors the queries.rs function signatures.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{ArticleStatus, BlogArticle, NewArticle};

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Articles ---

    /// Insert a new article and return its ID.
    async fn insert_article(&self, article: &NewArticle) -> Result<i64>;

    /// Load one article by ID (soft-deleted articles included).
    async fn get_article(&self, id: i64) -> Result<Option<BlogArticle>>;

    /// List articles; `None` means every status except deleted.
    async fn list_articles(&self, status: Option<ArticleStatus>) -> Result<Vec<BlogArticle>>;

    /// Persist all mutable fields. Returns false if the article doesn't exist.
    async fn update_article(&self, article: &BlogArticle) -> Result<bool>;

    /// Change an article's status. Returns false if the article doesn't exist.
    async fn set_status(&self, id: i64, status: ArticleStatus) -> Result<bool>;

    /// Record an uploaded cover picture. Returns false if the article doesn't exist.
    async fn set_cover_picture(&self, id: i64, file_name: &str) -> Result<bool>;

    /// Whether another article (not `exclude_id`) already uses this slug.
    async fn slug_taken(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool>;

    // --- Stats ---

    /// Article counts grouped by status.
    async fn status_counts(&self) -> Result<Vec<(String, i64)>>;
}
