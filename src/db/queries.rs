// Database queries — CRUD operations for blog articles.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

use super::models::{ArticleStatus, BlogArticle, NewArticle};

/// A write hit the unique slug index.
///
/// Callers check `slug_taken` first, but the index is what actually
/// guarantees uniqueness when two writers race.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("slug '{0}' is already used by another article")]
pub struct SlugConflict(pub String);

const ARTICLE_COLUMNS: &str = "id, author_id, title, slug, content, keywords, status, \
     publication_date, creation_date, cover_picture_ref";

/// Insert a new article and return its ID. The creation date is set here.
pub fn insert_article(conn: &Connection, article: &NewArticle) -> Result<i64> {
    let keywords_json = serde_json::to_string(&article.keywords)?;
    conn.execute(
        "INSERT INTO blog_articles
            (author_id, title, slug, content, keywords, status, publication_date, creation_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            article.author_id,
            article.title,
            article.slug,
            article.content,
            keywords_json,
            article.status.as_str(),
            article.publication_date.to_rfc3339(),
            Utc::now().to_rfc3339(),
        ],
    )
    .map_err(|e| slug_conflict_or(e, &article.slug))?;
    Ok(conn.last_insert_rowid())
}

/// Load a single article by ID, including soft-deleted ones.
pub fn get_article(conn: &Connection, id: i64) -> Result<Option<BlogArticle>> {
    let sql = format!("SELECT {ARTICLE_COLUMNS} FROM blog_articles WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    let result = stmt.query_row(params![id], row_to_article).optional()?;
    Ok(result)
}

/// List articles in insertion order.
///
/// With no status filter, soft-deleted articles are left out.
pub fn list_articles(conn: &Connection, status: Option<ArticleStatus>) -> Result<Vec<BlogArticle>> {
    let (sql, filter) = match status {
        Some(status) => (
            format!("SELECT {ARTICLE_COLUMNS} FROM blog_articles WHERE status = ?1 ORDER BY id"),
            status,
        ),
        None => (
            format!("SELECT {ARTICLE_COLUMNS} FROM blog_articles WHERE status != ?1 ORDER BY id"),
            ArticleStatus::Deleted,
        ),
    };

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![filter.as_str()], row_to_article)?;

    let mut articles = Vec::new();
    for row in rows {
        articles.push(row?);
    }
    Ok(articles)
}

/// Write every mutable column of an existing article.
/// Returns false if no row has that ID.
pub fn update_article(conn: &Connection, article: &BlogArticle) -> Result<bool> {
    let keywords_json = serde_json::to_string(&article.keywords)?;
    let changed = conn.execute(
        "UPDATE blog_articles SET
            title = ?2,
            slug = ?3,
            content = ?4,
            keywords = ?5,
            status = ?6,
            publication_date = ?7,
            cover_picture_ref = ?8
         WHERE id = ?1",
        params![
            article.id,
            article.title,
            article.slug,
            article.content,
            keywords_json,
            article.status.as_str(),
            article.publication_date.to_rfc3339(),
            article.cover_picture_ref,
        ],
    )
    .map_err(|e| slug_conflict_or(e, &article.slug))?;
    Ok(changed > 0)
}

/// Change only the status column. Returns false if no row has that ID.
pub fn set_status(conn: &Connection, id: i64, status: ArticleStatus) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE blog_articles SET status = ?2 WHERE id = ?1",
        params![id, status.as_str()],
    )?;
    Ok(changed > 0)
}

/// Point an article at an uploaded cover picture. Returns false if no row has that ID.
pub fn set_cover_picture(conn: &Connection, id: i64, file_name: &str) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE blog_articles SET cover_picture_ref = ?2 WHERE id = ?1",
        params![id, file_name],
    )?;
    Ok(changed > 0)
}

/// Check whether a slug is already used by an article other than `exclude_id`.
pub fn slug_taken(conn: &Connection, slug: &str, exclude_id: Option<i64>) -> Result<bool> {
    let taken: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM blog_articles WHERE slug = ?1 AND (?2 IS NULL OR id != ?2)",
        params![slug, exclude_id],
        |row| row.get(0),
    )?;
    Ok(taken)
}

/// Number of articles per status, ordered by status name.
pub fn status_counts(conn: &Connection) -> Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT status, COUNT(*) FROM blog_articles GROUP BY status ORDER BY status",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut counts = Vec::new();
    for row in rows {
        counts.push(row?);
    }
    Ok(counts)
}

/// Turn a unique-constraint failure into `SlugConflict`; pass anything else through.
fn slug_conflict_or(err: rusqlite::Error, slug: &str) -> anyhow::Error {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            SlugConflict(slug.to_string()).into()
        }
        _ => err.into(),
    }
}

// --- Row mapping ---

fn row_to_article(row: &rusqlite::Row<'_>) -> rusqlite::Result<BlogArticle> {
    let keywords_json: String = row.get(5)?;
    let keywords: Vec<String> =
        serde_json::from_str(&keywords_json).map_err(|e| conversion_error(5, e))?;

    let status: String = row.get(6)?;
    let status: ArticleStatus = status.parse().map_err(|e: String| conversion_error(6, e))?;

    Ok(BlogArticle {
        id: row.get(0)?,
        author_id: row.get(1)?,
        title: row.get(2)?,
        slug: row.get(3)?,
        content: row.get(4)?,
        keywords,
        status,
        publication_date: parse_timestamp(row, 7)?,
        creation_date: parse_timestamp(row, 8)?,
        cover_picture_ref: row.get(9)?,
    })
}

fn parse_timestamp(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, e))
}

fn conversion_error<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, err.into())
}
