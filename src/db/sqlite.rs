// SqliteDatabase — rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across .await points.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{ArticleStatus, BlogArticle, NewArticle};
use super::traits::Database;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn insert_article(&self, article: &NewArticle) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::insert_article(&conn, article)
    }

    async fn get_article(&self, id: i64) -> Result<Option<BlogArticle>> {
        let conn = self.conn.lock().await;
        super::queries::get_article(&conn, id)
    }

    async fn list_articles(&self, status: Option<ArticleStatus>) -> Result<Vec<BlogArticle>> {
        let conn = self.conn.lock().await;
        super::queries::list_articles(&conn, status)
    }

    async fn update_article(&self, article: &BlogArticle) -> Result<bool> {
        let conn = self.conn.lock().await;
        super::queries::update_article(&conn, article)
    }

    async fn set_status(&self, id: i64, status: ArticleStatus) -> Result<bool> {
        let conn = self.conn.lock().await;
        super::queries::set_status(&conn, id, status)
    }

    async fn set_cover_picture(&self, id: i64, file_name: &str) -> Result<bool> {
        let conn = self.conn.lock().await;
        super::queries::set_cover_picture(&conn, id, file_name)
    }

    async fn slug_taken(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool> {
        let conn = self.conn.lock().await;
        super::queries::slug_taken(&conn, slug, exclude_id)
    }

    async fn status_counts(&self) -> Result<Vec<(String, i64)>> {
        let conn = self.conn.lock().await;
        super::queries::status_counts(&conn)
    }
}
