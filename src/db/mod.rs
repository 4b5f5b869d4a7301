// Database layer — SQLite storage for blog articles.
//
// We use rusqlite with the "bundled" feature so there's no system SQLite
// dependency. The database file lives wherever INKPRESS_DB_PATH points
// (defaults to ./inkpress.db).

pub mod models;
pub mod queries;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use sqlite::SqliteDatabase;
pub use traits::Database;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

/// Open (or create) the database and run migrations.
///
/// Called by `inkpress init` and by `inkpress serve`.
pub fn initialize(db_path: &str) -> Result<Connection> {
    // Create parent directories if needed
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for database: {}", db_path))?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    // Enable WAL mode for better concurrent read performance
    conn.pragma_update(None, "journal_mode", "WAL")?;

    schema::create_tables(&conn)?;

    Ok(conn)
}

/// Open an existing database (fails if it doesn't exist yet).
pub fn open(db_path: &str) -> Result<Connection> {
    if !Path::new(db_path).exists() {
        anyhow::bail!(
            "Database not found at {}. Run `inkpress init` first.",
            db_path
        );
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;

    // Pick up migrations added since the database was created
    schema::create_tables(&conn)?;

    Ok(conn)
}

/// Create the database if needed and wrap it behind the Database trait.
pub fn initialize_sqlite(db_path: &str) -> Result<Arc<dyn Database>> {
    Ok(Arc::new(SqliteDatabase::new(initialize(db_path)?)))
}

/// Open an existing database behind the Database trait.
pub fn open_sqlite(db_path: &str) -> Result<Arc<dyn Database>> {
    Ok(Arc::new(SqliteDatabase::new(open(db_path)?)))
}

/// A fresh in-memory database with the schema applied.
pub fn open_in_memory() -> Result<Arc<dyn Database>> {
    let conn = Connection::open_in_memory()?;
    schema::create_tables(&conn)?;
    Ok(Arc::new(SqliteDatabase::new(conn)))
}
