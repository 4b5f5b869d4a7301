// System status display — database size and article counts per status.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::db::Database;

/// Display system status to the terminal.
pub async fn show(db: &Arc<dyn Database>, config: &Config) -> Result<()> {
    let db_path = &config.db_path;

    let file_size = std::fs::metadata(db_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_path, file_size);

    let counts = db.status_counts().await?;
    let total: i64 = counts.iter().map(|(_, n)| n).sum();
    println!("Articles: {total}");
    for (status, count) in &counts {
        println!("  {status:<10} {count}");
    }

    let banned: Vec<&str> = config.banned_words.iter().collect();
    if banned.is_empty() {
        println!("Banned words: none");
    } else {
        println!("Banned words: {}", banned.join(", "));
    }
    println!("Keywords per article: {}", config.keyword_limit);
    println!("Uploads: {}", config.uploads_dir.display());

    Ok(())
}

/// Whether the database file exists yet.
pub fn database_exists(config: &Config) -> bool {
    Path::new(&config.db_path).exists()
}

/// Format a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
