use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::keywords::banned::BannedWords;
use crate::keywords::frequency::DEFAULT_KEYWORD_LIMIT;

/// Banned words used when INKPRESS_BANNED_WORDS is unset.
pub const DEFAULT_BANNED_WORDS: &str = "thor";

pub const DEFAULT_PORT: u16 = 8080;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    /// Words rejected by the content gate and excluded from keywords
    pub banned_words: BannedWords,
    /// How many keywords each article gets
    pub keyword_limit: usize,
    /// Where uploaded cover pictures are written
    pub uploads_dir: PathBuf,
    pub bind: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default; only malformed numbers are errors.
    pub fn load() -> Result<Self> {
        let keyword_limit = match env::var("INKPRESS_KEYWORD_LIMIT") {
            Ok(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("INKPRESS_KEYWORD_LIMIT must be a non-negative integer (got '{raw}')")
            })?,
            Err(_) => DEFAULT_KEYWORD_LIMIT,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number (got '{raw}')"))?,
            Err(_) => DEFAULT_PORT,
        };

        let banned_words = BannedWords::parse_list(
            &env::var("INKPRESS_BANNED_WORDS").unwrap_or_else(|_| DEFAULT_BANNED_WORDS.to_string()),
        );

        Ok(Self {
            db_path: env::var("INKPRESS_DB_PATH").unwrap_or_else(|_| "./inkpress.db".to_string()),
            banned_words,
            keyword_limit,
            uploads_dir: env::var("INKPRESS_UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./uploads")),
            bind: env::var("INKPRESS_BIND").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "./inkpress.db".to_string(),
            banned_words: BannedWords::parse_list(DEFAULT_BANNED_WORDS),
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            uploads_dir: PathBuf::from("./uploads"),
            bind: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }
}
