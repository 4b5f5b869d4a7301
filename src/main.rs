use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use inkpress::articles::ArticleService;
use inkpress::config::Config;
use inkpress::db::models::ArticleStatus;
use inkpress::keywords::banned::check_content;

/// Inkpress: blog article backend with keyword extraction.
///
/// Stores articles, derives their keywords from word frequency, and rejects
/// content containing banned words.
#[derive(Parser)]
#[command(name = "inkpress", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Run the HTTP API server
    Serve {
        /// Port to listen on (default: PORT or 8080)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: INKPRESS_BIND or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Print the keywords a piece of text would get
    Keywords {
        /// Text to analyze (omit when using --file)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// How many keywords to return (default: INKPRESS_KEYWORD_LIMIT or 3)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Check text against the banned-word list
    Check {
        /// Text to check (omit when using --file)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// List stored articles
    List {
        /// Only show this status (draft, published, archived, deleted)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show system status (database size, article counts, configuration)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("inkpress=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Init => {
            info!("Initializing Inkpress database...");
            let db = inkpress::db::initialize_sqlite(&config.db_path)?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nInkpress is ready. Next step: cargo run -- serve");
        }

        Commands::Serve { port, bind } => {
            let db = inkpress::db::initialize_sqlite(&config.db_path)?;
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            info!(
                banned_words = config.banned_words.len(),
                keyword_limit = config.keyword_limit,
                uploads = %config.uploads_dir.display(),
                "Starting API server"
            );
            let articles = ArticleService::from_config(&config, db);
            inkpress::web::run_server(articles, port, &bind).await?;
        }

        Commands::Keywords { text, file, limit } => {
            let text = read_input(text, file)?;
            let limit = limit.unwrap_or(config.keyword_limit);
            let keywords =
                inkpress::keywords::frequency::most_frequent_words(&text, &config.banned_words, limit);
            inkpress::output::terminal::display_keywords(&keywords);
        }

        Commands::Check { text, file } => {
            let text = read_input(text, file)?;
            match check_content(&text, &config.banned_words) {
                Ok(()) => println!("{}", "Content accepted.".green()),
                Err(rejected) => {
                    println!("{}", rejected.to_string().red().bold());
                    std::process::exit(1);
                }
            }
        }

        Commands::List { status } => {
            let status = status
                .map(|s| s.parse::<ArticleStatus>())
                .transpose()
                .map_err(anyhow::Error::msg)?;
            let db = inkpress::db::open_sqlite(&config.db_path)?;
            let articles = db.list_articles(status).await?;
            inkpress::output::terminal::display_article_list(&articles);
        }

        Commands::Status => {
            if !inkpress::status::database_exists(&config) {
                println!("Database: not initialized");
                println!("\nRun `inkpress init` to set up the database.");
                return Ok(());
            }
            let db = inkpress::db::open_sqlite(&config.db_path)?;
            inkpress::status::show(&db, &config).await?;
        }
    }

    Ok(())
}

/// Take text from the positional argument or from --file, exactly one of them.
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (text, file) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (Some(_), Some(_)) => anyhow::bail!("Pass either TEXT or --file, not both"),
        (None, None) => anyhow::bail!("Nothing to analyze: pass TEXT or --file"),
    }
}
