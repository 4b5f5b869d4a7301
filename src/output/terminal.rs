// Colored terminal output for article lists and keyword results.

use colored::{ColoredString, Colorize};

use super::truncate_chars;
use crate::db::models::{ArticleStatus, BlogArticle};

/// Display stored articles as a table.
pub fn display_article_list(articles: &[BlogArticle]) {
    if articles.is_empty() {
        println!("No articles found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Blog Articles ({}) ===", articles.len()).bold()
    );
    println!();

    println!(
        "  {:>5}  {:<40} {:<10}  {:<12}  {}",
        "ID".dimmed(),
        "Title".dimmed(),
        "Status".dimmed(),
        "Published".dimmed(),
        "Keywords".dimmed(),
    );
    println!("  {}", "-".repeat(90).dimmed());

    for article in articles {
        println!(
            "  {:>5}  {:<40} {:<10}  {:<12}  {}",
            article.id,
            truncate_chars(&article.title, 37),
            colorize_status(article.status),
            article.publication_date.format("%Y-%m-%d"),
            article.keywords.join(", ").cyan(),
        );
    }

    println!();
}

/// Display the keywords extracted from a piece of text.
pub fn display_keywords(keywords: &[String]) {
    if keywords.is_empty() {
        println!("{}", "No keywords (text empty or fully banned).".dimmed());
        return;
    }
    for (i, keyword) in keywords.iter().enumerate() {
        println!("  {}. {}", i + 1, keyword.bold());
    }
}

fn colorize_status(status: ArticleStatus) -> ColoredString {
    match status {
        ArticleStatus::Published => status.as_str().green(),
        ArticleStatus::Draft => status.as_str().yellow(),
        ArticleStatus::Archived => status.as_str().dimmed(),
        ArticleStatus::Deleted => status.as_str().red(),
    }
}
