// Keyword extractor trait — swap-ready abstraction.
//
// The article workflow only depends on this trait, so tests can hand it a
// recording stub and a future extractor can replace word frequency without
// touching the handlers.

use super::banned::BannedWords;

/// Trait for deriving an ordered keyword list from article content.
pub trait KeywordExtractor: Send + Sync {
    /// Return at most `limit` keywords for `text`, never including a banned word.
    fn extract(&self, text: &str, banned: &BannedWords, limit: usize) -> Vec<String>;
}
