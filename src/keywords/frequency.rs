// Word-frequency keyword extraction.
//
// Keywords are simply the most frequent non-banned tokens in the text. A token
// is a maximal run of alphanumeric characters, lowercased after splitting so
// that case mappings which expand a character can't split a word. Ties on count
// are broken by ascending word order so the output never depends on hash
// iteration order.

use std::collections::HashMap;

use super::banned::BannedWords;
use super::traits::KeywordExtractor;

/// How many keywords an article gets when nothing else is configured.
pub const DEFAULT_KEYWORD_LIMIT: usize = 3;

/// The default extractor: ranks tokens by raw occurrence count.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyExtractor;

impl KeywordExtractor for FrequencyExtractor {
    fn extract(&self, text: &str, banned: &BannedWords, limit: usize) -> Vec<String> {
        most_frequent_words(text, banned, limit)
    }
}

/// Split text into alphanumeric tokens, preserving case.
///
/// Punctuation and whitespace separate tokens; empty pieces are dropped.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
}

/// Return the `limit` most frequent words of `text` that are not banned.
///
/// Ordering is by count descending, then by the word ascending. If fewer than
/// `limit` distinct words remain the result is shorter; it is never padded.
pub fn most_frequent_words(text: &str, banned: &BannedWords, limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text).map(str::to_lowercase) {
        if banned.contains_token(&token) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(word, _)| word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none() -> BannedWords {
        BannedWords::default()
    }

    #[test]
    fn test_most_frequent_with_alphabetical_tie_break() {
        let words = most_frequent_words("the cat sat on the mat the cat ran", &none(), 3);
        // "mat", "on", "ran", "sat" all appear once; "mat" sorts first
        assert_eq!(words, vec!["the", "cat", "mat"]);
    }

    #[test]
    fn test_banned_word_excluded() {
        let banned = BannedWords::new(["thor"]);
        let words = most_frequent_words("thor is strong", &banned, 3);
        assert_eq!(words, vec!["is", "strong"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(most_frequent_words("", &none(), 3).is_empty());
    }

    #[test]
    fn test_limit_truncates() {
        let words = most_frequent_words("a a a b b c", &none(), 2);
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn test_zero_limit() {
        assert!(most_frequent_words("a a a b b c", &none(), 0).is_empty());
    }

    #[test]
    fn test_all_words_banned() {
        let banned = BannedWords::new(["foo", "BAR"]);
        assert!(most_frequent_words("Foo bar FOO", &banned, 3).is_empty());
    }

    #[test]
    fn test_punctuation_and_digits() {
        let words = most_frequent_words("Rust 2024, rust-2024! (rust)", &none(), 5);
        assert_eq!(words, vec!["rust", "2024"]);
    }

    #[test]
    fn test_banned_matches_whole_tokens_only() {
        // The extractor does not do substring matching: "thunder" survives.
        let banned = BannedWords::new(["thor"]);
        let words = most_frequent_words("thunder thunder thor", &banned, 3);
        assert_eq!(words, vec!["thunder"]);
    }

    #[test]
    fn test_unicode_letters_form_tokens() {
        let words = most_frequent_words("Café café naïve", &none(), 3);
        assert_eq!(words, vec!["café", "naïve"]);
    }

    #[test]
    fn test_expanding_lowercase_keeps_word_whole() {
        // 'İ' lowercases to 'i' plus a combining dot, which is not alphanumeric
        let words = most_frequent_words("İstanbul İstanbul", &none(), 3);
        assert_eq!(words, vec!["İstanbul".to_lowercase()]);
    }

    #[test]
    fn test_only_separators() {
        assert!(most_frequent_words(" ,.;!? -- ", &none(), 3).is_empty());
    }

    #[test]
    fn test_tokenize_drops_empty_pieces() {
        let tokens: Vec<&str> = tokenize("hello,,  world--again").collect();
        assert_eq!(tokens, vec!["hello", "world", "again"]);
    }

    #[test]
    fn test_trait_object_delegates() {
        let extractor: &dyn KeywordExtractor = &FrequencyExtractor;
        let banned = BannedWords::new(["b"]);
        assert_eq!(extractor.extract("a b b c", &banned, 3), vec!["a", "c"]);
    }
}
