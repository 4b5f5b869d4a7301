// Banned words — the configured deny list and the content gate built on it.
//
// The same list feeds two different checks:
//   - the content gate matches banned words as substrings of the whole text,
//     so "thor" also rejects "thorough";
//   - the keyword extractor matches them as whole tokens only.
// Keep the two separate.

use std::collections::HashSet;

use thiserror::Error;

/// Content was rejected because it contains a banned word.
///
/// Only the first offending word (in configured order) is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The word '{word}' is not allowed in the content.")]
pub struct BannedWordRejected {
    pub word: String,
}

/// A case-insensitive set of banned words that remembers configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannedWords {
    /// Lowercased, de-duplicated, in the order they were configured
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl BannedWords {
    /// Build the list from any iterator of words.
    ///
    /// Words are trimmed and lowercased; blanks and duplicates are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut lookup = HashSet::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if lookup.insert(word.clone()) {
                ordered.push(word);
            }
        }
        Self { ordered, lookup }
    }

    /// Parse a comma-separated list, e.g. `"thor, loki"`.
    pub fn parse_list(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    /// Whether a single lowercased token is banned.
    pub fn contains_token(&self, token: &str) -> bool {
        self.lookup.contains(token)
    }

    /// First banned word found anywhere in `text`, by substring match.
    pub fn first_in(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.ordered
            .iter()
            .find(|word| lower.contains(word.as_str()))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Gate article content against the banned list.
///
/// Stops at the first banned word (in configured order) contained anywhere in
/// the lowercased text.
pub fn check_content(text: &str, banned: &BannedWords) -> Result<(), BannedWordRejected> {
    match banned.first_in(text) {
        Some(word) => Err(BannedWordRejected {
            word: word.to_string(),
        }),
        None => Ok(()),
    }
}
