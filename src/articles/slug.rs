// Slug generation for article URLs.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Longest slug the schema allows.
pub const MAX_SLUG_LEN: usize = 255;

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("static slug pattern compiles"))
}

/// Turn a title into a lowercase, dash-separated slug.
///
/// Anything outside `[a-z0-9]` collapses into a single dash. Returns an empty
/// string when the title has no ASCII letters or digits at all.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let dashed = separator_re().replace_all(&lower, "-");
    let trimmed = dashed.trim_matches('-');

    // The slug is pure ASCII here, so byte truncation is safe.
    let mut slug = trimmed[..trimmed.len().min(MAX_SLUG_LEN)].to_string();
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
