// Field validation for articles.
//
// Every rule runs and every violation is collected, so a client sees all of
// its mistakes in one response.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Matches the title column width of the original schema.
pub const MAX_TITLE_CHARS: usize = 100;

/// Check the fields every stored article must satisfy.
pub fn validate_fields(author_id: i64, title: &str, slug: &str, content: &str) -> Vec<String> {
    let mut violations = Vec::new();

    if author_id <= 0 {
        violations.push("authorId must be a positive integer".to_string());
    }

    if title.trim().is_empty() {
        violations.push("title must not be blank".to_string());
    } else {
        if title.chars().count() > MAX_TITLE_CHARS {
            violations.push(format!(
                "title must be at most {MAX_TITLE_CHARS} characters"
            ));
        }
        if slug.is_empty() {
            violations.push("title must contain at least one letter or digit".to_string());
        }
    }

    if content.trim().is_empty() {
        violations.push("content must not be blank".to_string());
    }

    violations
}

/// Parse a publication date.
///
/// Accepts RFC 3339 (`2024-10-21T22:37:14Z`), `YYYY-MM-DD HH:MM:SS` and
/// `YYYY-MM-DD`; the last two are taken as UTC.
pub fn parse_publication_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Some(naive) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc());
    }

    Err(format!("publicationDate '{raw}' is not a valid date"))
}
