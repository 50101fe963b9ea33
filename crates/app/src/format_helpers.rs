//! Display formatting for the UI layer.

use chrono::{DateTime, Utc};

/// Format an RFC 3339 timestamp as a full `en-GB` date with a short time,
/// e.g. `"Monday 3 January 2022 at 14:05"`. Times are shown in UTC.
///
/// Unparseable input is returned unchanged.
pub fn format_article_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%A %-d %B %Y at %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Human label for an article count, e.g. `"1 article"`, `"3 articles"`.
pub fn article_count_label(count: usize) -> String {
    if count == 1 {
        "1 article".to_string()
    } else {
        format!("{count} articles")
    }
}
