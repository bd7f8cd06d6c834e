//! Publication date parsing.
//!
//! Front matter dates come in several spellings; all of them are normalized
//! to a UTC `NaiveDateTime` so posts can be ordered and rendered uniformly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Accepted layouts without timezone, tried in order.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse "YYYY-MM-DD", "YYYY-MM-DD HH:MM[:SS]", "YYYY-MM-DDTHH:MM:SS" or RFC 3339.
///
/// RFC 3339 values with an offset are converted to UTC.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }

    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "YYYY-MM-DD", used for sitemap `<lastmod>`.
pub fn to_ymd(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// RFC 2822, used for rss `<pubDate>`.
pub fn to_rfc2822(dt: &NaiveDateTime) -> String {
    dt.and_utc().to_rfc2822()
}
