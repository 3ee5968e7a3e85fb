use chrono::{DateTime, NaiveDateTime, Utc};

/// Grace factor on the recency window; feeds publish with clock skew and
/// timezone slop.
const GRACE: f64 = 1.1;

/// Zone-less formats some feeds emit, taken as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%a, %d %b %Y %H:%M:%S"];

/// Parse a feed-supplied date string, most common format first. RFC 2822
/// covers RFC 1123 dates with both named and numeric zones. Returns None
/// rather than an error when nothing matches; the caller falls back to a
/// positional recency rule.
pub fn resolve(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(DateTime::from_naive_utc_and_offset(dt, Utc));
        }
    }
    None
}

/// Whether `published` falls within `window_days` of `now`, with the grace
/// margin applied. Future-dated items always count as recent.
pub fn is_recent(published: DateTime<Utc>, now: DateTime<Utc>, window_days: i64) -> bool {
    let allowed = (window_days as f64 * GRACE * 86_400.0).round() as i64;
    now.signed_duration_since(published) <= chrono::Duration::seconds(allowed)
}
