use serde::Deserialize;
use std::collections::HashMap;

/// One configured feed subscription.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSource {
    pub url: String,
    /// Grouping label; when empty the feed's own title is used instead.
    #[serde(default)]
    pub tag: String,
    /// Maximum items taken from the feed, 0 meaning unbounded.
    #[serde(default)]
    pub limit: usize,
}

/// Tag -> fetch period in days.
pub type CadenceTable = HashMap<String, i64>;

/// A single entry as parsed out of a feed document.
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// Raw markup body, exactly as the feed supplied it.
    pub description: String,
    /// Publication date string; interpretation is deferred to `dates::resolve`.
    pub published_raw: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub items: Vec<FeedItem>,
}

/// Tag -> formatted entries, insertion-ordered within a tag.
pub type OutputBuckets = HashMap<String, Vec<String>>;

/// Bucket reserved for the run's own diagnostics.
pub const RUNLOG_BUCKET: &str = "runlog";

/// Bucket holding social timeline entries.
pub const TIMELINE_BUCKET: &str = "timeline";

/// Destination markup and delivery mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Raw HTML bodies, delivered over SMTP, one message per tag.
    Email,
    /// Org outline markup, appended to a file.
    Outline,
}

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Mail error: {0}")]
    Mail(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Address error: {0}")]
    Address(#[from] lettre::address::AddressError),
}

pub type Result<T> = std::result::Result<T, DigestError>;
