use crate::types::{DigestError, FeedItem, ParsedFeed, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// How the aggregator obtains a parsed feed; kept behind a trait so runs can
/// be driven without the network.
#[async_trait]
pub trait FetchFeeds: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ParsedFeed>;
}

pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl FetchFeeds for Fetcher {
    async fn fetch(&self, url: &str) -> Result<ParsedFeed> {
        debug!("Fetching feed: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DigestError::Parse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.bytes().await?;
        parse_feed(&body)
    }
}

/// Try RSS first, then Atom.
pub fn parse_feed(body: &[u8]) -> Result<ParsedFeed> {
    if let Ok(channel) = rss::Channel::read_from(body) {
        return Ok(from_rss(&channel));
    }
    if let Ok(feed) = atom_syndication::Feed::read_from(body) {
        return Ok(from_atom(&feed));
    }
    Err(DigestError::Parse(
        "not a recognizable RSS or Atom document".to_string(),
    ))
}

fn from_rss(channel: &rss::Channel) -> ParsedFeed {
    let items = channel
        .items()
        .iter()
        .map(|item| FeedItem {
            title: item.title().unwrap_or_default().to_string(),
            link: item.link().unwrap_or_default().to_string(),
            description: item.description().unwrap_or_default().to_string(),
            published_raw: item.pub_date().map(|d| d.to_string()),
        })
        .collect();

    ParsedFeed {
        title: Some(channel.title().to_string()),
        items,
    }
}

fn from_atom(feed: &atom_syndication::Feed) -> ParsedFeed {
    let items = feed
        .entries()
        .iter()
        .map(|entry| {
            let link = entry
                .links()
                .first()
                .map(|l| l.href().to_string())
                .unwrap_or_default();
            let description = entry
                .summary()
                .map(|t| t.value.clone())
                .or_else(|| entry.content().and_then(|c| c.value().map(|v| v.to_string())))
                .unwrap_or_default();
            // Atom dates arrive pre-typed; re-render so the date resolver
            // owns all date interpretation.
            let published_raw = Some(entry.published().unwrap_or(entry.updated()).to_rfc3339());

            FeedItem {
                title: entry.title().value.clone(),
                link,
                description,
                published_raw,
            }
        })
        .collect();

    ParsedFeed {
        title: Some(feed.title().value.clone()),
        items,
    }
}
