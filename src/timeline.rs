use crate::config::TimelineConfig;
use crate::dates;
use crate::types::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Optional collaborator pulling a social home timeline into the digest.
#[async_trait]
pub trait PullTimeline: Send + Sync {
    /// Returns formatted entries for statuses recent enough to include.
    async fn pull(&self, now: DateTime<Utc>) -> Result<Vec<String>>;
}

#[derive(Debug, Deserialize)]
struct Account {
    #[serde(default)]
    display_name: String,
    acct: String,
}

#[derive(Debug, Deserialize)]
struct Status {
    url: Option<String>,
    content: String,
    created_at: String,
    account: Account,
}

/// Mastodon home timeline over the bearer-token REST API.
pub struct MastodonTimeline {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl MastodonTimeline {
    pub fn new(config: &TimelineConfig, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }
}

#[async_trait]
impl PullTimeline for MastodonTimeline {
    async fn pull(&self, now: DateTime<Utc>) -> Result<Vec<String>> {
        let url = format!("{}/api/v1/timelines/home?limit=40", self.base_url);
        debug!("Pulling timeline: {}", url);

        let statuses: Vec<Status> = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let entries = statuses
            .iter()
            .filter_map(|status| {
                let created = dates::resolve(&status.created_at)?;
                if !dates::is_recent(created, now, 1) {
                    return None;
                }
                let name = if status.account.display_name.is_empty() {
                    &status.account.acct
                } else {
                    &status.account.display_name
                };
                let link = status.url.as_deref().unwrap_or_default();
                Some(format!(
                    "<a href=\"{}\">{}</a> : {} <br><br>",
                    link, name, status.content
                ))
            })
            .collect();

        Ok(entries)
    }
}
