use crate::types::{CadenceTable, DigestError, FeedSource, Profile, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_USER_AGENT: &str = "rss-digest/0.1";

/// SMTP submission settings for the email profile.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub from: String,
    pub to: String,
    pub password: String,
    pub smtp_host: String,
}

/// Social timeline credentials; the timeline pull is skipped when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineConfig {
    pub base_url: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub profile: Profile,
    pub feeds: Vec<FeedSource>,
    #[serde(default)]
    pub cadence: CadenceTable,
    #[serde(default)]
    pub email: Option<EmailConfig>,
    #[serde(default)]
    pub outline_path: Option<PathBuf>,
    #[serde(default)]
    pub timeline: Option<TimelineConfig>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Cap on item body length after translation, in characters.
    #[serde(default = "default_max_body_chars")]
    pub max_body_chars: usize,
    /// Items treated as recent when a feed carries no parseable dates.
    /// Defaults per profile when absent.
    #[serde(default)]
    pub positional_cutoff: Option<usize>,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_body_chars() -> usize {
    1000
}

impl Config {
    /// Load and validate a JSON configuration file. Any failure here is
    /// fatal; the run cannot start without a usable configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        match self.profile {
            Profile::Email if self.email.is_none() => {
                return Err(DigestError::Config(
                    "email profile requires an \"email\" section".to_string(),
                ));
            }
            Profile::Outline if self.outline_path.is_none() => {
                return Err(DigestError::Config(
                    "outline profile requires \"outline_path\"".to_string(),
                ));
            }
            _ => {}
        }

        for feed in &self.feeds {
            let url = Url::parse(&feed.url)
                .map_err(|e| DigestError::Config(format!("invalid feed url {}: {}", feed.url, e)))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(DigestError::Config(format!(
                    "unsupported feed url scheme: {}",
                    feed.url
                )));
            }
        }

        Ok(())
    }

    pub fn positional_cutoff(&self) -> usize {
        self.positional_cutoff.unwrap_or(match self.profile {
            Profile::Email => 20,
            Profile::Outline => 2,
        })
    }
}
