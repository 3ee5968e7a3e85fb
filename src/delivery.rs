use crate::config::{Config, EmailConfig};
use crate::types::{DigestError, OutputBuckets, Profile, Result};
use chrono::{DateTime, Utc};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::info;

const XHTML_HEADER: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\"><html><body>";

/// Where a finished digest goes. Delivery failures are fatal: a partially
/// delivered digest cannot be retried meaningfully mid-run.
pub enum DeliverySink {
    Email(EmailSink),
    File(FileSink),
}

impl DeliverySink {
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.profile {
            Profile::Email => {
                let email = config.email.as_ref().ok_or_else(|| {
                    DigestError::Config("email profile requires an \"email\" section".to_string())
                })?;
                Ok(Self::Email(EmailSink::new(email)?))
            }
            Profile::Outline => {
                let path = config.outline_path.clone().ok_or_else(|| {
                    DigestError::Config("outline profile requires \"outline_path\"".to_string())
                })?;
                Ok(Self::File(FileSink::new(path)))
            }
        }
    }

    pub async fn deliver(&self, buckets: &OutputBuckets, now: DateTime<Utc>) -> Result<()> {
        match self {
            Self::Email(sink) => sink.deliver(buckets),
            Self::File(sink) => sink.deliver(buckets, now).await,
        }
    }
}

/// Authenticated mail submission, one message per non-empty tag.
pub struct EmailSink {
    mailer: SmtpTransport,
    from: String,
    to: String,
}

impl EmailSink {
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let credentials = Credentials::new(config.from.clone(), config.password.clone());
        let mailer = SmtpTransport::starttls_relay(&config.smtp_host)?
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from: config.from.clone(),
            to: config.to.clone(),
        })
    }

    pub fn deliver(&self, buckets: &OutputBuckets) -> Result<()> {
        for (tag, entries) in buckets {
            if entries.is_empty() {
                continue;
            }

            let mut body = String::from(XHTML_HEADER);
            for entry in entries {
                body.push_str(entry);
                body.push_str("\n\n");
            }
            body.push_str("</body></html>");

            let message = Message::builder()
                .from(self.from.parse()?)
                .to(self.to.parse()?)
                .subject(tag.as_str())
                .header(ContentType::TEXT_HTML)
                .body(body)?;

            self.mailer.send(&message)?;
            info!("sent digest for tag {}", tag);
        }

        Ok(())
    }
}

/// Append-to-file delivery for the outline profile.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Single append: dated section header, then every non-empty bucket's
    /// entries in bucket iteration order.
    pub async fn deliver(&self, buckets: &OutputBuckets, now: DateTime<Utc>) -> Result<()> {
        let mut section = format!("* {}\n", now.format("%Y-%m-%d %A"));
        for entries in buckets.values() {
            for entry in entries {
                section.push_str(entry);
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(section.as_bytes()).await?;
        file.flush().await?;

        info!("appended digest to {}", self.path.display());
        Ok(())
    }
}
