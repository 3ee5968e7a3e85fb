use crate::cadence;
use crate::dates;
use crate::fetcher::FetchFeeds;
use crate::markup;
use crate::runlog::RunLog;
use crate::timeline::PullTimeline;
use crate::types::{
    CadenceTable, FeedItem, FeedSource, OutputBuckets, Profile, RUNLOG_BUCKET, TIMELINE_BUCKET,
};
use chrono::{DateTime, Utc};

/// Knobs the orchestrator needs beyond its collaborators.
#[derive(Debug, Clone)]
pub struct DigestOptions {
    pub profile: Profile,
    pub max_body_chars: usize,
    pub positional_cutoff: usize,
}

pub struct Aggregator<F: FetchFeeds> {
    fetcher: F,
    timeline: Option<Box<dyn PullTimeline>>,
    options: DigestOptions,
}

impl<F: FetchFeeds> Aggregator<F> {
    pub fn new(
        fetcher: F,
        timeline: Option<Box<dyn PullTimeline>>,
        options: DigestOptions,
    ) -> Self {
        Self {
            fetcher,
            timeline,
            options,
        }
    }

    /// One batch run: every source in configured order, then the optional
    /// timeline, then the sealed run log. Per-source failures are logged and
    /// skipped; the run itself never aborts.
    pub async fn run(
        &self,
        sources: &[FeedSource],
        cadence: &CadenceTable,
        now: DateTime<Utc>,
    ) -> OutputBuckets {
        let mut buckets = OutputBuckets::new();
        let mut log = RunLog::new();
        log.record(format!("digest run starting at {}", now.to_rfc3339()));

        for source in sources {
            let period = cadence::period_for(&source.tag, cadence);
            if !cadence::should_run_today(&source.tag, cadence, now.date_naive()) {
                log.record(format!("wrong day for {}", source.url));
                continue;
            }

            let feed = match self.fetcher.fetch(&source.url).await {
                Ok(feed) => feed,
                Err(err) => {
                    log.record(format!("failed to fetch {}: {}", source.url, err));
                    continue;
                }
            };

            let tag = if source.tag.is_empty() {
                feed.title.clone().unwrap_or_else(|| "untitled".to_string())
            } else {
                source.tag.clone()
            };

            let count = if source.limit == 0 {
                feed.items.len()
            } else {
                source.limit.min(feed.items.len())
            };

            let mut entries = Vec::new();
            // The limit caps the candidate window before recency filtering.
            for (index, item) in feed.items.iter().take(count).enumerate() {
                let recent = match item.published_raw.as_deref().and_then(dates::resolve) {
                    Some(published) => dates::is_recent(published, now, period),
                    // Positional fallback: some feeds carry no usable dates,
                    // so trust feed order instead.
                    None => index < self.options.positional_cutoff,
                };
                if recent {
                    entries.push(self.format_entry(item));
                }
            }

            log.record(format!(
                "feed {} found {} items",
                feed.title.as_deref().unwrap_or(&source.url),
                entries.len()
            ));
            if !entries.is_empty() {
                buckets.entry(tag).or_default().extend(entries);
            }
        }

        if let Some(timeline) = &self.timeline {
            match timeline.pull(now).await {
                Ok(entries) => {
                    log.record(format!("found {} timeline entries", entries.len()));
                    if !entries.is_empty() {
                        buckets.insert(TIMELINE_BUCKET.to_string(), entries);
                    }
                }
                Err(err) => log.record(format!("timeline error: {}", err)),
            }
        }

        let separator = match self.options.profile {
            Profile::Email => "<br>\n",
            Profile::Outline => "\n",
        };
        if let Some(entry) = log.into_entry(separator) {
            buckets.insert(RUNLOG_BUCKET.to_string(), vec![entry]);
        }

        buckets
    }

    fn format_entry(&self, item: &FeedItem) -> String {
        match self.options.profile {
            Profile::Email => {
                let body = markup::truncate(&item.description, self.options.max_body_chars);
                format!(
                    "<a href=\"{}\">{}</a><br>{}<br><br>\n",
                    item.link, item.title, body
                )
            }
            Profile::Outline => {
                let body = markup::translate(&item.description, self.options.max_body_chars);
                format!("** TODO [[{}][{}]]\n{}\n", item.link, item.title, body)
            }
        }
    }
}
