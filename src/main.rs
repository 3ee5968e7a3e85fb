use anyhow::Context;
use clap::Parser;
use rss_digest::{
    Aggregator, Config, DeliverySink, DigestOptions, Fetcher, MastodonTimeline, PullTimeline,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "rss-digest", about = "Feed digest batch job")]
struct Cli {
    /// Configuration file location
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    info!("starting digest run with {} feeds", config.feeds.len());

    let fetcher = Fetcher::new(&config.user_agent);
    let timeline: Option<Box<dyn PullTimeline>> = config
        .timeline
        .as_ref()
        .map(|t| Box::new(MastodonTimeline::new(t, &config.user_agent)) as Box<dyn PullTimeline>);
    let options = DigestOptions {
        profile: config.profile,
        max_body_chars: config.max_body_chars,
        positional_cutoff: config.positional_cutoff(),
    };
    let aggregator = Aggregator::new(fetcher, timeline, options);

    let now = chrono::Utc::now();
    let buckets = aggregator.run(&config.feeds, &config.cadence, now).await;

    let sink = DeliverySink::from_config(&config)?;
    sink.deliver(&buckets, now)
        .await
        .context("failed to deliver digest")?;

    info!("digest run finished");
    Ok(())
}
