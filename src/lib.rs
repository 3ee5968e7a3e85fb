pub mod aggregator;
pub mod cadence;
pub mod config;
pub mod dates;
pub mod delivery;
pub mod fetcher;
pub mod markup;
pub mod runlog;
pub mod timeline;
pub mod types;

pub use aggregator::{Aggregator, DigestOptions};
pub use config::Config;
pub use delivery::DeliverySink;
pub use fetcher::{FetchFeeds, Fetcher};
pub use runlog::RunLog;
pub use timeline::{MastodonTimeline, PullTimeline};
pub use types::*;
