//! # Brand Pulse
//!
//! Library for tracking brand sentiment over recent Twitter posts.
//! Fetches posts matching a search term, scores each post's polarity
//! with a lexicon-based analyzer, classifies it into three buckets,
//! and aggregates the batch into a report with a negative-count alert.
//!
//! ## Modules
//!
//! - `api` - Twitter recent-search client and the `PostSource` seam
//! - `data` - Post model, text preprocessing, mock feed
//! - `sentiment` - Polarity scoring and three-bucket classification
//! - `analysis` - Batch aggregation and alert evaluation
//! - `pipeline` - Search-term to analysis-result orchestration
//! - `report` - Terminal rendering of results and errors
//!
//! ## Example Usage
//!
//! ```no_run
//! use brand_pulse::{pipeline, Credentials, TwitterClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let credentials = Credentials::from_env().unwrap();
//!     let client = TwitterClient::new(credentials);
//!
//!     let result = pipeline::run_search(&client, "acme cola").await.unwrap();
//!     println!("{}", brand_pulse::report::render_summary(&result));
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod sentiment;

// Re-exports for convenience
pub use analysis::{Alert, AnalysisResult, BatchAggregator, LabelCounts};
pub use api::{PostSource, TwitterClient, TwitterError};
pub use config::Credentials;
pub use data::{MockFeed, Post, TextPreprocessor};
pub use error::TrackerError;
pub use sentiment::{PolarityScorer, SentimentClassifier, SentimentLabel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Polarity above which a post is labeled Positive
    pub const POSITIVE_THRESHOLD: f64 = 0.2;

    /// Polarity below which a post is labeled Negative
    pub const NEGATIVE_THRESHOLD: f64 = -0.2;

    /// Negative-post count above which (strictly) the alert fires
    pub const ALERT_NEGATIVE_COUNT: usize = 5;

    /// Maximum posts fetched per search
    pub const MAX_RESULTS: usize = 100;

    /// Sample preview length in characters
    pub const PREVIEW_CHARS: usize = 100;

    /// Marker appended to truncated previews
    pub const PREVIEW_MARKER: &str = "...";

    /// Maximum characters of an unexpected error shown to the user
    pub const ERROR_PREVIEW_CHARS: usize = 200;
}
