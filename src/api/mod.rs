//! # Data Source API
//!
//! Twitter recent-search client and the `PostSource` seam the pipeline
//! fetches through.

pub mod twitter;

pub use twitter::{TwitterClient, TwitterError};

use crate::data::Post;
use async_trait::async_trait;

/// A source of recent posts matching a search term
///
/// The pipeline talks to the data source through this trait so tests and
/// demos can substitute a mock feed for the live API.
#[async_trait]
pub trait PostSource {
    /// Fetch recent posts matching `term`, up to the source's result cap
    async fn search_recent(&self, term: &str) -> Result<Vec<Post>, TwitterError>;
}
