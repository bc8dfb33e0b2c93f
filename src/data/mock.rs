//! # Mock Feed
//!
//! Canned posts for demos, offline runs, and tests. Interpolates the search
//! term so output reads like a real feed.

use crate::api::{PostSource, TwitterError};
use crate::data::Post;
use async_trait::async_trait;

/// Mock post source with a fixed, mixed-sentiment feed
///
/// In production the pipeline runs against `TwitterClient`; this feed stands
/// in when no credentials are available.
pub struct MockFeed {
    /// When true, every search comes back empty
    empty: bool,
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFeed {
    /// Create a mock feed with the default canned posts
    pub fn new() -> Self {
        Self { empty: false }
    }

    /// Create a mock feed that returns zero results for every term
    pub fn empty() -> Self {
        Self { empty: true }
    }

    /// Build the canned posts for a term
    pub fn posts_for(&self, term: &str) -> Vec<Post> {
        if self.empty {
            return Vec::new();
        }

        vec![
            Post::new("1", format!("Just tried {} and it is amazing! Love the new flavor 😍", term)),
            Post::new("2", format!("{} customer support was excellent today, really impressed", term)),
            Post::new("3", format!("Honestly {} is fine, nothing special either way", term)),
            Post::new("4", format!("Terrible experience with {}, the order arrived broken 😠", term)),
            Post::new("5", format!("{} quality has gone downhill, very disappointing lately", term)),
            Post::new("6", format!("Big fan of {}, great value and the team clearly cares", term)),
            Post::new("7", format!("Is {} down for anyone else? Awful timing, this is so frustrating", term)),
            Post::new("8", format!("Picked up {} again at the store, it's okay I guess", term)),
        ]
    }
}

#[async_trait]
impl PostSource for MockFeed {
    async fn search_recent(&self, term: &str) -> Result<Vec<Post>, TwitterError> {
        Ok(self.posts_for(term))
    }
}
