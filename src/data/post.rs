//! # Post Model
//!
//! A single fetched text item and its classified form. Posts are immutable
//! once fetched and consumed read-only by the classifier.

use crate::sentiment::SentimentLabel;
use serde::{Deserialize, Serialize};

/// A single fetched social-media post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Source-assigned identifier
    pub id: String,
    /// Post text content
    pub text: String,
}

impl Post {
    /// Create a new post
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A post paired with its polarity score and label
///
/// Created by the batch aggregator; lives only for the duration of one
/// analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedPost {
    /// The source post
    pub post: Post,
    /// Raw polarity score in [-1.0, 1.0]
    pub score: f64,
    /// Label derived from the score
    pub label: SentimentLabel,
}
