//! # Data Module
//!
//! Post model, text preprocessing, and a mock feed for offline runs.

pub mod mock;
pub mod post;
pub mod preprocessing;

pub use mock::MockFeed;
pub use post::{ClassifiedPost, Post};
pub use preprocessing::TextPreprocessor;
