//! # Tracking Pipeline
//!
//! One search term in, one analysis result out. Stateless request/response:
//! validate the term, fetch one page of posts, guard the empty cases, then
//! aggregate. Nothing is retried, cached, or shared between runs.

use crate::analysis::{AnalysisResult, BatchAggregator};
use crate::api::PostSource;
use crate::error::TrackerError;
use tracing::{debug, info};

/// Run the full pipeline for a search term
///
/// Guards, in order:
/// - blank term: `EmptyQuery`, the source is never called;
/// - zero results: `NoResults`, aggregation never runs (and the mean's
///   division by the batch length stays safe).
pub async fn run_search<S: PostSource>(
    source: &S,
    term: &str,
) -> Result<AnalysisResult, TrackerError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(TrackerError::EmptyQuery);
    }

    info!("Searching recent posts for '{}'", term);
    let posts = source.search_recent(term).await?;
    debug!("Fetched {} posts", posts.len());

    if posts.is_empty() {
        return Err(TrackerError::NoResults {
            term: term.to_string(),
        });
    }

    let aggregator = BatchAggregator::new();
    let result = aggregator.aggregate(&posts);
    info!(
        "Classified {} posts: {} positive / {} negative / {} neutral",
        result.counts.total(),
        result.counts.positive,
        result.counts.negative,
        result.counts.neutral
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TwitterError;
    use crate::data::{MockFeed, Post};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Post source that counts how often it is called
    struct CountingSource {
        calls: AtomicUsize,
        posts: Vec<Post>,
    }

    impl CountingSource {
        fn new(posts: Vec<Post>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                posts,
            }
        }
    }

    #[async_trait]
    impl PostSource for CountingSource {
        async fn search_recent(&self, _term: &str) -> Result<Vec<Post>, TwitterError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.posts.clone())
        }
    }

    #[tokio::test]
    async fn test_empty_term_skips_fetch() {
        let source = CountingSource::new(vec![Post::new("1", "anything")]);

        let err = run_search(&source, "   ").await.unwrap_err();
        assert!(matches!(err, TrackerError::EmptyQuery));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_zero_results_skips_aggregation() {
        let source = MockFeed::empty();

        let err = run_search(&source, "ghost brand").await.unwrap_err();
        match err {
            TrackerError::NoResults { term } => assert_eq!(term, "ghost brand"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_successful_run() {
        let source = MockFeed::new();

        let result = run_search(&source, "acme").await.unwrap();
        assert_eq!(result.counts.total(), result.posts.len());
        assert!((-1.0..=1.0).contains(&result.mean_polarity));
    }

    #[tokio::test]
    async fn test_term_is_trimmed_before_fetch() {
        let source = CountingSource::new(vec![Post::new("1", "fine")]);

        let result = run_search(&source, "  acme  ").await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.counts.total(), 1);
    }
}
