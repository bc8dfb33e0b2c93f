//! # Batch Aggregator
//!
//! Applies the classifier across a fetched batch and folds the results into
//! label counts, a mean polarity, a sample preview, and the alert.

use crate::analysis::alert::Alert;
use crate::data::{ClassifiedPost, Post};
use crate::defaults;
use crate::sentiment::{SentimentClassifier, SentimentLabel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Count of posts per label
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    /// Total posts counted; equals the batch size by construction
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Count for one label
    pub fn for_label(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }
}

/// Aggregate analysis over one fetched batch
///
/// Created once per search run and discarded after rendering; nothing is
/// persisted across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Classified posts in fetch order
    pub posts: Vec<ClassifiedPost>,
    /// Per-label counts
    pub counts: LabelCounts,
    /// Arithmetic mean of the raw per-post polarity scores
    pub mean_polarity: f64,
    /// First post's text, truncated to the preview length
    pub sample_preview: String,
    /// Negative-count alert for this batch
    pub alert: Alert,
    /// When the analysis ran
    pub timestamp: DateTime<Utc>,
}

/// Classifies a batch of posts and aggregates the outcome
pub struct BatchAggregator {
    classifier: SentimentClassifier,
}

impl Default for BatchAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchAggregator {
    /// Create an aggregator with the default classifier
    pub fn new() -> Self {
        Self {
            classifier: SentimentClassifier::new(),
        }
    }

    /// Create an aggregator around an existing classifier
    pub fn with_classifier(classifier: SentimentClassifier) -> Self {
        Self { classifier }
    }

    /// Aggregate a non-empty batch of posts
    ///
    /// Callers must short-circuit empty batches before this point; the mean
    /// polarity divides by the batch length. Each post is classified
    /// independently, in order, with no cross-post state.
    pub fn aggregate(&self, posts: &[Post]) -> AnalysisResult {
        debug_assert!(!posts.is_empty(), "aggregate requires a non-empty batch");

        let mut counts = LabelCounts::default();
        let mut score_sum = 0.0;
        let mut classified = Vec::with_capacity(posts.len());

        for post in posts {
            let (score, label) = self.classifier.score_and_classify(&post.text);
            counts.record(label);
            score_sum += score;
            classified.push(ClassifiedPost {
                post: post.clone(),
                score,
                label,
            });
        }

        let mean_polarity = score_sum / posts.len() as f64;
        let sample_preview = preview(&posts[0].text);
        let alert = Alert::evaluate(counts.negative);

        AnalysisResult {
            posts: classified,
            counts,
            mean_polarity,
            sample_preview,
            alert,
            timestamp: Utc::now(),
        }
    }
}

/// Truncate a text to the preview length, marking truncation
fn preview(text: &str) -> String {
    if text.chars().count() > defaults::PREVIEW_CHARS {
        let truncated: String = text.chars().take(defaults::PREVIEW_CHARS).collect();
        format!("{}{}", truncated, defaults::PREVIEW_MARKER)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(texts: &[&str]) -> Vec<Post> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Post::new(i.to_string(), *t))
            .collect()
    }

    #[test]
    fn test_counts_sum_to_batch_size() {
        let aggregator = BatchAggregator::new();
        let posts = batch(&[
            "Loving it! 😍",
            "Terrible! 😠",
            "meh",
            "great product, very happy",
            "awful support, never again",
        ]);
        let result = aggregator.aggregate(&posts);
        assert_eq!(result.counts.total(), posts.len());
        assert_eq!(result.posts.len(), posts.len());
    }

    #[test]
    fn test_mean_polarity_is_arithmetic_mean() {
        let aggregator = BatchAggregator::new();
        let posts = batch(&["Loving it! 😍", "Terrible! 😠", "meh"]);
        let result = aggregator.aggregate(&posts);

        let expected: f64 =
            result.posts.iter().map(|p| p.score).sum::<f64>() / posts.len() as f64;
        assert!((result.mean_polarity - expected).abs() < 1e-12);
        assert!((-1.0..=1.0).contains(&result.mean_polarity));
    }

    #[test]
    fn test_mean_polarity_order_independent() {
        let aggregator = BatchAggregator::new();
        let forward = batch(&["Loving it! 😍", "Terrible! 😠", "meh", "good stuff"]);
        let reversed: Vec<Post> = forward.iter().rev().cloned().collect();

        let a = aggregator.aggregate(&forward);
        let b = aggregator.aggregate(&reversed);
        assert!((a.mean_polarity - b.mean_polarity).abs() < 1e-9);
    }

    #[test]
    fn test_preview_truncation() {
        let long_text = "x".repeat(150);
        let posts = vec![Post::new("1", long_text)];
        let result = BatchAggregator::new().aggregate(&posts);

        assert_eq!(result.sample_preview.chars().count(), 103);
        assert!(result.sample_preview.ends_with("..."));
    }

    #[test]
    fn test_preview_short_text_untouched() {
        let posts = vec![Post::new("1", "short and sweet")];
        let result = BatchAggregator::new().aggregate(&posts);
        assert_eq!(result.sample_preview, "short and sweet");
    }

    #[test]
    fn test_preview_is_first_post() {
        let posts = batch(&["first post text", "second post text"]);
        let result = BatchAggregator::new().aggregate(&posts);
        assert_eq!(result.sample_preview, "first post text");
    }

    #[test]
    fn test_alert_scenario_six_negative() {
        let mut texts = vec!["Loving it! 😍"; 3];
        texts.extend(vec!["Terrible! 😠"; 6]);
        texts.push("meh");

        let result = BatchAggregator::new().aggregate(&batch(&texts));

        assert!(result.counts.negative >= 6);
        assert!(result.alert.triggered);
        assert!(result.alert.message.contains('6'));
        assert_eq!(result.counts.total(), 10);
    }

    #[test]
    fn test_five_negative_no_alert() {
        let texts = vec!["Terrible! 😠"; 5];
        let result = BatchAggregator::new().aggregate(&batch(&texts));
        assert_eq!(result.counts.negative, 5);
        assert!(!result.alert.triggered);
    }
}
