//! # Sentiment Classifier
//!
//! Maps continuous polarity scores to three discrete labels with fixed,
//! symmetric thresholds.

use crate::defaults;
use crate::sentiment::scorer::PolarityScorer;
use serde::{Deserialize, Serialize};

/// Discrete sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Polarity above the positive threshold
    Positive,
    /// Polarity below the negative threshold
    Negative,
    /// Everything else, boundary values included
    Neutral,
}

impl SentimentLabel {
    /// Convert a polarity score to a label
    ///
    /// Exactly 0.2 and -0.2 are Neutral; only strict threshold crossings
    /// change the bucket.
    pub fn from_score(score: f64) -> Self {
        if score > defaults::POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < defaults::NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    /// Display form with the emoji the dashboard uses
    pub fn display_label(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive 😊",
            SentimentLabel::Negative => "Negative 😠",
            SentimentLabel::Neutral => "Neutral 😐",
        }
    }
}

/// Text-to-label classifier
///
/// A pure function of the input text: the same string always yields the
/// same label, and no input is an error.
pub struct SentimentClassifier {
    scorer: PolarityScorer,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier {
    /// Create a classifier with the default scorer
    pub fn new() -> Self {
        Self {
            scorer: PolarityScorer::new(),
        }
    }

    /// Create a classifier around an existing scorer
    pub fn with_scorer(scorer: PolarityScorer) -> Self {
        Self { scorer }
    }

    /// Classify a text
    pub fn classify(&self, text: &str) -> SentimentLabel {
        SentimentLabel::from_score(self.scorer.score(text))
    }

    /// Score and classify in one pass, keeping the raw polarity
    pub fn score_and_classify(&self, text: &str) -> (f64, SentimentLabel) {
        let score = self.scorer.score(text);
        (score, SentimentLabel::from_score(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(SentimentLabel::from_score(0.21), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.9), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.21), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(-0.9), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.1), SentimentLabel::Neutral);
    }

    #[test]
    fn test_boundary_values_are_neutral() {
        assert_eq!(SentimentLabel::from_score(0.2), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.2), SentimentLabel::Neutral);
    }

    #[test]
    fn test_classify_texts() {
        let classifier = SentimentClassifier::new();
        assert_eq!(classifier.classify("Loving it! 😍"), SentimentLabel::Positive);
        assert_eq!(classifier.classify("Terrible! 😠"), SentimentLabel::Negative);
        assert_eq!(classifier.classify("meh"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let classifier = SentimentClassifier::new();
        assert_eq!(classifier.classify(""), SentimentLabel::Neutral);
        assert_eq!(classifier.classify("   \t "), SentimentLabel::Neutral);
    }

    #[test]
    fn test_score_and_classify_consistent() {
        let classifier = SentimentClassifier::new();
        let (score, label) = classifier.score_and_classify("great service, very happy");
        assert_eq!(SentimentLabel::from_score(score), label);
    }
}
