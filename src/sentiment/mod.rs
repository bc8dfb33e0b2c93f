//! # Sentiment Module
//!
//! Lexicon-based polarity scoring and three-bucket classification.

pub mod classifier;
pub mod emoji;
pub mod lexicon;
pub mod scorer;

pub use classifier::{SentimentClassifier, SentimentLabel};
pub use emoji::EmojiSignals;
pub use lexicon::PolarityLexicon;
pub use scorer::PolarityScorer;
