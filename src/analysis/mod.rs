//! # Analysis Module
//!
//! Batch aggregation over classified posts and the negative-count alert.

pub mod aggregator;
pub mod alert;

pub use aggregator::{AnalysisResult, BatchAggregator, LabelCounts};
pub use alert::Alert;
