//! # Alert Evaluator
//!
//! Fixed-threshold alert on the negative-post count. Stateless: every run
//! evaluates from scratch, nothing carries over.

use crate::defaults;
use serde::{Deserialize, Serialize};

/// Result of the alert evaluation for one batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Whether the alert fired
    pub triggered: bool,
    /// Negative-post count the evaluation saw
    pub negative_count: usize,
    /// User-facing message carrying the exact count
    pub message: String,
}

impl Alert {
    /// Evaluate the alert for a negative-post count
    ///
    /// Fires strictly above `defaults::ALERT_NEGATIVE_COUNT`: exactly 5
    /// negative posts stay quiet, 6 fire.
    pub fn evaluate(negative_count: usize) -> Self {
        let triggered = negative_count > defaults::ALERT_NEGATIVE_COUNT;
        let message = if triggered {
            format!("🚨 Alert: {} negative posts detected!", negative_count)
        } else {
            format!("Negative posts within normal range ({})", negative_count)
        };

        Self {
            triggered,
            negative_count,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_does_not_trigger() {
        let alert = Alert::evaluate(5);
        assert!(!alert.triggered);
        assert!(alert.message.contains('5'));
    }

    #[test]
    fn test_above_boundary_triggers() {
        let alert = Alert::evaluate(6);
        assert!(alert.triggered);
        assert!(alert.message.contains('6'));
    }

    #[test]
    fn test_zero_negatives() {
        let alert = Alert::evaluate(0);
        assert!(!alert.triggered);
        assert_eq!(alert.negative_count, 0);
    }

    #[test]
    fn test_message_carries_exact_count() {
        let alert = Alert::evaluate(42);
        assert!(alert.triggered);
        assert!(alert.message.contains("42"));
    }
}
