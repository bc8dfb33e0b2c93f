//! # Tracker Errors
//!
//! Run-level error type for the tracking pipeline. Each variant maps to a
//! distinct user-facing outcome so front ends can branch without matching
//! on message strings.

use crate::api::TwitterError;
use thiserror::Error;

/// Errors that can end a tracking run
#[derive(Error, Debug)]
pub enum TrackerError {
    /// One or more API credentials are absent. Fatal: nothing is fetched.
    #[error("missing API credentials: {}", missing.join(", "))]
    MissingCredentials { missing: Vec<String> },

    /// The search term was empty or whitespace. The fetch is never invoked.
    #[error("search term is empty")]
    EmptyQuery,

    /// The search returned zero posts. A warning, not a failure.
    #[error("no posts found for '{term}'")]
    NoResults { term: String },

    /// Anything that went wrong talking to the data source.
    #[error(transparent)]
    Api(#[from] TwitterError),
}

impl TrackerError {
    /// Whether this outcome should be surfaced as a warning rather than
    /// an error. The run still ends either way.
    pub fn is_warning(&self) -> bool {
        matches!(self, TrackerError::NoResults { .. } | TrackerError::EmptyQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_message() {
        let err = TrackerError::MissingCredentials {
            missing: vec!["TWITTER_API_KEY".to_string(), "TWITTER_BEARER_TOKEN".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("TWITTER_API_KEY"));
        assert!(msg.contains("TWITTER_BEARER_TOKEN"));
    }

    #[test]
    fn test_warning_classification() {
        assert!(TrackerError::NoResults { term: "x".into() }.is_warning());
        assert!(TrackerError::EmptyQuery.is_warning());
        assert!(!TrackerError::MissingCredentials { missing: vec![] }.is_warning());
    }
}
