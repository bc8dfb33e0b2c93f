//! # Report Rendering
//!
//! Terminal rendering of analysis results and run errors. Pure
//! string-building so the front end just prints.

use crate::analysis::AnalysisResult;
use crate::defaults;
use crate::error::TrackerError;
use crate::sentiment::SentimentLabel;

/// Width of the distribution bars in characters
const BAR_WIDTH: usize = 30;

/// Render the full summary for one analysis run
///
/// Sections: label distribution, average-polarity metric with a direction
/// delta, sample preview, and the alert banner when triggered.
pub fn render_summary(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let total = result.counts.total();

    out.push_str("📊 Sentiment Breakdown\n");
    out.push_str("──────────────────────\n");
    for label in [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ] {
        let count = result.counts.for_label(label);
        let share = count as f64 / total as f64;
        let bar_len = (share * BAR_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "{:12} {:>3} ({:>5.1}%) {}\n",
            label.display_label(),
            count,
            share * 100.0,
            "█".repeat(bar_len)
        ));
    }

    // The delta direction intentionally uses a bare sign test, not the
    // classification thresholds; a zero mean renders as Negative. Observed
    // behavior, kept as-is.
    let delta = if result.mean_polarity > 0.0 {
        "Positive 😊"
    } else {
        "Negative 😠"
    };
    out.push_str(&format!(
        "\nAverage Sentiment Score: {:.2} ({})\n",
        result.mean_polarity, delta
    ));

    out.push_str(&format!("\nSample Post:\n  {}\n", result.sample_preview));

    if result.alert.triggered {
        out.push_str(&format!("\n{}\n", result.alert.message));
    }

    out
}

/// Render a run-ending error as a user-facing line
///
/// Warnings (empty term, no results) render softly; everything else is an
/// error line with the description truncated to the preview length.
pub fn render_error(error: &TrackerError) -> String {
    match error {
        TrackerError::MissingCredentials { .. } => {
            format!("🔐 {} - contact admin", error)
        }
        TrackerError::EmptyQuery => "Please enter a search term.".to_string(),
        TrackerError::NoResults { term } => {
            format!("⚠️  No posts found for '{}'", term)
        }
        TrackerError::Api(inner) => {
            format!("Error: {}", truncate_chars(&inner.to_string(), defaults::ERROR_PREVIEW_CHARS))
        }
    }
}

/// Truncate to a character budget with a marker
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let cut: String = text.chars().take(limit).collect();
        format!("{}{}", cut, defaults::PREVIEW_MARKER)
    } else {
        text.to_string()
    }
}
