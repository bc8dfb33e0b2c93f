//! # Text Analysis Demo
//!
//! Scores and classifies a handful of sample posts without touching the API.

use brand_pulse::{PolarityScorer, SentimentClassifier, SentimentLabel};

fn main() {
    println!("=== Sentiment Classification Demo ===\n");

    let classifier = SentimentClassifier::with_scorer(PolarityScorer::new());

    let samples = [
        "Loving the new flavor! Best purchase this year 😍",
        "Terrible experience, the package arrived broken 😠",
        "It's a soda. It exists. That's about it.",
        "Not good. Really not good at all.",
        "Customer support was very helpful, thanks!",
        "Absolutely the worst service I have ever seen 🤬",
    ];

    for text in samples {
        let (score, label) = classifier.score_and_classify(text);
        let marker = match label {
            SentimentLabel::Positive => "🟢",
            SentimentLabel::Negative => "🔴",
            SentimentLabel::Neutral => "🟡",
        };
        println!("{} [{:+.3}] {:12} \"{}\"", marker, score, label.as_str(), text);
    }

    println!("\nDone. Scores are in [-1, 1]; labels flip strictly past ±0.2.");
}
