//! # Emoji Signals
//!
//! Emoji polarity table. Runs over the raw post text so preprocessing
//! cannot strip the signal. Social posts often carry their sentiment in
//! emoji alone.

use std::collections::HashMap;

/// Result of scanning a text for emoji signals
#[derive(Debug, Clone)]
pub struct EmojiScore {
    /// Average polarity of the emoji found (-1.0 to 1.0), 0.0 if none
    pub score: f64,
    /// Number of scored emoji found
    pub count: usize,
    /// The emoji found with their scores
    pub found: Vec<(char, f64)>,
}

/// Emoji polarity scanner
#[derive(Debug, Clone)]
pub struct EmojiSignals {
    /// Emoji to polarity mapping
    scores: HashMap<char, f64>,
}

impl Default for EmojiSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiSignals {
    /// Create a scanner with the default emoji table
    pub fn new() -> Self {
        let scores: HashMap<char, f64> = [
            // Positive
            ('😍', 0.9),
            ('🥰', 0.9),
            ('😊', 0.7),
            ('😁', 0.7),
            ('😀', 0.6),
            ('🙂', 0.4),
            ('😂', 0.5),
            ('🤣', 0.5),
            ('👍', 0.6),
            ('🙌', 0.7),
            ('🎉', 0.8),
            ('🔥', 0.6),
            ('💯', 0.8),
            ('⭐', 0.6),
            ('🚀', 0.7),
            ('❤', 0.8),
            ('💕', 0.8),
            ('🤩', 0.85),
            ('😋', 0.6),
            // Negative
            ('😠', -0.7),
            ('😡', -0.85),
            ('🤬', -0.95),
            ('😤', -0.6),
            ('😞', -0.6),
            ('😢', -0.6),
            ('😭', -0.7),
            ('😒', -0.5),
            ('🙄', -0.45),
            ('😑', -0.3),
            ('👎', -0.6),
            ('💔', -0.75),
            ('🤮', -0.9),
            ('🤢', -0.8),
            ('😩', -0.6),
            ('😫', -0.6),
            ('⚠', -0.4),
        ]
        .into_iter()
        .collect();

        Self { scores }
    }

    /// Scan a text for scored emoji
    pub fn analyze(&self, text: &str) -> EmojiScore {
        let found: Vec<(char, f64)> = text
            .chars()
            .filter_map(|c| self.scores.get(&c).map(|s| (c, *s)))
            .collect();

        let count = found.len();
        let score = if count == 0 {
            0.0
        } else {
            found.iter().map(|(_, s)| s).sum::<f64>() / count as f64
        };

        EmojiScore { score, count, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_emoji() {
        let signals = EmojiSignals::new();
        let result = signals.analyze("Loving it! 😍");
        assert_eq!(result.count, 1);
        assert!(result.score > 0.5);
    }

    #[test]
    fn test_negative_emoji() {
        let signals = EmojiSignals::new();
        let result = signals.analyze("Terrible! 😠");
        assert_eq!(result.count, 1);
        assert!(result.score < -0.5);
    }

    #[test]
    fn test_no_emoji() {
        let signals = EmojiSignals::new();
        let result = signals.analyze("plain text only");
        assert_eq!(result.count, 0);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_mixed_emoji_average() {
        let signals = EmojiSignals::new();
        let result = signals.analyze("😍 😠");
        assert_eq!(result.count, 2);
        assert!((result.score - 0.1).abs() < 1e-9);
    }
}
