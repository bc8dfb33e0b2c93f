//! # Polarity Lexicon
//!
//! General-purpose word lexicon for consumer/brand language, with intensity
//! modifiers and negation words.

use std::collections::{HashMap, HashSet};

/// Word-polarity lexicon
#[derive(Debug, Clone)]
pub struct PolarityLexicon {
    /// Word to polarity score mapping (-1.0 to 1.0)
    words: HashMap<String, f64>,
    /// Intensity modifiers (multipliers applied to the following word)
    modifiers: HashMap<String, f64>,
    /// Negation words
    negations: HashSet<String>,
}

impl Default for PolarityLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityLexicon {
    /// Create a new lexicon with the default word tables
    pub fn new() -> Self {
        let mut words = HashMap::new();

        // Strongly positive (0.7 - 1.0)
        let strong_positive = [
            ("amazing", 0.85),
            ("awesome", 0.8),
            ("excellent", 0.85),
            ("fantastic", 0.85),
            ("incredible", 0.85),
            ("outstanding", 0.85),
            ("perfect", 0.9),
            ("wonderful", 0.8),
            ("brilliant", 0.8),
            ("love", 0.75),
            ("loving", 0.75),
            ("loved", 0.75),
            ("best", 0.8),
            ("superb", 0.8),
            ("delighted", 0.8),
            ("impressed", 0.7),
            ("thrilled", 0.8),
        ];

        // Moderately positive (0.3 - 0.6)
        let moderate_positive = [
            ("good", 0.5),
            ("great", 0.65),
            ("nice", 0.45),
            ("happy", 0.55),
            ("like", 0.4),
            ("enjoy", 0.5),
            ("enjoyed", 0.5),
            ("solid", 0.4),
            ("smooth", 0.4),
            ("fast", 0.35),
            ("helpful", 0.5),
            ("friendly", 0.5),
            ("recommend", 0.55),
            ("recommended", 0.55),
            ("fresh", 0.4),
            ("tasty", 0.5),
            ("delicious", 0.6),
            ("quality", 0.35),
            ("reliable", 0.45),
            ("value", 0.35),
            ("improved", 0.45),
            ("works", 0.3),
            ("fan", 0.4),
            ("excited", 0.55),
            ("glad", 0.45),
            ("thanks", 0.4),
            ("thank", 0.4),
            ("cares", 0.4),
        ];

        // Strongly negative (-0.7 to -1.0)
        let strong_negative = [
            ("terrible", -0.85),
            ("horrible", -0.85),
            ("awful", -0.8),
            ("worst", -0.9),
            ("disgusting", -0.9),
            ("hate", -0.8),
            ("hated", -0.8),
            ("garbage", -0.8),
            ("useless", -0.75),
            ("scam", -0.9),
            ("fraud", -0.9),
            ("unacceptable", -0.8),
            ("furious", -0.8),
            ("disaster", -0.85),
            ("nightmare", -0.8),
        ];

        // Moderately negative (-0.3 to -0.6)
        let moderate_negative = [
            ("bad", -0.5),
            ("poor", -0.5),
            ("disappointing", -0.6),
            ("disappointed", -0.6),
            ("broken", -0.55),
            ("slow", -0.4),
            ("annoying", -0.5),
            ("frustrating", -0.55),
            ("frustrated", -0.55),
            ("angry", -0.6),
            ("upset", -0.5),
            ("rude", -0.6),
            ("expensive", -0.35),
            ("overpriced", -0.5),
            ("stale", -0.45),
            ("dirty", -0.5),
            ("wrong", -0.4),
            ("problem", -0.4),
            ("problems", -0.4),
            ("issue", -0.35),
            ("issues", -0.35),
            ("fail", -0.55),
            ("failed", -0.55),
            ("failure", -0.6),
            ("refund", -0.35),
            ("complaint", -0.45),
            ("waste", -0.55),
            ("avoid", -0.5),
            ("down", -0.3),
            ("downhill", -0.55),
            ("unhappy", -0.55),
            ("mediocre", -0.35),
        ];

        for (word, score) in strong_positive
            .iter()
            .chain(moderate_positive.iter())
            .chain(strong_negative.iter())
            .chain(moderate_negative.iter())
        {
            words.insert(word.to_string(), *score);
        }

        let modifiers: HashMap<String, f64> = [
            ("very", 1.5),
            ("really", 1.4),
            ("extremely", 1.8),
            ("absolutely", 1.7),
            ("totally", 1.5),
            ("so", 1.3),
            ("super", 1.5),
            ("incredibly", 1.7),
            ("quite", 1.2),
            ("somewhat", 0.7),
            ("slightly", 0.5),
            ("barely", 0.4),
            ("kinda", 0.7),
            ("pretty", 1.2),
        ]
        .into_iter()
        .map(|(word, factor)| (word.to_string(), factor))
        .collect();

        let negations: HashSet<String> = [
            "not", "no", "never", "neither", "nobody", "nothing", "cannot",
            "can't", "won't", "don't", "doesn't", "didn't", "isn't", "aren't",
            "wasn't", "weren't", "couldn't", "wouldn't", "shouldn't",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            words,
            modifiers,
            negations,
        }
    }

    /// Get the polarity score of a word, if known
    pub fn get_score(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    /// Get the intensity factor of a modifier word, if known
    pub fn get_modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }

    /// Whether the word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// Number of scored words in the lexicon
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no scored words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_scores() {
        let lexicon = PolarityLexicon::new();
        assert!(lexicon.get_score("terrible").unwrap() < -0.7);
        assert!(lexicon.get_score("loving").unwrap() > 0.7);
        assert!(lexicon.get_score("meh").is_none());
    }

    #[test]
    fn test_scores_within_range() {
        let lexicon = PolarityLexicon::new();
        assert!(!lexicon.is_empty());
        for word in ["amazing", "good", "bad", "worst"] {
            let score = lexicon.get_score(word).unwrap();
            assert!((-1.0..=1.0).contains(&score), "{} out of range", word);
        }
    }

    #[test]
    fn test_modifiers_and_negations() {
        let lexicon = PolarityLexicon::new();
        assert!(lexicon.get_modifier("very").unwrap() > 1.0);
        assert!(lexicon.get_modifier("slightly").unwrap() < 1.0);
        assert!(lexicon.is_negation("not"));
        assert!(!lexicon.is_negation("very"));
    }
}
