//! # Polarity Scorer
//!
//! Continuous polarity scoring in [-1.0, 1.0]. Combines lexicon word
//! matching (with negation and intensity handling) on preprocessed text
//! with emoji signals scanned over the raw text.

use crate::data::TextPreprocessor;
use crate::sentiment::emoji::EmojiSignals;
use crate::sentiment::lexicon::PolarityLexicon;

/// Words after a negation that it still applies to
const NEGATION_WINDOW: usize = 3;

/// Damping applied when a negation inverts a word score
const NEGATION_DAMPING: f64 = 0.8;

/// Weight of the lexicon score when both signals are present
const LEXICON_WEIGHT: f64 = 0.6;

/// Weight of the emoji score when both signals are present
const EMOJI_WEIGHT: f64 = 0.4;

/// Lexicon/rule-based polarity scorer
///
/// Total over any string input: unmatched text scores 0.0, and the result
/// is always within [-1.0, 1.0].
pub struct PolarityScorer {
    preprocessor: TextPreprocessor,
    lexicon: PolarityLexicon,
    emoji: EmojiSignals,
}

impl Default for PolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer {
    /// Create a scorer with the default lexicon and emoji table
    pub fn new() -> Self {
        Self {
            preprocessor: TextPreprocessor::new(),
            lexicon: PolarityLexicon::new(),
            emoji: EmojiSignals::new(),
        }
    }

    /// Use a custom lexicon
    pub fn with_lexicon(mut self, lexicon: PolarityLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Score a text's polarity in [-1.0, 1.0]
    pub fn score(&self, text: &str) -> f64 {
        let clean = self.preprocessor.preprocess(text);
        let (lexicon_score, word_count) = self.lexicon_score(&clean);

        // Emoji are scanned on the raw text; preprocessing must not be able
        // to hide them.
        let emoji_result = self.emoji.analyze(text);

        let combined = if word_count == 0 && emoji_result.count == 0 {
            0.0
        } else if word_count == 0 {
            emoji_result.score
        } else if emoji_result.count == 0 {
            lexicon_score
        } else {
            LEXICON_WEIGHT * lexicon_score + EMOJI_WEIGHT * emoji_result.score
        };

        combined.clamp(-1.0, 1.0)
    }

    /// Score the lexicon signal; returns (average word score, matched count)
    fn lexicon_score(&self, clean_text: &str) -> (f64, usize) {
        let mut total = 0.0;
        let mut count = 0usize;
        let mut current_modifier = 1.0;
        let mut negation_active = false;
        let mut words_since_negation = 0usize;

        for raw_token in clean_text.split_whitespace() {
            let token = raw_token.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
            if token.is_empty() {
                continue;
            }

            if self.lexicon.is_negation(token) {
                negation_active = true;
                words_since_negation = 0;
                continue;
            }

            if let Some(factor) = self.lexicon.get_modifier(token) {
                current_modifier = factor;
                continue;
            }

            if let Some(base_score) = self.lexicon.get_score(token) {
                let mut score = base_score * current_modifier;

                if negation_active && words_since_negation < NEGATION_WINDOW {
                    score = -score * NEGATION_DAMPING;
                    negation_active = false;
                }

                total += score.clamp(-1.0, 1.0);
                count += 1;
                current_modifier = 1.0;
            }

            if negation_active {
                words_since_negation += 1;
                if words_since_negation >= NEGATION_WINDOW {
                    negation_active = false;
                }
            }
        }

        if count == 0 {
            (0.0, 0)
        } else {
            (total / count as f64, count)
        }
    }
}
