//! # Text Preprocessing
//!
//! Cleaning applied to post text before lexicon matching. Emoji scoring runs
//! on the raw text, so emoji survive untouched here.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Text preprocessor for social-media post text
pub struct TextPreprocessor {
    /// Regex for URL removal
    url_regex: Regex,
    /// Regex for mention removal
    mention_regex: Regex,
    /// Regex for hashtag markers (the tag word itself is kept)
    hashtag_regex: Regex,
    /// Regex for multiple whitespace
    whitespace_regex: Regex,
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPreprocessor {
    /// Create a new text preprocessor
    pub fn new() -> Self {
        Self {
            url_regex: Regex::new(r"https?://\S+|www\.\S+").unwrap(),
            mention_regex: Regex::new(r"@\w+").unwrap(),
            hashtag_regex: Regex::new(r"#(\w+)").unwrap(),
            whitespace_regex: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Preprocess text for lexicon matching
    ///
    /// Steps:
    /// 1. Unicode normalization (NFC)
    /// 2. Remove URLs
    /// 3. Remove @mentions
    /// 4. Strip hashtag markers, keeping the tag word
    /// 5. Convert to lowercase
    /// 6. Normalize whitespace
    ///
    /// Empty or whitespace-only input comes back as an empty string; no
    /// special-casing beyond that.
    pub fn preprocess(&self, text: &str) -> String {
        let normalized: String = text.nfc().collect();

        let no_urls = self.url_regex.replace_all(&normalized, "");
        let no_mentions = self.mention_regex.replace_all(&no_urls, "");
        let no_hashtags = self.hashtag_regex.replace_all(&no_mentions, "$1");

        let lowercase = no_hashtags.to_lowercase();
        let clean = self.whitespace_regex.replace_all(&lowercase, " ");

        clean.trim().to_string()
    }
}
