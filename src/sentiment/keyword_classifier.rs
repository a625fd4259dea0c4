//! Keyword-based sentiment classifier.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::sentiment::classifier::SentimentClassifier;
use crate::sentiment::lexicon::KeywordLists;
use crate::sentiment::types::{MatchMode, SentimentLabel};

/// Keyword-based sentiment classifier.
///
/// Counts how many distinct keywords of each list occur in the lowercased
/// review. A keyword contributes at most once, however often it appears.
#[derive(Debug, Clone)]
pub struct KeywordSentimentClassifier {
    keywords: KeywordLists,
    match_mode: MatchMode,
}

impl Default for KeywordSentimentClassifier {
    fn default() -> Self {
        Self::new(KeywordLists::DEFAULT, MatchMode::Substring)
    }
}

impl KeywordSentimentClassifier {
    /// Create a new keyword-based sentiment classifier.
    pub fn new(keywords: KeywordLists, match_mode: MatchMode) -> Self {
        Self {
            keywords,
            match_mode,
        }
    }

    /// Number of distinct positive and negative keywords found in the review.
    pub fn score(&self, review: &str) -> (usize, usize) {
        let text = review.to_lowercase();

        match self.match_mode {
            MatchMode::Substring => (
                count_substring_hits(&text, self.keywords.positive),
                count_substring_hits(&text, self.keywords.negative),
            ),
            MatchMode::WholeWord => {
                let words: HashSet<&str> = text.unicode_words().collect();
                (
                    count_word_hits(&words, self.keywords.positive),
                    count_word_hits(&words, self.keywords.negative),
                )
            }
        }
    }
}

fn count_substring_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(**kw)).count()
}

fn count_word_hits(words: &HashSet<&str>, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| words.contains(*kw)).count()
}

impl SentimentClassifier for KeywordSentimentClassifier {
    fn classify(&self, review: &str) -> SentimentLabel {
        let (positive, negative) = self.score(review);

        if positive > negative {
            SentimentLabel::Positive
        } else if negative > positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    fn name(&self) -> &str {
        match self.match_mode {
            MatchMode::Substring => "keyword",
            MatchMode::WholeWord => "keyword-whole-word",
        }
    }
}
