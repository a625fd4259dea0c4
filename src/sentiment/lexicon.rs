//! Fixed sentiment lexicons.

/// Positive keywords, lowercase.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "excellent",
    "amazing",
    "awesome",
    "nice",
    "love",
    "satisfied",
    "happy",
    "best",
    "perfect",
];

/// Negative keywords, lowercase.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "poor",
    "worst",
    "hate",
    "disappointed",
    "terrible",
    "awful",
    "problem",
    "boring",
    "waste",
];

/// The positive and negative keyword lists used for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordLists {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

impl KeywordLists {
    pub const DEFAULT: KeywordLists = KeywordLists {
        positive: POSITIVE_KEYWORDS,
        negative: NEGATIVE_KEYWORDS,
    };
}

impl Default for KeywordLists {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_lists_are_lowercase_and_distinct() {
        let positive: HashSet<_> = POSITIVE_KEYWORDS.iter().collect();
        let negative: HashSet<_> = NEGATIVE_KEYWORDS.iter().collect();

        assert_eq!(positive.len(), 10);
        assert_eq!(negative.len(), 10);
        assert!(positive.is_disjoint(&negative));

        for word in POSITIVE_KEYWORDS.iter().chain(NEGATIVE_KEYWORDS) {
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
