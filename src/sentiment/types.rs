//! Common types for sentiment classification.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Sentiment classification of a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// More positive than negative keyword hits.
    Positive,
    /// More negative than positive keyword hits.
    Negative,
    /// Equal hits on both sides, including none.
    Neutral,
}

impl SentimentLabel {
    /// All labels in chart order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label shown next to a raw review in the preview listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewLabel {
    /// The review has letters and was classified.
    Analyzed(SentimentLabel),
    /// The review has no letters and was skipped.
    Invalid,
}

impl PreviewLabel {
    pub fn sentiment(&self) -> Option<SentimentLabel> {
        match self {
            PreviewLabel::Analyzed(label) => Some(*label),
            PreviewLabel::Invalid => None,
        }
    }
}

impl fmt::Display for PreviewLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewLabel::Analyzed(label) => label.fmt(f),
            PreviewLabel::Invalid => f.write_str("Not Analyzed / Invalid"),
        }
    }
}

/// How keywords are matched against review text.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// A keyword counts when it appears anywhere, even inside a longer word
    /// ("best" matches "bested").
    #[default]
    Substring,
    /// A keyword counts only when it is a whole word of the review.
    WholeWord,
}
