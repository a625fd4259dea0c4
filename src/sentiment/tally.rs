//! Per-label review counts.

use serde::{Deserialize, Serialize};

use crate::sentiment::types::SentimentLabel;

/// Counts of each sentiment label across a review set.
///
/// The three counters always sum to the number of labels recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more review with the given label.
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// (label, count) pairs in chart order: Positive, Negative, Neutral.
    pub fn pairs(&self) -> [(SentimentLabel, usize); 3] {
        SentimentLabel::ALL.map(|label| (label, self.count(label)))
    }
}

impl FromIterator<SentimentLabel> for SentimentTally {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(iter: I) -> Self {
        let mut tally = SentimentTally::new();
        for label in iter {
            tally.record(label);
        }
        tally
    }
}
