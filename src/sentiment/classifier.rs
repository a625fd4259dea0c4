//! Sentiment classifier trait definition.

use crate::sentiment::types::SentimentLabel;

/// Sentiment classifier trait.
///
/// Classification is pure: the same review always gets the same label.
pub trait SentimentClassifier: Send + Sync {
    /// Classify a single review.
    fn classify(&self, review: &str) -> SentimentLabel;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
