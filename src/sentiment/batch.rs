//! Batch classification over review sets.

use log::debug;
use serde::Serialize;

use crate::review::has_ascii_letter;
use crate::sentiment::classifier::SentimentClassifier;
use crate::sentiment::tally::SentimentTally;
use crate::sentiment::types::{PreviewLabel, SentimentLabel};

/// Labels for a review set, parallel to its order, plus their tally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub labels: Vec<SentimentLabel>,
    pub tally: SentimentTally,
}

/// One row of the raw-data preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    /// One-based position in the raw set.
    pub position: usize,
    pub review: String,
    pub label: PreviewLabel,
}

/// Classify every review in order.
///
/// The tally is computed from scratch on each call.
pub fn classify_all<S: AsRef<str>>(
    classifier: &dyn SentimentClassifier,
    reviews: &[S],
) -> Classification {
    let labels: Vec<SentimentLabel> = reviews
        .iter()
        .map(|review| classifier.classify(review.as_ref()))
        .collect();
    let tally: SentimentTally = labels.iter().copied().collect();

    debug!(
        "{} classified {} reviews: {:?}",
        classifier.name(),
        labels.len(),
        tally
    );

    Classification { labels, tally }
}

/// Label raw reviews for display.
///
/// Reviews without any ASCII letter are marked [`PreviewLabel::Invalid`]
/// instead of being classified.
pub fn preview<S: AsRef<str>>(
    classifier: &dyn SentimentClassifier,
    reviews: &[S],
) -> Vec<PreviewEntry> {
    reviews
        .iter()
        .enumerate()
        .map(|(i, review)| {
            let review = review.as_ref();
            let label = if has_ascii_letter(review) {
                PreviewLabel::Analyzed(classifier.classify(review))
            } else {
                PreviewLabel::Invalid
            };
            PreviewEntry {
                position: i + 1,
                review: review.to_string(),
                label,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::clean;
    use crate::sentiment::keyword_classifier::KeywordSentimentClassifier;

    #[test]
    fn test_classify_all_labels_and_tally() {
        let classifier = KeywordSentimentClassifier::default();
        let reviews = ["I love it", "awful problem", "it arrived"];

        let result = classify_all(&classifier, &reviews);

        assert_eq!(
            result.labels,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral
            ]
        );
        assert_eq!(result.tally.total(), 3);
        assert_eq!(result.tally.positive, 1);
        assert_eq!(result.tally.negative, 1);
        assert_eq!(result.tally.neutral, 1);
    }

    #[test]
    fn test_classify_all_empty() {
        let classifier = KeywordSentimentClassifier::default();
        let reviews: [&str; 0] = [];

        let result = classify_all(&classifier, &reviews);
        assert!(result.labels.is_empty());
        assert_eq!(result.tally, SentimentTally::default());
    }

    #[test]
    fn test_classify_all_is_not_cumulative() {
        let classifier = KeywordSentimentClassifier::default();
        let first = classify_all(&classifier, &["good", "bad"]);
        let second = classify_all(&classifier, &["good"]);

        assert_eq!(first.tally.total(), 2);
        assert_eq!(second.tally.total(), 1);
    }

    #[test]
    fn test_tally_conserves_cleaned_count() {
        let classifier = KeywordSentimentClassifier::default();
        let raw = [
            "Great product, I love it!",
            "bad quality",
            "Great product, I love it!",
            "   ",
            "1234",
            "okay item",
            "best and worst",
        ];
        let cleaned = clean(raw);

        let result = classify_all(&classifier, &cleaned);
        assert_eq!(result.tally.total(), cleaned.len());
        assert_eq!(result.labels.len(), cleaned.len());
    }

    #[test]
    fn test_preview_marks_invalid_reviews() {
        let classifier = KeywordSentimentClassifier::default();
        let raw = ["Great product, I love it!", "   ", "1234", "bad quality"];

        let entries = preview(&classifier, &raw);

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].position, 1);
        assert_eq!(
            entries[0].label,
            PreviewLabel::Analyzed(SentimentLabel::Positive)
        );
        assert_eq!(entries[1].label, PreviewLabel::Invalid);
        assert_eq!(entries[2].label, PreviewLabel::Invalid);
        assert_eq!(
            entries[3].label,
            PreviewLabel::Analyzed(SentimentLabel::Negative)
        );
        assert_eq!(entries[3].review, "bad quality");
    }

    #[test]
    fn test_preview_keeps_duplicates_and_whitespace() {
        let classifier = KeywordSentimentClassifier::default();
        let raw = ["  nice  ", "  nice  "];

        let entries = preview(&classifier, &raw);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].review, "  nice  ");
    }
}
