//! Analysis session state.
//!
//! A [`Session`] owns everything one run of the tool works on: the raw reviews
//! loaded at startup and, once the clean step has run, the cleaned reviews
//! with their labels and tally. Summary and chart requests read the latest
//! analysis and fail with a precondition error until one exists.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;

use crate::chart::ChartData;
use crate::error::{Result, SentilexError};
use crate::review::{CleanReport, CleanedReviewSet, RawReviewSet, ReviewLoader, clean_with_report};
use crate::sentiment::{
    Classification, PreviewEntry, SentimentClassifier, SentimentLabel, classify_all, preview,
};

/// Guidance shown when a summary or chart is requested before cleaning.
pub const CLEAN_FIRST_MESSAGE: &str = "Please clean the data first (choose option 2)";

/// Totals reported after cleaning and classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_valid_reviews: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// Result of one clean-and-analyze step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub cleaned: CleanedReviewSet,
    pub classification: Classification,
    pub report: CleanReport,
}

impl Analysis {
    pub fn summary(&self) -> Summary {
        let tally = &self.classification.tally;
        Summary {
            total_valid_reviews: tally.total(),
            positive: tally.positive,
            negative: tally.negative,
            neutral: tally.neutral,
        }
    }

    pub fn chart_data(&self) -> ChartData {
        ChartData::from_tally(&self.classification.tally)
    }

    /// Cleaned reviews paired with their labels.
    pub fn labeled(&self) -> impl Iterator<Item = (&str, SentimentLabel)> + '_ {
        self.cleaned
            .iter()
            .map(String::as_str)
            .zip(self.classification.labels.iter().copied())
    }
}

pub struct Session {
    raw: RawReviewSet,
    classifier: Box<dyn SentimentClassifier>,
    analysis: Option<Analysis>,
    missing_source: Option<PathBuf>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("raw_reviews", &self.raw.len())
            .field("classifier", &self.classifier.name())
            .field("cleaned", &self.analysis.is_some())
            .field("missing_source", &self.missing_source)
            .finish()
    }
}

impl Session {
    /// Start a session over reviews that are already loaded.
    pub fn new(raw: RawReviewSet, classifier: Box<dyn SentimentClassifier>) -> Self {
        Session {
            raw,
            classifier,
            analysis: None,
            missing_source: None,
        }
    }

    /// Load reviews from `path` and start a session.
    ///
    /// A missing file yields an empty session whose
    /// [`missing_source`](Self::missing_source) is set; other load errors are
    /// returned.
    pub fn open<P: AsRef<Path>>(
        path: P,
        loader: &ReviewLoader,
        classifier: Box<dyn SentimentClassifier>,
    ) -> Result<Self> {
        let path = path.as_ref();
        match loader.load(path) {
            Ok(raw) => Ok(Session::new(raw, classifier)),
            Err(SentilexError::NotFound { path }) => {
                warn!("review file {} not found, continuing without data", path.display());
                let mut session = Session::new(RawReviewSet::default(), classifier);
                session.missing_source = Some(path);
                Ok(session)
            }
            Err(e) => Err(e),
        }
    }

    pub fn raw(&self) -> &RawReviewSet {
        &self.raw
    }

    pub fn has_reviews(&self) -> bool {
        !self.raw.is_empty()
    }

    /// The path that could not be found when the session was opened.
    pub fn missing_source(&self) -> Option<&Path> {
        self.missing_source.as_deref()
    }

    /// Raw reviews with inline labels. Does not touch the cleaned analysis.
    pub fn preview(&self) -> Vec<PreviewEntry> {
        preview(self.classifier.as_ref(), &self.raw)
    }

    /// Clean the raw reviews and classify the result, replacing any earlier
    /// analysis.
    pub fn clean_and_analyze(&mut self) -> &Analysis {
        let (cleaned, report) = clean_with_report(&self.raw);
        info!("cleaned reviews = {}", cleaned.len());

        let classification = classify_all(self.classifier.as_ref(), &cleaned);
        self.analysis.insert(Analysis {
            cleaned,
            classification,
            report,
        })
    }

    pub fn is_cleaned(&self) -> bool {
        self.analysis.is_some()
    }

    /// The latest analysis.
    pub fn analysis(&self) -> Result<&Analysis> {
        self.analysis
            .as_ref()
            .ok_or_else(|| SentilexError::precondition(CLEAN_FIRST_MESSAGE))
    }

    pub fn summary(&self) -> Result<Summary> {
        self.analysis().map(Analysis::summary)
    }

    pub fn chart_data(&self) -> Result<ChartData> {
        self.analysis().map(Analysis::chart_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{MatchMode, PreviewLabel, new_keyword_based};

    fn session(reviews: &[&str]) -> Session {
        let raw = RawReviewSet::new(reviews.iter().map(|s| s.to_string()).collect());
        Session::new(raw, new_keyword_based(MatchMode::Substring))
    }

    #[test]
    fn test_summary_before_clean_is_precondition_error() {
        let session = session(&["good"]);

        let err = session.summary().unwrap_err();
        assert!(matches!(err, SentilexError::Precondition(_)));
        assert_eq!(err.to_string(), CLEAN_FIRST_MESSAGE);
        assert!(session.chart_data().is_err());
        assert!(!session.is_cleaned());
    }

    #[test]
    fn test_clean_and_analyze_summary() {
        let mut session = session(&[
            "Great product, I love it!",
            "bad quality",
            "Great product, I love it!",
            "   ",
            "1234",
            "okay item",
        ]);

        let analysis = session.clean_and_analyze();
        assert_eq!(
            analysis.cleaned.as_slice(),
            ["Great product, I love it!", "bad quality", "okay item"]
        );

        let summary = session.summary().unwrap();
        assert_eq!(
            summary,
            Summary {
                total_valid_reviews: 3,
                positive: 1,
                negative: 1,
                neutral: 1,
            }
        );
    }

    #[test]
    fn test_repeat_clean_replaces_analysis() {
        let mut session = session(&["good", "bad", "good"]);
        session.clean_and_analyze();
        let first = session.summary().unwrap();
        session.clean_and_analyze();
        let second = session.summary().unwrap();

        assert_eq!(first, second);
        assert_eq!(second.total_valid_reviews, 2);
    }

    #[test]
    fn test_empty_after_cleaning() {
        let mut session = session(&["", "123", "   "]);
        session.clean_and_analyze();

        let summary = session.summary().unwrap();
        assert_eq!(summary.total_valid_reviews, 0);
        assert_eq!(session.chart_data().unwrap().counts, [0, 0, 0]);
    }

    #[test]
    fn test_preview_independent_of_cleaning() {
        let mut session = session(&["love", "love", "!!"]);
        let before = session.preview();
        session.clean_and_analyze();
        let after = session.preview();

        assert_eq!(before, after);
        assert_eq!(before.len(), 3);
        assert_eq!(before[2].label, PreviewLabel::Invalid);
    }

    #[test]
    fn test_labeled_pairs() {
        let mut session = session(&["awful", "perfect"]);
        let analysis = session.clean_and_analyze();

        let pairs: Vec<_> = analysis.labeled().collect();
        assert_eq!(
            pairs,
            vec![
                ("awful", SentimentLabel::Negative),
                ("perfect", SentimentLabel::Positive)
            ]
        );
    }

    #[test]
    fn test_open_missing_file() {
        let session = Session::open(
            "/nonexistent/reviews.csv",
            &ReviewLoader::new(),
            new_keyword_based(MatchMode::Substring),
        )
        .unwrap();

        assert!(!session.has_reviews());
        assert_eq!(
            session.missing_source(),
            Some(Path::new("/nonexistent/reviews.csv"))
        );
    }
}
