//! Keyword-based sentiment classification.
//!
//! Each review is lowercased and scored against two fixed keyword lists. The
//! side with more distinct keyword hits wins; a tie, including no hits at all,
//! is neutral.
//!
//! # Architecture
//!
//! - `SentimentClassifier` trait: common interface for classifiers
//! - `KeywordSentimentClassifier`: lexicon matching implementation
//! - `KeywordLists`: the fixed positive and negative lexicons
//! - `classify_all` / `preview`: batch drivers producing labels and a tally
//!
//! # Example
//!
//! ```
//! use sentilex::sentiment::{self, MatchMode, SentimentClassifier, SentimentLabel};
//!
//! let classifier = sentiment::new_keyword_based(MatchMode::Substring);
//!
//! assert_eq!(
//!     classifier.classify("This is the BEST purchase, I love it"),
//!     SentimentLabel::Positive
//! );
//!
//! let reviews = ["bad quality", "okay item"];
//! let analysis = sentiment::classify_all(classifier.as_ref(), &reviews);
//! assert_eq!(analysis.tally.negative, 1);
//! assert_eq!(analysis.tally.neutral, 1);
//! ```

mod batch;
mod classifier;
mod factory;
mod keyword_classifier;
mod lexicon;
mod tally;
mod types;

pub use batch::{Classification, PreviewEntry, classify_all, preview};
pub use classifier::SentimentClassifier;
pub use factory::{new_keyword_based, new_keyword_based_with_config};
pub use keyword_classifier::KeywordSentimentClassifier;
pub use lexicon::{KeywordLists, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
pub use tally::SentimentTally;
pub use types::{MatchMode, PreviewLabel, SentimentLabel};
