//! # Sentilex
//!
//! Keyword-lexicon sentiment analysis for product review exports.
//!
//! ## Pipeline
//!
//! - Load: read the review column of a delimited file into a raw review set
//! - Clean: trim, drop blanks, exact duplicates and letterless entries
//! - Classify: count distinct positive and negative keyword hits per review
//! - Report: per-label tally, summary and a three-bar chart

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod review;
pub mod sentiment;
pub mod session;

pub mod prelude {
    pub use crate::error::{Result, SentilexError};
    pub use crate::review::{CleanedReviewSet, RawReviewSet, ReviewLoader, clean};
    pub use crate::sentiment::{
        MatchMode, SentimentClassifier, SentimentLabel, SentimentTally, classify_all, preview,
    };
    pub use crate::session::Session;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
