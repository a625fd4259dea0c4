//! Review cleaning.
//!
//! Cleaning turns the raw review list into the canonical list used for
//! analysis. Each review is trimmed, then dropped if it is blank, an exact
//! repeat of an already accepted review, or free of ASCII letters. Survivors
//! keep the order in which they were first accepted.
//!
//! # Examples
//!
//! ```
//! use sentilex::review::clean;
//!
//! let raw = ["Great product, I love it!", "bad quality", "Great product, I love it!", "   ", "1234"];
//! let cleaned = clean(raw);
//!
//! assert_eq!(cleaned.as_slice(), ["Great product, I love it!", "bad quality"]);
//! ```

use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use crate::review::set::CleanedReviewSet;

/// Counts of what a cleaning pass kept and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub input: usize,
    pub accepted: usize,
    pub blank: usize,
    pub duplicate: usize,
    pub no_letters: usize,
}

/// Whether the text contains at least one ASCII letter (a-z or A-Z).
pub fn has_ascii_letter(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_alphabetic())
}

/// Clean a sequence of reviews.
pub fn clean<I, S>(reviews: I) -> CleanedReviewSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    clean_with_report(reviews).0
}

/// Clean a sequence of reviews and report how many were dropped, and why.
pub fn clean_with_report<I, S>(reviews: I) -> (CleanedReviewSet, CleanReport)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = CleanReport::default();
    let mut accepted: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for review in reviews {
        report.input += 1;
        let trimmed = review.as_ref().trim();

        if trimmed.is_empty() {
            report.blank += 1;
            continue;
        }

        // Case-sensitive: "Good" and "good" are different reviews.
        if seen.contains(trimmed) {
            report.duplicate += 1;
            continue;
        }

        if !has_ascii_letter(trimmed) {
            report.no_letters += 1;
            continue;
        }

        seen.insert(trimmed.to_string());
        accepted.push(trimmed.to_string());
    }

    report.accepted = accepted.len();
    debug!(
        "cleaned {} reviews: {} accepted, {} blank, {} duplicate, {} without letters",
        report.input, report.accepted, report.blank, report.duplicate, report.no_letters
    );

    (CleanedReviewSet::from_accepted(accepted), report)
}
