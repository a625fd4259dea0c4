//! Ordered review collections.

use std::ops::Deref;

use serde::Serialize;

/// Reviews exactly as loaded, in file order.
///
/// Duplicates, blank entries and symbol-only entries are all kept; the set is
/// never modified after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawReviewSet {
    reviews: Vec<String>,
}

impl RawReviewSet {
    pub fn new(reviews: Vec<String>) -> Self {
        RawReviewSet { reviews }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.reviews
    }
}

impl Deref for RawReviewSet {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.reviews
    }
}

impl From<Vec<String>> for RawReviewSet {
    fn from(reviews: Vec<String>) -> Self {
        RawReviewSet::new(reviews)
    }
}

impl<'a> IntoIterator for &'a RawReviewSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.reviews.iter()
    }
}

/// Trimmed, deduplicated reviews in first-acceptance order.
///
/// Only [`clean`](crate::review::clean) builds this type, so every element is
/// non-empty, unique and contains at least one ASCII letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CleanedReviewSet {
    reviews: Vec<String>,
}

impl CleanedReviewSet {
    pub(crate) fn from_accepted(reviews: Vec<String>) -> Self {
        CleanedReviewSet { reviews }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.reviews
    }
}

impl Deref for CleanedReviewSet {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.reviews
    }
}

impl<'a> IntoIterator for &'a CleanedReviewSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.reviews.iter()
    }
}
