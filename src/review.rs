//! Review ingestion: loading raw records and cleaning them into a canonical set.

pub mod cleaner;
pub mod loader;
pub mod set;

pub use cleaner::{CleanReport, clean, clean_with_report, has_ascii_letter};
pub use loader::ReviewLoader;
pub use set::{CleanedReviewSet, RawReviewSet};
