//! Error types for the Sentilex library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SentilexError`] enum. A few variants describe conditions the command
//! loop recovers from locally (a missing input file, a summary requested
//! before cleaning, an unknown menu choice); everything else is fatal for the
//! session.
//!
//! # Examples
//!
//! ```
//! use sentilex::error::{Result, SentilexError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentilexError::precondition("Please clean the data first"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) if e.is_recoverable() => println!("{e}"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Sentilex operations.
#[derive(Error, Debug)]
pub enum SentilexError {
    /// I/O errors (file operations, terminal reads and writes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Delimited-text parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The review source does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// An operation was requested before the state it depends on exists.
    #[error("{0}")]
    Precondition(String),

    /// Unrecognized menu input.
    #[error("{0}")]
    InvalidChoice(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SentilexError.
pub type Result<T> = std::result::Result<T, SentilexError>;

impl SentilexError {
    /// Create a new not found error for the given source path.
    pub fn not_found<P: Into<PathBuf>>(path: P) -> Self {
        SentilexError::NotFound { path: path.into() }
    }

    /// Create a new precondition error.
    pub fn precondition<S: Into<String>>(msg: S) -> Self {
        SentilexError::Precondition(msg.into())
    }

    /// Create a new invalid choice error.
    pub fn invalid_choice<S: Into<String>>(msg: S) -> Self {
        SentilexError::InvalidChoice(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SentilexError::Config(msg.into())
    }

    /// Create a new chart error.
    pub fn chart<S: Into<String>>(msg: S) -> Self {
        SentilexError::Chart(msg.into())
    }

    /// Whether the command loop handles this error with a message and carries on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SentilexError::NotFound { .. }
                | SentilexError::Precondition(_)
                | SentilexError::InvalidChoice(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SentilexError::config("bad delimiter");
        assert_eq!(error.to_string(), "Configuration error: bad delimiter");

        let error = SentilexError::not_found("reviews.csv");
        assert_eq!(error.to_string(), "File not found: reviews.csv");

        let error = SentilexError::precondition("Please clean the data first (choose option 2)");
        assert_eq!(
            error.to_string(),
            "Please clean the data first (choose option 2)"
        );
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(SentilexError::not_found("x.csv").is_recoverable());
        assert!(SentilexError::precondition("p").is_recoverable());
        assert!(SentilexError::invalid_choice("Invalid choice").is_recoverable());
        assert!(!SentilexError::chart("backend").is_recoverable());
        assert!(!SentilexError::config("bad delimiter").is_recoverable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = SentilexError::from(io_error);

        match error {
            SentilexError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
