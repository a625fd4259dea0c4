//! Configuration for loading, classifying and charting reviews.
//!
//! Every section has a default, so a configuration file only needs the keys it
//! changes:
//!
//! ```json
//! {
//!     "loader": { "delimiter": ";" },
//!     "classifier": { "match_mode": "whole_word" }
//! }
//! ```
//!
//! The keyword lists are not part of the configuration.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentilexError};
use crate::sentiment::MatchMode;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentilexConfig {
    /// How the review file is parsed.
    pub loader: LoaderConfig,
    /// How reviews are matched against the keyword lists.
    pub classifier: ClassifierConfig,
    /// Chart captions and dimensions.
    pub chart: ChartConfig,
}

impl SentilexConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: SentilexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if !self.loader.delimiter.is_ascii() {
            return Err(SentilexError::config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.loader.delimiter
            )));
        }
        if self.loader.delimiter == '"' {
            return Err(SentilexError::config(
                "delimiter cannot be the quote character",
            ));
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(SentilexError::config("chart dimensions must be non-zero"));
        }
        Ok(())
    }
}

/// Review file parsing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Field delimiter.
    pub delimiter: char,
    /// Whether the first record is a header to discard.
    pub has_header: bool,
    /// Zero-based column holding the review text.
    pub text_column: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            text_column: 0,
        }
    }
}

/// Classifier options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Keyword matching strategy.
    pub match_mode: MatchMode,
}

/// Chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Image width in pixels (SVG output only).
    pub width: u32,
    /// Image height in pixels (SVG output only).
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Sentiment Analysis on Cleaned Reviews".to_string(),
            x_label: "Sentiment".to_string(),
            y_label: "Count".to_string(),
            width: 800,
            height: 600,
        }
    }
}
