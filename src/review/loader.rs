//! Delimited review file loader.
//!
//! Reads one review per record from a CSV-style export. The first record is a
//! header and is discarded, even when it is a blank line; the review text is taken from a single column
//! (the first by default). Records that do not reach that column are skipped.
//!
//! Fields that are not valid UTF-8 are decoded as Latin-1, so exports written
//! with single-byte encodings load without error.
//!
//! ```csv
//! review,rating
//! Great product, I love it!,5
//! bad quality,1
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use log::{debug, info};

use crate::config::LoaderConfig;
use crate::error::{Result, SentilexError};
use crate::review::set::RawReviewSet;

/// Loads raw reviews from delimited text.
#[derive(Debug, Clone)]
pub struct ReviewLoader {
    /// Field delimiter (default: ',')
    delimiter: u8,
    /// Whether the first record is a header
    has_header: bool,
    /// Column holding the review text
    text_column: usize,
}

impl Default for ReviewLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewLoader {
    /// Create a loader for comma-separated files with a header row.
    pub fn new() -> Self {
        ReviewLoader {
            delimiter: b',',
            has_header: true,
            text_column: 0,
        }
    }

    /// Create a loader from configuration.
    pub fn from_config(config: &LoaderConfig) -> Result<Self> {
        if !config.delimiter.is_ascii() {
            return Err(SentilexError::config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                config.delimiter
            )));
        }

        Ok(ReviewLoader {
            delimiter: config.delimiter as u8,
            has_header: config.has_header,
            text_column: config.text_column,
        })
    }

    /// Set a custom delimiter byte.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the first record is a header.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the column holding the review text.
    pub fn with_text_column(mut self, text_column: usize) -> Self {
        self.text_column = text_column;
        self
    }

    /// Load reviews from a file.
    ///
    /// A missing file is reported as [`SentilexError::NotFound`] so callers can
    /// fall back to an empty set; any other failure is returned as is.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<RawReviewSet> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SentilexError::not_found(path),
            _ => SentilexError::Io(e),
        })?;

        let reviews = self.load_from_reader(file)?;
        info!("raw reviews loaded = {} from {}", reviews.len(), path.display());
        Ok(reviews)
    }

    /// Load reviews from any byte source.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<RawReviewSet> {
        let mut reader = BufReader::new(reader);
        // The csv reader skips blank lines, so a blank header line is consumed here.
        let has_header = self.has_header && !skip_blank_line(&mut reader)?;

        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(has_header)
            .flexible(true)
            .from_reader(reader);

        let mut reviews = Vec::new();
        let mut record = ByteRecord::new();
        let mut skipped = 0usize;

        while csv_reader.read_byte_record(&mut record)? {
            match record.get(self.text_column) {
                Some(field) => reviews.push(decode_field(field)),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(
                "skipped {skipped} records without column {}",
                self.text_column
            );
        }

        Ok(RawReviewSet::new(reviews))
    }
}

/// Consume a leading empty line. Returns whether one was there.
fn skip_blank_line<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    let buf = reader.fill_buf()?;
    let len = if buf.starts_with(b"\r\n") {
        2
    } else if buf.starts_with(b"\n") || buf.starts_with(b"\r") {
        1
    } else {
        0
    };
    reader.consume(len);
    Ok(len > 0)
}

/// Decode a field as UTF-8, falling back to Latin-1.
fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_first_column_after_header() {
        let input = "review,rating\nGreat product, I love it!,5\nbad quality,1\n";
        let reviews = ReviewLoader::new()
            .load_from_reader(input.as_bytes())
            .unwrap();

        // Unquoted commas split the text; only the first field is kept.
        assert_eq!(reviews.as_slice(), ["Great product", "bad quality"]);
    }

    #[test]
    fn test_load_quoted_fields() {
        let input = "review\n\"Great product, I love it!\"\n\"   \"\n1234\n";
        let reviews = ReviewLoader::new()
            .load_from_reader(input.as_bytes())
            .unwrap();

        assert_eq!(reviews.as_slice(), ["Great product, I love it!", "   ", "1234"]);
    }

    #[test]
    fn test_load_skips_empty_lines() {
        let input = "review\nfirst\n\n\nsecond\n";
        let reviews = ReviewLoader::new()
            .load_from_reader(input.as_bytes())
            .unwrap();

        assert_eq!(reviews.as_slice(), ["first", "second"]);
    }

    #[test]
    fn test_blank_first_line_is_the_header() {
        let reviews = ReviewLoader::new()
            .load_from_reader("\nreview\nlove it\n".as_bytes())
            .unwrap();
        assert_eq!(reviews.as_slice(), ["review", "love it"]);

        let reviews = ReviewLoader::new()
            .load_from_reader("\r\nreview\r\n".as_bytes())
            .unwrap();
        assert_eq!(reviews.as_slice(), ["review"]);

        // Without a header the blank line is simply skipped.
        let reviews = ReviewLoader::new()
            .with_header(false)
            .load_from_reader("\nreview\n".as_bytes())
            .unwrap();
        assert_eq!(reviews.as_slice(), ["review"]);

        assert!(ReviewLoader::new().load_from_reader("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_keeps_empty_first_field() {
        let input = "review,rating\n,5\nok,3\n";
        let reviews = ReviewLoader::new()
            .load_from_reader(input.as_bytes())
            .unwrap();

        assert_eq!(reviews.as_slice(), ["", "ok"]);
    }

    #[test]
    fn test_load_header_only() {
        let reviews = ReviewLoader::new()
            .load_from_reader("review\n".as_bytes())
            .unwrap();
        assert!(reviews.is_empty());
    }

    #[test]
    fn test_load_latin1_bytes() {
        let input: &[u8] = b"review\ncaf\xe9 was nice\n";
        let reviews = ReviewLoader::new().load_from_reader(input).unwrap();

        assert_eq!(reviews.as_slice(), ["café was nice"]);
    }

    #[test]
    fn test_load_custom_delimiter_and_column() {
        let input = "id;text\n1;love it\n2;hate it\n3\n";
        let reviews = ReviewLoader::new()
            .with_delimiter(b';')
            .with_text_column(1)
            .load_from_reader(input.as_bytes())
            .unwrap();

        assert_eq!(reviews.as_slice(), ["love it", "hate it"]);
    }

    #[test]
    fn test_load_without_header() {
        let input = "first\nsecond\n";
        let reviews = ReviewLoader::new()
            .with_header(false)
            .load_from_reader(input.as_bytes())
            .unwrap();

        assert_eq!(reviews.len(), 2);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = ReviewLoader::new().load("/nonexistent/dir/reviews.csv");
        assert!(matches!(result, Err(SentilexError::NotFound { .. })));
    }

    #[test]
    fn test_from_config_rejects_wide_delimiter() {
        let config = LoaderConfig {
            delimiter: 'é',
            ..Default::default()
        };
        assert!(matches!(
            ReviewLoader::from_config(&config),
            Err(SentilexError::Config(_))
        ));
    }
}
