//! Terminal bar chart.

use std::io::Write;

use crate::chart::{ChartRenderer, check_bars};
use crate::error::Result;

const DEFAULT_BAR_WIDTH: usize = 40;
const MAX_BAR_WIDTH: usize = 200;

/// Draws horizontal `#` bars scaled to the largest count.
///
/// ```text
/// Sentiment Analysis on Cleaned Reviews
/// ═════════════════════════════════════
/// Positive │######################################## 2
/// Negative │####################                     1
/// Neutral  │                                         0
/// ```
pub struct TextBarChart<W: Write> {
    writer: W,
    title: String,
    bar_width: usize,
}

impl<W: Write> TextBarChart<W> {
    pub fn new<S: Into<String>>(writer: W, title: S) -> Self {
        TextBarChart {
            writer,
            title: title.into(),
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Set the length of the longest bar, in characters (1 to 200).
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width.clamp(1, MAX_BAR_WIDTH);
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ChartRenderer for TextBarChart<W> {
    fn render(&mut self, labels: &[&str], counts: &[usize]) -> Result<()> {
        check_bars(labels, counts)?;

        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let max_count = counts.iter().copied().max().unwrap_or(0);

        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.title)?;
        writeln!(self.writer, "{}", "═".repeat(self.title.chars().count()))?;

        for (label, &count) in labels.iter().zip(counts) {
            let filled = if max_count == 0 {
                0
            } else {
                (count as u128 * self.bar_width as u128 / max_count as u128) as usize
            };
            writeln!(
                self.writer,
                "{label:<label_width$} │{}{} {count}",
                "#".repeat(filled),
                " ".repeat(self.bar_width - filled),
            )?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
