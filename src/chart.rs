//! Sentiment distribution charts.
//!
//! Chart data is prepared from a [`SentimentTally`] as three (label, count)
//! pairs in a fixed order. Drawing is left to a [`ChartRenderer`], so the data
//! side can be tested without any display.

pub mod svg;
pub mod text;

use serde::Serialize;

use crate::error::{Result, SentilexError};
use crate::sentiment::{SentimentLabel, SentimentTally};

pub use svg::SvgBarChart;
pub use text::TextBarChart;

/// Something that can draw a categorical bar chart.
pub trait ChartRenderer {
    /// Draw one bar per label. `labels` and `counts` have the same length.
    fn render(&mut self, labels: &[&str], counts: &[usize]) -> Result<()>;
}

/// Bars for the Positive, Negative and Neutral counts, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: [&'static str; 3],
    pub counts: [usize; 3],
}

impl ChartData {
    pub fn from_tally(tally: &SentimentTally) -> Self {
        ChartData {
            labels: SentimentLabel::ALL.map(|label| label.as_str()),
            counts: SentimentLabel::ALL.map(|label| tally.count(label)),
        }
    }

    /// Hand the bars to a renderer.
    pub fn render_with(&self, renderer: &mut dyn ChartRenderer) -> Result<()> {
        renderer.render(&self.labels, &self.counts)
    }
}

pub(crate) fn check_bars(labels: &[&str], counts: &[usize]) -> Result<()> {
    if labels.len() != counts.len() {
        return Err(SentilexError::chart(format!(
            "{} labels but {} counts",
            labels.len(),
            counts.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<(Vec<String>, Vec<usize>)>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&mut self, labels: &[&str], counts: &[usize]) -> Result<()> {
            check_bars(labels, counts)?;
            self.calls.push((
                labels.iter().map(|s| s.to_string()).collect(),
                counts.to_vec(),
            ));
            Ok(())
        }
    }

    #[test]
    fn test_chart_data_order() {
        let tally = SentimentTally {
            positive: 4,
            negative: 2,
            neutral: 7,
        };
        let data = ChartData::from_tally(&tally);

        assert_eq!(data.labels, ["Positive", "Negative", "Neutral"]);
        assert_eq!(data.counts, [4, 2, 7]);
    }

    #[test]
    fn test_render_with_passes_pairs() {
        let data = ChartData::from_tally(&SentimentTally {
            positive: 1,
            negative: 0,
            neutral: 2,
        });
        let mut renderer = RecordingRenderer::default();

        data.render_with(&mut renderer).unwrap();

        assert_eq!(renderer.calls.len(), 1);
        assert_eq!(renderer.calls[0].0, ["Positive", "Negative", "Neutral"]);
        assert_eq!(renderer.calls[0].1, [1, 0, 2]);
    }

    #[test]
    fn test_mismatched_bars_rejected() {
        assert!(check_bars(&["a", "b"], &[1]).is_err());
        assert!(check_bars(&[], &[]).is_ok());
    }
}
