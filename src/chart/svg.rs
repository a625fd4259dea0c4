//! SVG bar chart written with plotters.

use std::path::PathBuf;

use log::info;
use plotters::prelude::*;

use crate::chart::{ChartRenderer, check_bars};
use crate::config::ChartConfig;
use crate::error::{Result, SentilexError};

/// Writes a vertical bar chart to an SVG file.
#[derive(Debug, Clone)]
pub struct SvgBarChart {
    path: PathBuf,
    config: ChartConfig,
}

impl SvgBarChart {
    pub fn new<P: Into<PathBuf>>(path: P, config: ChartConfig) -> Self {
        SvgBarChart {
            path: path.into(),
            config,
        }
    }
}

fn chart_error<E: std::fmt::Display>(e: E) -> SentilexError {
    SentilexError::chart(e.to_string())
}

impl ChartRenderer for SvgBarChart {
    fn render(&mut self, labels: &[&str], counts: &[usize]) -> Result<()> {
        check_bars(labels, counts)?;
        if labels.is_empty() {
            return Err(SentilexError::chart("nothing to draw"));
        }

        let segments = labels.len() as u32;
        let y_max = counts.iter().copied().max().unwrap_or(0) as u32 + 1;

        let root =
            SVGBackend::new(&self.path, (self.config.width, self.config.height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.config.title, ("sans-serif", 28))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d((0u32..segments).into_segmented(), 0u32..y_max)
            .map_err(chart_error)?;

        let label_for = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(i) => labels
                .get(*i as usize)
                .map(|label| label.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(self.config.x_label.as_str())
            .y_desc(self.config.y_label.as_str())
            .x_label_formatter(&label_for)
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BLUE.filled())
                    .margin(20)
                    .data(
                        counts
                            .iter()
                            .enumerate()
                            .map(|(i, &count)| (i as u32, count as u32)),
                    ),
            )
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
        info!("chart written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_svg_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let mut chart = SvgBarChart::new(&path, ChartConfig::default());

        chart
            .render(&["Positive", "Negative", "Neutral"], &[3, 1, 0])
            .unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_svg_rejects_empty_input() {
        let dir = tempdir().unwrap();
        let mut chart = SvgBarChart::new(dir.path().join("empty.svg"), ChartConfig::default());
        assert!(chart.render(&[], &[]).is_err());
    }
}
