//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::chart::ChartData;
use crate::cli::args::{OutputFormat, SentilexArgs};
use crate::error::Result;
use crate::review::CleanReport;
use crate::sentiment::{PreviewEntry, SentimentLabel};
use crate::session::{Analysis, Summary};

/// A command result that can be printed in every output format.
pub trait Report: Serialize {
    /// Write the human-readable form.
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;

    /// Write CSV rows, header first.
    fn write_csv(&self, wtr: &mut csv::Writer<&mut dyn Write>) -> Result<()>;
}

/// Raw reviews with inline labels.
#[derive(Debug, Serialize)]
pub struct PreviewListing {
    pub reviews: Vec<PreviewEntry>,
}

/// A cleaned review and its label.
#[derive(Debug, Serialize)]
pub struct LabeledReview {
    pub review: String,
    pub label: SentimentLabel,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub summary: Summary,
    pub cleaning: CleanReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<LabeledReview>>,
}

impl AnalysisResult {
    pub fn from_analysis(analysis: &Analysis, details: bool) -> Self {
        AnalysisResult {
            summary: analysis.summary(),
            cleaning: analysis.report,
            reviews: details.then(|| {
                analysis
                    .labeled()
                    .map(|(review, label)| LabeledReview {
                        review: review.to_string(),
                        label,
                    })
                    .collect()
            }),
        }
    }
}

/// Result structure for the chart command.
#[derive(Debug, Serialize)]
pub struct ChartResult {
    #[serde(flatten)]
    pub data: ChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Report>(result: &T, args: &SentilexArgs, out: &mut dyn Write) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(result, args, out),
        OutputFormat::Csv => output_csv(result, out),
    }
}

fn output_json<T: Serialize>(result: &T, args: &SentilexArgs, out: &mut dyn Write) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

fn output_csv<T: Report>(result: &T, out: &mut dyn Write) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    result.write_csv(&mut wtr)?;
    wtr.flush()?;
    Ok(())
}

impl Report for Summary {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "SENTIMENT SUMMARY (CLEANED DATA)")?;
        writeln!(out, "{}", "-".repeat(40))?;
        writeln!(out, "Total Valid Reviews : {}", self.total_valid_reviews)?;
        writeln!(out, "Positive : {}", self.positive)?;
        writeln!(out, "Negative : {}", self.negative)?;
        writeln!(out, "Neutral  : {}", self.neutral)?;
        Ok(())
    }

    fn write_csv(&self, wtr: &mut csv::Writer<&mut dyn Write>) -> Result<()> {
        wtr.serialize(self)?;
        Ok(())
    }
}

impl Report for PreviewListing {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "ALL REVIEWS (RAW DATA)")?;
        writeln!(out, "{}", "-".repeat(50))?;
        for entry in &self.reviews {
            writeln!(out, "{}. {} --> {}", entry.position, entry.review, entry.label)?;
        }
        Ok(())
    }

    fn write_csv(&self, wtr: &mut csv::Writer<&mut dyn Write>) -> Result<()> {
        wtr.write_record(["position", "review", "label"])?;
        for entry in &self.reviews {
            wtr.write_record([
                entry.position.to_string(),
                entry.review.clone(),
                entry.label.to_string(),
            ])?;
        }
        Ok(())
    }
}

impl Report for AnalysisResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        if let Some(reviews) = &self.reviews {
            writeln!(out)?;
            writeln!(out, "CLEANED REVIEWS")?;
            writeln!(out, "{}", "-".repeat(50))?;
            for (i, item) in reviews.iter().enumerate() {
                writeln!(out, "{}. {} --> {}", i + 1, item.review, item.label)?;
            }
        }

        let dropped = self.cleaning.input - self.cleaning.accepted;
        if dropped > 0 {
            writeln!(out)?;
            writeln!(
                out,
                "Dropped {dropped} of {} reviews ({} blank, {} duplicate, {} without letters)",
                self.cleaning.input,
                self.cleaning.blank,
                self.cleaning.duplicate,
                self.cleaning.no_letters
            )?;
        }

        self.summary.write_human(out)
    }

    fn write_csv(&self, wtr: &mut csv::Writer<&mut dyn Write>) -> Result<()> {
        match &self.reviews {
            Some(reviews) => {
                wtr.write_record(["review", "label"])?;
                for item in reviews {
                    wtr.write_record([item.review.as_str(), item.label.as_str()])?;
                }
            }
            None => wtr.serialize(self.summary)?,
        }
        Ok(())
    }
}

impl Report for ChartResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        if let Some(path) = &self.output {
            writeln!(out, "Chart written to {path}")?;
        }
        Ok(())
    }

    fn write_csv(&self, wtr: &mut csv::Writer<&mut dyn Write>) -> Result<()> {
        wtr.write_record(["label", "count"])?;
        for (label, count) in self.data.labels.iter().zip(self.data.counts) {
            wtr.write_record([label.to_string(), count.to_string()])?;
        }
        Ok(())
    }
}
