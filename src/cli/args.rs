//! Command line argument parsing for Sentilex CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::SentilexConfig;
use crate::error::Result;
use crate::sentiment::MatchMode;

/// Sentilex - keyword-based sentiment analysis for product reviews
#[derive(Parser, Debug, Clone)]
#[command(name = "sentilex")]
#[command(about = "Clean product reviews and classify their sentiment with fixed keyword lists")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct SentilexArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SENTILEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keyword matching mode (overrides the configuration file)
    #[arg(short = 'm', long)]
    pub match_mode: Option<MatchMode>,

    /// Field delimiter of the review file (overrides the configuration file)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentilexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the effective configuration: file values, then flag overrides.
    pub fn resolve_config(&self) -> Result<SentilexConfig> {
        let mut config = match &self.config {
            Some(path) => SentilexConfig::from_file(path)?,
            None => SentilexConfig::default(),
        };

        if let Some(match_mode) = self.match_mode {
            config.classifier.match_mode = match_mode;
        }
        if let Some(delimiter) = self.delimiter {
            config.loader.delimiter = delimiter;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the interactive menu
    Interactive(InteractiveArgs),

    /// List raw reviews with inline sentiment
    Raw(RawArgs),

    /// Clean reviews and print the sentiment summary
    Analyze(AnalyzeArgs),

    /// Clean reviews and draw the sentiment bar chart
    Chart(ChartArgs),
}

impl Command {
    /// The review file every command reads.
    pub fn reviews_file(&self) -> &PathBuf {
        match self {
            Command::Interactive(args) => &args.reviews_file,
            Command::Raw(args) => &args.reviews_file,
            Command::Analyze(args) => &args.reviews_file,
            Command::Chart(args) => &args.reviews_file,
        }
    }
}

/// Arguments for the interactive menu
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Review file (delimited text with a header row)
    #[arg(value_name = "REVIEWS_FILE")]
    pub reviews_file: PathBuf,

    /// Write the chart to this SVG file instead of drawing it in the terminal
    #[arg(long, value_name = "SVG_FILE")]
    pub chart_output: Option<PathBuf>,
}

/// Arguments for the raw listing
#[derive(Parser, Debug, Clone)]
pub struct RawArgs {
    /// Review file (delimited text with a header row)
    #[arg(value_name = "REVIEWS_FILE")]
    pub reviews_file: PathBuf,
}

/// Arguments for analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Review file (delimited text with a header row)
    #[arg(value_name = "REVIEWS_FILE")]
    pub reviews_file: PathBuf,

    /// Also list every cleaned review with its label
    #[arg(long)]
    pub details: bool,
}

/// Arguments for chart drawing
#[derive(Parser, Debug, Clone)]
pub struct ChartArgs {
    /// Review file (delimited text with a header row)
    #[arg(value_name = "REVIEWS_FILE")]
    pub reviews_file: PathBuf,

    /// Write an SVG file instead of drawing in the terminal
    #[arg(short, long, value_name = "SVG_FILE")]
    pub output: Option<PathBuf>,

    /// Length of the longest terminal bar
    #[arg(long, default_value = "40")]
    pub bar_width: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
