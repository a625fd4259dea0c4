//! Interactive menu loop.
//!
//! The loop reads one choice per line from an injected reader and writes to an
//! injected writer, so a whole session can be driven from a script or a test.
//! It ends on the exit choice or at end of input.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

use crate::chart::{ChartRenderer, TextBarChart};
use crate::cli::output::{PreviewListing, Report};
use crate::error::{Result, SentilexError};
use crate::session::Session;

pub const NO_REVIEWS_MESSAGE: &str = "No reviews found";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice";

/// One of the five menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewRaw,
    CleanAndAnalyze,
    Summary,
    Chart,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = SentilexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim_end_matches(['\r', '\n']) {
            "1" => Ok(MenuChoice::ViewRaw),
            "2" => Ok(MenuChoice::CleanAndAnalyze),
            "3" => Ok(MenuChoice::Summary),
            "4" => Ok(MenuChoice::Chart),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(SentilexError::invalid_choice(INVALID_CHOICE_MESSAGE)),
        }
    }
}

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The user chose exit.
    Exited,
    /// The input ran out.
    EndOfInput,
    /// There were no reviews to work on.
    NoData,
}

/// Where the chart choice draws.
pub enum ChartTarget<'a> {
    /// Text bars with this title, written to the loop's own output.
    Terminal(String),
    /// Any other renderer, such as an SVG file.
    Renderer(&'a mut dyn ChartRenderer),
}

enum Step {
    Continue,
    Exit,
}

/// The interactive command loop over one session.
pub struct CommandLoop<'a, R: BufRead, W: Write> {
    session: &'a mut Session,
    chart: ChartTarget<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> CommandLoop<'a, R, W> {
    pub fn new(
        session: &'a mut Session,
        chart: ChartTarget<'a>,
        input: R,
        output: W,
    ) -> Self {
        CommandLoop {
            session,
            chart,
            input,
            output,
        }
    }

    /// Run until exit, end of input, or a fatal error.
    pub fn run(&mut self) -> Result<LoopOutcome> {
        if !self.session.has_reviews() {
            writeln!(self.output, "{NO_REVIEWS_MESSAGE}")?;
            return Ok(LoopOutcome::NoData);
        }

        let mut line = String::new();
        loop {
            self.print_menu()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(LoopOutcome::EndOfInput);
            }

            let step = line.parse::<MenuChoice>().and_then(|choice| {
                debug!("menu choice {choice:?}");
                self.dispatch(choice)
            });

            match step {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => {
                    writeln!(self.output, "Exiting program...")?;
                    return Ok(LoopOutcome::Exited);
                }
                Err(e) if e.is_recoverable() => writeln!(self.output, "{e}")?,
                Err(e) => return Err(e),
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "----- MENU -----")?;
        writeln!(self.output, "1. View All Reviews (Raw)")?;
        writeln!(self.output, "2. Clean Reviews & Analyze")?;
        writeln!(self.output, "3. View Sentiment Summary")?;
        writeln!(self.output, "4. Display Bar Chart")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Step> {
        match choice {
            MenuChoice::ViewRaw => {
                let listing = PreviewListing {
                    reviews: self.session.preview(),
                };
                listing.write_human(&mut self.output)?;
            }
            MenuChoice::CleanAndAnalyze => {
                self.session.clean_and_analyze();
                writeln!(self.output, "Data cleaning & analysis completed")?;
            }
            MenuChoice::Summary => {
                self.session.summary()?.write_human(&mut self.output)?;
            }
            MenuChoice::Chart => {
                let data = self.session.chart_data()?;
                match &mut self.chart {
                    ChartTarget::Terminal(title) => {
                        let mut renderer = TextBarChart::new(&mut self.output, title.as_str());
                        data.render_with(&mut renderer)?;
                    }
                    ChartTarget::Renderer(renderer) => data.render_with(&mut **renderer)?,
                }
            }
            MenuChoice::Exit => return Ok(Step::Exit),
        }
        Ok(Step::Continue)
    }
}
