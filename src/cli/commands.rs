//! Command implementations for Sentilex CLI.

use std::io::{self, BufRead, Write};

use log::info;

use crate::chart::{ChartRenderer, SvgBarChart, TextBarChart};
use crate::cli::args::*;
use crate::cli::menu::{ChartTarget, CommandLoop, NO_REVIEWS_MESSAGE};
use crate::cli::output::*;
use crate::config::SentilexConfig;
use crate::error::Result;
use crate::review::ReviewLoader;
use crate::sentiment;
use crate::session::Session;

/// Execute a CLI command against the process's stdin and stdout.
pub fn execute_command(args: SentilexArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_command_with(args, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute a CLI command with explicit input and output streams.
pub fn execute_command_with(
    args: SentilexArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let config = args.resolve_config()?;
    let Some(mut session) = open_session(&args, &config, out)? else {
        return Ok(());
    };

    match &args.command {
        Command::Interactive(interactive_args) => {
            run_interactive(interactive_args, &config, &mut session, input, out)
        }
        Command::Raw(_) => show_raw(&session, &args, out),
        Command::Analyze(analyze_args) => analyze(analyze_args, &mut session, &args, out),
        Command::Chart(chart_args) => draw_chart(chart_args, &config, &mut session, &args, out),
    }
}

/// Load the review file named by the command.
///
/// Returns `None` after printing a notice when there is nothing to analyze.
fn open_session(
    args: &SentilexArgs,
    config: &SentilexConfig,
    out: &mut dyn Write,
) -> Result<Option<Session>> {
    let path = args.command.reviews_file();
    if args.verbosity() > 1 {
        writeln!(out, "Loading reviews from: {}", path.display())?;
    }

    let loader = ReviewLoader::from_config(&config.loader)?;
    let classifier = sentiment::new_keyword_based_with_config(&config.classifier);
    let session = Session::open(path, &loader, classifier)?;

    if session.missing_source().is_some() {
        writeln!(out, "File not found")?;
    }

    // The interactive loop reports an empty session itself.
    if !session.has_reviews() && !matches!(args.command, Command::Interactive(_)) {
        writeln!(out, "{NO_REVIEWS_MESSAGE}")?;
        return Ok(None);
    }

    Ok(Some(session))
}

fn run_interactive(
    args: &InteractiveArgs,
    config: &SentilexConfig,
    session: &mut Session,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let mut svg = args
        .chart_output
        .as_ref()
        .map(|path| SvgBarChart::new(path, config.chart.clone()));
    let chart = match svg.as_mut() {
        Some(renderer) => ChartTarget::Renderer(renderer),
        None => ChartTarget::Terminal(config.chart.title.clone()),
    };

    let outcome = CommandLoop::new(session, chart, input, out).run()?;

    info!("interactive session ended: {outcome:?}");
    Ok(())
}

fn show_raw(session: &Session, cli_args: &SentilexArgs, out: &mut dyn Write) -> Result<()> {
    let listing = PreviewListing {
        reviews: session.preview(),
    };
    output_result(&listing, cli_args, out)
}

fn analyze(
    args: &AnalyzeArgs,
    session: &mut Session,
    cli_args: &SentilexArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let analysis = session.clean_and_analyze();
    let result = AnalysisResult::from_analysis(analysis, args.details);
    output_result(&result, cli_args, out)
}

fn draw_chart(
    args: &ChartArgs,
    config: &SentilexConfig,
    session: &mut Session,
    cli_args: &SentilexArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let data = session.clean_and_analyze().chart_data();

    let written = match &args.output {
        Some(path) => {
            let mut renderer = SvgBarChart::new(path, config.chart.clone());
            data.render_with(&mut renderer)?;
            Some(path.display().to_string())
        }
        None => {
            // Only the human format draws bars; the others print the numbers.
            if cli_args.output_format == OutputFormat::Human {
                let mut renderer = TextBarChart::new(&mut *out, config.chart.title.clone())
                    .with_bar_width(args.bar_width);
                renderer.render(&data.labels, &data.counts)?;
            }
            None
        }
    };

    let result = ChartResult {
        data,
        output: written,
    };
    output_result(&result, cli_args, out)
}
