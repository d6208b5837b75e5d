//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use chatstat::ChatstatError;
use chatstat::cli::Args;
use chatstat::core::{aggregate_with_config, apply_filters};
use chatstat::format::{ReportFormat, to_report_string, write_report};
use chatstat::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let filter_config = args.filter_config()?;
    let format = ReportFormat::from(args.format);

    let transcript_config = args.transcript_config();
    info!(
        input = %args.input,
        %format,
        headers = %transcript_config.header_pattern,
        "reading transcript"
    );
    let parser = TranscriptParser::with_config(transcript_config);
    let outcome = parser.parse(Path::new(&args.input))?;
    info!(
        messages = outcome.messages.len(),
        skipped = outcome.skipped_lines,
        continuations = outcome.continuation_lines,
        "parsed transcript"
    );

    let messages = if filter_config.is_active() {
        let before = outcome.messages.len();
        let kept = apply_filters(outcome.into_messages(), &filter_config);
        info!(before, after = kept.len(), "applied filters");
        kept
    } else {
        outcome.into_messages()
    };

    let stats = aggregate_with_config(&messages, &args.stats_config())?;

    match args.output {
        Some(ref path) => {
            write_report(&stats, path, format)?;
            debug!(path = %path, "report written");
        }
        None => {
            let report = to_report_string(&stats, format)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
