//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::io::{self, Write};
use std::process;

use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chatsift::ChatsiftError;
use chatsift::cli::Args;
use chatsift::filter::apply_filters;
use chatsift::format::render;
use chatsift::parser::{ParseStats, parse_with_stats};
use chatsift::source::read_transcript;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatsiftError> {
    // Bad flags fail before the file is touched
    let filter_config = args.filter_config()?;
    let output_config = args.output_config();

    let text = read_transcript(&args.input, &args.upload_limits())?;
    let (buckets, stats) = parse_with_stats(&text);

    let buckets = apply_filters(buckets, &filter_config);
    if filter_config.is_active() {
        debug!(remaining = buckets.len(), "applied filters");
    }

    let rendered = render(&buckets, args.format.into(), &output_config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    if args.stats {
        print_stats(&stats, buckets.len());
    }

    Ok(())
}

fn print_stats(stats: &ParseStats, shown: usize) {
    eprintln!("Lines:      {}", stats.total_lines);
    eprintln!("Blank:      {}", stats.blank_lines);
    eprintln!(
        "Skipped:    {} ({:.1}%)",
        stats.skipped_lines,
        stats.skip_ratio()
    );
    eprintln!("Classified: {}", stats.classified);
    eprintln!("Shown:      {shown}");
}
