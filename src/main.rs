/*!
 * Command-line interface for treedump
 */

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use treedump::config::{Args, Config};
use treedump::report::{Reporter, RunReport};
use treedump::scanner::{Scanner, TracingObserver};
use treedump::writer::BlockWriter;
use treedump::Result;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let quiet = args.quiet;
    let config = Config::from_args(args);

    match run(&config, quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, quiet: bool) -> Result<()> {
    config.validate()?;

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let progress = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}",
        ) {
            progress.set_style(style);
        }
        progress.enable_steady_tick(std::time::Duration::from_millis(100));
        progress
    };

    progress.set_prefix("📊 Scanning");
    progress.set_message(format!("📂 {}", config.root.display()));

    let start_time = Instant::now();

    let files = Scanner::new(config.clone())
        .with_observer(TracingObserver)
        .scan()?;
    info!(entries = files.len(), root = %config.root.display(), "enumeration finished");

    progress.set_length(files.len() as u64);
    progress.set_prefix("📊 Writing");

    let summary = BlockWriter::new(config.clone())
        .with_progress(progress.clone())
        .write(&files)?;

    let duration = start_time.elapsed();
    progress.finish_and_clear();

    info!(
        blocks = summary.blocks_written,
        skipped = summary.skipped.len(),
        output = %config.output_file.display(),
        "output document written"
    );

    if !quiet {
        let report = RunReport::new(
            config.root.display().to_string(),
            config.output_file.display().to_string(),
            files.len(),
            duration,
            summary,
        );
        Reporter::new().print_report(&report);
    }

    Ok(())
}
