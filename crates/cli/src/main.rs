// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! greplite CLI entry point.

use std::io::BufRead;
use std::path::Path;

use clap::Parser;
use termcolor::WriteColor;
use tracing_subscriber::{EnvFilter, fmt};

use greplite::cli::{Cli, Source};
use greplite::config::{self, Config};
use greplite::error::ExitCode;
use greplite::reader;
use greplite::search::{FileOutcome, STDIN_LABEL, STDOUT_LABEL, Searcher};
use greplite::{Engine, FileWalker, Reporter, WalkerConfig};

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("GREPLITE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("greplite: {}", e);
            match e.downcast_ref::<greplite::Error>() {
                Some(err) => ExitCode::from(err),
                None if e.downcast_ref::<std::io::Error>().is_some() => ExitCode::Error,
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    cli.apply_to(&mut config);
    tracing::debug!(?config, "effective config");

    let engine = Engine::with_recursion_limit(config.engine.max_recursion);
    let searcher = Searcher::new(engine, &cli.pattern)?
        .with_parallel(config.search.parallel)
        .with_walker(FileWalker::new(WalkerConfig::from(&config.walk)));

    let source = cli.source();
    let mut reporter = Reporter::stdout(cli.color.resolve(), source.is_labelled());

    let matched = match source {
        Source::Stdin => {
            let origin = Path::new(STDIN_LABEL);
            stream_matches(&searcher, &mut reporter, origin, std::io::stdin().lock())?
        }
        Source::File(path) => {
            let file = reader::open(&path)?;
            stream_matches(&searcher, &mut reporter, &path, file)?
        }
        Source::Files(paths) => {
            let outcomes = searcher.search_paths(&paths)?;
            report_outcomes(&mut reporter, &outcomes)?
        }
        Source::Trees(roots) => {
            let mut matched = false;
            for root in &roots {
                let (outcomes, stats) = searcher.search_tree(root)?;
                tracing::debug!(root = %root.display(), ?stats, "tree searched");
                matched |= report_outcomes(&mut reporter, &outcomes)?;
            }
            matched
        }
    };

    reporter.flush()?;
    Ok(if matched {
        ExitCode::Matched
    } else {
        ExitCode::NoMatch
    })
}

/// Print the matches of one stream as they are found. Output written before
/// a failing line is flushed before the error propagates.
fn stream_matches<W: WriteColor, R: BufRead>(
    searcher: &Searcher,
    reporter: &mut Reporter<W>,
    origin: &Path,
    input: R,
) -> anyhow::Result<bool> {
    let streamed = searcher.for_each_match(origin, input, |line| {
        reporter
            .write_line(origin, line)
            .map_err(|e| greplite::Error::io(STDOUT_LABEL, e))
    });
    reporter.flush()?;
    Ok(streamed? > 0)
}

/// Print every outcome in order; unreadable files are reported on stderr
/// and skipped. Returns whether any file matched.
fn report_outcomes<W: WriteColor>(
    reporter: &mut Reporter<W>,
    outcomes: &[FileOutcome],
) -> anyhow::Result<bool> {
    let mut matched = false;
    for outcome in outcomes {
        if let Err(err) = &outcome.matches {
            tracing::warn!(path = %outcome.path.display(), %err, "skipping file");
            eprintln!("greplite: {err}");
            continue;
        }
        reporter.write_outcome(outcome)?;
        matched |= outcome.matched();
    }
    Ok(matched)
}
