//! pubcheck - outdated dependency report for Dart/Flutter projects
//!
//! Reads pubspec.lock, looks up every package of the chosen category on
//! pub.dev and writes the outdated ones to dependencies_versions.txt.

use clap::Parser;
use pubcheck::cli::CliArgs;
use pubcheck::lockfile;
use pubcheck::orchestrator::Orchestrator;
use pubcheck::output::console;
use pubcheck::prompt::prompt_category;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        // --help and --version: print to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            // Nothing useful can be done if stderr is gone; the exit code still reports it
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Route tracing output to stderr; `--verbose` enables debug events
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "pubcheck=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    let lockfile_path = args.lockfile_path();
    tracing::debug!(path = %lockfile_path.display(), "pubcheck v{}", env!("CARGO_PKG_VERSION"));

    // Report a missing lockfile before asking anything
    lockfile::ensure_exists(&lockfile_path)?;

    let category_filter = match args.category {
        Some(filter) => filter,
        None => prompt_category(io::stdin().lock(), io::stdout())?,
    };

    let config = args.into_config(category_filter);
    console::info(format!(
        "Checking {} dependencies in {}",
        config.category_filter,
        config.lockfile_path.display()
    ));

    let orchestrator = Orchestrator::new(config)?;
    let summary = orchestrator.run().await?;

    for section in &summary.sections {
        tracing::debug!(
            category = %section.category,
            checked = section.checked,
            outdated = section.outdated,
            "section done"
        );
    }

    if summary.total_warnings() > 0 {
        console::warning(format!(
            "{} lockfile entries or packages were skipped",
            summary.total_warnings()
        ));
    }
    console::success(format!(
        "{} outdated package(s) written to {}",
        summary.total_outdated(),
        summary.output_path.display()
    ));

    Ok(())
}
