//! CLI argument parsing module for pubcheck

use crate::domain::{CategoryFilter, RunConfig, DEFAULT_OUTPUT_FILE, LOCKFILE_NAME};
use clap::Parser;
use std::path::PathBuf;

/// Report outdated pubspec.lock dependencies against pub.dev
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pubcheck",
    version,
    about = "Report outdated pubspec.lock dependencies against pub.dev"
)]
pub struct CliArgs {
    /// Directory containing pubspec.lock (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output (debug tracing on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Dependency category to check; prompts when omitted
    #[arg(short, long, value_enum)]
    pub category: Option<CategoryFilter>,

    /// Report file, relative to the working directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
}

impl CliArgs {
    /// Location of pubspec.lock inside the target directory
    pub fn lockfile_path(&self) -> PathBuf {
        self.path.join(LOCKFILE_NAME)
    }

    /// Build the run configuration once the category is known
    pub fn into_config(self, category_filter: CategoryFilter) -> RunConfig {
        RunConfig::new(&self.path, category_filter)
            .with_verbose(self.verbose)
            .with_output(self.output)
    }
}
