//! Resolved configuration for a single run

use super::CategoryFilter;
use std::path::{Path, PathBuf};

/// Lockfile name looked up inside the target directory
pub const LOCKFILE_NAME: &str = "pubspec.lock";

/// Default report file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "dependencies_versions.txt";

/// Everything the pipeline needs, fixed before any lockfile or network I/O
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Full path to pubspec.lock
    pub lockfile_path: PathBuf,
    /// Categories to report on
    pub category_filter: CategoryFilter,
    /// Enables debug tracing
    pub verbose: bool,
    /// Report destination
    pub output_path: PathBuf,
}

impl RunConfig {
    /// Creates a configuration for the lockfile inside `project_dir`
    pub fn new(project_dir: &Path, category_filter: CategoryFilter) -> Self {
        Self {
            lockfile_path: project_dir.join(LOCKFILE_NAME),
            category_filter,
            verbose: false,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    /// Sets verbose mode (builder pattern)
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the report destination (builder pattern)
    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}
