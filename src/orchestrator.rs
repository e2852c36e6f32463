//! Run orchestrator for coordinating the whole check
//!
//! This module provides:
//! - Workflow coordination: parse -> fetch -> compare -> write
//! - One section per requested category, in fixed order
//! - Sequential registry lookups, one package at a time
//! - Skip-and-continue handling for per-package failures

use crate::domain::{Category, Dependency, LookupResult, OutdatedEntry, RunConfig};
use crate::error::AppError;
use crate::lockfile;
use crate::output::{console, ReportWriter, Status};
use crate::progress::Progress;
use crate::registry::{HttpClient, PubDevClient, RegistryClient};
use crate::version::{compare_versions, VersionOrdering};
use std::io::Write;
use std::path::PathBuf;

/// Outcome of checking one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub category: Category,
    /// Records compared against the registry
    pub checked: usize,
    /// Rows written to the report
    pub outdated: usize,
    /// Warnings printed for skipped packages or lines
    pub warnings: Vec<String>,
}

impl SectionSummary {
    fn new(category: Category) -> Self {
        Self {
            category,
            checked: 0,
            outdated: 0,
            warnings: Vec::new(),
        }
    }
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Report destination
    pub output_path: PathBuf,
    /// One entry per category, in report order
    pub sections: Vec<SectionSummary>,
}

impl RunSummary {
    /// Outdated packages across all sections
    pub fn total_outdated(&self) -> usize {
        self.sections.iter().map(|s| s.outdated).sum()
    }

    /// Warnings across all sections
    pub fn total_warnings(&self) -> usize {
        self.sections.iter().map(|s| s.warnings.len()).sum()
    }
}

/// Orchestrator for coordinating the check workflow
pub struct Orchestrator {
    /// Resolved run configuration
    config: RunConfig,
    /// Registry queried for latest versions
    registry: Box<dyn RegistryClient>,
}

impl Orchestrator {
    /// Create a new orchestrator that queries pub.dev
    pub fn new(config: RunConfig) -> Result<Self, AppError> {
        let client = HttpClient::new()?;
        Ok(Self::with_registry(
            config,
            Box::new(PubDevClient::new(client)),
        ))
    }

    /// Create an orchestrator with a custom registry (for testing)
    pub fn with_registry(config: RunConfig, registry: Box<dyn RegistryClient>) -> Self {
        Self { config, registry }
    }

    /// Run the check workflow
    pub async fn run(&self) -> Result<RunSummary, AppError> {
        self.run_with_progress(!self.config.verbose).await
    }

    /// Run the check workflow with optional progress display
    pub async fn run_with_progress(&self, show_progress: bool) -> Result<RunSummary, AppError> {
        // The report must not be touched when there is nothing to read
        lockfile::ensure_exists(&self.config.lockfile_path)?;

        let mut report = ReportWriter::create(&self.config.output_path)?;
        let mut progress = Progress::new(show_progress);
        let mut sections = Vec::new();

        for &category in self.config.category_filter.categories() {
            progress.spinner(&format!("Checking {} dependencies", category));
            let section = self
                .check_category(category, &mut report, &progress)
                .await;
            progress.finish_and_clear();
            sections.push(section?);
        }

        Ok(RunSummary {
            output_path: self.config.output_path.clone(),
            sections,
        })
    }

    /// Check every record of one category and write its report section
    async fn check_category<W: Write>(
        &self,
        category: Category,
        report: &mut ReportWriter<W>,
        progress: &Progress,
    ) -> Result<SectionSummary, AppError> {
        let mut summary = SectionSummary::new(category);
        report.begin_section(category)?;

        for item in lockfile::open_lockfile(&self.config.lockfile_path, category)? {
            let dependency = match item {
                Ok(dep) => dep,
                Err(e) if e.is_recoverable() => {
                    self.warn(&mut summary, progress, format!("skipping lockfile entry: {}", e));
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            progress.set_message(&format!("Checking {}", dependency.name));
            tracing::debug!(
                package = %dependency.name,
                local = %dependency.local_version,
                "checking"
            );

            let lookup = self.lookup(&dependency, &mut summary, progress).await;
            progress.inc();
            summary.checked += 1;
            tracing::debug!(package = %lookup.name, latest = ?lookup.latest_version, "looked up");

            let Some(latest) = lookup.latest_version else {
                continue;
            };

            match compare_versions(&dependency.local_version, &latest) {
                VersionOrdering::Older => {
                    tracing::debug!(package = %dependency.name, %latest, "outdated");
                    report.write_row(&OutdatedEntry::new(&dependency, latest))?;
                }
                ordering => {
                    tracing::debug!(package = %dependency.name, %latest, ?ordering, "up to date");
                }
            }
        }

        summary.outdated = report.end_section()?;
        Ok(summary)
    }

    /// Ask the registry for the latest version, folding failures into "unknown"
    async fn lookup(
        &self,
        dependency: &Dependency,
        summary: &mut SectionSummary,
        progress: &Progress,
    ) -> LookupResult {
        let name = &dependency.name;
        match self.registry.latest_version(name).await {
            Ok(Some(latest)) => LookupResult::found(name, latest),
            Ok(None) => {
                self.warn(
                    summary,
                    progress,
                    format!(
                        "no latest version for '{}' on {}, skipping",
                        name,
                        self.registry.registry_name()
                    ),
                );
                LookupResult::unknown(name)
            }
            Err(e) => {
                self.warn(summary, progress, format!("{}, skipping", e));
                LookupResult::unknown(name)
            }
        }
    }

    fn warn(&self, summary: &mut SectionSummary, progress: &Progress, message: String) {
        progress.suspend(|| console::print(Status::Warning, &message));
        summary.warnings.push(message);
    }
}
