//! Core domain models for pubcheck
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency categories and category filters
//! - Dependency records parsed from the lockfile
//! - Registry lookup results and outdated entries
//! - The resolved run configuration

mod category;
mod dependency;
mod run_config;

pub use category::{Category, CategoryFilter};
pub use dependency::{Dependency, LookupResult, OutdatedEntry};
pub use run_config::{RunConfig, DEFAULT_OUTPUT_FILE, LOCKFILE_NAME};
