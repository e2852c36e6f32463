//! Dependency category definitions for pubspec.lock entries

use clap::ValueEnum;
use std::fmt;

/// Dependency category as recorded in the `dependency:` field of a lockfile block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Declared under `dependencies` in pubspec.yaml
    DirectMain,
    /// Declared under `dev_dependencies` in pubspec.yaml
    DirectDev,
    /// Pulled in by another dependency
    Transitive,
}

impl Category {
    /// Returns the raw value used in the lockfile, quotes included.
    ///
    /// pub quotes multi-word categories and leaves single words bare.
    pub fn lockfile_token(&self) -> &'static str {
        match self {
            Category::DirectMain => "\"direct main\"",
            Category::DirectDev => "\"direct dev\"",
            Category::Transitive => "transitive",
        }
    }

    /// Returns the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::DirectMain => "direct main",
            Category::DirectDev => "direct dev",
            Category::Transitive => "transitive",
        }
    }

    /// Returns all categories in report order
    pub fn all() -> &'static [Category] {
        &[Category::DirectMain, Category::DirectDev, Category::Transitive]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which categories a run reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryFilter {
    /// Direct runtime dependencies only
    DirectMain,
    /// Direct development dependencies only
    DirectDev,
    /// Transitive dependencies only
    Transitive,
    /// All three categories, one section each
    All,
}

impl CategoryFilter {
    /// Returns the categories covered by this filter, in report order
    pub fn categories(&self) -> &'static [Category] {
        match self {
            CategoryFilter::DirectMain => &[Category::DirectMain],
            CategoryFilter::DirectDev => &[Category::DirectDev],
            CategoryFilter::Transitive => &[Category::Transitive],
            CategoryFilter::All => Category::all(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::DirectMain => write!(f, "direct main"),
            CategoryFilter::DirectDev => write!(f, "direct dev"),
            CategoryFilter::Transitive => write!(f, "transitive"),
            CategoryFilter::All => write!(f, "all"),
        }
    }
}
