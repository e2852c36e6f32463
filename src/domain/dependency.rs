//! Dependency records and lookup results

use super::Category;
use std::fmt;

/// A package resolved in the lockfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Category the lockfile assigns to the package
    pub category: Category,
    /// Version recorded in the lockfile, quotes stripped
    pub local_version: String,
}

impl Dependency {
    /// Creates a new dependency record
    pub fn new(
        name: impl Into<String>,
        category: Category,
        local_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            local_version: local_version.into(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} [{}]", self.name, self.local_version, self.category)
    }
}

/// Latest published version of a package, if the registry had one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub name: String,
    pub latest_version: Option<String>,
}

impl LookupResult {
    pub fn found(name: impl Into<String>, latest_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latest_version: Some(latest_version.into()),
        }
    }

    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latest_version: None,
        }
    }
}

/// A dependency whose locked version is older than the latest release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedEntry {
    pub name: String,
    pub local_version: String,
    pub latest_version: String,
}

impl OutdatedEntry {
    /// Creates an outdated entry from a record and the registry's latest version
    pub fn new(dependency: &Dependency, latest_version: impl Into<String>) -> Self {
        Self {
            name: dependency.name.clone(),
            local_version: dependency.local_version.clone(),
            latest_version: latest_version.into(),
        }
    }
}
