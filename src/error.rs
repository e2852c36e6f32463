//! Application error types using thiserror
//!
//! Error hierarchy:
//! - LockfileError: Issues with reading or scanning pubspec.lock
//! - RegistryError: Issues with pub.dev communication
//! - ConfigError: Issues with resolving the run configuration
//! - ReportError: Failures writing the report file

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Lockfile related errors
    #[error(transparent)]
    Lockfile(#[from] LockfileError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Report output related errors
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Errors related to lockfile operations
#[derive(Error, Debug)]
pub enum LockfileError {
    /// Lockfile not found
    #[error("lockfile not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the lockfile
    #[error("failed to read lockfile {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Block header whose name is not a valid pub package identifier
    #[error("invalid package name '{name}' at line {line}")]
    InvalidPackageName { name: String, line: usize },

    /// Version field with nothing after the colon
    #[error("package '{name}' has an empty version at line {line}")]
    EmptyVersion { name: String, line: usize },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    Network {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Answer to the category prompt was not one of the offered options
    #[error(
        "invalid category selection '{value}': expected 1-4 or direct-main, direct-dev, transitive, all"
    )]
    InvalidCategory { value: String },

    /// Prompt could not be shown or answered
    #[error("failed to read category selection: {source}")]
    PromptIo {
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to the report file
#[derive(Error, Debug)]
pub enum ReportError {
    /// Report file could not be created or truncated
    #[error("failed to create report file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the report file failed
    #[error("failed to write report file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LockfileError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        LockfileError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LockfileError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the run can continue past this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LockfileError::InvalidPackageName { .. } | LockfileError::EmptyVersion { .. }
        )
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::Network {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidCategory error
    pub fn invalid_category(value: impl Into<String>) -> Self {
        ConfigError::InvalidCategory {
            value: value.into(),
        }
    }
}

impl ReportError {
    pub fn create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Create {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Write {
            path: path.into(),
            source,
        }
    }
}
