//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ReconcileError: Insufficient or malformed version input
//! - ParseError: Version strings that cannot be read as `major.minor.patch`
//! - ManifestError: Issues with the module list file
//! - ConfigError: Issues with CLI configuration

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Reconciliation errors
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    /// Version string parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Module list file errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Reason tag carried by every reconciliation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorReason {
    /// The caller supplied input the reconciler cannot work with
    InvalidArgument,
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorReason::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}

/// Errors raised while reconciling old and new versions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// No old version available and missing old versions are not ignored
    #[error(
        "could not extract a semantic version for at least one old version; \
         please follow the rules for semantic versioning"
    )]
    MissingOldVersions,

    /// No new version available and missing new versions are not ignored
    #[error(
        "could not extract a semantic version for at least one new version; \
         please follow the rules for semantic versioning"
    )]
    MissingNewVersions,

    /// Per-module versions differ and the module counts do not line up
    #[error(
        "cannot compare versions: {old} old version(s) but {new} new version(s)"
    )]
    MismatchedVersionCount { old: usize, new: usize },
}

impl ReconcileError {
    /// Returns the reason tag for this error
    pub fn reason(&self) -> ErrorReason {
        match self {
            ReconcileError::MissingOldVersions
            | ReconcileError::MissingNewVersions
            | ReconcileError::MismatchedVersionCount { .. } => ErrorReason::InvalidArgument,
        }
    }
}

/// Errors related to version string parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string has no leading numeric version
    #[error("invalid version '{input}': expected MAJOR[.MINOR[.PATCH]]")]
    InvalidVersion { input: String },
}

impl ParseError {
    /// Creates a new InvalidVersion error
    pub fn invalid_version(input: impl Into<String>) -> Self {
        ParseError::InvalidVersion {
            input: input.into(),
        }
    }
}

/// Errors related to the module list file
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Module list file not found
    #[error("module list not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read module list file
    #[error("failed to read module list {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}
