//! CLI argument parsing module for verbump

use crate::error::ConfigError;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Semantic version change classifier
#[derive(Parser, Debug, Clone)]
#[command(
    name = "verbump",
    version,
    about = "Classify how a library's version should move between two states"
)]
pub struct CliArgs {
    /// Module list file (TOML) with per-module old and new versions
    pub file: Option<PathBuf>,

    // Versions
    /// Old version of a module (repeatable, or comma-separated)
    #[arg(long = "old", value_name = "VERSION", action = ArgAction::Append, value_delimiter = ',')]
    pub old_versions: Vec<String>,

    /// New version of a module (repeatable, or comma-separated)
    #[arg(long = "new", value_name = "VERSION", action = ArgAction::Append, value_delimiter = ',')]
    pub new_versions: Vec<String>,

    /// Report nothing instead of failing when no old version is available
    #[arg(long)]
    pub ignore_missing_old: bool,

    /// Report nothing instead of failing when no new version is available
    #[arg(long)]
    pub ignore_missing_new: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (per-module lines and debug logging)
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - print only the change kind
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Check for option combinations that make no sense together
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }
        if self.quiet && self.json {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --json cannot be used together".to_string(),
            });
        }
        Ok(())
    }

    /// Check if any version was given on the command line
    pub fn has_inline_versions(&self) -> bool {
        !self.old_versions.is_empty() || !self.new_versions.is_empty()
    }
}
