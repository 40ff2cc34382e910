//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the reconciliation outcome
//! - Per-module breakdown in verbose mode
//! - Structured error objects

use crate::domain::{ChangeKind, SemanticVersion};
use crate::error::{AppError, ErrorReason};
use crate::orchestrator::{ModuleReport, OrchestratorResult};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Dominant change, null when nothing was classified
    change: Option<ChangeKind>,
    /// Version tied to the dominant change
    version: Option<SemanticVersion>,
    all_new_major_zero: bool,
    /// Per-module results (only in verbose mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    modules: Option<&'a [ModuleReport]>,
    #[serde(skip_serializing_if = "is_empty")]
    warnings: &'a [String],
}

/// JSON representation of an error
#[derive(Serialize)]
struct JsonError {
    error: JsonErrorBody,
}

#[derive(Serialize)]
struct JsonErrorBody {
    reason: &'static str,
    message: String,
}

fn is_empty(items: &&[String]) -> bool {
    items.is_empty()
}

/// Machine-readable tag for the `reason` field of an error object
fn reason_tag(error: &AppError) -> &'static str {
    match error {
        AppError::Reconcile(e) => match e.reason() {
            ErrorReason::InvalidArgument => "invalid_argument",
        },
        AppError::Parse(_) => "invalid_version",
        AppError::Manifest(_) => "module_list",
        AppError::Config(_) => "configuration",
    }
}

fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(writer, "{}", json)
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            change: result.outcome.map(|o| o.change),
            version: result.outcome.map(|o| o.version),
            all_new_major_zero: result.all_new_major_zero,
            modules: (self.verbosity == Verbosity::Verbose).then_some(result.modules.as_slice()),
            warnings: &result.warnings,
        };
        write_json(&output, writer)
    }

    fn format_error(&self, error: &AppError, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonError {
            error: JsonErrorBody {
                reason: reason_tag(error),
                message: error.to_string(),
            },
        };
        write_json(&output, writer)
    }
}
