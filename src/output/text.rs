//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Change kind display with colors (major/minor/patch/unchanged)
//! - Per-module breakdown in verbose mode
//! - A note when every new version is a 0.x.y release

use crate::domain::ChangeKind;
use crate::error::AppError;
use crate::orchestrator::{ModuleReport, OrchestratorResult};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Get the display label with color
fn colored_label(kind: ChangeKind) -> String {
    match kind {
        ChangeKind::Major => "major".red().bold().to_string(),
        ChangeKind::Minor => "minor".yellow().to_string(),
        ChangeKind::Patch => "patch".green().to_string(),
        ChangeKind::Unchanged => "unchanged".dimmed().to_string(),
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn label(&self, kind: ChangeKind) -> String {
        if self.color {
            colored_label(kind)
        } else {
            kind.label().to_string()
        }
    }

    /// Format a single module line
    fn format_module_line(
        &self,
        module: &ModuleReport,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let old = module
            .old
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(missing)".to_string());
        let new = module
            .new
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(missing)".to_string());
        let change = module
            .change
            .map(|c| self.label(c))
            .unwrap_or_else(|| "?".to_string());

        if self.color {
            writeln!(
                writer,
                "  {:width$} {} {} {} [{}]",
                module.name,
                old.dimmed(),
                "→".dimmed(),
                new.bright_white().bold(),
                change,
                width = max_name_len
            )
        } else {
            writeln!(
                writer,
                "  {:width$} {} -> {} [{}]",
                module.name,
                old,
                new,
                change,
                width = max_name_len
            )
        }
    }

    fn format_modules(
        &self,
        modules: &[ModuleReport],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if modules.is_empty() {
            return Ok(());
        }
        let max_name_len = modules.iter().map(|m| m.name.len()).max().unwrap_or(0);
        writeln!(writer, "Modules:")?;
        for module in modules {
            self.format_module_line(module, max_name_len, writer)?;
        }
        writeln!(writer)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return match result.outcome {
                Some(outcome) => writeln!(writer, "{}", outcome.change),
                None => writeln!(writer, "none"),
            };
        }

        if self.verbosity == Verbosity::Verbose {
            self.format_modules(&result.modules, writer)?;
            for warning in &result.warnings {
                writeln!(writer, "warning: {}", warning)?;
            }
        }

        match result.outcome {
            Some(outcome) => {
                writeln!(writer, "Change:  {}", self.label(outcome.change))?;
                writeln!(writer, "Version: {}", outcome.version)?;
            }
            None => {
                writeln!(writer, "No change classification (missing versions ignored)")?;
            }
        }

        if result.all_new_major_zero && result.outcome.is_some() {
            writeln!(writer, "Note: all new versions are 0.x.y releases")?;
        }

        Ok(())
    }

    fn format_error(&self, error: &AppError, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "{} {}", "Error:".red().bold(), error)
        } else {
            writeln!(writer, "Error: {}", error)
        }
    }
}
