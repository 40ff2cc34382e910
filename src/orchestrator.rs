//! Reconciliation orchestrator
//!
//! This module provides:
//! - Workflow coordination: collect modules → parse versions → reconcile
//! - Merging of module list file entries with command-line versions
//! - Unparseable versions reported as warnings
//! - Only modules with both versions are paired for reconciliation

use crate::cli::CliArgs;
use crate::domain::{ChangeKind, SemanticVersion};
use crate::error::{AppError, ReconcileError};
use crate::manifest::{load_module_list, ModuleEntry, ModuleList, DEFAULT_MODULE_LIST};
use crate::parser::parse_version;
use crate::reconcile::{ReconciliationInput, ReconciliationResult, VersionReconciler};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

/// Orchestrator for the reconcile workflow
pub struct Orchestrator {
    /// Modules in positional order
    modules: Vec<ModuleEntry>,
    ignore_missing_old: bool,
    ignore_missing_new: bool,
    reconciler: VersionReconciler,
}

/// Per-module view of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old: Option<SemanticVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new: Option<SemanticVersion>,
    /// Pairwise change, when both sides parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<ChangeKind>,
}

/// Result of running the orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrchestratorResult {
    /// Dominant change, absent when a missing side was ignored
    pub outcome: Option<ReconciliationResult>,
    /// Every new version is a 0.x.y release
    pub all_new_major_zero: bool,
    pub modules: Vec<ModuleReport>,
    /// Versions that could not be parsed and modules left out
    pub warnings: Vec<String>,
}

impl Orchestrator {
    /// Create an orchestrator from CLI arguments
    ///
    /// Modules from the module list file come first, followed by the
    /// versions given with `--old`/`--new`. Ignore flags are OR-ed.
    /// Without a file or inline versions, `verbump.toml` in the working
    /// directory is used when it exists.
    pub fn new(args: &CliArgs) -> Result<Self, AppError> {
        let default_list = Path::new(DEFAULT_MODULE_LIST);
        let list = match &args.file {
            Some(path) => load_module_list(path)?,
            None if !args.has_inline_versions() && default_list.is_file() => {
                debug!(path = %default_list.display(), "using default module list");
                load_module_list(default_list)?
            }
            None => ModuleList::default(),
        };

        let mut orchestrator = Self::from_module_list(list);
        orchestrator.ignore_missing_old |= args.ignore_missing_old;
        orchestrator.ignore_missing_new |= args.ignore_missing_new;
        orchestrator.append_inline(&args.old_versions, &args.new_versions);
        Ok(orchestrator)
    }

    /// Create an orchestrator from an already loaded module list
    pub fn from_module_list(list: ModuleList) -> Self {
        Self {
            modules: list.modules,
            ignore_missing_old: list.ignore_missing_old,
            ignore_missing_new: list.ignore_missing_new,
            reconciler: VersionReconciler::new(),
        }
    }

    /// Append modules given as parallel old/new version lists
    pub fn append_inline(&mut self, old_versions: &[String], new_versions: &[String]) {
        let count = old_versions.len().max(new_versions.len());
        for i in 0..count {
            self.modules.push(ModuleEntry {
                name: None,
                old: old_versions.get(i).cloned(),
                new: new_versions.get(i).cloned(),
            });
        }
    }

    /// Number of modules collected so far
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Parse every module and reconcile
    pub fn run(&self) -> Result<OrchestratorResult, ReconcileError> {
        let mut warnings = Vec::new();
        let mut modules = Vec::with_capacity(self.modules.len());

        for (index, entry) in self.modules.iter().enumerate() {
            let name = entry.display_name(index);
            let old = parse_side(&name, "old", entry.old.as_deref(), &mut warnings);
            let new = parse_side(&name, "new", entry.new.as_deref(), &mut warnings);
            let change = match (old, new) {
                (Some(o), Some(n)) => Some(o.classify(&n)),
                _ => None,
            };
            modules.push(ModuleReport {
                name,
                old,
                new,
                change,
            });
        }

        let (old_versions, new_versions) = paired_versions(&modules, &mut warnings);
        let input = ReconciliationInput::new(old_versions, new_versions)
            .with_ignore_missing_old(self.ignore_missing_old)
            .with_ignore_missing_new(self.ignore_missing_new);

        debug!(
            old = input.old_versions.len(),
            new = input.new_versions.len(),
            "reconciling"
        );
        let outcome = self.reconciler.reconcile(&input)?;

        Ok(OrchestratorResult {
            outcome,
            all_new_major_zero: input.all_new_major_versions_are_zero(),
            modules,
            warnings,
        })
    }
}

/// Build positional old/new sequences from modules with both sides parsed
///
/// A module with only one side is left out so index i stays module i on
/// both sides. When no module can be compared, the side nobody supplied is
/// reported empty; if both were supplied somewhere, the old side is.
fn paired_versions(
    modules: &[ModuleReport],
    warnings: &mut Vec<String>,
) -> (Vec<SemanticVersion>, Vec<SemanticVersion>) {
    let mut old_versions = Vec::new();
    let mut new_versions = Vec::new();
    for module in modules {
        match (module.old, module.new) {
            (Some(old), Some(new)) => {
                old_versions.push(old);
                new_versions.push(new);
            }
            (Some(_), None) => skip_module(&module.name, "new", warnings),
            (None, Some(_)) => skip_module(&module.name, "old", warnings),
            (None, None) => {}
        }
    }

    if !old_versions.is_empty() {
        return (old_versions, new_versions);
    }

    let olds: Vec<_> = modules.iter().filter_map(|m| m.old).collect();
    let news: Vec<_> = modules.iter().filter_map(|m| m.new).collect();
    if olds.is_empty() || news.is_empty() {
        (olds, news)
    } else {
        (Vec::new(), news)
    }
}

fn skip_module(module: &str, missing: &str, warnings: &mut Vec<String>) {
    warn!(module, missing, "module skipped");
    warnings.push(format!("{}: skipped, no {} version", module, missing));
}

fn parse_side(
    module: &str,
    side: &str,
    raw: Option<&str>,
    warnings: &mut Vec<String>,
) -> Option<SemanticVersion> {
    let raw = raw?;
    match parse_version(raw) {
        Ok(version) => Some(version),
        Err(e) => {
            warn!(module, side, "{}", e);
            warnings.push(format!("{} ({} version): {}", module, side, e));
            None
        }
    }
}
