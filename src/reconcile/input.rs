//! Reconciliation input
//!
//! This module provides the ReconciliationInput struct that carries the
//! per-module old and new versions together with the ignore flags.

use crate::domain::SemanticVersion;

/// Old and new versions to reconcile, paired by position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationInput {
    /// Old version of each module, in module order
    pub old_versions: Vec<SemanticVersion>,
    /// New version of each module, in module order
    pub new_versions: Vec<SemanticVersion>,
    /// Treat an empty old side as "nothing to report" instead of an error
    pub ignore_missing_old: bool,
    /// Treat an empty new side as "nothing to report" instead of an error
    pub ignore_missing_new: bool,
}

impl ReconciliationInput {
    /// Create an input from old and new versions with both ignore flags off
    pub fn new(old_versions: Vec<SemanticVersion>, new_versions: Vec<SemanticVersion>) -> Self {
        Self {
            old_versions,
            new_versions,
            ..Self::default()
        }
    }

    /// Set whether a missing old version is ignored
    pub fn with_ignore_missing_old(mut self, ignore: bool) -> Self {
        self.ignore_missing_old = ignore;
        self
    }

    /// Set whether a missing new version is ignored
    pub fn with_ignore_missing_new(mut self, ignore: bool) -> Self {
        self.ignore_missing_new = ignore;
        self
    }

    /// Returns true if every new version is a 0.x.y release
    pub fn all_new_major_versions_are_zero(&self) -> bool {
        super::all_new_major_versions_are_zero(&self.new_versions)
    }
}
