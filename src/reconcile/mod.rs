//! Version reconciliation across one or more modules
//!
//! This module provides:
//! - Reconciliation input with the ignore-missing flags
//! - The reconciler that reduces old/new version pairs to one dominant change
//! - The 0.x.y check callers use to relax major-bump enforcement

mod input;

pub use input::ReconciliationInput;

use crate::domain::{ChangeKind, SemanticVersion};
use crate::error::ReconcileError;
use serde::Serialize;
use tracing::{debug, warn};

/// The dominant change and the version tied to it
///
/// In the uniform branch `version` is the old version incremented by
/// `change`. In the per-module branch it is the old version of the module
/// that produced `change`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReconciliationResult {
    pub change: ChangeKind,
    pub version: SemanticVersion,
}

impl ReconciliationResult {
    pub fn new(change: ChangeKind, version: SemanticVersion) -> Self {
        Self { change, version }
    }
}

/// Reduces old/new version pairs to a single change classification
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionReconciler;

impl VersionReconciler {
    pub fn new() -> Self {
        Self
    }

    /// Reconcile the given input
    ///
    /// Returns `Ok(None)` when one side is empty and its ignore flag is set.
    pub fn reconcile(
        &self,
        input: &ReconciliationInput,
    ) -> Result<Option<ReconciliationResult>, ReconcileError> {
        let old = &input.old_versions;
        let new = &input.new_versions;

        if old.is_empty() {
            if !input.ignore_missing_old {
                warn!("no old version available");
                return Err(ReconcileError::MissingOldVersions);
            }
            debug!("no old version available, ignoring");
            return Ok(None);
        }
        if new.is_empty() {
            if !input.ignore_missing_new {
                warn!("no new version available");
                return Err(ReconcileError::MissingNewVersions);
            }
            debug!("no new version available, ignoring");
            return Ok(None);
        }

        if is_uniform(old) && is_uniform(new) {
            let change = old[0].classify(&new[0]);
            let version = old[0].increment(change);
            debug!(old = %old[0], new = %new[0], %change, %version, "uniform versions");
            return Ok(Some(ReconciliationResult::new(change, version)));
        }

        if old.len() != new.len() {
            warn!(
                old = old.len(),
                new = new.len(),
                "mismatched number of old and new versions"
            );
            return Err(ReconcileError::MismatchedVersionCount {
                old: old.len(),
                new: new.len(),
            });
        }

        let dominant = old
            .iter()
            .zip(new)
            .map(|(o, n)| ReconciliationResult::new(o.classify(n), *o))
            .inspect(|r| debug!(old = %r.version, change = %r.change, "module compared"))
            .reduce(|max, next| {
                // Ties keep the earliest module
                if next.change.outranks(max.change) {
                    next
                } else {
                    max
                }
            });

        Ok(dominant)
    }
}

/// Returns true if every new version has a zero major component
///
/// Vacuously true for an empty slice.
pub fn all_new_major_versions_are_zero(new_versions: &[SemanticVersion]) -> bool {
    new_versions.iter().all(|v| v.major() == 0)
}

fn is_uniform(versions: &[SemanticVersion]) -> bool {
    match versions.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorReason;

    fn v(major: u64, minor: u64, patch: u64) -> SemanticVersion {
        SemanticVersion::new(major, minor, patch)
    }

    fn reconcile(
        old: Vec<SemanticVersion>,
        new: Vec<SemanticVersion>,
    ) -> Result<Option<ReconciliationResult>, ReconcileError> {
        VersionReconciler::new().reconcile(&ReconciliationInput::new(old, new))
    }

    #[test]
    fn test_single_module_major_is_incremented() {
        let result = reconcile(vec![v(1, 2, 3)], vec![v(2, 0, 0)]).unwrap();
        assert_eq!(
            result,
            Some(ReconciliationResult::new(ChangeKind::Major, v(2, 0, 0)))
        );
    }

    #[test]
    fn test_single_module_unchanged_returns_old() {
        let result = reconcile(vec![v(1, 2, 3)], vec![v(1, 2, 3)]).unwrap();
        assert_eq!(
            result,
            Some(ReconciliationResult::new(ChangeKind::Unchanged, v(1, 2, 3)))
        );
    }

    #[test]
    fn test_single_module_increment_ignores_new_value() {
        // Increment starts from the old version, not from the new one
        let result = reconcile(vec![v(1, 2, 3)], vec![v(1, 9, 9)]).unwrap();
        assert_eq!(
            result,
            Some(ReconciliationResult::new(ChangeKind::Minor, v(1, 3, 0)))
        );
    }

    #[test]
    fn test_missing_old_ignored() {
        let input = ReconciliationInput::new(vec![], vec![v(1, 0, 0)]).with_ignore_missing_old(true);
        let result = VersionReconciler::new().reconcile(&input).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_old_not_ignored() {
        let err = reconcile(vec![], vec![v(1, 0, 0)]).unwrap_err();
        assert_eq!(err, ReconcileError::MissingOldVersions);
        assert_eq!(err.reason(), ErrorReason::InvalidArgument);
    }

    #[test]
    fn test_missing_new_ignored() {
        let input = ReconciliationInput::new(vec![v(1, 0, 0)], vec![]).with_ignore_missing_new(true);
        assert!(VersionReconciler::new().reconcile(&input).unwrap().is_none());
    }

    #[test]
    fn test_missing_new_not_ignored() {
        let err = reconcile(vec![v(1, 0, 0)], vec![]).unwrap_err();
        assert_eq!(err, ReconcileError::MissingNewVersions);
    }

    #[test]
    fn test_missing_old_checked_before_new() {
        let input = ReconciliationInput::new(vec![], vec![]).with_ignore_missing_new(true);
        let err = VersionReconciler::new().reconcile(&input).unwrap_err();
        assert_eq!(err, ReconcileError::MissingOldVersions);
    }

    #[test]
    fn test_ignored_old_short_circuits_missing_new() {
        let input = ReconciliationInput::new(vec![], vec![]).with_ignore_missing_old(true);
        assert!(VersionReconciler::new().reconcile(&input).unwrap().is_none());
    }

    #[test]
    fn test_heterogeneous_picks_highest_rank() {
        let result = reconcile(vec![v(1, 0, 0), v(2, 0, 0)], vec![v(1, 1, 0), v(2, 0, 1)])
            .unwrap();
        assert_eq!(
            result,
            Some(ReconciliationResult::new(ChangeKind::Minor, v(1, 0, 0)))
        );
    }

    #[test]
    fn test_heterogeneous_reports_old_version() {
        let result = reconcile(vec![v(1, 0, 0), v(2, 0, 0)], vec![v(1, 0, 1), v(3, 0, 0)])
            .unwrap();
        assert_eq!(
            result,
            Some(ReconciliationResult::new(ChangeKind::Major, v(2, 0, 0)))
        );
    }

    #[test]
    fn test_heterogeneous_tie_keeps_first() {
        let result = reconcile(
            vec![v(1, 0, 0), v(2, 0, 0), v(3, 0, 0)],
            vec![v(1, 0, 0), v(2, 1, 0), v(3, 1, 0)],
        )
        .unwrap();
        assert_eq!(
            result,
            Some(ReconciliationResult::new(ChangeKind::Minor, v(2, 0, 0)))
        );
    }

    #[test]
    fn test_heterogeneous_all_unchanged() {
        let result = reconcile(vec![v(1, 0, 0), v(2, 0, 0)], vec![v(1, 0, 0), v(2, 0, 0)])
            .unwrap();
        assert_eq!(
            result,
            Some(ReconciliationResult::new(ChangeKind::Unchanged, v(1, 0, 0)))
        );
    }

    #[test]
    fn test_duplicated_uniform_sides() {
        let result = reconcile(vec![v(1, 0, 0), v(1, 0, 0)], vec![v(2, 0, 0), v(2, 0, 0)])
            .unwrap();
        assert_eq!(
            result,
            Some(ReconciliationResult::new(ChangeKind::Major, v(2, 0, 0)))
        );
    }

    #[test]
    fn test_uniform_sides_of_different_length() {
        // Both sides uniform: treated as one logical module regardless of count
        let result = reconcile(vec![v(1, 0, 0)], vec![v(1, 0, 1), v(1, 0, 1), v(1, 0, 1)])
            .unwrap();
        assert_eq!(
            result,
            Some(ReconciliationResult::new(ChangeKind::Patch, v(1, 0, 1)))
        );
    }

    #[test]
    fn test_mismatched_count() {
        let err = reconcile(vec![v(1, 0, 0)], vec![v(1, 0, 0), v(2, 0, 0)]).unwrap_err();
        assert_eq!(err, ReconcileError::MismatchedVersionCount { old: 1, new: 2 });
        assert_eq!(err.reason(), ErrorReason::InvalidArgument);
    }

    #[test]
    fn test_all_new_major_versions_are_zero_empty() {
        assert!(all_new_major_versions_are_zero(&[]));
    }

    #[test]
    fn test_all_new_major_versions_are_zero() {
        assert!(all_new_major_versions_are_zero(&[v(0, 1, 0), v(0, 0, 5)]));
        assert!(!all_new_major_versions_are_zero(&[v(0, 1, 0), v(1, 0, 0)]));
    }

    #[test]
    fn test_is_uniform() {
        assert!(is_uniform(&[]));
        assert!(is_uniform(&[v(1, 0, 0)]));
        assert!(is_uniform(&[v(1, 0, 0), v(1, 0, 0)]));
        assert!(!is_uniform(&[v(1, 0, 0), v(1, 0, 1)]));
    }

    #[test]
    fn test_serde_reconciliation_result() {
        let result = ReconciliationResult::new(ChangeKind::Patch, v(1, 2, 4));
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["change"], "patch");
        assert_eq!(json["version"], "1.2.4");
    }
}
