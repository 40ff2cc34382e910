//! Classification of the difference between two versions

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much a version number moved between two states
///
/// Variants are declared in ascending severity so the derived `Ord`
/// agrees with [`ChangeKind::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// All three components are equal
    Unchanged,
    /// Only the patch component differs
    Patch,
    /// The minor component differs
    Minor,
    /// The major component differs (breaking)
    Major,
}

impl ChangeKind {
    /// Severity rank used when picking the dominant change
    pub fn rank(&self) -> u8 {
        match self {
            ChangeKind::Major => 3,
            ChangeKind::Minor => 2,
            ChangeKind::Patch => 1,
            ChangeKind::Unchanged => 0,
        }
    }

    /// Returns true if this kind outranks `other`
    pub fn outranks(&self, other: ChangeKind) -> bool {
        self.rank() > other.rank()
    }

    /// Plain lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Major => "major",
            ChangeKind::Minor => "minor",
            ChangeKind::Patch => "patch",
            ChangeKind::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
