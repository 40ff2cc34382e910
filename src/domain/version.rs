//! Semantic version triple
//!
//! A `SemanticVersion` is a plain `major.minor.patch` value. It knows how to
//! classify its difference to another version and how to produce the next
//! version for a given change kind. It has no ordering.

use super::ChangeKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An immutable `major.minor.patch` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
}

impl SemanticVersion {
    /// Creates a new version
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Classify the difference between `self` and `other`
    ///
    /// Major is compared first, then minor, then patch. The first differing
    /// component decides the result.
    pub fn classify(&self, other: &SemanticVersion) -> ChangeKind {
        if self.major != other.major {
            ChangeKind::Major
        } else if self.minor != other.minor {
            ChangeKind::Minor
        } else if self.patch != other.patch {
            ChangeKind::Patch
        } else {
            ChangeKind::Unchanged
        }
    }

    /// Returns the version that follows `self` for the given change kind
    ///
    /// Lower components are reset to zero. `Unchanged` returns `self`.
    pub fn increment(&self, kind: ChangeKind) -> SemanticVersion {
        match kind {
            ChangeKind::Major => Self::new(self.major.saturating_add(1), 0, 0),
            ChangeKind::Minor => Self::new(self.major, self.minor.saturating_add(1), 0),
            ChangeKind::Patch => Self::new(self.major, self.minor, self.patch.saturating_add(1)),
            ChangeKind::Unchanged => *self,
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<&semver::Version> for SemanticVersion {
    fn from(v: &semver::Version) -> Self {
        Self::new(v.major, v.minor, v.patch)
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let parsed = semver::Version::parse(&raw).map_err(serde::de::Error::custom)?;
        Ok(Self::from(&parsed))
    }
}
