//! Core domain models for verbump
//!
//! This module contains the value types every other layer works with:
//! - `SemanticVersion`, the immutable version triple
//! - `ChangeKind`, the severity of a version change

mod change_kind;
mod version;

pub use change_kind::ChangeKind;
pub use version::SemanticVersion;
