//! verbump - Semantic version change classifier library
//!
//! This library answers how a library's version number should move given
//! the old and new versions of one or more modules:
//! - Classify the change between two versions (major/minor/patch/unchanged)
//! - Increment a version for a given change
//! - Reconcile per-module versions into one dominant change

pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod reconcile;
