//! Module list file loading
//!
//! A module list names the independently-versioned modules of a library
//! together with their old and new version strings:
//!
//! ```toml
//! ignore_missing_old = false
//! ignore_missing_new = false
//!
//! [[module]]
//! name = "core"
//! old = "1.2.3"
//! new = "1.3.0"
//! ```
//!
//! Module order in the file is the positional order used for reconciliation.

use crate::error::ManifestError;
use serde::Deserialize;
use std::path::Path;

/// Default file name looked up by the CLI
pub const DEFAULT_MODULE_LIST: &str = "verbump.toml";

/// Parsed contents of a module list file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleList {
    /// Treat an empty old side as "nothing to report"
    #[serde(default)]
    pub ignore_missing_old: bool,
    /// Treat an empty new side as "nothing to report"
    #[serde(default)]
    pub ignore_missing_new: bool,
    /// Modules in positional order
    #[serde(default, rename = "module")]
    pub modules: Vec<ModuleEntry>,
}

/// One module entry with raw version strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleEntry {
    pub name: Option<String>,
    pub old: Option<String>,
    pub new: Option<String>,
}

impl ModuleEntry {
    /// Creates a new entry
    pub fn new(
        name: impl Into<String>,
        old: Option<impl Into<String>>,
        new: Option<impl Into<String>>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            old: old.map(Into::into),
            new: new.map(Into::into),
        }
    }

    /// Returns the module name, or `module-<index>` when none is given
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("module-{}", index))
    }
}

/// Parse a module list from TOML content
pub fn parse_module_list(content: &str, path: &Path) -> Result<ModuleList, ManifestError> {
    toml::from_str(content)
        .map_err(|e: toml::de::Error| ManifestError::toml_parse_error(path, e.to_string()))
}

/// Read and parse a module list file
pub fn load_module_list(path: &Path) -> Result<ModuleList, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }
    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    parse_module_list(&content, path)
}
