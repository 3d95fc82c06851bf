//! Catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Path to a TOML file with supplemental questions
    pub supplement: Option<String>,
}

impl FileCatalogConfig {
    pub fn supplement_path(&self) -> Option<PathBuf> {
        self.supplement.as_deref().map(PathBuf::from)
    }
}
