//! Audit configuration from TOML (`[audit]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default audit log location, relative to the working directory
const DEFAULT_AUDIT_PATH: &str = ".assess/audit.jsonl";

/// Raw audit configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    /// Write a JSONL audit log of each prediction run
    pub enabled: bool,
    /// Audit log path; omit for the default location
    pub path: Option<String>,
}

impl FileAuditConfig {
    /// Where the audit log should go, or `None` when auditing is off
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        Some(PathBuf::from(
            self.path.as_deref().unwrap_or(DEFAULT_AUDIT_PATH),
        ))
    }
}
