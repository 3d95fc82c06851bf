//! Configuration file loading for anchor-assess
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./assess.toml` or `./.assess.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/anchor-assess/config.toml`
//! 4. Fallback: `~/.config/anchor-assess/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileAuditConfig, FileCatalogConfig, FileClassifierConfig,
    FileConfig, FileOutputConfig, FilePredictionConfig, Severity,
};
pub use loader::ConfigLoader;
