//! Classifier configuration from TOML (`[classifier]` section)

use assess_domain::MonitoringConfig;
use assess_domain::section::classifier::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw classifier configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    /// Cache capacity in entries
    pub capacity: usize,
    /// Log every cache lookup
    pub debug: bool,
    /// Evictions per window before the cache is flagged unhealthy
    pub eviction_threshold: u64,
    /// Eviction monitoring window, in seconds
    pub eviction_window_secs: u64,
}

impl Default for FileClassifierConfig {
    fn default() -> Self {
        let monitoring = MonitoringConfig::default();
        Self {
            capacity: DEFAULT_CAPACITY,
            debug: false,
            eviction_threshold: monitoring.eviction_threshold,
            eviction_window_secs: monitoring.window.as_secs(),
        }
    }
}

impl FileClassifierConfig {
    /// Convert to the domain monitoring settings
    pub fn monitoring(&self) -> MonitoringConfig {
        MonitoringConfig {
            eviction_threshold: self.eviction_threshold,
            window: Duration::from_secs(self.eviction_window_secs),
        }
    }
}
