//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audit;
mod catalog;
mod classifier;
mod output;
mod prediction;

pub use audit::FileAuditConfig;
pub use catalog::FileCatalogConfig;
pub use classifier::FileClassifierConfig;
pub use output::FileOutputConfig;
pub use prediction::FilePredictionConfig;

use serde::{Deserialize, Serialize};

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The value was adjusted or ignored; the run continues
    Warning,
    /// The configuration cannot be used as written
    Error,
}

/// Machine-readable identity of a configuration issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A numeric field is zero where zero disables the feature entirely
    ZeroValue { field: String },
    /// A path field is present but empty
    EmptyPath { field: String },
}

/// One problem found while validating a [`FileConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}", tag, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Section classifier cache settings
    pub classifier: FileClassifierConfig,
    /// Prediction run settings
    pub prediction: FilePredictionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Audit log settings
    pub audit: FileAuditConfig,
    /// Catalog settings
    pub catalog: FileCatalogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks
    /// degenerate numeric values and empty path fields; the supplement
    /// file itself is validated when loaded.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.classifier.capacity == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ZeroValue {
                    field: "classifier.capacity".to_string(),
                },
                message: "classifier.capacity: 0 is clamped to 1 entry".to_string(),
            });
        }

        if self.classifier.eviction_threshold == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ZeroValue {
                    field: "classifier.eviction_threshold".to_string(),
                },
                message: "classifier.eviction_threshold: 0 reports any eviction as unhealthy"
                    .to_string(),
            });
        }

        if self.prediction.max_anchors == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ZeroValue {
                    field: "prediction.max_anchors".to_string(),
                },
                message: "prediction.max_anchors: 0 disables anchor selection".to_string(),
            });
        }

        if let Some(path) = &self.audit.path
            && path.trim().is_empty()
        {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyPath {
                    field: "audit.path".to_string(),
                },
                message: "audit.path: empty path; omit the key for the default location"
                    .to_string(),
            });
        }

        if let Some(path) = &self.catalog.supplement
            && path.trim().is_empty()
        {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyPath {
                    field: "catalog.supplement".to_string(),
                },
                message: "catalog.supplement: empty path".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[classifier]
capacity = 500
debug = true

[prediction]
anchor_timeout_secs = 60
max_anchors = 13

[output]
format = "full"
color = false

[audit]
enabled = true
path = "run.jsonl"

[catalog]
supplement = "extra.toml"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.classifier.capacity, 500);
        assert!(config.classifier.debug);
        assert_eq!(config.prediction.max_anchors, 13);
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert!(config.audit.enabled);
        assert_eq!(config.catalog.supplement.as_deref(), Some("extra.toml"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[classifier]
capacity = 12
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.classifier.capacity, 12);
        // Defaults should apply
        assert!(config.output.color);
        assert!(config.output.format.is_none());
        assert!(!config.audit.enabled);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_flags_zero_values() {
        let mut config = FileConfig::default();
        config.classifier.capacity = 0;
        config.prediction.max_anchors = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    }

    #[test]
    fn test_validate_flags_empty_paths() {
        let mut config = FileConfig::default();
        config.audit.path = Some("  ".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].to_string().starts_with("error: audit.path"));
    }
}
