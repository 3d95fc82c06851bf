//! Infrastructure layer for anchor-assess
//!
//! This crate contains adapters for the outside world: configuration
//! file loading, the supplemental catalog and seed answer loaders, and
//! the JSONL audit sink. It implements the ports defined by the
//! application layer.

pub mod answers;
pub mod audit;
pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use answers::{AnswerFileError, AnswerFileLoader};
pub use audit::JsonlAuditSink;
pub use catalog::{CatalogFileError, TomlCatalogLoader};
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileAuditConfig, FileCatalogConfig,
    FileClassifierConfig, FileConfig, FileOutputConfig, FilePredictionConfig, Severity,
};
