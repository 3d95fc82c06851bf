//! Domain layer for anchor-assess
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Anchors
//!
//! A small set of high-leverage questions whose answers determine large
//! portions of the rest of a compliance questionnaire:
//!
//! - **Anchor collection**: anchors are asked first, in a curated order
//! - **Inference cascade**: rules fan anchor answers out across the catalog
//! - **Default fill**: whatever remains is completed from the defaults table
//!
//! ## Sections
//!
//! The questionnaire is organized into 13 numbered sections. Question
//! identifiers carry their section as a numeric prefix (`"7.3"` lives in
//! section 7), and sections are linked by a symmetric relation graph used
//! for report cross-referencing.

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod core;
pub mod inference;
pub mod section;

// Re-export commonly used types
pub use assessment::{Assessment, AssessmentEntry, AssessmentSummary, SectionBreakdown};
pub use catalog::{
    AnchorSpec, CatalogIssue, CatalogIssueCode, InferFn, Question, QuestionCatalog,
};
pub use config::OutputFormat;
pub use core::{
    answer::{Answer, AnswerMap, NOT_APPLICABLE, SKIPPED},
    error::DomainError,
    identifier::{QuestionId, question_key, section_prefix},
    provenance::{AnswerMeta, MetadataMap, Provenance},
};
pub use inference::{InferenceOutcome, RuleEngine};
pub use section::{
    classifier::{CacheHealth, CacheMetrics, HealthFinding, MonitoringConfig, SectionClassifier},
    code::Section,
    relations::{RelationGraph, RelationIssue, SectionRelation},
};
