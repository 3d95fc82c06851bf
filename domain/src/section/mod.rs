//! Questionnaire sections: codes, classification, and the relation graph

pub mod classifier;
pub mod code;
pub mod relations;

pub use classifier::{CacheHealth, CacheMetrics, HealthFinding, MonitoringConfig, SectionClassifier};
pub use code::Section;
pub use relations::{RelationGraph, RelationIssue, SectionRelation};
