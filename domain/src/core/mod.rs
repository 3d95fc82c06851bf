//! Core value objects shared across the domain

pub mod answer;
pub mod error;
pub mod identifier;
pub mod provenance;

pub use answer::{Answer, AnswerMap, NOT_APPLICABLE, SKIPPED};
pub use error::DomainError;
pub use identifier::{question_key, section_prefix};
pub use provenance::{AnswerMeta, MetadataMap, Provenance};
