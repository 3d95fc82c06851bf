//! Application layer for anchor-assess
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PredictionParams;
pub use ports::{
    answer_prompt::{AnchorPrompt, AnswerPromptPort, AutoSkipPrompt, PromptError},
    audit::{AuditEvent, AuditSink, NoAuditSink},
    progress::{NoProgress, PredictionProgress},
};
pub use use_cases::predict::{
    PredictAssessmentUseCase, PredictError, PredictInput, PredictOutput, PredictStats,
};
pub use use_cases::select_anchors::SelectAnchorsUseCase;
