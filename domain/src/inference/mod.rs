//! Fixed-point application of catalog inference rules

pub mod engine;

pub use engine::{InferenceOutcome, RuleEngine};
