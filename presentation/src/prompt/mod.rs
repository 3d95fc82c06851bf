//! Anchor prompt adapters
//!
//! Terminal implementations of the application's prompt port.

pub mod interactive;

pub use interactive::InteractiveAnswerPrompt;
