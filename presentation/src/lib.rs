//! Presentation layer for anchor-assess
//!
//! This crate contains CLI definitions, the interactive anchor prompt,
//! output formatters, and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod prompt;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::ReportFormatter;
pub use progress::reporter::ConsoleProgress;
pub use prompt::interactive::InteractiveAnswerPrompt;
