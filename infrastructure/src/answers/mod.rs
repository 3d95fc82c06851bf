//! Pre-seeded answer loading
//!
//! Reads known answers from a TOML file so runs can start with answers
//! collected elsewhere instead of prompting for them.

mod seed_file;

pub use seed_file::{AnswerFileError, AnswerFileLoader};
