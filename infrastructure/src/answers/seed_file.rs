//! TOML answer file parsing.
//!
//! The file holds one `[answers]` table keyed by question id. Values are a
//! string for single-select questions or an array for multi-select ones:
//!
//! ```toml
//! [answers]
//! "2.6" = "Yes"
//! "3.2" = ["GDPR", "CCPA/CPRA"]
//! ```
//!
//! Ids may be decorated with question text; normalization happens inside
//! the prediction run, not here.

use assess_domain::AnswerMap;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading an answer file
#[derive(Error, Debug)]
pub enum AnswerFileError {
    #[error("Failed to read answer file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse answer file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct AnswerFile {
    #[serde(default)]
    answers: AnswerMap,
}

/// Loads pre-seeded answers for a prediction run
pub struct AnswerFileLoader;

impl AnswerFileLoader {
    /// Read the `[answers]` table from a TOML file
    pub fn load(path: &Path) -> Result<AnswerMap, AnswerFileError> {
        let raw = std::fs::read_to_string(path)?;
        let file: AnswerFile = toml::from_str(&raw)?;

        info!(
            path = %path.display(),
            answers = file.answers.len(),
            "loaded seed answers"
        );
        Ok(file.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_domain::Answer;
    use std::io::Write;

    fn write_answers(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_reads_single_and_multi_values() {
        let (_dir, path) = write_answers(
            r#"
[answers]
"2.6" = "Yes"
"3.2" = ["GDPR", "CCPA/CPRA"]
"#,
        );

        let answers = AnswerFileLoader::load(&path).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get("2.6"), Some(&Answer::yes()));
        assert_eq!(answers.get("3.2"), Some(&Answer::multi(["GDPR", "CCPA/CPRA"])));
    }

    #[test]
    fn test_load_accepts_decorated_ids() {
        let (_dir, path) = write_answers(
            r#"
[answers]
"2.6 Does the organization process EU personal data?" = "No"
"#,
        );

        let answers = AnswerFileLoader::load(&path).unwrap();
        assert!(answers.contains("2.6 Does the organization process EU personal data?"));
    }

    #[test]
    fn test_empty_file_yields_empty_map() {
        let (_dir, path) = write_answers("");

        let answers = AnswerFileLoader::load(&path).unwrap();
        assert!(answers.is_empty());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let (_dir, path) = write_answers("[answers]\n\"2.6\" = ");

        let err = AnswerFileLoader::load(&path).unwrap_err();
        assert!(matches!(err, AnswerFileError::Parse(_)));
    }
}
