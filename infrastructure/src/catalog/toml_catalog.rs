//! TOML supplement file parsing.
//!
//! A supplement file adds questions to the questionnaire without a rebuild.
//! Each entry is a `[[question]]` table:
//!
//! ```toml
//! [[question]]
//! id = "2.9"
//! text = "Does the organization keep paper records?"
//! options = ["Yes", "No"]
//! default = "No"
//! ```
//!
//! The section is derived from the id prefix. Supplement defaults live in
//! the catalog's secondary defaults tier, so they never override built-in
//! entries.

use assess_domain::{Answer, Question, QuestionCatalog, QuestionId, Section, section_prefix};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a supplement file
#[derive(Error, Debug)]
pub enum CatalogFileError {
    #[error("Failed to read supplement file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse supplement file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Supplement question {id:?} has no recognizable section prefix")]
    UnknownSection { id: String },
}

/// Raw structure of a supplement file
#[derive(Debug, Deserialize)]
struct SupplementFile {
    #[serde(default, rename = "question")]
    questions: Vec<QuestionEntry>,
}

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    id: String,
    text: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    multi_select: bool,
    #[serde(default)]
    depends_on: Vec<String>,
    #[serde(default)]
    default: Option<Answer>,
}

/// Loads supplement files into the two-tier catalog
pub struct TomlCatalogLoader;

impl TomlCatalogLoader {
    /// Parse a supplement file into question records and their defaults.
    ///
    /// Entries without a `default` key rely on the runtime fallback; the
    /// catalog's `validate()` reports them as missing-default issues.
    pub fn load_supplement(
        path: &Path,
    ) -> Result<(Vec<Question>, HashMap<QuestionId, Answer>), CatalogFileError> {
        let raw = std::fs::read_to_string(path)?;
        let file: SupplementFile = toml::from_str(&raw)?;

        let mut questions = Vec::with_capacity(file.questions.len());
        let mut defaults = HashMap::new();

        for entry in file.questions {
            let section = section_prefix(&entry.id)
                .and_then(Section::from_code)
                .ok_or_else(|| CatalogFileError::UnknownSection {
                    id: entry.id.clone(),
                })?;

            let mut question = Question::new(&entry.id, entry.text, section)
                .with_options(entry.options)
                .with_depends_on(entry.depends_on);
            if entry.multi_select {
                question = question.multi_select();
            }

            if let Some(default) = entry.default {
                defaults.insert(entry.id.clone(), default);
            }
            questions.push(question);
        }

        Ok((questions, defaults))
    }

    /// Load a supplement file and graft it onto an existing catalog
    pub fn extend(
        catalog: QuestionCatalog,
        path: &Path,
    ) -> Result<QuestionCatalog, CatalogFileError> {
        let (questions, defaults) = Self::load_supplement(path)?;
        info!(
            path = %path.display(),
            questions = questions.len(),
            "loaded catalog supplement"
        );
        Ok(catalog.with_supplement(questions, defaults))
    }
}
