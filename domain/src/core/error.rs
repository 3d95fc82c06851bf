//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Question not found in catalog: {0}")]
    QuestionNotFound(String),

    #[error("No metadata recorded for answer: {0}")]
    MissingMetadata(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::MissingMetadata("2.6".to_string());
        assert_eq!(error.to_string(), "No metadata recorded for answer: 2.6");
    }
}
