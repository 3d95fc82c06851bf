//! The standard defaults table
//!
//! Defaults are the last resort of the prediction pipeline: deliberately
//! conservative values for whatever neither the user nor the rules
//! answered. Compliance practice questions default to "No" (absence of
//! evidence), factual scope questions to "Unknown", profile fields to
//! "Not provided", and multi-selects to an empty selection.

use std::collections::HashMap;

use crate::core::answer::Answer;
use crate::core::identifier::QuestionId;

const NO_DEFAULTS: [&str; 52] = [
    "1.7", "2.1", "2.3", "2.4", "2.5", "2.8", "3.3", "3.5", "3.6", "4.1", "4.2", "4.3", "4.4",
    "4.5", "4.6", "4.7", "4.8", "5.2", "5.3", "5.4", "5.5", "5.6", "5.7", "5.8", "6.2", "6.3",
    "6.4", "6.5", "6.6", "6.7", "6.8", "7.2", "7.4", "7.5", "7.6", "7.7", "7.8", "8.2", "8.3",
    "8.4", "8.5", "8.6", "8.7", "8.8", "9.2", "9.3", "9.5", "9.6", "9.7", "9.8", "10.2", "10.3",
];

const NO_DEFAULTS_TAIL: [&str; 16] = [
    "10.4", "10.5", "10.6", "10.7", "10.8", "11.2", "11.3", "11.4", "11.6", "11.7", "11.8",
    "12.2", "12.3", "12.4", "12.5", "12.6",
];

const UNKNOWN_DEFAULTS: [&str; 16] = [
    "1.4", "2.6", "2.7", "3.2", "3.4", "3.7", "3.8", "5.1", "6.1", "7.1", "7.3", "8.1", "9.1",
    "9.4", "10.1", "11.1",
];

const NOT_PROVIDED_DEFAULTS: [&str; 4] = ["1.1", "1.2", "1.3", "1.6"];

const EMPTY_SELECTION_DEFAULTS: [&str; 5] = ["1.8", "2.2", "3.1", "11.5", "13.2"];

/// The defaults for every standard question
pub fn standard_defaults() -> HashMap<QuestionId, Answer> {
    let mut defaults = HashMap::with_capacity(100);

    for id in NO_DEFAULTS.iter().chain(&NO_DEFAULTS_TAIL) {
        defaults.insert(id.to_string(), Answer::no());
    }
    for id in UNKNOWN_DEFAULTS {
        defaults.insert(id.to_string(), Answer::single("Unknown"));
    }
    for id in NOT_PROVIDED_DEFAULTS {
        defaults.insert(id.to_string(), Answer::single("Not provided"));
    }
    for id in EMPTY_SELECTION_DEFAULTS {
        defaults.insert(id.to_string(), Answer::multi(Vec::<String>::new()));
    }

    defaults.insert("1.5".to_string(), Answer::single("Controller"));
    defaults.insert("12.1".to_string(), Answer::single("Unknown"));
    defaults.insert("13.1".to_string(), Answer::single("Unknown"));
    defaults.insert("13.3".to_string(), Answer::no());
    defaults.insert("13.4".to_string(), Answer::no());
    defaults.insert("13.5".to_string(), Answer::no());
    defaults.insert("13.6".to_string(), Answer::no());

    defaults
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::questions::standard_questions;

    #[test]
    fn test_every_question_has_a_default() {
        let defaults = standard_defaults();
        for question in standard_questions() {
            assert!(
                defaults.contains_key(question.id()),
                "no default for {}",
                question.id()
            );
        }
    }

    #[test]
    fn test_no_orphan_defaults() {
        let defaults = standard_defaults();
        let ids: Vec<String> = standard_questions()
            .iter()
            .map(|q| q.id().to_string())
            .collect();
        for key in defaults.keys() {
            assert!(ids.contains(key), "default for unknown question {key}");
        }
    }

    #[test]
    fn test_default_count_matches_catalog() {
        assert_eq!(standard_defaults().len(), 100);
    }

    #[test]
    fn test_anchor_defaults_are_unknown() {
        let defaults = standard_defaults();
        assert_eq!(defaults.get("2.6"), Some(&Answer::single("Unknown")));
        assert_eq!(defaults.get("7.1"), Some(&Answer::single("Unknown")));
    }

    #[test]
    fn test_multi_select_defaults_are_empty_selections() {
        let defaults = standard_defaults();
        assert_eq!(
            defaults.get("11.5"),
            Some(&Answer::multi(Vec::<String>::new()))
        );
    }
}
