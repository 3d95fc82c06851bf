//! Answer value objects
//!
//! An [`Answer`] is the recorded reply to a single question. Most questions
//! take a single string value; multi-select questions take a list of
//! selected options. [`AnswerMap`] is the working set of replies keyed by
//! canonical question key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::identifier::QuestionId;

/// Sentinel recorded when an anchor was offered and declined.
///
/// The sentinel is a recorded value: lookups treat the question as answered
/// (it is not re-asked and not default-filled), but inference rules treat
/// it as unknown and derive nothing from it.
pub const SKIPPED: &str = "__SKIPPED__";

/// Exclusionary value assigned to questions ruled out by an anchor answer,
/// and the fallback used when a question has no entry in the defaults table.
pub const NOT_APPLICABLE: &str = "Not Applicable";

/// The recorded reply to a single question
///
/// Serializes untagged: a single value as a JSON string, a multi-select
/// reply as a JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// A single selected value (yes/no, an option label, or free text)
    Single(String),
    /// The selected options of a multi-select question
    Multi(Vec<String>),
}

impl Answer {
    /// Create a single-valued answer
    pub fn single(value: impl Into<String>) -> Self {
        Answer::Single(value.into())
    }

    /// Create a multi-valued answer
    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Answer::Multi(values.into_iter().map(Into::into).collect())
    }

    /// The affirmative reply to a yes/no question
    pub fn yes() -> Self {
        Answer::Single("Yes".to_string())
    }

    /// The negative reply to a yes/no question
    pub fn no() -> Self {
        Answer::Single("No".to_string())
    }

    /// The exclusionary value
    pub fn not_applicable() -> Self {
        Answer::Single(NOT_APPLICABLE.to_string())
    }

    /// The skip sentinel
    pub fn skipped() -> Self {
        Answer::Single(SKIPPED.to_string())
    }

    /// Check whether this answer is the skip sentinel
    pub fn is_skipped(&self) -> bool {
        matches!(self, Answer::Single(v) if v == SKIPPED)
    }

    /// Check whether this answer is the exclusionary value
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Answer::Single(v) if v == NOT_APPLICABLE)
    }

    /// Check for an affirmative reply (case-insensitive)
    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Single(v) if v.eq_ignore_ascii_case("yes"))
    }

    /// Check for a negative reply (case-insensitive)
    pub fn is_no(&self) -> bool {
        matches!(self, Answer::Single(v) if v.eq_ignore_ascii_case("no"))
    }

    /// The inner value, if single-valued
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Answer::Single(v) => Some(v),
            Answer::Multi(_) => None,
        }
    }

    /// The selected options, if multi-valued
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            Answer::Single(_) => None,
            Answer::Multi(v) => Some(v),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Single(v) => write!(f, "{}", v),
            Answer::Multi(v) => write!(f, "{}", v.join(", ")),
        }
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Single(s.to_string())
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Single(s)
    }
}

/// A set of answers keyed by question identifier
///
/// Inference works on maps keyed by canonical question key; prediction
/// output keeps whatever identifiers the caller supplied. A key being
/// present means the question is answered, even when the value is the
/// skip sentinel. Iteration follows the keys' lexicographic order, which
/// keeps exported documents stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<QuestionId, Answer>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<QuestionId>, answer: Answer) -> Option<Answer> {
        self.0.insert(key.into(), answer)
    }

    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Answer> {
        self.0.get_mut(key)
    }

    /// True when the question has any recorded reply, including the sentinel
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &QuestionId> {
        self.0.keys()
    }

    /// True when the question is answered affirmatively.
    ///
    /// Missing answers and the skip sentinel both return false, so rules
    /// can probe without special-casing skipped anchors.
    pub fn is_yes(&self, key: &str) -> bool {
        self.get(key).is_some_and(Answer::is_yes)
    }

    /// True when the question is answered negatively (see [`Self::is_yes`])
    pub fn is_no(&self, key: &str) -> bool {
        self.get(key).is_some_and(Answer::is_no)
    }

    /// True when the question was explicitly skipped
    pub fn is_skipped(&self, key: &str) -> bool {
        self.get(key).is_some_and(Answer::is_skipped)
    }
}

impl FromIterator<(QuestionId, Answer)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Answer)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AnswerMap {
    type Item = (QuestionId, Answer);
    type IntoIter = std::collections::btree_map::IntoIter<QuestionId, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_predicates() {
        assert!(Answer::yes().is_yes());
        assert!(Answer::single("YES").is_yes());
        assert!(!Answer::yes().is_no());
        assert!(Answer::no().is_no());
        assert!(!Answer::single("Not Applicable").is_yes());
    }

    #[test]
    fn test_sentinel_is_not_yes_or_no() {
        let skipped = Answer::skipped();
        assert!(skipped.is_skipped());
        assert!(!skipped.is_yes());
        assert!(!skipped.is_no());
        assert!(!skipped.is_not_applicable());
    }

    #[test]
    fn test_multi_answers_have_no_single_value() {
        let a = Answer::multi(["GDPR", "CCPA/CPRA"]);
        assert_eq!(a.as_single(), None);
        assert_eq!(a.as_multi().map(<[String]>::len), Some(2));
        assert!(!a.is_yes());
    }

    #[test]
    fn test_display_joins_multi() {
        assert_eq!(Answer::multi(["A", "B"]).to_string(), "A, B");
        assert_eq!(Answer::yes().to_string(), "Yes");
    }

    #[test]
    fn test_untagged_serialization() {
        let single = serde_json::to_string(&Answer::yes()).unwrap();
        assert_eq!(single, "\"Yes\"");

        let multi = serde_json::to_string(&Answer::multi(["A", "B"])).unwrap();
        assert_eq!(multi, "[\"A\",\"B\"]");

        let back: Answer = serde_json::from_str("[\"A\",\"B\"]").unwrap();
        assert_eq!(back, Answer::multi(["A", "B"]));
    }

    #[test]
    fn test_map_sentinel_counts_as_answered() {
        let mut map = AnswerMap::new();
        map.insert("2.6", Answer::skipped());

        assert!(map.contains("2.6"));
        assert!(map.is_skipped("2.6"));
        assert!(!map.is_yes("2.6"));
        assert!(!map.is_no("2.6"));
    }

    #[test]
    fn test_map_missing_key() {
        let map = AnswerMap::new();
        assert!(!map.contains("2.6"));
        assert!(!map.is_yes("2.6"));
        assert!(!map.is_skipped("2.6"));
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut map = AnswerMap::new();
        assert!(map.insert("1.1", Answer::yes()).is_none());
        assert_eq!(map.insert("1.1", Answer::no()), Some(Answer::yes()));
    }
}
