//! The curated anchor list
//!
//! Anchors are the handful of questions worth asking a human because
//! their answers cascade across the questionnaire. The order below is a
//! hand-tuned editorial decision (broad scope questions first, follow-ups
//! right after their parent), not something derived from priorities at
//! runtime.

use crate::core::identifier::question_key;

/// An anchor question and how caller identifiers are matched to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorSpec {
    key: String,
    keyword: Option<String>,
}

impl AnchorSpec {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            keyword: None,
        }
    }

    /// Also match identifiers containing this phrase (case-insensitive).
    ///
    /// Used where source documents label the question by wording rather
    /// than by number.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into().to_lowercase());
        self
    }

    /// The canonical catalog key of the anchor question
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Does a caller-supplied identifier refer to this anchor?
    pub fn matches(&self, id: &str) -> bool {
        if question_key(id) == Some(self.key.as_str()) {
            return true;
        }
        if let Some(keyword) = &self.keyword {
            return id.to_lowercase().contains(keyword);
        }
        false
    }
}

/// The standard anchor order.
///
/// The regulatory-regime question leads because its answer shapes how a
/// respondent reads everything after it; sub-anchors (2.7, 7.3, 9.4)
/// follow directly after the anchor that makes them relevant.
pub fn standard_anchors() -> Vec<AnchorSpec> {
    vec![
        AnchorSpec::new("3.1").with_keyword("regulatory regime"),
        AnchorSpec::new("2.6"),
        AnchorSpec::new("2.7"),
        AnchorSpec::new("6.1"),
        AnchorSpec::new("7.1"),
        AnchorSpec::new("7.3"),
        AnchorSpec::new("8.1"),
        AnchorSpec::new("9.1"),
        AnchorSpec::new("9.4"),
        AnchorSpec::new("10.1"),
        AnchorSpec::new("11.1"),
        AnchorSpec::new("12.1"),
        AnchorSpec::new("13.1"),
    ]
}
