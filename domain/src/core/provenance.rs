//! Answer provenance and confidence
//!
//! Every answer in a completed assessment records how it came to be. The
//! provenance drives the confidence grade reported alongside the answer:
//! a user reply is authoritative, an exclusionary inference is nearly so,
//! a padded default is little more than a placeholder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::answer::Answer;
use crate::core::identifier::QuestionId;

/// Confidence for an answer typed by the user
pub const CONFIDENCE_USER: f64 = 1.0;
/// Confidence for questions excluded by a direct "Not Applicable" inference
pub const CONFIDENCE_EXCLUDED: f64 = 0.9;
/// Confidence for other cascading inferences
pub const CONFIDENCE_CASCADED: f64 = 0.7;
/// Confidence for multi-select answers merged from several rules
pub const CONFIDENCE_MERGED: f64 = 0.6;
/// Confidence for answers padded from the defaults table
pub const CONFIDENCE_DEFAULTED: f64 = 0.2;
/// Confidence for anchors the user declined to answer
pub const CONFIDENCE_SKIPPED: f64 = 0.1;

/// How an answer entered the assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Supplied by the user (pre-existing or prompted)
    User,
    /// The user declined the anchor; the sentinel was recorded
    Skipped,
    /// Derived by an inference rule
    Inferred,
    /// Padded from the defaults table (or the fallback value)
    Defaulted,
}

/// Per-answer metadata attached to a completed assessment
///
/// The boolean flags mirror the provenance for consumers that only care
/// about one condition; absent flags serialize away entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnswerMeta {
    provenance: Provenance,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    merged: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    skipped: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    defaulted: bool,
}

impl AnswerMeta {
    /// Metadata for a user-supplied answer
    pub fn user() -> Self {
        Self {
            provenance: Provenance::User,
            merged: false,
            skipped: false,
            defaulted: false,
        }
    }

    /// Metadata for a declined anchor
    pub fn skipped() -> Self {
        Self {
            provenance: Provenance::Skipped,
            merged: false,
            skipped: true,
            defaulted: false,
        }
    }

    /// Metadata for a rule-derived answer
    pub fn inferred() -> Self {
        Self {
            provenance: Provenance::Inferred,
            merged: false,
            skipped: false,
            defaulted: false,
        }
    }

    /// Metadata for a default-padded answer
    pub fn defaulted() -> Self {
        Self {
            provenance: Provenance::Defaulted,
            merged: false,
            skipped: false,
            defaulted: true,
        }
    }

    /// Flag this answer as assembled from more than one rule contribution
    pub fn mark_merged(&mut self) {
        self.merged = true;
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn is_merged(&self) -> bool {
        self.merged
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    pub fn is_defaulted(&self) -> bool {
        self.defaulted
    }

    /// Grade this answer's reliability from its provenance.
    ///
    /// Merged multi-select answers grade below plain inferences because
    /// their parts arrived from independent rules; an exclusionary
    /// "Not Applicable" inference grades above both because it follows
    /// directly from an anchor the user confirmed.
    pub fn confidence(&self, answer: &Answer) -> f64 {
        match self.provenance {
            Provenance::User => CONFIDENCE_USER,
            Provenance::Skipped => CONFIDENCE_SKIPPED,
            Provenance::Defaulted => CONFIDENCE_DEFAULTED,
            Provenance::Inferred if self.merged => CONFIDENCE_MERGED,
            Provenance::Inferred if answer.is_not_applicable() => CONFIDENCE_EXCLUDED,
            Provenance::Inferred => CONFIDENCE_CASCADED,
        }
    }
}

/// Metadata for every answer of a completed assessment
pub type MetadataMap = BTreeMap<QuestionId, AnswerMeta>;
