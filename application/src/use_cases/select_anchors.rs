//! Anchor selection use case
//!
//! Picks the anchors a prompt UI should ask first: given the full
//! question list and the answers already known, keep the unanswered
//! questions that match the curated anchor list, in that list's order,
//! capped at a maximum count.

use std::collections::BTreeSet;
use std::sync::Arc;

use assess_domain::{AnswerMap, QuestionCatalog, QuestionId, question_key};
use tracing::debug;

/// Use case for selecting the anchors to prompt first
pub struct SelectAnchorsUseCase {
    catalog: Arc<QuestionCatalog>,
}

impl SelectAnchorsUseCase {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    /// Select up to `max_anchors` unanswered anchor questions.
    ///
    /// Identifiers are matched against the anchor list by their leading
    /// `"<section>.<index>"` token, except for keyword anchors which
    /// match anywhere in the identifier. The result preserves the anchor
    /// list's curated order and carries the caller's identifiers, not
    /// canonical keys.
    pub fn execute(
        &self,
        question_ids: &[String],
        known_answers: &AnswerMap,
        max_anchors: usize,
    ) -> Vec<QuestionId> {
        let mut selected = Vec::new();
        let mut taken: BTreeSet<&str> = BTreeSet::new();

        for anchor in self.catalog.anchors() {
            if selected.len() >= max_anchors {
                break;
            }

            let candidate = question_ids.iter().find(|id| {
                !taken.contains(id.as_str())
                    && anchor.matches(id)
                    && !is_answered(known_answers, id)
            });

            if let Some(id) = candidate {
                taken.insert(id);
                selected.push(id.clone());
            }
        }

        debug!(
            "Selected {} anchor(s) from {} question(s)",
            selected.len(),
            question_ids.len()
        );
        selected
    }
}

/// An identifier counts as answered when the map holds it under the
/// caller's spelling or under its canonical key.
fn is_answered(known: &AnswerMap, id: &str) -> bool {
    if known.contains(id) {
        return true;
    }
    question_key(id).is_some_and(|key| known.contains(key))
}
