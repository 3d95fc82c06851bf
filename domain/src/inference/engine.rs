//! The rule engine
//!
//! Applies every catalog rule in registry order, over and over, until a
//! full pass derives nothing new. Inference is strictly additive: an
//! answered question is never overwritten, so each pass either grows the
//! answer set or ends the run, and the pass count is bounded by the
//! catalog size.
//!
//! The one nuance is multi-select targets. Several rules may contribute
//! options to the same list question; contributions to a list the engine
//! itself created are unioned (first-seen order, previously present items
//! not repeated) and the target is flagged as merged. Lists supplied by
//! the caller are as untouchable as any other answered question.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::trace;

use crate::catalog::QuestionCatalog;
use crate::core::answer::{Answer, AnswerMap};
use crate::core::identifier::{QuestionId, question_key};

/// Result of one [`RuleEngine::apply_all`] run
#[derive(Debug, Clone)]
pub struct InferenceOutcome {
    /// Input answers plus everything the rules derived
    pub answers: AnswerMap,
    /// Keys answered by this run, in derivation order
    pub inferred: Vec<QuestionId>,
    /// Multi-select keys assembled from more than one rule
    pub merged: Vec<QuestionId>,
    /// Full passes executed, including the final no-change pass
    pub passes: usize,
}

/// Applies catalog rules to a working answer set
#[derive(Debug, Clone)]
pub struct RuleEngine {
    catalog: Arc<QuestionCatalog>,
}

impl RuleEngine {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Run the cascade to its fixed point.
    ///
    /// The input map is not modified; the outcome carries the extended
    /// copy. Rules see derivations made earlier in the same pass, so a
    /// chain laid out in registry order resolves in a single pass.
    pub fn apply_all(&self, answers: &AnswerMap) -> InferenceOutcome {
        let mut working = answers.clone();
        let mut inferred: Vec<QuestionId> = Vec::new();
        let mut inferred_keys: HashSet<QuestionId> = HashSet::new();
        let mut merged: Vec<QuestionId> = Vec::new();

        let max_passes = self.catalog.len().max(1);
        let mut passes = 0;

        loop {
            passes += 1;
            let mut changed = false;

            for question in self.catalog.questions() {
                let Some(rule) = question.infer() else {
                    continue;
                };

                for (target, value) in rule(&working) {
                    let key = canonical_key(target);

                    if !working.contains(&key) {
                        trace!(rule = question.id(), target = %key, "rule answered question");
                        working.insert(key.clone(), value);
                        inferred.push(key.clone());
                        inferred_keys.insert(key);
                        changed = true;
                    } else if self.merge_contribution(&mut working, &inferred_keys, &key, value) {
                        trace!(rule = question.id(), target = %key, "rule extended selection");
                        if !merged.contains(&key) {
                            merged.push(key);
                        }
                        changed = true;
                    }
                }
            }

            if !changed || passes >= max_passes {
                break;
            }
        }

        InferenceOutcome {
            answers: working,
            inferred,
            merged,
            passes,
        }
    }

    /// Union a rule's option list into an already-derived multi-select
    /// answer. Returns true when the target actually grew.
    fn merge_contribution(
        &self,
        working: &mut AnswerMap,
        inferred_keys: &HashSet<QuestionId>,
        key: &str,
        value: Answer,
    ) -> bool {
        if !inferred_keys.contains(key) {
            return false;
        }
        if !self.catalog.is_multi_select(key) {
            return false;
        }
        let Answer::Multi(additions) = value else {
            return false;
        };
        let Some(Answer::Multi(existing)) = working.get_mut(key) else {
            return false;
        };

        let mut grew = false;
        for item in additions {
            if !existing.contains(&item) {
                existing.push(item);
                grew = true;
            }
        }
        grew
    }
}

fn canonical_key(target: QuestionId) -> QuestionId {
    question_key(&target)
        .map(str::to_string)
        .unwrap_or(target)
}
