//! Predict assessment use case
//!
//! Orchestrates the full prediction flow: anchor collection, cascading
//! inference, default fill, and the final completeness gate.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use assess_domain::{
    Answer, AnswerMap, AnswerMeta, DomainError, MetadataMap, QuestionCatalog, QuestionId,
    RuleEngine, question_key,
};

use crate::config::PredictionParams;
use crate::ports::answer_prompt::{AnchorPrompt, AnswerPromptPort};
use crate::ports::audit::{AuditEvent, AuditSink, NoAuditSink};
use crate::ports::progress::{NoProgress, PredictionProgress};

/// Errors that can occur during assessment prediction
#[derive(Error, Debug)]
pub enum PredictError {
    /// Questions left unanswered after every fallback stage.
    ///
    /// This indicates a registry or default-table gap, not a transient
    /// runtime condition.
    #[error("Assessment incomplete; unanswered: {}", unanswered.join(", "))]
    IncompleteAssessment { unanswered: Vec<QuestionId> },

    /// The catalog is missing a question the anchor list names.
    #[error("Catalog error: {0}")]
    Catalog(#[from] DomainError),
}

/// Input for the PredictAssessment use case
#[derive(Debug, Clone)]
pub struct PredictInput {
    /// Answers already known, keyed by the caller's identifiers
    pub existing_answers: AnswerMap,
    /// Every identifier the prediction must answer
    pub question_ids: Vec<QuestionId>,
}

impl PredictInput {
    pub fn new(existing_answers: AnswerMap, question_ids: Vec<QuestionId>) -> Self {
        Self {
            existing_answers,
            question_ids,
        }
    }

    /// Input covering every question of a catalog, with no prior answers
    pub fn covering(catalog: &QuestionCatalog) -> Self {
        let ids = catalog.questions().map(|q| q.id().to_string()).collect();
        Self::new(AnswerMap::new(), ids)
    }

    pub fn with_existing(mut self, existing: AnswerMap) -> Self {
        self.existing_answers = existing;
        self
    }
}

/// Counters describing how a prediction run resolved its answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PredictStats {
    /// Anchors answered through the prompt port
    pub anchors_answered: usize,
    /// Anchors recorded as skipped (decline, empty reply, error, timeout)
    pub anchors_skipped: usize,
    /// Answers derived by the rule cascade
    pub inferred: usize,
    /// Multi-select answers assembled from several rules
    pub merged: usize,
    /// Cascade passes executed
    pub passes: usize,
    /// Answers padded from the defaults table
    pub defaulted: usize,
}

/// Output of the PredictAssessment use case
///
/// `answers` is keyed by the caller's identifiers from
/// [`PredictInput::question_ids`]; answers produced for questions outside
/// that list (anchor replies, cascade spill-over) are appended under
/// their canonical keys. `metadata` parallels `answers` key for key.
#[derive(Debug, Clone)]
pub struct PredictOutput {
    pub answers: AnswerMap,
    pub metadata: MetadataMap,
    pub stats: PredictStats,
}

/// Use case for predicting a complete assessment from a few anchors
pub struct PredictAssessmentUseCase<P: AnswerPromptPort + 'static> {
    catalog: Arc<QuestionCatalog>,
    engine: RuleEngine,
    prompt: Arc<P>,
    params: PredictionParams,
    audit: Arc<dyn AuditSink>,
}

impl<P: AnswerPromptPort + 'static> PredictAssessmentUseCase<P> {
    pub fn new(catalog: Arc<QuestionCatalog>, prompt: Arc<P>) -> Self {
        let engine = RuleEngine::new(Arc::clone(&catalog));
        Self {
            catalog,
            engine,
            prompt,
            params: PredictionParams::default(),
            audit: Arc::new(NoAuditSink),
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn with_params(mut self, params: PredictionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_audit(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: PredictInput) -> Result<PredictOutput, PredictError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: PredictInput,
        progress: &dyn PredictionProgress,
    ) -> Result<PredictOutput, PredictError> {
        let mut stats = PredictStats::default();
        let mut metadata = MetadataMap::new();

        // Phase 0: normalize existing answers onto canonical keys
        let mut working = self.normalize_existing(&input.existing_answers, &mut metadata);

        // Phase 1: collect the unanswered anchors, strictly in order
        self.collect_anchors(&mut working, &mut metadata, &mut stats, progress)
            .await?;

        // Phase 2: run the cascade to its fixed point
        working = self.run_inference(working, &mut metadata, &mut stats, progress);

        // Phase 3: pad the remainder from the defaults table
        let (answers, metadata) =
            self.fill_defaults(&input.question_ids, working, metadata, &mut stats, progress);

        // Post-condition: the caller's list must now be fully answered
        let unanswered: Vec<QuestionId> = input
            .question_ids
            .iter()
            .filter(|id| answers.get(id.as_str()).is_none())
            .cloned()
            .collect();
        if !unanswered.is_empty() {
            return Err(PredictError::IncompleteAssessment { unanswered });
        }

        info!(
            "Prediction complete: {} answer(s), {} inferred, {} defaulted",
            answers.len(),
            stats.inferred,
            stats.defaulted
        );
        self.audit.record(AuditEvent::new(
            "run_completed",
            serde_json::json!({ "answers": answers.len(), "stats": stats }),
        ));

        Ok(PredictOutput {
            answers,
            metadata,
            stats,
        })
    }

    /// Rekey the caller's answers onto canonical keys and normalize
    /// single-string replies to multi-select questions into lists.
    fn normalize_existing(&self, existing: &AnswerMap, metadata: &mut MetadataMap) -> AnswerMap {
        let mut normalized = AnswerMap::new();

        for (id, answer) in existing.iter() {
            let key = canonical(id);
            if normalized.get(&key).is_some() {
                warn!("Duplicate answer for question {}; keeping the first", key);
                continue;
            }

            let value = match answer {
                Answer::Single(s)
                    if self.catalog.is_multi_select(&key)
                        && !answer.is_skipped()
                        && !answer.is_not_applicable() =>
                {
                    Answer::Multi(split_selections(s))
                }
                other => other.clone(),
            };

            let meta = if value.is_skipped() {
                AnswerMeta::skipped()
            } else {
                AnswerMeta::user()
            };
            metadata.insert(key.clone(), meta);
            normalized.insert(key, value);
        }

        normalized
    }

    /// Prompt every anchor that has no answer yet, one at a time.
    ///
    /// Any collection failure records the skip sentinel and moves on;
    /// a broken prompt degrades the run, it never aborts it.
    async fn collect_anchors(
        &self,
        working: &mut AnswerMap,
        metadata: &mut MetadataMap,
        stats: &mut PredictStats,
        progress: &dyn PredictionProgress,
    ) -> Result<(), PredictError> {
        let pending: Vec<String> = self
            .catalog
            .anchors()
            .iter()
            .filter(|anchor| working.get(anchor.key()).is_none())
            .map(|anchor| anchor.key().to_string())
            .collect();

        info!("Collecting {} anchor(s)", pending.len());
        progress.on_collection_start(pending.len());
        self.audit.record(AuditEvent::new(
            "run_started",
            serde_json::json!({
                "pending_anchors": pending.len(),
                "existing_answers": working.len(),
            }),
        ));

        let total = pending.len();
        for (i, key) in pending.iter().enumerate() {
            let question = self.catalog.require(key)?;
            let payload = AnchorPrompt::from_question(question, i + 1, total);
            let multi = question.is_multi_select();

            match self.collect_reply(&payload).await {
                Some(reply) => {
                    debug!("Anchor {} answered", key);
                    working.insert(key.clone(), parse_reply(multi, &reply));
                    metadata.insert(key.clone(), AnswerMeta::user());
                    stats.anchors_answered += 1;
                    progress.on_anchor_resolved(key, false);
                    self.audit.record(AuditEvent::new(
                        "anchor_resolved",
                        serde_json::json!({ "key": key, "skipped": false }),
                    ));
                }
                None => {
                    working.insert(key.clone(), Answer::skipped());
                    metadata.insert(key.clone(), AnswerMeta::skipped());
                    stats.anchors_skipped += 1;
                    progress.on_anchor_resolved(key, true);
                    self.audit.record(AuditEvent::new(
                        "anchor_resolved",
                        serde_json::json!({ "key": key, "skipped": true }),
                    ));
                }
            }
        }

        progress.on_collection_complete();
        Ok(())
    }

    /// Await one reply, bounded by the configured timeout.
    ///
    /// Returns `None` for anything that means "skip": the sentinel, an
    /// empty reply, a prompt error, or a timeout.
    async fn collect_reply(&self, payload: &AnchorPrompt) -> Option<String> {
        let reply = match self.params.anchor_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.prompt.prompt(payload)).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Anchor {} prompt timed out; recording skip", payload.key);
                    return None;
                }
            },
            None => self.prompt.prompt(payload).await,
        };

        match reply {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() || trimmed == assess_domain::SKIPPED {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Err(e) => {
                warn!("Anchor {} prompt failed: {}; recording skip", payload.key, e);
                None
            }
        }
    }

    fn run_inference(
        &self,
        working: AnswerMap,
        metadata: &mut MetadataMap,
        stats: &mut PredictStats,
        progress: &dyn PredictionProgress,
    ) -> AnswerMap {
        let outcome = self.engine.apply_all(&working);

        for key in &outcome.inferred {
            metadata.insert(key.clone(), AnswerMeta::inferred());
        }
        for key in &outcome.merged {
            if let Some(meta) = metadata.get_mut(key) {
                meta.mark_merged();
            }
        }

        stats.inferred = outcome.inferred.len();
        stats.merged = outcome.merged.len();
        stats.passes = outcome.passes;

        info!(
            "Inference derived {} answer(s) in {} pass(es)",
            stats.inferred, stats.passes
        );
        progress.on_inference_complete(stats.inferred, stats.passes);
        self.audit.record(AuditEvent::new(
            "inference_complete",
            serde_json::json!({
                "inferred": stats.inferred,
                "merged": stats.merged,
                "passes": stats.passes,
            }),
        ));

        outcome.answers
    }

    /// Key the output by the caller's identifiers, padding unanswered
    /// ones from the defaults table; answers to questions outside the
    /// caller's list are appended under their canonical keys.
    fn fill_defaults(
        &self,
        question_ids: &[QuestionId],
        working: AnswerMap,
        meta: MetadataMap,
        stats: &mut PredictStats,
        progress: &dyn PredictionProgress,
    ) -> (AnswerMap, MetadataMap) {
        let mut answers = AnswerMap::new();
        let mut metadata = MetadataMap::new();
        let mut consumed: BTreeSet<QuestionId> = BTreeSet::new();

        for id in question_ids {
            let key = canonical(id);
            match working.get(&key) {
                Some(answer) => {
                    answers.insert(id.clone(), answer.clone());
                    metadata.insert(id.clone(), resolved_meta(&meta, &key));
                }
                None => {
                    let answer = match self.catalog.default_for(&key) {
                        Some(default) => default.clone(),
                        None => {
                            warn!(
                                "No default for question {}; falling back to Not Applicable",
                                key
                            );
                            Answer::not_applicable()
                        }
                    };
                    answers.insert(id.clone(), answer);
                    metadata.insert(id.clone(), AnswerMeta::defaulted());
                    stats.defaulted += 1;
                }
            }
            consumed.insert(key);
        }

        for (key, answer) in working.iter() {
            if !consumed.contains(key) {
                answers.insert(key.clone(), answer.clone());
                metadata.insert(key.clone(), resolved_meta(&meta, key));
            }
        }

        progress.on_fill_complete(stats.defaulted);
        self.audit.record(AuditEvent::new(
            "defaults_filled",
            serde_json::json!({ "count": stats.defaulted }),
        ));

        (answers, metadata)
    }
}

/// Reduce a caller identifier to its canonical key, or keep it verbatim
/// when no key can be extracted.
fn canonical(id: &str) -> QuestionId {
    question_key(id)
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}

/// Split a comma-separated reply into trimmed, non-empty selections
fn split_selections(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Interpret a prompt reply as an answer value
fn parse_reply(multi_select: bool, reply: &str) -> Answer {
    if multi_select {
        Answer::Multi(split_selections(reply))
    } else {
        Answer::single(reply)
    }
}

/// Metadata recorded for a working-set answer. Every insertion into the
/// working set records metadata alongside, so a miss here is a bug; it
/// degrades to a user grade rather than aborting the run.
fn resolved_meta(meta: &MetadataMap, key: &str) -> AnswerMeta {
    match meta.get(key) {
        Some(m) => *m,
        None => {
            warn!("Answer {} missing metadata record", key);
            AnswerMeta::user()
        }
    }
}
