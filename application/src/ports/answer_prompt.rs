//! Anchor prompt port.
//!
//! This module defines the port (interface) for collecting anchor answers
//! from the user during assessment prediction.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`AnswerPromptPort`] - defined here in application layer
//! - **Adapter**: `InteractiveAnswerPrompt` - implemented in presentation layer
//!
//! # Flow
//!
//! ```text
//! PredictAssessmentUseCase selects the next unanswered anchor
//!        ↓
//! AnswerPromptPort::prompt(AnchorPrompt)
//!        ↓
//! User replies / skips / times out
//!        ↓
//! Reply recorded; inference cascade runs after the last anchor
//! ```
//!
//! The port returns a plain string reply. The skip sentinel is a valid
//! reply meaning "record this anchor as skipped"; any error is treated
//! the same way by the caller, so a broken terminal degrades to a
//! defaults-only prediction instead of aborting the run.
//!
//! # Built-in Implementations
//!
//! - [`AutoSkipPrompt`] - Always replies with the skip sentinel
//!
//! For interactive use, see `InteractiveAnswerPrompt` in the presentation layer.

use async_trait::async_trait;
use assess_domain::{Question, SKIPPED};

/// Error type for anchor prompt operations.
///
/// These errors represent failures while collecting a reply, not the
/// user's decision to skip (skipping is a successful reply carrying the
/// sentinel).
#[derive(Debug, Clone)]
pub enum PromptError {
    /// Input stream closed (e.g., Ctrl+D on a terminal).
    Cancelled,
    /// Input/output error (e.g., terminal read failure).
    IoError(String),
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Cancelled => write!(f, "Prompt cancelled"),
            PromptError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for PromptError {}

/// Payload handed to the prompt adapter for one anchor question.
///
/// Carries everything the adapter needs to render the prompt; the
/// adapter never consults the catalog itself.
#[derive(Debug, Clone)]
pub struct AnchorPrompt {
    /// Canonical question key (e.g., `"2.6"`).
    pub key: String,
    /// Question text to display.
    pub text: String,
    /// Candidate answers, in display order. May be empty for free text.
    pub options: Vec<String>,
    /// Whether several options may be selected at once.
    pub multi_select: bool,
    /// 1-based position of this anchor in the collection run.
    pub index: usize,
    /// Total number of anchors being collected this run.
    pub total: usize,
}

impl AnchorPrompt {
    /// Build the payload from a catalog question record.
    pub fn from_question(question: &Question, index: usize, total: usize) -> Self {
        Self {
            key: question.id().to_string(),
            text: question.text().to_string(),
            options: question.options().to_vec(),
            multi_select: question.is_multi_select(),
            index,
            total,
        }
    }
}

/// Port for collecting one anchor answer.
///
/// Implementations are responsible for:
/// 1. Displaying the anchor to the user
/// 2. Collecting a reply (re-prompting on unrecognized input is the
///    adapter's business)
/// 3. Returning the reply as a plain string, or the skip sentinel
///
/// Anchors are prompted strictly sequentially; an implementation never
/// sees two concurrent calls for the same run.
#[async_trait]
pub trait AnswerPromptPort: Send + Sync {
    /// Collect a reply for one anchor.
    ///
    /// # Returns
    ///
    /// * `Ok(reply)` - the reply text; the skip sentinel means "skip"
    /// * `Err(PromptError)` - collection failed; the caller records a skip
    async fn prompt(&self, anchor: &AnchorPrompt) -> Result<String, PromptError>;
}

/// Non-interactive implementation that skips every anchor.
///
/// Used for batch runs where the prediction should proceed straight to
/// inference over the existing answers and the defaults table.
pub struct AutoSkipPrompt;

#[async_trait]
impl AnswerPromptPort for AutoSkipPrompt {
    async fn prompt(&self, _anchor: &AnchorPrompt) -> Result<String, PromptError> {
        Ok(SKIPPED.to_string())
    }
}
