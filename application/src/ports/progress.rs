//! Progress notification port
//!
//! Defines the interface for reporting progress during assessment
//! prediction.

/// Callback for progress updates during a prediction run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, logs, etc.)
pub trait PredictionProgress: Send + Sync {
    /// Called before the first anchor is prompted
    fn on_collection_start(&self, total_anchors: usize);

    /// Called after each pending anchor is resolved, answered or skipped
    fn on_anchor_resolved(&self, key: &str, skipped: bool);

    /// Called once every anchor has been resolved
    fn on_collection_complete(&self);

    /// Called after the inference cascade has reached its fixed point.
    fn on_inference_complete(&self, _inferred: usize, _passes: usize) {}

    /// Called after the defaults table has filled the remainder.
    fn on_fill_complete(&self, _defaulted: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PredictionProgress for NoProgress {
    fn on_collection_start(&self, _total_anchors: usize) {}
    fn on_anchor_resolved(&self, _key: &str, _skipped: bool) {}
    fn on_collection_complete(&self) {}
}
