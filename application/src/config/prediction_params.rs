//! Prediction run control parameters.
//!
//! [`PredictionParams`] groups the static parameters that control a
//! prediction run in [`PredictAssessmentUseCase`](crate::use_cases::predict::PredictAssessmentUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Prediction run control parameters.
///
/// Controls the anchor-collection timeout and the selection cap. Used by
/// PredictAssessmentUseCase and SelectAnchorsUseCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionParams {
    /// Timeout for collecting each anchor reply. `None` waits forever.
    pub anchor_timeout: Option<Duration>,
    /// Maximum anchors returned by anchor selection for the prompt UI.
    pub max_anchors: usize,
}

impl Default for PredictionParams {
    fn default() -> Self {
        Self {
            anchor_timeout: Some(Duration::from_secs(120)),
            max_anchors: 10,
        }
    }
}

impl PredictionParams {
    // ==================== Builder Methods ====================

    pub fn with_anchor_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.anchor_timeout = timeout;
        self
    }

    pub fn with_max_anchors(mut self, max: usize) -> Self {
        self.max_anchors = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = PredictionParams::default();
        assert_eq!(params.anchor_timeout, Some(Duration::from_secs(120)));
        assert_eq!(params.max_anchors, 10);
    }

    #[test]
    fn test_builder() {
        let params = PredictionParams::default()
            .with_anchor_timeout(None)
            .with_max_anchors(13);

        assert!(params.anchor_timeout.is_none());
        assert_eq!(params.max_anchors, 13);
    }
}
