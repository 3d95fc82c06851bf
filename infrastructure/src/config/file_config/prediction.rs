//! Prediction configuration from TOML (`[prediction]` section)

use assess_application::PredictionParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw prediction configuration from TOML
///
/// `anchor_timeout_secs = 0` disables the timeout entirely; leaving the
/// key out keeps the application default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePredictionConfig {
    /// Seconds to wait for each anchor reply
    pub anchor_timeout_secs: Option<u64>,
    /// Cap on anchors returned by anchor selection
    pub max_anchors: usize,
}

impl Default for FilePredictionConfig {
    fn default() -> Self {
        Self {
            anchor_timeout_secs: None,
            max_anchors: PredictionParams::default().max_anchors,
        }
    }
}

impl FilePredictionConfig {
    /// Convert to the application-layer parameters
    pub fn to_params(&self) -> PredictionParams {
        let params = PredictionParams::default().with_max_anchors(self.max_anchors);
        match self.anchor_timeout_secs {
            None => params,
            Some(0) => params.with_anchor_timeout(None),
            Some(secs) => params.with_anchor_timeout(Some(Duration::from_secs(secs))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_timeout_keeps_application_default() {
        let params = FilePredictionConfig::default().to_params();
        assert_eq!(params.anchor_timeout, PredictionParams::default().anchor_timeout);
    }

    #[test]
    fn test_zero_disables_timeout() {
        let config = FilePredictionConfig {
            anchor_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(config.to_params().anchor_timeout.is_none());
    }

    #[test]
    fn test_deserialize_section() {
        let toml_str = r#"
[prediction]
anchor_timeout_secs = 30
max_anchors = 13
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.prediction.to_params();
        assert_eq!(params.anchor_timeout, Some(Duration::from_secs(30)));
        assert_eq!(params.max_anchors, 13);
    }
}
