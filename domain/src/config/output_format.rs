//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for completed assessments
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every question with answer, provenance, and confidence
    Full,
    /// Per-section rollup with run statistics (default)
    Summary,
    /// JSON export of the assembled assessment
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Summary
    }
}
