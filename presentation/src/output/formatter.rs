//! Report formatter trait

use assess_application::PredictStats;
use assess_domain::Assessment;

/// Trait for formatting completed assessments
pub trait ReportFormatter {
    /// Format the complete report, every question grouped by section
    fn format(&self, assessment: &Assessment, stats: &PredictStats) -> String;

    /// Format as JSON
    fn format_json(&self, assessment: &Assessment, stats: &PredictStats) -> String;

    /// Format the summary only (concise output)
    fn format_summary(&self, assessment: &Assessment, stats: &PredictStats) -> String;
}
