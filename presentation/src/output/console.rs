//! Console formatter for completed assessments

use crate::output::formatter::ReportFormatter;
use assess_application::PredictStats;
use assess_domain::{AnswerMeta, Assessment, Provenance, RelationGraph};
use colored::Colorize;

/// Formats assessments for console display
pub struct ConsoleFormatter {
    relations: RelationGraph,
}

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self {
            relations: RelationGraph::standard(),
        }
    }

    /// Use a specific relation table for the cross-reference lines
    pub fn with_relations(relations: RelationGraph) -> Self {
        Self { relations }
    }

    /// Format the complete report, grouped by section
    pub fn format(&self, assessment: &Assessment, stats: &PredictStats) -> String {
        let summary = assessment.summary();
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Assessment Report"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}    {} {:.2}\n",
            "Questions:".cyan().bold(),
            summary.total,
            "Mean confidence:".cyan().bold(),
            summary.mean_confidence
        ));

        for group in assessment.by_section() {
            let title = match group.section {
                Some(section) => format!("Section {}: {}", section.code(), section),
                None => "Unmapped Questions".to_string(),
            };
            output.push_str(&Self::section_header(&title));

            // Cross-references from the relation table
            if let Some(section) = group.section {
                let related = self.relations.related_sections(section);
                if !related.is_empty() {
                    let names: Vec<String> = related.iter().map(|s| s.to_string()).collect();
                    output.push_str(&format!(
                        "{}\n",
                        format!("related: {}", names.join(", ")).dimmed()
                    ));
                }
            }

            for entry in &group.entries {
                output.push_str(&format!(
                    "\n  {}  {}\n",
                    entry.question_id.bold(),
                    entry.text
                ));

                let value = if entry.answer.is_skipped() {
                    "(skipped)".dimmed().to_string()
                } else {
                    entry.answer.to_string()
                };
                output.push_str(&format!(
                    "       {} {}  {}\n",
                    "->".dimmed(),
                    value,
                    Self::provenance_tag(&entry.meta, entry.confidence)
                ));
            }
        }

        output.push_str(&format!(
            "\n{} {} anchors answered, {} skipped; {} inferred in {} passes; {} defaulted\n",
            "Run:".cyan().bold(),
            stats.anchors_answered,
            stats.anchors_skipped,
            stats.inferred,
            stats.passes,
            stats.defaulted
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(&self, assessment: &Assessment, stats: &PredictStats) -> String {
        let report = serde_json::json!({
            "answers": assessment.entries(),
            "summary": assessment.summary(),
            "stats": stats,
        });
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the summary only (concise output)
    pub fn format_summary(&self, assessment: &Assessment, stats: &PredictStats) -> String {
        let summary = assessment.summary();
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Assessment Summary ===".cyan().bold()));

        output.push_str(&format!(
            "{} {}\n",
            "Questions answered:".bold(),
            summary.total
        ));
        output.push_str(&format!("  user       {}\n", summary.user));
        let merged_note = if summary.merged > 0 {
            format!(" ({} merged)", summary.merged)
        } else {
            String::new()
        };
        output.push_str(&format!(
            "  inferred   {}{}\n",
            summary.inferred, merged_note
        ));
        output.push_str(&format!("  defaulted  {}\n", summary.defaulted));
        output.push_str(&format!("  skipped    {}\n", summary.skipped));
        output.push_str(&format!(
            "{} {:.2}\n",
            "Mean confidence:".bold(),
            summary.mean_confidence
        ));

        if !assessment.is_empty() {
            output.push_str(&format!("\n{}\n", "Sections:".bold()));
            for group in assessment.by_section() {
                let label = match group.section {
                    Some(section) => format!("{:2} {}", section.code(), section),
                    None => "   (unmapped)".to_string(),
                };
                let mean: f64 = group.entries.iter().map(|e| e.confidence).sum::<f64>()
                    / group.entries.len() as f64;
                output.push_str(&format!(
                    "  {:<30} {:>3} questions, mean {:.2}\n",
                    label,
                    group.entries.len(),
                    mean
                ));
            }
        }

        output.push_str(&format!(
            "\n{} {} anchors answered, {} skipped; {} inference passes\n",
            "Run:".dimmed(),
            stats.anchors_answered,
            stats.anchors_skipped,
            stats.passes
        ));

        output
    }

    fn provenance_tag(meta: &AnswerMeta, confidence: f64) -> String {
        let label = match meta.provenance() {
            Provenance::User => "user".green(),
            Provenance::Skipped => "skipped".red(),
            Provenance::Inferred if meta.is_merged() => "merged".blue(),
            Provenance::Inferred => "inferred".cyan(),
            Provenance::Defaulted => "defaulted".yellow(),
        };
        format!("[{} {:.2}]", label, confidence)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format(&self, assessment: &Assessment, stats: &PredictStats) -> String {
        ConsoleFormatter::format(self, assessment, stats)
    }

    fn format_json(&self, assessment: &Assessment, stats: &PredictStats) -> String {
        ConsoleFormatter::format_json(self, assessment, stats)
    }

    fn format_summary(&self, assessment: &Assessment, stats: &PredictStats) -> String {
        ConsoleFormatter::format_summary(self, assessment, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_domain::{Answer, AnswerMap, MetadataMap, QuestionCatalog};

    fn sample() -> (Assessment, PredictStats) {
        let catalog = QuestionCatalog::standard();

        let mut answers = AnswerMap::new();
        answers.insert("2.6", Answer::yes());
        answers.insert("2.7", Answer::yes());
        answers.insert("7.1", Answer::skipped());
        answers.insert("8.2", Answer::no());

        let mut metadata = MetadataMap::new();
        metadata.insert("2.6".to_string(), AnswerMeta::user());
        metadata.insert("2.7".to_string(), AnswerMeta::inferred());
        metadata.insert("7.1".to_string(), AnswerMeta::skipped());
        metadata.insert("8.2".to_string(), AnswerMeta::defaulted());

        let assessment = Assessment::assemble(&catalog, &answers, &metadata).unwrap();
        let stats = PredictStats {
            anchors_answered: 1,
            anchors_skipped: 1,
            inferred: 1,
            merged: 0,
            passes: 2,
            defaulted: 1,
        };
        (assessment, stats)
    }

    #[test]
    fn test_full_format_groups_by_section() {
        colored::control::set_override(false);
        let (assessment, stats) = sample();

        let output = ConsoleFormatter::new().format(&assessment, &stats);

        assert!(output.contains("Assessment Report"));
        assert!(output.contains("Section 2: Data Inventory"));
        assert!(output.contains("Section 7: Cross-Border Transfers"));
        assert!(output.contains("related:"));
        assert!(output.contains("[user 1.00]"));
        assert!(output.contains("(skipped)"));
        // Section 2 renders before section 7
        let section_2 = output.find("Section 2").unwrap();
        let section_7 = output.find("Section 7").unwrap();
        assert!(section_2 < section_7);
    }

    #[test]
    fn test_summary_format_counts_provenance() {
        colored::control::set_override(false);
        let (assessment, stats) = sample();

        let output = ConsoleFormatter::new().format_summary(&assessment, &stats);

        assert!(output.contains("Questions answered: 4"));
        assert!(output.contains("user       1"));
        assert!(output.contains("defaulted  1"));
        assert!(output.contains("2 inference passes"));
    }

    #[test]
    fn test_json_format_is_valid() {
        let (assessment, stats) = sample();

        let output = ConsoleFormatter::new().format_json(&assessment, &stats);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["answers"].as_array().unwrap().len(), 4);
        assert_eq!(value["summary"]["total"], 4);
        assert_eq!(value["stats"]["passes"], 2);
        assert_eq!(value["answers"][0]["question_id"], "2.6");
    }
}
