//! Completed assessments
//!
//! `predict` produces parallel answer and metadata maps; an
//! [`Assessment`] joins them with the catalog's question records and
//! grades every answer's confidence. This is the shape reports and
//! exports work from.

use serde::Serialize;

use crate::catalog::QuestionCatalog;
use crate::core::answer::{Answer, AnswerMap};
use crate::core::error::DomainError;
use crate::core::identifier::{QuestionId, question_key, section_prefix};
use crate::core::provenance::{AnswerMeta, MetadataMap, Provenance};
use crate::section::code::Section;

/// One answered question with its record, provenance, and confidence
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentEntry {
    pub question_id: QuestionId,
    pub text: String,
    pub section: Option<Section>,
    pub answer: Answer,
    pub meta: AnswerMeta,
    pub confidence: f64,
}

/// Aggregate provenance counts for a completed assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssessmentSummary {
    pub total: usize,
    pub user: usize,
    pub skipped: usize,
    pub inferred: usize,
    pub defaulted: usize,
    pub merged: usize,
    pub mean_confidence: f64,
}

/// Entries of one section, for grouped rendering
#[derive(Debug)]
pub struct SectionBreakdown<'a> {
    /// `None` collects entries whose identifiers map to no known section
    pub section: Option<Section>,
    pub entries: Vec<&'a AssessmentEntry>,
}

/// A fully answered questionnaire
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    entries: Vec<AssessmentEntry>,
}

impl Assessment {
    /// Join answers and metadata with the catalog's question records.
    ///
    /// Identifiers that resolve to no catalog question are kept (their
    /// identifier doubles as the display text); an answer without a
    /// metadata record is a caller bug and fails the assembly.
    pub fn assemble(
        catalog: &QuestionCatalog,
        answers: &AnswerMap,
        metadata: &MetadataMap,
    ) -> Result<Self, DomainError> {
        let mut entries = Vec::with_capacity(answers.len());

        for (id, answer) in answers.iter() {
            let meta = metadata
                .get(id)
                .copied()
                .ok_or_else(|| DomainError::MissingMetadata(id.clone()))?;

            let question = question_key(id).and_then(|key| catalog.lookup(key));
            let (text, section) = match question {
                Some(q) => (q.text().to_string(), Some(q.section())),
                None => (
                    id.clone(),
                    section_prefix(id).and_then(Section::from_code),
                ),
            };

            entries.push(AssessmentEntry {
                question_id: id.clone(),
                text,
                section,
                answer: answer.clone(),
                meta,
                confidence: meta.confidence(answer),
            });
        }

        entries.sort_by_key(|entry| entry_order(entry));
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[AssessmentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group entries by section, in section order; unclassifiable
    /// entries land in a trailing `None` group.
    pub fn by_section(&self) -> Vec<SectionBreakdown<'_>> {
        let mut groups: Vec<SectionBreakdown<'_>> = Vec::new();

        for entry in &self.entries {
            match groups.last_mut() {
                Some(group) if group.section == entry.section => group.entries.push(entry),
                _ => groups.push(SectionBreakdown {
                    section: entry.section,
                    entries: vec![entry],
                }),
            }
        }

        groups
    }

    /// Count entries per provenance and average the confidence grades
    pub fn summary(&self) -> AssessmentSummary {
        let mut summary = AssessmentSummary {
            total: self.entries.len(),
            user: 0,
            skipped: 0,
            inferred: 0,
            defaulted: 0,
            merged: 0,
            mean_confidence: 0.0,
        };

        let mut confidence_sum = 0.0;
        for entry in &self.entries {
            match entry.meta.provenance() {
                Provenance::User => summary.user += 1,
                Provenance::Skipped => summary.skipped += 1,
                Provenance::Inferred => summary.inferred += 1,
                Provenance::Defaulted => summary.defaulted += 1,
            }
            if entry.meta.is_merged() {
                summary.merged += 1;
            }
            confidence_sum += entry.confidence;
        }

        if summary.total > 0 {
            summary.mean_confidence = confidence_sum / summary.total as f64;
        }
        summary
    }
}

/// Sort key: section code, then numeric index, then raw identifier.
///
/// Keeps "7.10" after "7.9" where a plain string sort would not, and
/// pushes unclassifiable identifiers to the end.
fn entry_order(entry: &AssessmentEntry) -> (u8, u32, QuestionId) {
    let section = entry.section.map_or(u8::MAX, |s| s.code());
    let index = question_key(&entry.question_id)
        .and_then(|key| key.split('.').nth(1))
        .and_then(|idx| idx.parse().ok())
        .unwrap_or(u32::MAX);
    (section, index, entry.question_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_map(entries: &[(&str, AnswerMeta)]) -> MetadataMap {
        entries
            .iter()
            .map(|(id, meta)| (id.to_string(), *meta))
            .collect()
    }

    fn answer_map(entries: &[(&str, Answer)]) -> AnswerMap {
        entries
            .iter()
            .map(|(id, answer)| (id.to_string(), answer.clone()))
            .collect()
    }

    #[test]
    fn test_assemble_joins_catalog_records() {
        let catalog = QuestionCatalog::standard();
        let answers = answer_map(&[("2.6", Answer::yes())]);
        let metadata = meta_map(&[("2.6", AnswerMeta::user())]);

        let assessment = Assessment::assemble(&catalog, &answers, &metadata).unwrap();
        let entry = &assessment.entries()[0];

        assert_eq!(entry.section, Some(Section::DataInventory));
        assert!(entry.text.contains("EU or EEA"));
        assert_eq!(entry.confidence, 1.0);
    }

    #[test]
    fn test_assemble_tolerates_unknown_identifiers() {
        let catalog = QuestionCatalog::standard();
        let answers = answer_map(&[("99.1", Answer::no())]);
        let metadata = meta_map(&[("99.1", AnswerMeta::defaulted())]);

        let assessment = Assessment::assemble(&catalog, &answers, &metadata).unwrap();
        let entry = &assessment.entries()[0];

        assert_eq!(entry.section, None);
        assert_eq!(entry.text, "99.1");
        assert_eq!(entry.confidence, 0.2);
    }

    #[test]
    fn test_assemble_requires_metadata() {
        let catalog = QuestionCatalog::standard();
        let answers = answer_map(&[("2.6", Answer::yes())]);

        let result = Assessment::assemble(&catalog, &answers, &MetadataMap::new());
        assert!(matches!(result, Err(DomainError::MissingMetadata(id)) if id == "2.6"));
    }

    #[test]
    fn test_entries_sorted_numerically_within_sections() {
        let catalog = QuestionCatalog::standard();
        let answers = answer_map(&[
            ("10.2", Answer::no()),
            ("2.6", Answer::yes()),
            ("10.1", Answer::yes()),
        ]);
        let metadata = meta_map(&[
            ("10.2", AnswerMeta::inferred()),
            ("2.6", AnswerMeta::user()),
            ("10.1", AnswerMeta::user()),
        ]);

        let assessment = Assessment::assemble(&catalog, &answers, &metadata).unwrap();
        let ids: Vec<&str> = assessment
            .entries()
            .iter()
            .map(|e| e.question_id.as_str())
            .collect();

        assert_eq!(ids, vec!["2.6", "10.1", "10.2"]);
    }

    #[test]
    fn test_by_section_groups_in_order() {
        let catalog = QuestionCatalog::standard();
        let answers = answer_map(&[
            ("2.6", Answer::yes()),
            ("2.7", Answer::no()),
            ("7.1", Answer::no()),
        ]);
        let metadata = meta_map(&[
            ("2.6", AnswerMeta::user()),
            ("2.7", AnswerMeta::user()),
            ("7.1", AnswerMeta::user()),
        ]);

        let assessment = Assessment::assemble(&catalog, &answers, &metadata).unwrap();
        let groups = assessment.by_section();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].section, Some(Section::DataInventory));
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[1].section, Some(Section::CrossBorderTransfers));
    }

    #[test]
    fn test_summary_counts_provenance() {
        let catalog = QuestionCatalog::standard();
        let answers = answer_map(&[
            ("2.6", Answer::yes()),
            ("4.1", Answer::not_applicable()),
            ("8.2", Answer::no()),
            ("9.1", Answer::skipped()),
        ]);
        let mut merged_meta = AnswerMeta::inferred();
        merged_meta.mark_merged();
        let metadata = meta_map(&[
            ("2.6", AnswerMeta::user()),
            ("4.1", merged_meta),
            ("8.2", AnswerMeta::defaulted()),
            ("9.1", AnswerMeta::skipped()),
        ]);

        let assessment = Assessment::assemble(&catalog, &answers, &metadata).unwrap();
        let summary = assessment.summary();

        assert_eq!(summary.total, 4);
        assert_eq!(summary.user, 1);
        assert_eq!(summary.inferred, 1);
        assert_eq!(summary.defaulted, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.merged, 1);

        let expected = (1.0 + 0.6 + 0.2 + 0.1) / 4.0;
        assert!((summary.mean_confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_assessment() {
        let catalog = QuestionCatalog::standard();
        let assessment =
            Assessment::assemble(&catalog, &AnswerMap::new(), &MetadataMap::new()).unwrap();

        assert!(assessment.is_empty());
        assert_eq!(assessment.summary().mean_confidence, 0.0);
        assert!(assessment.by_section().is_empty());
    }
}
