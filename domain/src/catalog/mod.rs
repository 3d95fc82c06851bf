//! Question catalog
//!
//! The catalog holds the questionnaire: question records, the defaults
//! table, and the curated anchor list. A catalog has two tiers: the
//! built-in primary registry and an optional supplemental registry
//! injected at construction. Lookups consult the primary tier first, so
//! supplemental definitions can add questions but never replace built-in
//! ones.

pub mod anchors;
pub mod defaults;
pub mod questions;
pub mod rules;

use std::collections::HashMap;

pub use anchors::AnchorSpec;

use crate::core::answer::{Answer, AnswerMap};
use crate::core::error::DomainError;
use crate::core::identifier::{QuestionId, question_key, section_prefix};
use crate::section::code::Section;

/// Inference rule attached to a question.
///
/// Rules are plain function items. They close over nothing, which keeps
/// rule application deterministic and lets catalogs be shared freely
/// across threads; a rule's identity is its function name.
pub type InferFn = fn(&AnswerMap) -> Vec<(QuestionId, Answer)>;

/// One question of the assessment questionnaire
#[derive(Debug, Clone)]
pub struct Question {
    id: String,
    text: String,
    section: Section,
    options: Vec<String>,
    multi_select: bool,
    depends_on: Vec<String>,
    priority: Option<u32>,
    infer: Option<InferFn>,
}

impl Question {
    /// Create a question with a canonical `"<section>.<index>"` identifier
    pub fn new(id: impl Into<String>, text: impl Into<String>, section: Section) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            section,
            options: Vec::new(),
            multi_select: false,
            depends_on: Vec::new(),
            priority: None,
            infer: None,
        }
    }

    /// Set the selectable options
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Allow multiple options to be selected
    pub fn multi_select(mut self) -> Self {
        self.multi_select = true;
        self
    }

    /// Record the anchors whose answers this question's fate hinges on
    pub fn with_depends_on<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Informational collection priority (lower asks earlier)
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Attach an inference rule
    pub fn with_infer(mut self, infer: InferFn) -> Self {
        self.infer = Some(infer);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_multi_select(&self) -> bool {
        self.multi_select
    }

    pub fn depends_on(&self) -> &[String] {
        &self.depends_on
    }

    pub fn priority(&self) -> Option<u32> {
        self.priority
    }

    pub fn infer(&self) -> Option<InferFn> {
        self.infer
    }
}

/// Identifies a catalog consistency problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogIssueCode {
    /// Identifier is not a bare `"<section>.<index>"` key
    MalformedId,
    /// The same key appears twice within one tier
    DuplicateId,
    /// A supplement key collides with a primary key (primary shadows it)
    ShadowedSupplement,
    /// Identifier prefix and declared section disagree
    SectionMismatch,
    /// A `depends_on` target resolves to no question
    UnknownDependency,
    /// An anchor key resolves to no question
    UnknownAnchor,
    /// No entry in the defaults table (the fallback will warn at runtime)
    MissingDefault,
    /// Default value shape does not fit the question (list vs single)
    DefaultShape,
}

/// A consistency problem found by [`QuestionCatalog::validate`]
#[derive(Debug, Clone)]
pub struct CatalogIssue {
    pub code: CatalogIssueCode,
    pub message: String,
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The two-tier question registry
#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    primary: Vec<Question>,
    primary_index: HashMap<String, usize>,
    supplement: Vec<Question>,
    supplement_index: HashMap<String, usize>,
    defaults: HashMap<QuestionId, Answer>,
    supplement_defaults: HashMap<QuestionId, Answer>,
    anchors: Vec<AnchorSpec>,
}

impl QuestionCatalog {
    /// Build a catalog from explicit parts.
    ///
    /// When a key is repeated within `questions`, the first record wins;
    /// [`Self::validate`] reports the duplicate.
    pub fn new(
        questions: Vec<Question>,
        defaults: HashMap<QuestionId, Answer>,
        anchors: Vec<AnchorSpec>,
    ) -> Self {
        let primary_index = index_by_id(&questions);
        Self {
            primary: questions,
            primary_index,
            supplement: Vec::new(),
            supplement_index: HashMap::new(),
            defaults,
            supplement_defaults: HashMap::new(),
            anchors,
        }
    }

    /// The built-in compliance questionnaire
    pub fn standard() -> Self {
        Self::new(
            questions::standard_questions(),
            defaults::standard_defaults(),
            anchors::standard_anchors(),
        )
    }

    /// Inject the supplemental registry tier
    pub fn with_supplement(
        mut self,
        questions: Vec<Question>,
        defaults: HashMap<QuestionId, Answer>,
    ) -> Self {
        self.supplement_index = index_by_id(&questions);
        self.supplement = questions;
        self.supplement_defaults = defaults;
        self
    }

    /// Two-tier lookup: primary first, then supplement
    pub fn lookup(&self, key: &str) -> Option<&Question> {
        if let Some(&i) = self.primary_index.get(key) {
            return Some(&self.primary[i]);
        }
        self.supplement_index.get(key).map(|&i| &self.supplement[i])
    }

    /// Like [`lookup`](Self::lookup), but a missing question is an error
    pub fn require(&self, key: &str) -> Result<&Question, DomainError> {
        self.lookup(key)
            .ok_or_else(|| DomainError::QuestionNotFound(key.to_string()))
    }

    /// Two-tier defaults lookup: primary first, then supplement
    pub fn default_for(&self, key: &str) -> Option<&Answer> {
        self.defaults
            .get(key)
            .or_else(|| self.supplement_defaults.get(key))
    }

    /// All questions in registry order: primary tier, then supplement
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.primary.iter().chain(self.supplement.iter())
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.supplement.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.supplement.is_empty()
    }

    pub fn has_supplement(&self) -> bool {
        !self.supplement.is_empty()
    }

    /// The curated anchor list, in collection order
    pub fn anchors(&self) -> &[AnchorSpec] {
        &self.anchors
    }

    /// Convenience: does the catalog mark this key multi-select?
    pub fn is_multi_select(&self, key: &str) -> bool {
        self.lookup(key).is_some_and(Question::is_multi_select)
    }

    /// Check catalog consistency without failing construction.
    ///
    /// Returns every problem found; an empty vector means the catalog is
    /// sound. Run by startup checks and tests, not on the hot path.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        self.validate_tier(&self.primary, "primary", &mut issues);
        self.validate_tier(&self.supplement, "supplement", &mut issues);

        for question in &self.supplement {
            if self.primary_index.contains_key(question.id()) {
                issues.push(CatalogIssue {
                    code: CatalogIssueCode::ShadowedSupplement,
                    message: format!(
                        "supplement question {} is shadowed by the primary registry",
                        question.id()
                    ),
                });
            }
        }

        for anchor in &self.anchors {
            if self.lookup(anchor.key()).is_none() {
                issues.push(CatalogIssue {
                    code: CatalogIssueCode::UnknownAnchor,
                    message: format!("anchor {} resolves to no question", anchor.key()),
                });
            }
        }

        issues
    }

    fn validate_tier(&self, tier: &[Question], tier_name: &str, issues: &mut Vec<CatalogIssue>) {
        let mut seen: HashMap<&str, ()> = HashMap::new();

        for question in tier {
            let id = question.id();

            if question_key(id) != Some(id) {
                issues.push(CatalogIssue {
                    code: CatalogIssueCode::MalformedId,
                    message: format!("{tier_name} question id {id:?} is not a bare key"),
                });
            } else if section_prefix(id) != Some(question.section().code()) {
                issues.push(CatalogIssue {
                    code: CatalogIssueCode::SectionMismatch,
                    message: format!(
                        "{tier_name} question {id} declares section {} but its prefix disagrees",
                        question.section().code(),
                    ),
                });
            }

            if seen.insert(id, ()).is_some() {
                issues.push(CatalogIssue {
                    code: CatalogIssueCode::DuplicateId,
                    message: format!("{tier_name} question {id} appears more than once"),
                });
            }

            for dep in question.depends_on() {
                if self.lookup(dep).is_none() {
                    issues.push(CatalogIssue {
                        code: CatalogIssueCode::UnknownDependency,
                        message: format!("{tier_name} question {id} depends on unknown {dep}"),
                    });
                }
            }

            match self.default_for(id) {
                None => issues.push(CatalogIssue {
                    code: CatalogIssueCode::MissingDefault,
                    message: format!("{tier_name} question {id} has no defaults entry"),
                }),
                Some(default) => {
                    let is_list = matches!(default, Answer::Multi(_));
                    if is_list != question.is_multi_select() {
                        issues.push(CatalogIssue {
                            code: CatalogIssueCode::DefaultShape,
                            message: format!(
                                "{tier_name} question {id} default shape does not match multi-select={}",
                                question.is_multi_select()
                            ),
                        });
                    }
                }
            }
        }
    }
}

fn index_by_id(questions: &[Question]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(questions.len());
    for (i, question) in questions.iter().enumerate() {
        index.entry(question.id().to_string()).or_insert(i);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, section: Section) -> Question {
        Question::new(id, format!("Question {id}?"), section).with_options(["Yes", "No"])
    }

    fn defaults_for(ids: &[&str]) -> HashMap<QuestionId, Answer> {
        ids.iter().map(|id| (id.to_string(), Answer::no())).collect()
    }

    #[test]
    fn test_standard_catalog_is_sound() {
        let catalog = QuestionCatalog::standard();
        let issues = catalog.validate();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn test_standard_catalog_size() {
        let catalog = QuestionCatalog::standard();
        assert_eq!(catalog.len(), 100);
        assert_eq!(catalog.anchors().len(), 13);
    }

    #[test]
    fn test_lookup_prefers_primary_tier() {
        let primary = vec![question("1.1", Section::OrganizationProfile)];
        let supplement = vec![
            Question::new("1.1", "Shadowed?", Section::OrganizationProfile)
                .with_options(["Yes", "No"]),
        ];

        let catalog = QuestionCatalog::new(primary, defaults_for(&["1.1"]), vec![])
            .with_supplement(supplement, defaults_for(&["1.1"]));

        let found = catalog.lookup("1.1").unwrap();
        assert_eq!(found.text(), "Question 1.1?");
    }

    #[test]
    fn test_supplement_extends_lookup() {
        let primary = vec![question("1.1", Section::OrganizationProfile)];
        let supplement = vec![question("14.1", Section::OrganizationProfile)];

        let catalog = QuestionCatalog::new(primary, defaults_for(&["1.1"]), vec![])
            .with_supplement(supplement, defaults_for(&["14.1"]));

        assert!(catalog.lookup("14.1").is_some());
        assert_eq!(catalog.len(), 2);
        assert!(catalog.has_supplement());
    }

    #[test]
    fn test_require_reports_missing_question() {
        let catalog = QuestionCatalog::standard();
        assert!(catalog.require("2.6").is_ok());
        assert!(matches!(
            catalog.require("42.1"),
            Err(DomainError::QuestionNotFound(key)) if key == "42.1"
        ));
    }

    #[test]
    fn test_default_lookup_falls_through_tiers() {
        let catalog = QuestionCatalog::new(
            vec![question("1.1", Section::OrganizationProfile)],
            defaults_for(&["1.1"]),
            vec![],
        )
        .with_supplement(vec![], defaults_for(&["9.9"]));

        assert_eq!(catalog.default_for("1.1"), Some(&Answer::no()));
        assert_eq!(catalog.default_for("9.9"), Some(&Answer::no()));
        assert_eq!(catalog.default_for("5.5"), None);
    }

    #[test]
    fn test_validate_reports_malformed_id() {
        let catalog = QuestionCatalog::new(
            vec![question("1.1 extra words", Section::OrganizationProfile)],
            defaults_for(&["1.1 extra words"]),
            vec![],
        );

        let issues = catalog.validate();
        assert!(
            issues
                .iter()
                .any(|i| i.code == CatalogIssueCode::MalformedId)
        );
    }

    #[test]
    fn test_validate_reports_section_mismatch() {
        let catalog = QuestionCatalog::new(
            vec![question("7.1", Section::OrganizationProfile)],
            defaults_for(&["7.1"]),
            vec![],
        );

        let issues = catalog.validate();
        assert!(
            issues
                .iter()
                .any(|i| i.code == CatalogIssueCode::SectionMismatch)
        );
    }

    #[test]
    fn test_validate_reports_duplicate_and_unknown_anchor() {
        let catalog = QuestionCatalog::new(
            vec![
                question("1.1", Section::OrganizationProfile),
                question("1.1", Section::OrganizationProfile),
            ],
            defaults_for(&["1.1"]),
            vec![AnchorSpec::new("3.1")],
        );

        let issues = catalog.validate();
        assert!(
            issues
                .iter()
                .any(|i| i.code == CatalogIssueCode::DuplicateId)
        );
        assert!(
            issues
                .iter()
                .any(|i| i.code == CatalogIssueCode::UnknownAnchor)
        );
    }

    #[test]
    fn test_validate_reports_missing_default() {
        let catalog = QuestionCatalog::new(
            vec![question("1.1", Section::OrganizationProfile)],
            HashMap::new(),
            vec![],
        );

        let issues = catalog.validate();
        assert!(
            issues
                .iter()
                .any(|i| i.code == CatalogIssueCode::MissingDefault)
        );
    }

    #[test]
    fn test_validate_reports_default_shape() {
        let mut defaults = HashMap::new();
        defaults.insert("2.2".to_string(), Answer::no());

        let catalog = QuestionCatalog::new(
            vec![
                Question::new("2.2", "Which categories?", Section::DataInventory)
                    .with_options(["A", "B"])
                    .multi_select(),
            ],
            defaults,
            vec![],
        );

        let issues = catalog.validate();
        assert!(
            issues
                .iter()
                .any(|i| i.code == CatalogIssueCode::DefaultShape)
        );
    }

    #[test]
    fn test_registry_order_is_primary_then_supplement() {
        let catalog = QuestionCatalog::new(
            vec![question("1.1", Section::OrganizationProfile)],
            defaults_for(&["1.1"]),
            vec![],
        )
        .with_supplement(
            vec![question("1.2", Section::OrganizationProfile)],
            defaults_for(&["1.2"]),
        );

        let ids: Vec<&str> = catalog.questions().map(Question::id).collect();
        assert_eq!(ids, vec!["1.1", "1.2"]);
    }
}
