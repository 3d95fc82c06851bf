//! The standard inference rules
//!
//! Each rule belongs to one anchor question and inspects the working
//! answer set: an exclusionary reply marks the dependent block
//! "Not Applicable", an inclusionary reply sets a few probable defaults
//! and leaves any follow-up anchor for the user. Rules return proposed
//! answers only; the engine decides what actually lands (answered
//! questions are never overwritten).
//!
//! Rules must treat the skip sentinel as unknown. The `is_yes`/`is_no`
//! predicates on [`AnswerMap`] already do, so rules written against them
//! stay sentinel-safe for free.

use crate::core::answer::{Answer, AnswerMap};
use crate::core::identifier::QuestionId;

/// Questions that only make sense when EU/EEA personal data is in scope
const EU_DEPENDENT_QUESTIONS: [&str; 16] = [
    "4.1", "4.2", "4.3", "4.4", "4.5", "4.6", "4.7", "4.8",
    "5.1", "5.2", "5.3", "5.4", "5.5", "5.6", "5.7", "5.8",
];

fn set(id: &str, answer: Answer) -> (QuestionId, Answer) {
    (id.to_string(), answer)
}

fn exclude_all(ids: &[&str]) -> Vec<(QuestionId, Answer)> {
    ids.iter()
        .map(|id| set(id, Answer::not_applicable()))
        .collect()
}

/// 2.6: EU/EEA processing gates data subject rights (4.*) and consent
/// management (5.*) wholesale.
pub fn infer_eu_processing(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if answers.is_no("2.6") {
        let mut out = exclude_all(&EU_DEPENDENT_QUESTIONS);
        out.push(set("2.7", Answer::not_applicable()));
        return out;
    }
    if answers.is_yes("2.6") {
        // Access and rectification are statutory entitlements once EU data
        // is processed; 2.7 stays open as the follow-up anchor.
        return vec![
            set("3.2", Answer::yes()),
            set("4.1", Answer::yes()),
            set("4.2", Answer::yes()),
        ];
    }
    Vec::new()
}

/// 2.7: special category data drives explicit consent and enhanced
/// protection questions.
pub fn infer_special_categories(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if answers.is_no("2.7") {
        return exclude_all(&["5.6", "8.6"]);
    }
    if answers.is_yes("2.7") {
        return vec![set("8.6", Answer::yes())];
    }
    Vec::new()
}

/// 3.1: selected regulatory regimes seed the governance policy and audit
/// coverage lists.
pub fn infer_regulatory_regimes(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    let selected: Vec<String> = match answers.get("3.1") {
        Some(answer) if answer.is_skipped() => return Vec::new(),
        Some(Answer::Multi(values)) => values.clone(),
        Some(Answer::Single(value)) => vec![value.clone()],
        None => return Vec::new(),
    };

    let regimes: Vec<&str> = selected
        .iter()
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .collect();
    if regimes.is_empty() {
        return Vec::new();
    }
    if regimes.iter().all(|r| r.eq_ignore_ascii_case("none")) {
        return vec![set("3.2", Answer::no())];
    }

    let mut out = Vec::new();
    if regimes.iter().any(|r| r.eq_ignore_ascii_case("gdpr")) {
        out.push(set("3.2", Answer::yes()));
    }
    out.push(set(
        "11.5",
        Answer::multi(["Privacy policy", "Data protection policy"]),
    ));
    out.push(set("13.2", Answer::multi(["Processing records"])));
    out
}

/// 6.1: without third-party sharing the whole processor block is moot.
pub fn infer_third_party_sharing(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if answers.is_no("6.1") {
        return exclude_all(&["6.2", "6.3", "6.4", "6.5", "6.6", "6.7", "6.8"]);
    }
    if answers.is_yes("6.1") {
        return vec![
            set("6.2", Answer::yes()),
            set("13.2", Answer::multi(["Vendor assessments"])),
        ];
    }
    Vec::new()
}

/// 7.1: no cross-border transfers rules out the transfer mechanisms and
/// pins 7.3 (adequacy) to an explicit "No".
pub fn infer_cross_border(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if answers.is_no("7.1") {
        let mut out = vec![set("7.3", Answer::no())];
        out.extend(exclude_all(&["7.2", "7.4", "7.5", "7.6", "7.7", "7.8"]));
        return out;
    }
    if answers.is_yes("7.1") {
        // 7.3 stays open: adequacy is the follow-up anchor
        return vec![set("7.6", Answer::yes())];
    }
    Vec::new()
}

/// 7.3: adequacy decisions make SCCs and transfer impact assessments
/// unnecessary; their absence makes both expected.
pub fn infer_adequacy(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if !answers.is_yes("7.1") {
        return Vec::new();
    }
    if answers.is_yes("7.3") {
        return exclude_all(&["7.4", "7.5"]);
    }
    if answers.is_no("7.3") {
        return vec![set("7.4", Answer::yes()), set("7.5", Answer::yes())];
    }
    Vec::new()
}

/// 8.1: a formal security program implies hardening practice and feeds
/// the policy and audit lists.
pub fn infer_security_program(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if answers.is_no("8.1") {
        return vec![set("8.5", Answer::no())];
    }
    if answers.is_yes("8.1") {
        return vec![
            set("8.8", Answer::yes()),
            set("11.5", Answer::multi(["Information security policy"])),
            set("13.2", Answer::multi(["Security testing"])),
        ];
    }
    Vec::new()
}

/// 9.1: the incident response block hinges on a documented plan.
pub fn infer_incident_plan(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if answers.is_no("9.1") {
        let mut out = exclude_all(&["9.2", "9.4", "9.7", "9.8"]);
        out.push(set("9.3", Answer::no()));
        out.push(set("9.5", Answer::no()));
        return out;
    }
    if answers.is_yes("9.1") {
        // 9.4 stays open: plan testing is the follow-up anchor
        return vec![
            set("9.2", Answer::yes()),
            set("11.5", Answer::multi(["Incident response plan"])),
            set("13.2", Answer::multi(["Incident reviews"])),
        ];
    }
    Vec::new()
}

/// 9.4: a recently tested plan implies lessons-learned feedback.
pub fn infer_plan_testing(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if !answers.is_yes("9.1") {
        return Vec::new();
    }
    if answers.is_yes("9.4") {
        return vec![set("9.7", Answer::yes())];
    }
    Vec::new()
}

/// 10.1: the retention schedule gates the per-category and exception
/// questions and feeds the policy and audit lists.
pub fn infer_retention_schedule(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if answers.is_no("10.1") {
        return exclude_all(&["10.2", "10.4", "10.5", "10.7"]);
    }
    if answers.is_yes("10.1") {
        return vec![
            set("10.2", Answer::yes()),
            set("11.5", Answer::multi(["Data retention policy"])),
            set("13.2", Answer::multi(["Retention enforcement"])),
        ];
    }
    Vec::new()
}

/// 11.1: the reporting-line question only exists when someone was
/// appointed.
pub fn infer_privacy_lead(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if answers.is_no("11.1") {
        return exclude_all(&["11.2"]);
    }
    if answers.is_yes("11.1") {
        return vec![set("11.2", Answer::yes())];
    }
    Vec::new()
}

/// 12.1: the training block hinges on a training program existing.
pub fn infer_training_program(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if answers.is_no("12.1") {
        return exclude_all(&["12.2", "12.3", "12.4", "12.6"]);
    }
    if answers.is_yes("12.1") {
        return vec![
            set("12.4", Answer::yes()),
            set("13.2", Answer::multi(["Training completion"])),
        ];
    }
    Vec::new()
}

/// 13.1: periodic reviews imply finding follow-up.
pub fn infer_audit_cadence(answers: &AnswerMap) -> Vec<(QuestionId, Answer)> {
    if answers.is_no("13.1") {
        return exclude_all(&["13.3", "13.5"]);
    }
    if answers.is_yes("13.1") {
        return vec![set("13.3", Answer::yes())];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(entries: &[(&str, Answer)]) -> AnswerMap {
        let mut map = AnswerMap::new();
        for (id, answer) in entries {
            map.insert(*id, answer.clone());
        }
        map
    }

    #[test]
    fn test_eu_processing_no_excludes_both_sections() {
        let answers = answered(&[("2.6", Answer::no())]);
        let out = infer_eu_processing(&answers);

        assert_eq!(out.len(), 17);
        assert!(out.iter().all(|(_, a)| a.is_not_applicable()));
        assert!(out.iter().any(|(id, _)| id == "4.8"));
        assert!(out.iter().any(|(id, _)| id == "5.1"));
        assert!(out.iter().any(|(id, _)| id == "2.7"));
    }

    #[test]
    fn test_eu_processing_yes_leaves_follow_up_anchor_open() {
        let answers = answered(&[("2.6", Answer::yes())]);
        let out = infer_eu_processing(&answers);

        assert!(out.iter().any(|(id, a)| id == "4.1" && a.is_yes()));
        assert!(!out.iter().any(|(id, _)| id == "2.7"));
    }

    #[test]
    fn test_rules_treat_sentinel_as_unknown() {
        let answers = answered(&[("2.6", Answer::skipped())]);
        assert!(infer_eu_processing(&answers).is_empty());

        let answers = answered(&[("3.1", Answer::skipped())]);
        assert!(infer_regulatory_regimes(&answers).is_empty());
    }

    #[test]
    fn test_rules_do_nothing_when_anchor_unanswered() {
        let answers = AnswerMap::new();
        assert!(infer_eu_processing(&answers).is_empty());
        assert!(infer_cross_border(&answers).is_empty());
        assert!(infer_audit_cadence(&answers).is_empty());
    }

    #[test]
    fn test_cross_border_no_pins_adequacy_to_no() {
        let answers = answered(&[("7.1", Answer::no())]);
        let out = infer_cross_border(&answers);

        let adequacy = out.iter().find(|(id, _)| id == "7.3").unwrap();
        assert!(adequacy.1.is_no());
        assert!(out.iter().any(|(id, a)| id == "7.2" && a.is_not_applicable()));
    }

    #[test]
    fn test_cross_border_yes_leaves_adequacy_open() {
        let answers = answered(&[("7.1", Answer::yes())]);
        let out = infer_cross_border(&answers);
        assert!(!out.iter().any(|(id, _)| id == "7.3"));
    }

    #[test]
    fn test_adequacy_requires_transfers() {
        let answers = answered(&[("7.3", Answer::yes())]);
        assert!(infer_adequacy(&answers).is_empty());

        let answers = answered(&[("7.1", Answer::yes()), ("7.3", Answer::yes())]);
        let out = infer_adequacy(&answers);
        assert!(out.iter().any(|(id, a)| id == "7.4" && a.is_not_applicable()));
    }

    #[test]
    fn test_regime_selection_contributes_option_lists() {
        let answers = answered(&[("3.1", Answer::multi(["GDPR", "CCPA/CPRA"]))]);
        let out = infer_regulatory_regimes(&answers);

        assert!(out.iter().any(|(id, a)| id == "3.2" && a.is_yes()));
        let policies = out.iter().find(|(id, _)| id == "11.5").unwrap();
        assert_eq!(
            policies.1,
            Answer::multi(["Privacy policy", "Data protection policy"])
        );
    }

    #[test]
    fn test_regime_none_means_out_of_scope() {
        let answers = answered(&[("3.1", Answer::multi(["None"]))]);
        let out = infer_regulatory_regimes(&answers);
        assert_eq!(out, vec![("3.2".to_string(), Answer::no())]);
    }

    #[test]
    fn test_empty_regime_list_is_no_information() {
        let answers = answered(&[("3.1", Answer::multi(Vec::<String>::new()))]);
        assert!(infer_regulatory_regimes(&answers).is_empty());
    }

    #[test]
    fn test_plan_testing_guarded_by_plan_existence() {
        let answers = answered(&[("9.4", Answer::yes())]);
        assert!(infer_plan_testing(&answers).is_empty());

        let answers = answered(&[("9.1", Answer::yes()), ("9.4", Answer::yes())]);
        let out = infer_plan_testing(&answers);
        assert!(out.iter().any(|(id, a)| id == "9.7" && a.is_yes()));
    }
}
