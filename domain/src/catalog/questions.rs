//! The standard compliance questionnaire
//!
//! One hundred questions across the thirteen sections. Anchor questions
//! carry their inference rule and an informational priority; dependent
//! questions record the anchor they hinge on.

use crate::catalog::{Question, rules};
use crate::section::code::Section;

fn yes_no(id: &str, text: &str, section: Section) -> Question {
    Question::new(id, text, section).with_options(["Yes", "No"])
}

/// All standard questions, in questionnaire order
pub fn standard_questions() -> Vec<Question> {
    let mut questions = Vec::with_capacity(100);
    questions.extend(organization_profile());
    questions.extend(data_inventory());
    questions.extend(regulatory_scope());
    questions.extend(data_subject_rights());
    questions.extend(consent_management());
    questions.extend(third_party_sharing());
    questions.extend(cross_border_transfers());
    questions.extend(security_controls());
    questions.extend(incident_response());
    questions.extend(retention_disposal());
    questions.extend(governance_accountability());
    questions.extend(training_awareness());
    questions.extend(audit_monitoring());
    questions
}

fn organization_profile() -> Vec<Question> {
    let s = Section::OrganizationProfile;
    vec![
        Question::new("1.1", "What is the organization's primary business sector?", s)
            .with_options([
                "Technology",
                "Financial services",
                "Healthcare",
                "Retail",
                "Manufacturing",
                "Public sector",
                "Other",
            ]),
        Question::new("1.2", "How many employees does the organization have?", s)
            .with_options(["1-49", "50-249", "250-999", "1000+"]),
        Question::new("1.3", "In which country is the organization headquartered?", s),
        yes_no("1.4", "Does the organization operate in multiple jurisdictions?", s),
        Question::new(
            "1.5",
            "Does the organization act as a data controller, a processor, or both?",
            s,
        )
        .with_options(["Controller", "Processor", "Both"]),
        Question::new(
            "1.6",
            "Approximately how many individuals' records are processed annually?",
            s,
        )
        .with_options([
            "Under 10,000",
            "10,000-100,000",
            "100,000-1,000,000",
            "Over 1,000,000",
        ]),
        yes_no("1.7", "Is there a single point of contact for privacy matters?", s),
        Question::new("1.8", "Which business functions process personal data?", s)
            .with_options([
                "Human resources",
                "Marketing",
                "Sales",
                "Finance",
                "Operations",
                "Customer support",
            ])
            .multi_select(),
    ]
}

fn data_inventory() -> Vec<Question> {
    let s = Section::DataInventory;
    vec![
        yes_no(
            "2.1",
            "Is there a documented inventory of personal data processing activities?",
            s,
        ),
        Question::new("2.2", "Which categories of personal data are processed?", s)
            .with_options([
                "Contact details",
                "Financial",
                "Health",
                "Biometric",
                "Location",
                "Behavioral",
                "Employment",
            ])
            .multi_select(),
        yes_no("2.3", "Are data flows between systems documented?", s),
        yes_no("2.4", "Is a record of processing activities maintained?", s),
        yes_no("2.5", "Are processing purposes documented for each data category?", s),
        yes_no(
            "2.6",
            "Does the organization process personal data of individuals in the EU or EEA?",
            s,
        )
        .with_priority(20)
        .with_infer(rules::infer_eu_processing),
        yes_no(
            "2.7",
            "Does the organization process special category (sensitive) personal data?",
            s,
        )
        .with_priority(21)
        .with_depends_on(["2.6"])
        .with_infer(rules::infer_special_categories),
        yes_no("2.8", "Is children's personal data knowingly processed?", s),
    ]
}

fn regulatory_scope() -> Vec<Question> {
    let s = Section::RegulatoryScope;
    vec![
        Question::new(
            "3.1",
            "Which regulatory regimes apply to the organization's processing?",
            s,
        )
        .with_options([
            "GDPR",
            "UK GDPR",
            "CCPA/CPRA",
            "HIPAA",
            "LGPD",
            "PIPEDA",
            "Other",
            "None",
        ])
        .multi_select()
        .with_priority(10)
        .with_infer(rules::infer_regulatory_regimes),
        yes_no("3.2", "Is the organization subject to the GDPR?", s)
            .with_depends_on(["2.6", "3.1"]),
        yes_no("3.3", "Has a lead supervisory authority been identified?", s),
        yes_no("3.4", "Are sector-specific privacy rules applicable?", s),
        yes_no(
            "3.5",
            "Is the organization registered with the relevant data protection authority where required?",
            s,
        ),
        yes_no("3.6", "Are regulatory developments tracked on an ongoing basis?", s),
        yes_no(
            "3.7",
            "Do marketing activities trigger e-privacy rules (cookies, electronic marketing)?",
            s,
        ),
        yes_no("3.8", "Are public authorities among the data recipients?", s),
    ]
}

fn data_subject_rights() -> Vec<Question> {
    let s = Section::DataSubjectRights;
    let gated = |id: &str, text: &str| yes_no(id, text, s).with_depends_on(["2.6"]);
    vec![
        gated("4.1", "Are individuals entitled to request access to their personal data?"),
        gated("4.2", "Are individuals entitled to request rectification of inaccurate data?"),
        gated("4.3", "Is there a documented process for erasure requests?"),
        gated("4.4", "Is there a documented process for data portability requests?"),
        gated("4.5", "Can individuals object to processing based on legitimate interests?"),
        gated("4.6", "Are rights requests tracked and answered within statutory deadlines?"),
        gated("4.7", "Is identity verified before a rights request is fulfilled?"),
        gated("4.8", "Are refusals of rights requests documented with reasons?"),
    ]
}

fn consent_management() -> Vec<Question> {
    let s = Section::ConsentManagement;
    let gated = |id: &str, text: &str| yes_no(id, text, s).with_depends_on(["2.6"]);
    vec![
        gated("5.1", "Is consent relied upon as a lawful basis for any processing?"),
        gated("5.2", "Are consent records kept with timestamp and scope?"),
        gated("5.3", "Can individuals withdraw consent as easily as they gave it?"),
        gated("5.4", "Are consent requests presented separately from other terms?"),
        gated("5.5", "Is consent refreshed when processing purposes change?"),
        yes_no("5.6", "Is explicit consent obtained for special category data?", s)
            .with_depends_on(["2.6", "2.7"]),
        gated("5.7", "Is parental consent obtained for children's data where required?"),
        gated("5.8", "Are pre-ticked boxes and implied consent avoided?"),
    ]
}

fn third_party_sharing() -> Vec<Question> {
    let s = Section::ThirdPartySharing;
    let gated = |id: &str, text: &str| yes_no(id, text, s).with_depends_on(["6.1"]);
    vec![
        yes_no(
            "6.1",
            "Is personal data shared with third-party processors or partners?",
            s,
        )
        .with_priority(30)
        .with_infer(rules::infer_third_party_sharing),
        gated("6.2", "Are data processing agreements in place with all processors?"),
        gated("6.3", "Is due diligence performed before a new processor is engaged?"),
        gated("6.4", "Is an up-to-date register of processors maintained?"),
        gated("6.5", "Are sub-processor changes notified and approved?"),
        gated("6.6", "Are processors contractually required to report data breaches?"),
        gated("6.7", "Are joint controller arrangements documented where applicable?"),
        gated("6.8", "Is personal data sold or shared for advertising purposes?"),
    ]
}

fn cross_border_transfers() -> Vec<Question> {
    let s = Section::CrossBorderTransfers;
    let gated = |id: &str, text: &str| yes_no(id, text, s).with_depends_on(["7.1"]);
    vec![
        yes_no(
            "7.1",
            "Is personal data transferred to countries outside the originating jurisdiction?",
            s,
        )
        .with_priority(40)
        .with_infer(rules::infer_cross_border),
        gated("7.2", "Is there an up-to-date map of cross-border data flows?"),
        yes_no("7.3", "Are transfers covered by an adequacy decision?", s)
            .with_priority(41)
            .with_depends_on(["7.1"])
            .with_infer(rules::infer_adequacy),
        yes_no(
            "7.4",
            "Are standard contractual clauses used where no adequacy decision applies?",
            s,
        )
        .with_depends_on(["7.1", "7.3"]),
        yes_no(
            "7.5",
            "Are transfer impact assessments performed for higher-risk destinations?",
            s,
        )
        .with_depends_on(["7.1", "7.3"]),
        gated("7.6", "Are onward transfers by recipients contractually restricted?"),
        gated("7.7", "Are binding corporate rules in place for intra-group transfers?"),
        gated("7.8", "Are transfer mechanisms reviewed after relevant court rulings?"),
    ]
}

fn security_controls() -> Vec<Question> {
    let s = Section::SecurityControls;
    vec![
        yes_no("8.1", "Is there a formal information security program?", s)
            .with_priority(50)
            .with_infer(rules::infer_security_program),
        yes_no("8.2", "Is personal data encrypted at rest and in transit?", s),
        yes_no("8.3", "Is access to personal data restricted on a need-to-know basis?", s),
        yes_no(
            "8.4",
            "Is multi-factor authentication enforced for systems holding personal data?",
            s,
        ),
        yes_no("8.5", "Are security controls tested at least annually?", s)
            .with_depends_on(["8.1"]),
        yes_no(
            "8.6",
            "Is special category data subject to enhanced protection measures?",
            s,
        )
        .with_depends_on(["2.7"]),
        yes_no("8.7", "Are development and production environments segregated?", s),
        yes_no(
            "8.8",
            "Is security hardening applied to systems processing personal data?",
            s,
        )
        .with_depends_on(["8.1"]),
    ]
}

fn incident_response() -> Vec<Question> {
    let s = Section::IncidentResponse;
    let gated = |id: &str, text: &str| yes_no(id, text, s).with_depends_on(["9.1"]);
    vec![
        yes_no(
            "9.1",
            "Is there a documented incident response plan covering personal data breaches?",
            s,
        )
        .with_priority(60)
        .with_infer(rules::infer_incident_plan),
        gated("9.2", "Are roles and escalation paths defined for breach handling?"),
        gated(
            "9.3",
            "Can breaches be notified to the supervisory authority within required deadlines?",
        ),
        yes_no(
            "9.4",
            "Has the incident response plan been tested in the last twelve months?",
            s,
        )
        .with_priority(61)
        .with_depends_on(["9.1"])
        .with_infer(rules::infer_plan_testing),
        gated("9.5", "Is a breach register maintained, including near misses?"),
        yes_no(
            "9.6",
            "Are affected individuals notified when a breach poses a high risk to them?",
            s,
        ),
        yes_no("9.7", "Are lessons learned incorporated after incidents?", s)
            .with_depends_on(["9.1", "9.4"]),
        gated("9.8", "Are tabletop exercises conducted with senior stakeholders?"),
    ]
}

fn retention_disposal() -> Vec<Question> {
    let s = Section::RetentionDisposal;
    let gated = |id: &str, text: &str| yes_no(id, text, s).with_depends_on(["10.1"]);
    vec![
        yes_no("10.1", "Is there a data retention schedule covering personal data?", s)
            .with_priority(70)
            .with_infer(rules::infer_retention_schedule),
        gated("10.2", "Are retention periods defined per data category?"),
        yes_no(
            "10.3",
            "Is personal data securely deleted or anonymized at the end of retention?",
            s,
        ),
        gated("10.4", "Are backups subject to the retention schedule?"),
        gated("10.5", "Are legal hold exceptions documented?"),
        yes_no("10.6", "Are disposal actions logged?", s),
        gated("10.7", "Is unstructured data (email, file shares) covered by retention rules?"),
        yes_no("10.8", "Are paper records subject to secure disposal?", s),
    ]
}

fn governance_accountability() -> Vec<Question> {
    let s = Section::GovernanceAccountability;
    vec![
        yes_no("11.1", "Has a data protection officer or privacy lead been appointed?", s)
            .with_priority(80)
            .with_infer(rules::infer_privacy_lead),
        yes_no("11.2", "Does the privacy lead report to senior management?", s)
            .with_depends_on(["11.1"]),
        yes_no(
            "11.3",
            "Are data protection impact assessments performed for high-risk processing?",
            s,
        ),
        yes_no("11.4", "Is privacy considered at the design stage of new projects?", s),
        Question::new("11.5", "Which governance policies are maintained?", s)
            .with_options([
                "Privacy policy",
                "Data protection policy",
                "Information security policy",
                "Data retention policy",
                "Incident response plan",
                "Acceptable use policy",
            ])
            .multi_select(),
        yes_no("11.6", "Are policy exceptions subject to documented approval?", s),
        yes_no("11.7", "Is there management-level oversight of the privacy program?", s),
        yes_no("11.8", "Are privacy responsibilities defined in job descriptions?", s),
    ]
}

fn training_awareness() -> Vec<Question> {
    let s = Section::TrainingAwareness;
    let gated = |id: &str, text: &str| yes_no(id, text, s).with_depends_on(["12.1"]);
    vec![
        yes_no("12.1", "Do staff receive data protection training?", s)
            .with_priority(90)
            .with_infer(rules::infer_training_program),
        gated("12.2", "Is training refreshed at least annually?"),
        gated("12.3", "Is role-specific training provided for high-risk functions?"),
        gated("12.4", "Is training completion tracked?"),
        yes_no("12.5", "Do staff know how to recognize and report a data breach?", s),
        gated("12.6", "Are contractors and temporary staff included in training?"),
    ]
}

fn audit_monitoring() -> Vec<Question> {
    let s = Section::AuditMonitoring;
    vec![
        yes_no("13.1", "Are compliance reviews or audits performed periodically?", s)
            .with_priority(95)
            .with_infer(rules::infer_audit_cadence),
        Question::new(
            "13.2",
            "Which activities are covered by periodic compliance reviews?",
            s,
        )
        .with_options([
            "Processing records",
            "Vendor assessments",
            "Security testing",
            "Incident reviews",
            "Retention enforcement",
            "Training completion",
        ])
        .multi_select(),
        yes_no("13.3", "Are audit findings tracked to remediation?", s)
            .with_depends_on(["13.1"]),
        yes_no("13.4", "Is processing activity monitored for anomalies?", s),
        yes_no("13.5", "Are key compliance metrics reported to management?", s)
            .with_depends_on(["13.1"]),
        yes_no(
            "13.6",
            "Are independent audit reports obtained from service providers?",
            s,
        ),
    ]
}
