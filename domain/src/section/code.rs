//! The thirteen questionnaire sections

use serde::{Deserialize, Serialize};

/// A numbered section of the compliance questionnaire
///
/// Question identifiers carry their section as a numeric prefix: `"7.3"`
/// belongs to [`Section::CrossBorderTransfers`]. Codes run 1 through 13.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    OrganizationProfile = 1,
    DataInventory = 2,
    RegulatoryScope = 3,
    DataSubjectRights = 4,
    ConsentManagement = 5,
    ThirdPartySharing = 6,
    CrossBorderTransfers = 7,
    SecurityControls = 8,
    IncidentResponse = 9,
    RetentionDisposal = 10,
    GovernanceAccountability = 11,
    TrainingAwareness = 12,
    AuditMonitoring = 13,
}

impl Section {
    /// Every section, in questionnaire order
    pub const ALL: [Section; 13] = [
        Section::OrganizationProfile,
        Section::DataInventory,
        Section::RegulatoryScope,
        Section::DataSubjectRights,
        Section::ConsentManagement,
        Section::ThirdPartySharing,
        Section::CrossBorderTransfers,
        Section::SecurityControls,
        Section::IncidentResponse,
        Section::RetentionDisposal,
        Section::GovernanceAccountability,
        Section::TrainingAwareness,
        Section::AuditMonitoring,
    ];

    /// The section's numeric code (the identifier prefix)
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Look up a section by its numeric code
    pub fn from_code(code: u8) -> Option<Section> {
        match code {
            1 => Some(Section::OrganizationProfile),
            2 => Some(Section::DataInventory),
            3 => Some(Section::RegulatoryScope),
            4 => Some(Section::DataSubjectRights),
            5 => Some(Section::ConsentManagement),
            6 => Some(Section::ThirdPartySharing),
            7 => Some(Section::CrossBorderTransfers),
            8 => Some(Section::SecurityControls),
            9 => Some(Section::IncidentResponse),
            10 => Some(Section::RetentionDisposal),
            11 => Some(Section::GovernanceAccountability),
            12 => Some(Section::TrainingAwareness),
            13 => Some(Section::AuditMonitoring),
            _ => None,
        }
    }

    /// Human-readable section title
    pub fn label(&self) -> &'static str {
        match self {
            Section::OrganizationProfile => "Organization Profile",
            Section::DataInventory => "Data Inventory",
            Section::RegulatoryScope => "Regulatory Scope",
            Section::DataSubjectRights => "Data Subject Rights",
            Section::ConsentManagement => "Consent Management",
            Section::ThirdPartySharing => "Third-Party Sharing",
            Section::CrossBorderTransfers => "Cross-Border Transfers",
            Section::SecurityControls => "Security Controls",
            Section::IncidentResponse => "Incident Response",
            Section::RetentionDisposal => "Retention and Disposal",
            Section::GovernanceAccountability => "Governance and Accountability",
            Section::TrainingAwareness => "Training and Awareness",
            Section::AuditMonitoring => "Audit and Monitoring",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_code(section.code()), Some(section));
        }
    }

    #[test]
    fn test_codes_are_one_through_thirteen() {
        let codes: Vec<u8> = Section::ALL.iter().map(Section::code).collect();
        assert_eq!(codes, (1..=13).collect::<Vec<u8>>());
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(Section::from_code(0), None);
        assert_eq!(Section::from_code(14), None);
        assert_eq!(Section::from_code(255), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(
            Section::CrossBorderTransfers.to_string(),
            "Cross-Border Transfers"
        );
    }
}
