//! Section relation graph
//!
//! Sections are linked where answers in one commonly affect another (data
//! inventory drives subject rights, incident response feeds audit, and so
//! on). The graph is undirected: every edge is stored on both endpoints,
//! and [`RelationGraph::verify`] reports entries that break that symmetry.
//!
//! The table is hand-maintained data, so constructing a graph never fails;
//! callers that care run `verify` explicitly (startup checks, tests).

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::section::code::Section;

/// One section's adjacency row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRelation {
    pub section: Section,
    pub related_to: Vec<Section>,
}

impl SectionRelation {
    pub fn new(section: Section, related_to: Vec<Section>) -> Self {
        Self {
            section,
            related_to,
        }
    }
}

/// A structural problem found by [`RelationGraph::verify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationIssue {
    /// A section has no adjacency row
    MissingEntry(Section),
    /// A section has more than one adjacency row
    DuplicateEntry(Section),
    /// A section lists itself as a neighbor
    SelfReference(Section),
    /// A section lists the same neighbor twice
    DuplicateNeighbor { section: Section, neighbor: Section },
    /// `from` lists `to`, but `to` does not list `from`
    AsymmetricEdge { from: Section, to: Section },
}

impl std::fmt::Display for RelationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationIssue::MissingEntry(s) => {
                write!(f, "section {} ({}) has no relation entry", s.code(), s)
            }
            RelationIssue::DuplicateEntry(s) => {
                write!(f, "section {} ({}) has multiple relation entries", s.code(), s)
            }
            RelationIssue::SelfReference(s) => {
                write!(f, "section {} ({}) lists itself as related", s.code(), s)
            }
            RelationIssue::DuplicateNeighbor { section, neighbor } => write!(
                f,
                "section {} lists section {} more than once",
                section.code(),
                neighbor.code()
            ),
            RelationIssue::AsymmetricEdge { from, to } => write!(
                f,
                "section {} lists section {}, but not the reverse",
                from.code(),
                to.code()
            ),
        }
    }
}

/// Undirected relation graph over the questionnaire sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationGraph {
    adjacency: Vec<SectionRelation>,
}

impl RelationGraph {
    /// Build a graph from adjacency rows, without validating them
    pub fn new(adjacency: Vec<SectionRelation>) -> Self {
        Self { adjacency }
    }

    /// The standard relation table for the 13-section questionnaire
    pub fn standard() -> Self {
        use Section::*;

        Self::new(vec![
            SectionRelation::new(OrganizationProfile, vec![RegulatoryScope, GovernanceAccountability]),
            SectionRelation::new(DataInventory, vec![DataSubjectRights, ConsentManagement, RetentionDisposal]),
            SectionRelation::new(RegulatoryScope, vec![OrganizationProfile, CrossBorderTransfers]),
            SectionRelation::new(DataSubjectRights, vec![DataInventory, ConsentManagement]),
            SectionRelation::new(ConsentManagement, vec![DataInventory, DataSubjectRights]),
            SectionRelation::new(ThirdPartySharing, vec![CrossBorderTransfers, SecurityControls]),
            SectionRelation::new(CrossBorderTransfers, vec![RegulatoryScope, ThirdPartySharing]),
            SectionRelation::new(SecurityControls, vec![ThirdPartySharing, IncidentResponse]),
            SectionRelation::new(IncidentResponse, vec![SecurityControls, AuditMonitoring]),
            SectionRelation::new(RetentionDisposal, vec![DataInventory, AuditMonitoring]),
            SectionRelation::new(GovernanceAccountability, vec![OrganizationProfile, TrainingAwareness]),
            SectionRelation::new(TrainingAwareness, vec![GovernanceAccountability, AuditMonitoring]),
            SectionRelation::new(AuditMonitoring, vec![IncidentResponse, RetentionDisposal, TrainingAwareness]),
        ])
    }

    /// Direct neighbors of a section (empty when the section has no row)
    pub fn related_sections(&self, section: Section) -> &[Section] {
        self.adjacency
            .iter()
            .find(|rel| rel.section == section)
            .map(|rel| rel.related_to.as_slice())
            .unwrap_or(&[])
    }

    /// Transitive closure of relatedness, excluding the origin itself.
    ///
    /// Breadth-first over the adjacency rows; each section is visited at
    /// most once, so cyclic tables terminate. Order is discovery order,
    /// which is deterministic for a given table.
    pub fn all_related_sections(&self, origin: Section) -> Vec<Section> {
        let mut visited: HashSet<Section> = HashSet::from([origin]);
        let mut queue: VecDeque<Section> = VecDeque::from([origin]);
        let mut closure = Vec::new();

        while let Some(current) = queue.pop_front() {
            for &neighbor in self.related_sections(current) {
                if visited.insert(neighbor) {
                    closure.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        closure
    }

    /// Check the structural invariants of the table.
    ///
    /// Reports every violation rather than stopping at the first: missing
    /// or duplicated rows, self references, duplicated neighbors, and
    /// one-directional edges.
    pub fn verify(&self) -> Result<(), Vec<RelationIssue>> {
        let mut issues = Vec::new();

        let mut rows_seen: HashSet<Section> = HashSet::new();
        for rel in &self.adjacency {
            if !rows_seen.insert(rel.section) {
                issues.push(RelationIssue::DuplicateEntry(rel.section));
            }
        }
        for section in Section::ALL {
            if !rows_seen.contains(&section) {
                issues.push(RelationIssue::MissingEntry(section));
            }
        }

        for rel in &self.adjacency {
            let mut neighbors_seen: HashSet<Section> = HashSet::new();
            for &neighbor in &rel.related_to {
                if neighbor == rel.section {
                    issues.push(RelationIssue::SelfReference(rel.section));
                    continue;
                }
                if !neighbors_seen.insert(neighbor) {
                    issues.push(RelationIssue::DuplicateNeighbor {
                        section: rel.section,
                        neighbor,
                    });
                    continue;
                }
                if !self.related_sections(neighbor).contains(&rel.section) {
                    issues.push(RelationIssue::AsymmetricEdge {
                        from: rel.section,
                        to: neighbor,
                    });
                }
            }
        }

        if issues.is_empty() { Ok(()) } else { Err(issues) }
    }
}

impl Default for RelationGraph {
    fn default() -> Self {
        Self::standard()
    }
}
