//! Mapping from tracker-specific label ids and milestone numbers to the
//! semantic kinds the classifier understands.
//!
//! A catalog is loaded once at startup, either from a TOML file:
//!
//! ```toml
//! [[label]]
//! id = 626114820
//! kind = "release-blocker"
//!
//! [[milestone]]
//! number = 6
//! kind = "unplanned"
//! ```
//!
//! or from the built-in golang/go ids via [`Catalog::golang`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::Issue;
use crate::utils::constants::{GOLANG_LABELS, GOLANG_MILESTONES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelKind {
    Documentation,
    EarlyInCycle,
    FeatureRequest,
    FrozenDueToAge,
    Go2,
    HelpWanted,
    NeedsDecision,
    NeedsFix,
    NeedsInvestigation,
    Performance,
    Proposal,
    ProposalHold,
    ReleaseBlocker,
    Soon,
    Testing,
    ToolSpeed,
    WaitingForInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneKind {
    Unplanned,
    Unreleased,
    Proposal,
    Go2,
    Gccgo,
    Gollvm,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "label")]
    labels: Vec<LabelEntry>,

    #[serde(default, rename = "milestone")]
    milestones: Vec<MilestoneEntry>,
}

#[derive(Debug, Deserialize)]
struct LabelEntry {
    id: i64,
    kind: LabelKind,
}

#[derive(Debug, Deserialize)]
struct MilestoneEntry {
    number: i32,
    kind: MilestoneKind,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    labels: HashMap<i64, LabelKind>,
    milestones: HashMap<i32, MilestoneKind>,
}

impl Catalog {
    /// Catalog for github.com/golang/go.
    pub fn golang() -> Self {
        Self {
            labels: GOLANG_LABELS.iter().copied().collect(),
            milestones: GOLANG_MILESTONES.iter().copied().collect(),
        }
    }

    pub fn with_label(mut self, id: i64, kind: LabelKind) -> Self {
        self.labels.insert(id, kind);
        self
    }

    pub fn with_milestone(mut self, number: i32, kind: MilestoneKind) -> Self {
        self.milestones.insert(number, kind);
        self
    }

    /// Parse a catalog from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, unknown kind names, or an id that
    /// is mapped twice.
    pub fn from_toml(s: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(s)?;
        let mut catalog = Self::default();

        for entry in file.labels {
            match catalog.labels.entry(entry.id) {
                Entry::Occupied(_) => return Err(Error::DuplicateLabel(entry.id)),
                Entry::Vacant(slot) => {
                    slot.insert(entry.kind);
                }
            }
        }
        for entry in file.milestones {
            match catalog.milestones.entry(entry.number) {
                Entry::Occupied(_) => return Err(Error::DuplicateMilestone(entry.number)),
                Entry::Vacant(slot) => {
                    slot.insert(entry.kind);
                }
            }
        }

        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn label_kind(&self, id: i64) -> Option<LabelKind> {
        self.labels.get(&id).copied()
    }

    pub fn milestone_kind(&self, number: i32) -> Option<MilestoneKind> {
        self.milestones.get(&number).copied()
    }

    /// Kinds of the issue's labels in label order, skipping unmapped ids.
    pub fn label_kinds<'a>(&'a self, issue: &'a Issue) -> impl Iterator<Item = LabelKind> + 'a {
        issue.labels.iter().filter_map(|l| self.label_kind(l.id))
    }

    pub fn issue_has(&self, issue: &Issue, kind: LabelKind) -> bool {
        self.label_kinds(issue).any(|k| k == kind)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn milestone_count(&self) -> usize {
        self.milestones.len()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
