use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    #[serde(alias = "new")]
    Open,
    Merged,
    Abandoned,
    #[serde(other)]
    Other,
}

impl ChangeStatus {
    /// Merged and abandoned changes no longer count as work in flight.
    pub fn is_final(self) -> bool {
        matches!(self, ChangeStatus::Merged | ChangeStatus::Abandoned)
    }
}

/// A code-review change (CL) and the issues its description references.
#[derive(Debug, Clone, Deserialize)]
pub struct Change {
    pub number: i32,

    pub status: ChangeStatus,

    /// Review updates, oldest first.
    #[serde(default)]
    pub metas: Vec<Meta>,

    #[serde(default)]
    pub issue_refs: Vec<IssueRef>,
}

impl Change {
    pub fn latest_meta(&self) -> Option<&Meta> {
        self.metas.last()
    }
}

/// One review update: the votes in effect per review label.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub votes: HashMap<String, Vec<i32>>,
}

impl Meta {
    pub fn label_votes(&self, label: &str) -> &[i32] {
        self.votes.get(label).map(Vec::as_slice).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueRef {
    /// Repository path as `owner/name`.
    pub repo: String,

    pub number: i32,
}
