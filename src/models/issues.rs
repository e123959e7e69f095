use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: i32,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub closed: bool,

    #[serde(default)]
    pub locked: bool,

    pub updated: DateTime<Utc>,

    #[serde(default)]
    pub milestone: Option<Milestone>,

    #[serde(default)]
    pub labels: Vec<Label>,

    #[serde(default)]
    pub assignees: Vec<User>,

    #[serde(default)]
    pub pull_request: bool,

    /// Set for issues that were deleted or transferred away.
    #[serde(default)]
    pub not_exist: bool,
}

impl Issue {
    pub fn exists(&self) -> bool {
        !self.not_exist
    }

    pub fn has_label_id(&self, id: i64) -> bool {
        self.labels.iter().any(|l| l.id == id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Milestone {
    pub number: i32,

    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub id: i64,

    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(default)]
    pub login: String,
}
