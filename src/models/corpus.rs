use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::projects::{Project, ProjectId, Repo, RepoId};

/// Snapshot of the issue trackers and code-review projects to export from.
#[derive(Debug, Default, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub repos: Vec<Repo>,

    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Corpus {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn repo(&self, id: &RepoId) -> Result<&Repo> {
        self.repos
            .iter()
            .find(|r| id.is(r))
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub fn project(&self, id: &ProjectId) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| id.is(p))
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}
