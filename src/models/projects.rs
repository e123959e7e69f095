use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::models::changes::Change;
use crate::models::issues::Issue;

/// An issue repository in the corpus.
#[derive(Debug, Deserialize)]
pub struct Repo {
    pub owner: String,

    pub name: String,

    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// A code-review project in the corpus.
#[derive(Debug, Deserialize)]
pub struct Project {
    pub server: String,

    pub name: String,

    #[serde(default)]
    pub changes: Vec<Change>,
}

/// `owner/name` of the issue repository being exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Whether an `owner/name` reference points at this repository.
    pub fn matches(&self, path: &str) -> bool {
        path.split_once('/') == Some((self.owner.as_str(), self.name.as_str()))
    }

    pub fn is(&self, repo: &Repo) -> bool {
        repo.owner == self.owner && repo.name == self.name
    }
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, name) = split_path(s)?;
        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "github.com/{}/{}", self.owner, self.name)
    }
}

/// `server/name` of the code-review project whose changes link to issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId {
    pub server: String,
    pub name: String,
}

impl ProjectId {
    pub fn new(server: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            name: name.into(),
        }
    }

    pub fn is(&self, project: &Project) -> bool {
        project.server == self.server && project.name == self.name
    }
}

impl FromStr for ProjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (server, name) = split_path(s)?;
        Ok(Self::new(server, name))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.server, self.name)
    }
}

fn split_path(s: &str) -> Result<(&str, &str), Error> {
    match s.trim().split_once('/') {
        Some((head, tail)) if !head.is_empty() && !tail.is_empty() => Ok((head, tail)),
        _ => Err(Error::InvalidPath(s.to_string())),
    }
}

#[cfg(test)]
#[path = "projects_tests.rs"]
mod tests;
