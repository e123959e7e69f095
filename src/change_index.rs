//! Set of issues that have code under review.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{Change, RepoId};
use crate::utils::constants::{CODE_REVIEW, CODE_REVIEW_BLOCK};

/// Issue numbers of the target repo referenced by at least one open change
/// whose latest review update does not block it.
#[derive(Debug, Clone, Default)]
pub struct ChangeLinkIndex {
    issues: HashSet<i32>,
}

impl ChangeLinkIndex {
    pub fn build<'a, I>(changes: I, repo: &RepoId) -> Self
    where
        I: IntoIterator<Item = &'a Change>,
    {
        let mut issues = HashSet::new();

        for change in changes {
            if change.status.is_final() {
                continue;
            }
            if !change.issue_refs.iter().any(|r| repo.matches(&r.repo)) {
                continue;
            }
            if is_blocked(change) {
                debug!(change = change.number, "skipping change blocked in review");
                continue;
            }
            issues.extend(
                change
                    .issue_refs
                    .iter()
                    .filter(|r| repo.matches(&r.repo))
                    .map(|r| r.number),
            );
        }

        Self { issues }
    }

    pub fn contains(&self, number: i32) -> bool {
        self.issues.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Only the latest review update counts; earlier votes may have been revised.
fn is_blocked(change: &Change) -> bool {
    change.latest_meta().is_some_and(|meta| {
        meta.label_votes(CODE_REVIEW)
            .iter()
            .any(|&vote| vote == CODE_REVIEW_BLOCK)
    })
}

#[cfg(test)]
#[path = "change_index_tests.rs"]
mod tests;
