//! Builders for corpus fixtures used across unit tests.

use chrono::{TimeZone, Utc};

use crate::catalog::LabelKind;
use crate::models::{Change, ChangeStatus, Issue, IssueRef, Label, Meta, Milestone, User};
use crate::utils::constants::{CODE_REVIEW, GOLANG_LABELS};

pub fn issue(number: i32) -> Issue {
    Issue {
        number,
        title: format!("issue {number}"),
        closed: false,
        locked: false,
        updated: Utc.with_ymd_and_hms(2019, 6, 3, 17, 45, 0).unwrap(),
        milestone: None,
        labels: Vec::new(),
        assignees: Vec::new(),
        pull_request: false,
        not_exist: false,
    }
}

/// Id of `kind` in the golang/go catalog.
pub fn label_id(kind: LabelKind) -> i64 {
    GOLANG_LABELS
        .iter()
        .find(|(_, k)| *k == kind)
        .map(|(id, _)| *id)
        .unwrap()
}

pub fn with_labels(mut issue: Issue, kinds: &[LabelKind]) -> Issue {
    issue.labels.extend(kinds.iter().map(|&kind| Label {
        id: label_id(kind),
        name: format!("{kind:?}"),
    }));
    issue
}

pub fn with_milestone(mut issue: Issue, number: i32, title: &str) -> Issue {
    issue.milestone = Some(Milestone {
        number,
        title: title.to_string(),
    });
    issue
}

pub fn with_assignees(mut issue: Issue, logins: &[&str]) -> Issue {
    issue.assignees = logins
        .iter()
        .map(|login| User {
            login: login.to_string(),
        })
        .collect();
    issue
}

pub fn change(number: i32, status: ChangeStatus, refs: &[(&str, i32)]) -> Change {
    Change {
        number,
        status,
        metas: Vec::new(),
        issue_refs: refs
            .iter()
            .map(|(repo, number)| IssueRef {
                repo: repo.to_string(),
                number: *number,
            })
            .collect(),
    }
}

/// Appends a review update carrying the given Code-Review votes.
pub fn reviewed(mut change: Change, votes: &[i32]) -> Change {
    let mut meta = Meta::default();
    meta.votes.insert(CODE_REVIEW.to_string(), votes.to_vec());
    change.metas.push(meta);
    change
}
