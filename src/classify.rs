//! Resolves an issue's labels, milestone and open/closed flags into one
//! `state` and one `when`.
//!
//! `state` starts from the closed/locked flags, may be set by the
//! waiting/deciding labels, and otherwise falls back to `pending` or `open`
//! depending on whether a change under review links to the issue. It only
//! moves from unset to a value, or from `deciding` to `waiting`.
//!
//! `when` starts from the milestone and is then raised by labels along
//! [`WHEN_LADDER`]. A label can only replace a value on a lower rung, with
//! `soon` replacing anything. Milestone buckets sit off the ladder, so only
//! `soon` replaces them.

use std::fmt;

use crate::catalog::{Catalog, LabelKind, MilestoneKind};
use crate::change_index::ChangeLinkIndex;
use crate::models::{Issue, Milestone, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Closed,
    Locked,
    Waiting,
    Deciding,
    Pending,
    Open,
}

impl State {
    pub fn as_str(self) -> &'static str {
        match self {
            State::Closed => "closed",
            State::Locked => "locked",
            State::Waiting => "waiting",
            State::Deciding => "deciding",
            State::Pending => "pending",
            State::Open => "open",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rungs of the label-driven `when` ladder, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rung {
    Doc,
    Test,
    Performance,
    Feature,
    Early,
    Release,
    Soon,
}

/// Label kinds that move `when`, highest priority first.
pub const WHEN_LADDER: &[(LabelKind, Rung)] = &[
    (LabelKind::Soon, Rung::Soon),
    (LabelKind::ReleaseBlocker, Rung::Release),
    (LabelKind::EarlyInCycle, Rung::Early),
    (LabelKind::FeatureRequest, Rung::Feature),
    (LabelKind::Performance, Rung::Performance),
    (LabelKind::ToolSpeed, Rung::Performance),
    (LabelKind::Testing, Rung::Test),
    (LabelKind::Documentation, Rung::Doc),
];

impl Rung {
    pub fn for_label(kind: LabelKind) -> Option<Rung> {
        WHEN_LADDER
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, rung)| *rung)
    }

    fn when(self, milestone: Option<&Milestone>) -> When {
        match self {
            Rung::Doc => When::Doc,
            Rung::Test => When::Test,
            Rung::Performance => When::Performance,
            Rung::Feature => When::Feature,
            Rung::Early => When::Early,
            Rung::Release => When::Release(
                milestone.map_or_else(|| "release".to_string(), |m| m.title.clone()),
            ),
            Rung::Soon => When::Soon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum When {
    #[default]
    Unset,
    Unplanned,
    Help,
    Unreleased,
    Proposal,
    Go2,
    Gccgo,
    Gollvm,
    Doc,
    Test,
    Performance,
    Feature,
    Early,
    /// Release blocker; holds the milestone title, or `release` without one.
    Release(String),
    Soon,
}

impl When {
    fn from_milestone(kind: MilestoneKind, help_wanted: bool) -> Self {
        match kind {
            MilestoneKind::Unplanned if help_wanted => When::Help,
            MilestoneKind::Unplanned => When::Unplanned,
            MilestoneKind::Unreleased => When::Unreleased,
            MilestoneKind::Proposal => When::Proposal,
            MilestoneKind::Go2 => When::Go2,
            MilestoneKind::Gccgo => When::Gccgo,
            MilestoneKind::Gollvm => When::Gollvm,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            When::Unset => "",
            When::Unplanned => "unplanned",
            When::Help => "help",
            When::Unreleased => "unreleased",
            When::Proposal => "proposal",
            When::Go2 => "go2",
            When::Gccgo => "gccgo",
            When::Gollvm => "gollvm",
            When::Doc => "doc",
            When::Test => "test",
            When::Performance => "performance",
            When::Feature => "feature",
            When::Early => "early",
            When::Release(title) => title.as_str(),
            When::Soon => "soon",
        }
    }

    pub fn rung(&self) -> Option<Rung> {
        match self {
            When::Doc => Some(Rung::Doc),
            When::Test => Some(Rung::Test),
            When::Performance => Some(Rung::Performance),
            When::Feature => Some(Rung::Feature),
            When::Early => Some(Rung::Early),
            When::Release(_) => Some(Rung::Release),
            When::Soon => Some(Rung::Soon),
            _ => None,
        }
    }

    fn yields_to(&self, incoming: Rung) -> bool {
        if incoming == Rung::Soon {
            return true;
        }
        match self {
            When::Unset => true,
            current => current.rung().is_some_and(|rung| rung < incoming),
        }
    }
}

impl fmt::Display for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub state: State,
    pub when: When,
    /// Assignee logins joined with `,`.
    pub assignees: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    catalog: &'a Catalog,
    index: &'a ChangeLinkIndex,
}

impl<'a> Classifier<'a> {
    pub fn new(catalog: &'a Catalog, index: &'a ChangeLinkIndex) -> Self {
        Self { catalog, index }
    }

    /// Deleted issues, pull requests and issues locked for age are not exported.
    pub fn is_included(&self, issue: &Issue) -> bool {
        issue.exists()
            && !issue.pull_request
            && !(issue.locked && self.catalog.issue_has(issue, LabelKind::FrozenDueToAge))
    }

    pub fn classify(&self, issue: &Issue) -> Classification {
        let mut state = if issue.closed {
            Some(State::Closed)
        } else if issue.locked {
            Some(State::Locked)
        } else {
            None
        };

        let mut when = issue
            .milestone
            .as_ref()
            .and_then(|m| self.catalog.milestone_kind(m.number))
            .map(|kind| {
                When::from_milestone(kind, self.catalog.issue_has(issue, LabelKind::HelpWanted))
            })
            .unwrap_or_default();

        for kind in self.catalog.label_kinds(issue) {
            state = next_state(state, kind);
            if let Some(rung) = Rung::for_label(kind) {
                if when.yields_to(rung) {
                    when = rung.when(issue.milestone.as_ref());
                }
            }
        }

        let state = state.unwrap_or(if self.index.contains(issue.number) {
            State::Pending
        } else {
            State::Open
        });

        Classification {
            state,
            when,
            assignees: join_assignees(&issue.assignees),
        }
    }
}

fn next_state(state: Option<State>, kind: LabelKind) -> Option<State> {
    match kind {
        LabelKind::WaitingForInfo | LabelKind::ProposalHold => match state {
            None | Some(State::Deciding) => Some(State::Waiting),
            other => other,
        },
        LabelKind::NeedsDecision => state.or(Some(State::Deciding)),
        _ => state,
    }
}

fn join_assignees(assignees: &[User]) -> String {
    assignees
        .iter()
        .map(|a| a.login.as_str())
        .filter(|login| !login.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
