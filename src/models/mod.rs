pub mod changes;
pub mod corpus;
pub mod issues;
pub mod projects;

pub use changes::{Change, ChangeStatus, IssueRef, Meta};
pub use corpus::Corpus;
pub use issues::{Issue, Label, Milestone, User};
pub use projects::{Project, ProjectId, Repo, RepoId};
