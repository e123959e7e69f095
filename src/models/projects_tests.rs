#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    github = { "golang/go", "golang", "go" },
    padded = { "  golang/go ", "golang", "go" },
)]
fn parse_repo_id(input: &str, owner: &str, name: &str) {
    let id: RepoId = input.parse().unwrap();
    assert_eq!(id, RepoId::new(owner, name));
}

#[parameterized(
    empty = { "" },
    no_slash = { "golang" },
    missing_owner = { "/go" },
    missing_name = { "golang/" },
)]
fn parse_repo_id_rejects(input: &str) {
    assert!(matches!(input.parse::<RepoId>(), Err(Error::InvalidPath(_))));
}

#[test]
fn project_id_keeps_nested_name() {
    let id: ProjectId = "go.googlesource.com/tools/gopls".parse().unwrap();
    assert_eq!(id.server, "go.googlesource.com");
    assert_eq!(id.name, "tools/gopls");
}

#[test]
fn repo_id_matches_refs() {
    let id = RepoId::new("golang", "go");
    assert!(id.matches("golang/go"));
    assert!(!id.matches("golang/tools"));
    assert!(!id.matches("golang"));
    assert!(!id.matches("golang/go/extra"));
}

#[test]
fn display_names() {
    assert_eq!(RepoId::new("golang", "go").to_string(), "github.com/golang/go");
    assert_eq!(
        ProjectId::new("go.googlesource.com", "go").to_string(),
        "go.googlesource.com/go"
    );
}
