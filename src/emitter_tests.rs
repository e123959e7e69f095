#![allow(clippy::unwrap_used)]

use super::*;
use crate::catalog::{Catalog, LabelKind};
use crate::change_index::ChangeLinkIndex;
use crate::test_helpers::{issue, with_assignees, with_labels, with_milestone};
use chrono::{TimeZone, Utc};

fn corpus() -> Vec<Issue> {
    let mut closed = with_assignees(issue(3), &["rsc", "", "bradfitz"]);
    closed.closed = true;
    closed.title = "net/http: flaky test, again".to_string();

    let mut pr = issue(4);
    pr.pull_request = true;

    let mut frozen = with_labels(issue(5), &[LabelKind::FrozenDueToAge]);
    frozen.locked = true;
    frozen.closed = true;

    vec![
        with_labels(issue(9), &[LabelKind::Documentation]),
        with_labels(with_milestone(issue(1), 6, "Unplanned"), &[LabelKind::HelpWanted]),
        closed,
        pr,
        frozen,
        issue(2),
    ]
}

fn render(issues: &[Issue], index: &ChangeLinkIndex) -> String {
    let catalog = Catalog::golang();
    let emitter = Emitter::new(issues, Classifier::new(&catalog, index));
    let mut out = Vec::new();
    emitter.write_csv(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn records_follow_corpus_order_and_skip_excluded() {
    let issues = corpus();
    let catalog = Catalog::golang();
    let index = ChangeLinkIndex::default();
    let emitter = Emitter::new(&issues, Classifier::new(&catalog, &index));

    let numbers: Vec<i32> = emitter.records().map(|r| r.number).collect();
    assert_eq!(numbers, vec![9, 1, 3, 2]);
}

#[test]
fn records_are_restartable() {
    let issues = corpus();
    let catalog = Catalog::golang();
    let index = ChangeLinkIndex::default();
    let emitter = Emitter::new(&issues, Classifier::new(&catalog, &index));

    let first: Vec<Record> = emitter.records().collect();
    let second: Vec<Record> = emitter.records().collect();
    assert_eq!(first, second);
}

#[test]
fn record_fields() {
    let mut i = with_assignees(issue(42), &["alice", "bob"]);
    i.updated = Utc.with_ymd_and_hms(2020, 1, 2, 23, 59, 59).unwrap();
    let issues = vec![with_labels(i, &[LabelKind::Testing])];
    let catalog = Catalog::golang();
    let index = ChangeLinkIndex::default();
    let emitter = Emitter::new(&issues, Classifier::new(&catalog, &index));

    let record = emitter.records().next().unwrap();
    assert_eq!(
        record.fields(),
        [
            "42".to_string(),
            "2020-01-02".to_string(),
            "open".to_string(),
            "test".to_string(),
            "alice,bob".to_string(),
            "issue 42".to_string(),
        ]
    );
}

#[test]
fn csv_output() {
    let out = render(&corpus(), &ChangeLinkIndex::default());
    assert_eq!(
        out,
        "9,2019-06-03,open,doc,,issue 9\n\
         1,2019-06-03,open,help,,issue 1\n\
         3,2019-06-03,closed,,\"rsc,bradfitz\",\"net/http: flaky test, again\"\n\
         2,2019-06-03,open,,,issue 2\n"
    );
}

#[test]
fn rerun_is_byte_identical() {
    let issues = corpus();
    let index = ChangeLinkIndex::default();
    assert_eq!(render(&issues, &index), render(&issues, &index));
}

#[test]
fn empty_corpus_writes_nothing() {
    let catalog = Catalog::golang();
    let index = ChangeLinkIndex::default();
    let emitter = Emitter::new(&[], Classifier::new(&catalog, &index));
    let mut out = Vec::new();
    assert_eq!(emitter.write_csv(&mut out).unwrap(), 0);
    assert!(out.is_empty());
}
