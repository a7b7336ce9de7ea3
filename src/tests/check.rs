use super::check;
use crate::error::Error;
use crate::hierarchy::HierarchySpec;
use crate::node::{flatten, Node, NodeTable};
use std::collections::BTreeSet;

fn table() -> NodeTable {
    flatten(&HierarchySpec::page(
        "Course",
        "course.md",
        vec![
            HierarchySpec::page("Intro", "intro.md", vec![]),
            HierarchySpec::page("Advanced", "advanced.md", vec![]),
        ],
    ))
    .unwrap()
}

fn ids<'a>(pages: &[&'a Node]) -> Vec<&'a str> {
    pages.iter().map(|&node| node.href()).collect()
}

fn files(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

#[test]
fn test_all_present_excludes_root() {
    let table = table();
    let pages = check(&table, &files(&["course.md", "intro.md", "advanced.md"])).unwrap();

    assert_eq!(ids(&pages), vec!["advanced.md", "intro.md"]);
    assert!(pages.iter().all(|node| !node.is_root()));
}

#[test]
fn test_orphan_files_are_skipped() {
    let table = table();
    let pages = check(
        &table,
        &files(&["course.md", "intro.md", "advanced.md", "notes.md"]),
    )
    .unwrap();

    assert_eq!(ids(&pages), vec!["advanced.md", "intro.md"]);
}

#[test]
fn test_missing_page_is_fatal() {
    match check(&table(), &files(&["course.md", "advanced.md", "notes.md"])) {
        Err(Error::MissingPage { page_id }) => assert_eq!(page_id, "intro.md"),
        other => panic!("expected missing page error, got {other:?}"),
    }
}

#[test]
fn test_missing_root_page_is_fatal() {
    let err = check(&table(), &files(&["intro.md", "advanced.md"])).unwrap_err();

    assert!(matches!(err, Error::MissingPage { page_id } if page_id == "course.md"));
}

#[test]
fn test_synthetic_root_needs_no_file() {
    let table = flatten(&HierarchySpec::synthetic(
        "Contents",
        vec![HierarchySpec::page("Intro", "intro.md", vec![])],
    ))
    .unwrap();

    assert_eq!(ids(&check(&table, &files(&["intro.md"])).unwrap()), vec!["intro.md"]);
}
