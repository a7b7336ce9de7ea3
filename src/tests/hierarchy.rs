use super::HierarchySpec;
use crate::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parses_nested_triples() {
    let spec = HierarchySpec::from_json(
        r#"["Course", "course.md", [
            ["Intro", "intro.md", []],
            ["Advanced", "advanced.md", [["Lifetimes", "lifetimes.md", []]]]
        ]]"#,
    )
    .unwrap();

    assert_eq!(spec.title(), "Course");
    assert_eq!(spec.page_id(), Some("course.md"));
    assert_eq!(spec.children().len(), 2);
    assert_eq!(spec.children()[1].children()[0].title(), "Lifetimes");
}

#[test]
fn test_null_page_for_synthetic_root() {
    let spec = HierarchySpec::from_json(r#"["Contents", null, [["Intro", "intro.md", []]]]"#)
        .unwrap();

    assert_eq!(spec.page_id(), None);
    assert_eq!(
        spec,
        HierarchySpec::synthetic("Contents", vec![HierarchySpec::page("Intro", "intro.md", vec![])])
    );
}

#[test]
fn test_leading_dot_slash_is_stripped() {
    let spec =
        HierarchySpec::from_json(r#"["Course", "./course.md", [["Intro", "./intro.md", []]]]"#)
            .unwrap();

    assert_eq!(spec.page_id(), Some("course.md"));
    assert_eq!(spec.children()[0].page_id(), Some("intro.md"));
}

#[test]
fn test_rejects_malformed_entry() {
    assert!(HierarchySpec::from_json(r#"["Course", "course.md"]"#).is_err());
    assert!(HierarchySpec::from_json(r#"{"title": "Course"}"#).is_err());
}

#[test]
fn test_load_reports_path_of_bad_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("_toc.json");
    fs::write(&path, "[\"Course\"").unwrap();

    match HierarchySpec::load(&path) {
        Err(Error::Hierarchy { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected hierarchy error, got {other:?}"),
    }
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = HierarchySpec::load(&dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}
