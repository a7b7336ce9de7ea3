use super::{Config, Verbosity};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.max_toc_depth, 3);
    assert_eq!(cfg.content_directory, "class_materials");
    assert_eq!(cfg.hierarchy_file, "_toc.json");
    assert_eq!(cfg.verbosity(), Verbosity::Warn);
    assert_eq!(cfg.file_extensions, vec!["md".to_string()]);
    assert_eq!(
        cfg.hierarchy_path(),
        Path::new("class_materials").join("_toc.json")
    );
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let cfg = Config::from_toml("max_toc_depth = 1\ncontent_directory = \"docs\"\n").unwrap();

    assert_eq!(cfg.max_toc_depth, 1);
    assert_eq!(cfg.content_directory, "docs");
    assert_eq!(cfg.hierarchy_file, "_toc.json");
    assert_eq!(cfg.file_extensions, vec!["md".to_string()]);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docnav.toml");
    fs::write(&path, "log_verbosity = \"debug\"\nfile_extensions = [\"md\", \"markdown\"]\n").unwrap();

    let cfg = Config::load(&path);

    assert_eq!(cfg.verbosity(), Verbosity::Debug);
    assert_eq!(cfg.file_extensions.len(), 2);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    let cfg = Config::load(&dir.path().join("docnav.toml"));

    assert_eq!(cfg.max_toc_depth, 3);
}

#[test]
fn test_verbosity_parsing() {
    assert_eq!("INFO".parse::<Verbosity>(), Ok(Verbosity::Info));
    assert_eq!("warning".parse::<Verbosity>(), Ok(Verbosity::Warn));
    assert_eq!("critical".parse::<Verbosity>(), Ok(Verbosity::Error));
    assert!("loud".parse::<Verbosity>().is_err());

    let cfg = Config {
        log_verbosity: "loud".to_string(),
        ..Config::default()
    };
    assert_eq!(cfg.verbosity(), Verbosity::Warn);
}

#[test]
fn test_default_matches_empty_file() {
    let empty = Config::from_toml("").unwrap();
    let cfg = Config::default();

    assert_eq!(cfg.max_toc_depth, empty.max_toc_depth);
    assert_eq!(cfg.content_directory, empty.content_directory);
    assert_eq!(cfg.hierarchy_file, empty.hierarchy_file);
    assert_eq!(cfg.log_verbosity, empty.log_verbosity);
    assert_eq!(cfg.file_extensions, empty.file_extensions);
}

#[test]
fn test_verbosity_aliases_ignore_case() {
    assert_eq!("WARNING".parse::<Verbosity>(), Ok(Verbosity::Warn));
    assert_eq!("Critical".parse::<Verbosity>(), Ok(Verbosity::Error));
    assert_eq!("Trace".parse::<Verbosity>(), Ok(Verbosity::Trace));
    for level in [Verbosity::Error, Verbosity::Info, Verbosity::Debug] {
        assert_eq!(level.to_string().parse::<Verbosity>(), Ok(level));
    }
}
