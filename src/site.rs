//! One full navigation rebuild over a content directory.
//!
//! The run is a single linear pass: load the hierarchy, flatten it, list the pages on disk and
//! check them against the hierarchy, then rewrite each page and finally the table of contents.
//! All validation happens before the first write, so a structural error leaves every file as it
//! was. Each page is read, transformed in memory and written back whole before moving on.

use crate::check::check;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::hierarchy::HierarchySpec;
use crate::input::find_documents;
use crate::nav::resolve_nav;
use crate::node::{flatten, NodeTable};
use crate::region::rewrite;
use crate::toc::render_toc;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Default, PartialEq, Eq)]
/// What a rebuild did, or would do on a dry run.
pub struct Summary {
    /// Pages whose regions were regenerated.
    pub pages: usize,
    /// Pages whose contents actually changed.
    pub rewritten: usize,
    /// Files on disk that the hierarchy does not mention.
    pub skipped: Vec<String>,
    /// Table of contents file, if the root has a page.
    pub toc: Option<PathBuf>,
}

/// Rebuilds titles, navigation links and the table of contents for the configured directory.
///
/// With `dry_run` set, everything is computed and reported but no file is written.
///
/// # Errors
///
/// Returns an error if the hierarchy cannot be loaded or is inconsistent with the files present,
/// or if a page cannot be read or written.
pub fn rebuild(cfg: &Config, dry_run: bool) -> Result<Summary> {
    info!("building page hierarchy tree");
    let spec = HierarchySpec::load(&cfg.hierarchy_path())?;
    let table = flatten(&spec)?;
    info!(nodes = table.len(), "flattened hierarchy");
    for node in table.nodes() {
        debug!(index = node.index, title = %node.title, page = node.href(), "node");
    }
    info!(root = %table.root().title, "root");
    rebuild_with(&table, cfg, dry_run)
}

/// Runs the check and rewrite phases against an already flattened hierarchy.
///
/// # Errors
///
/// See [`rebuild`].
pub fn rebuild_with(table: &NodeTable, cfg: &Config, dry_run: bool) -> Result<Summary> {
    let content_dir = cfg.content_dir();
    info!(dir = %content_dir.display(), "loading files");
    let existing =
        find_documents(&content_dir, &cfg.file_extensions).map_err(|e| Error::io(&content_dir, e))?;
    debug!(files = ?existing, "found files");
    let pages = check(table, &existing)?;

    let mut summary = Summary {
        skipped: existing
            .iter()
            .filter(|file| table.get(file.as_str()).is_none())
            .cloned()
            .collect(),
        ..Summary::default()
    };

    for node in pages {
        let page_id = node.href();
        let path = content_dir.join(page_id);
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let nav = resolve_nav(table, node);
        debug!(
            index = node.index,
            parent = %nav.parent.title,
            prev = %nav.previous.title,
            next = %nav.next.title,
            "rewriting page"
        );
        let updated = rewrite(&content, node, &nav);
        let changed = updated != content;
        summary.pages += 1;
        if changed {
            summary.rewritten += 1;
            if !dry_run {
                fs::write(&path, updated).map_err(|e| Error::io(&path, e))?;
            }
        }
        info!(page = %page_id, changed, "page done");
    }

    if let Some(toc_page) = table.root().page_id.as_deref() {
        let path = content_dir.join(toc_page);
        info!(path = %path.display(), "writing table of contents file");
        if !dry_run {
            fs::write(&path, render_toc(table, cfg.max_toc_depth))
                .map_err(|e| Error::io(&path, e))?;
        }
        summary.toc = Some(path);
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "tests/site.rs"]
mod tests;
