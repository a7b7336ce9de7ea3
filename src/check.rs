//! Cross-checks the declared hierarchy against the files on disk.
//!
//! The hierarchy is the source of truth. A declared page without a file is fatal; a file that the
//! hierarchy never mentions is reported and left alone.

use crate::error::{Error, Result};
use crate::node::{Node, NodeTable};
use std::collections::BTreeSet;
use tracing::{error, warn};

/// Validates that every declared page exists and selects the pages to rewrite.
///
/// Returns the nodes of the pages to rewrite, sorted by page identifier. The root page is never
/// among them, since the table of contents overwrites it.
///
/// # Errors
///
/// Returns [`Error::MissingPage`] for the first declared page (in sorted order) with no file.
pub fn check<'a>(table: &'a NodeTable, existing: &BTreeSet<String>) -> Result<Vec<&'a Node>> {
    let declared: BTreeSet<&str> = table.page_ids().collect();
    for page_id in &declared {
        if !existing.contains(*page_id) {
            error!(page_id, "hierarchy refers to non-existent page");
            return Err(Error::MissingPage {
                page_id: (*page_id).to_owned(),
            });
        }
    }

    let mut pages = Vec::with_capacity(existing.len());
    for file in existing {
        match table.get(file) {
            Some(node) if node.is_root() => {}
            Some(node) => pages.push(node),
            None => warn!(file = %file, "skipping file (not in page structure)"),
        }
    }
    Ok(pages)
}

#[cfg(test)]
#[path = "tests/check.rs"]
mod tests;
