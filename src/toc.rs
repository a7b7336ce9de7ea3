//! Table of contents page.
//!
//! The root itself is the contents page, so the listing starts at its children. Each level of
//! nesting is indented by four spaces, which markdown renders as a nested ordered list.

use crate::node::{Node, NodeTable};
use std::fmt::Write;
use tracing::info;

/// Heading written at the top of the contents page.
pub const TOC_HEADING: &str = "# Table of Contents\n\n";

const INDENT: usize = 4;

#[must_use]
/// Renders the hierarchy below the root, omitting nodes at `max_depth` or deeper.
///
/// Depth 0 is the root's direct children, so a `max_depth` of 1 lists only those.
pub fn render_toc(table: &NodeTable, max_depth: usize) -> String {
    let mut out = String::from(TOC_HEADING);
    for child in table.children(table.root()) {
        write_node(table, child, 0, max_depth, &mut out);
    }
    out
}

fn write_node(table: &NodeTable, node: &Node, depth: usize, max_depth: usize, out: &mut String) {
    if depth >= max_depth {
        return;
    }
    info!(depth, title = %node.title, "writing table of contents node");
    writeln!(
        out,
        "{:indent$}1. [{}]({})",
        "",
        node.title,
        node.href(),
        indent = depth * INDENT
    )
    .unwrap();
    for child in table.children(node) {
        write_node(table, child, depth + 1, max_depth, out);
    }
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
