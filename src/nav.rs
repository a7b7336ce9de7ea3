//! Previous, up and next links for a page.
//!
//! Neighbours come from the flattened sequence order, so "next" from the last child of a section
//! continues into the following section rather than stopping. The root acts as the wrap-around
//! target at both ends of the sequence and as the "up" link for top-level pages.

use crate::node::{Node, NodeTable};

#[derive(Clone, Copy, Debug)]
/// Resolved neighbours of one node.
pub struct Nav<'a> {
    /// Containing node, or the root for top-level pages.
    pub parent: &'a Node,
    /// Node before this one in sequence order, or the root at the start.
    pub previous: &'a Node,
    /// Node after this one in sequence order, or the root at the end.
    pub next: &'a Node,
}

#[must_use]
/// Computes the parent and sequence neighbours of `node`.
pub fn resolve_nav<'a>(table: &'a NodeTable, node: &Node) -> Nav<'a> {
    let root = table.root();
    let parent = node
        .parent
        .and_then(|index| table.node(index))
        .unwrap_or(root);
    let previous = node
        .index
        .checked_sub(1)
        .and_then(|index| table.node(index))
        .unwrap_or(root);
    let next = table.node(node.index + 1).unwrap_or(root);
    Nav {
        parent,
        previous,
        next,
    }
}

#[cfg(test)]
#[path = "tests/nav.rs"]
mod tests;
