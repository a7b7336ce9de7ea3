//! Flattened page hierarchy.
//!
//! A node represents one page's position in the declared hierarchy. Nodes are numbered in
//! pre-order so that the sequence index alone gives reading order: a parent always precedes its
//! descendants, and siblings appear left to right. Parent and child links are stored as indices
//! into the owning [`NodeTable`] rather than as nested values.

use crate::error::{Error, Result};
use crate::hierarchy::HierarchySpec;
use std::collections::HashMap;
use tracing::{debug, error};

#[derive(Clone, Debug, PartialEq, Eq)]
/// One page's position and metadata within the flattened hierarchy.
pub struct Node {
    /// Rank in pre-order traversal, starting from 0 at the root.
    pub index: usize,
    /// Title shown in banners, navigation links and the table of contents.
    pub title: String,
    /// Backing document identifier, absent only for a synthetic root.
    pub page_id: Option<String>,
    /// Index of the containing node, `None` only for the root.
    pub parent: Option<usize>,
    /// Indices of directly nested nodes in declaration order.
    pub children: Vec<usize>,
}

impl Node {
    #[must_use]
    /// Link target for this node, empty when there is no page behind it.
    pub fn href(&self) -> &str {
        self.page_id.as_deref().unwrap_or_default()
    }

    #[must_use]
    /// Whether this is the root of the hierarchy.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Debug)]
/// All nodes of one hierarchy in sequence order, with lookup by page identifier.
///
/// Built once per run by [`flatten`] and read-only afterwards.
pub struct NodeTable {
    nodes: Vec<Node>,
    by_page: HashMap<String, usize>,
}

impl NodeTable {
    #[must_use]
    /// The root node, always at sequence index 0.
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    #[must_use]
    /// Looks up the node backed by `page_id`.
    pub fn get(&self, page_id: &str) -> Option<&Node> {
        self.by_page.get(page_id).map(|&index| &self.nodes[index])
    }

    #[must_use]
    /// The node at a sequence index.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    #[must_use]
    /// All nodes in sequence order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    /// Always false: a table holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every registered page identifier, root included, in sequence order.
    pub fn page_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|node| node.page_id.as_deref())
    }

    /// Children of `node` in declaration order.
    pub fn children<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        node.children.iter().map(|&index| &self.nodes[index])
    }

    fn register(&mut self, spec: &HierarchySpec, parent: Option<usize>) -> Result<usize> {
        let index = self.nodes.len();
        debug!(
            index,
            page = spec.page_id().unwrap_or("ROOT"),
            "creating node"
        );

        match spec.page_id() {
            Some(page_id) => {
                if self.by_page.contains_key(page_id) {
                    error!(page_id, "repeated page");
                    return Err(Error::DuplicatePage {
                        page_id: page_id.to_owned(),
                    });
                }
                self.by_page.insert(page_id.to_owned(), index);
            }
            None if parent.is_some() => {
                return Err(Error::UnlinkedEntry {
                    title: spec.title().to_owned(),
                });
            }
            None => {}
        }

        self.nodes.push(Node {
            index,
            title: spec.title().to_owned(),
            page_id: spec.page_id().map(str::to_owned),
            parent,
            children: Vec::with_capacity(spec.children().len()),
        });

        for child in spec.children() {
            let child_index = self.register(child, Some(index))?;
            self.nodes[index].children.push(child_index);
        }

        Ok(index)
    }
}

/// Numbers every entry of the hierarchy in pre-order and indexes them by page identifier.
///
/// # Errors
///
/// Returns [`Error::DuplicatePage`] when a page identifier appears twice, and
/// [`Error::UnlinkedEntry`] when an entry below the root has no page.
pub fn flatten(spec: &HierarchySpec) -> Result<NodeTable> {
    let mut table = NodeTable {
        nodes: Vec::new(),
        by_page: HashMap::new(),
    };
    table.register(spec, None)?;
    Ok(table)
}

#[cfg(test)]
#[path = "tests/node.rs"]
mod tests;
