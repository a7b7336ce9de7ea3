//! The declared page hierarchy, as authored by hand.
//!
//! The declaration is a tree of `[title, page, children]` triples stored as JSON, so the file
//! reads much like an outline:
//!
//! ```json
//! ["Course", "README.md", [
//!   ["Intro", "intro.md", []],
//!   ["Advanced", "advanced.md", []]
//! ]]
//! ```
//!
//! The outermost triple is the root. Its page, if any, receives the table of contents.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One entry of the declared hierarchy: title, optional page identifier and nested entries.
pub struct HierarchySpec(pub String, pub Option<String>, pub Vec<HierarchySpec>);

impl HierarchySpec {
    #[must_use]
    /// Builds an entry backed by a page.
    pub fn page(title: &str, page_id: &str, children: Vec<HierarchySpec>) -> Self {
        Self(title.to_owned(), Some(page_id.to_owned()), children)
    }

    #[must_use]
    /// Builds an entry with no page behind it (only meaningful for the root).
    pub fn synthetic(title: &str, children: Vec<HierarchySpec>) -> Self {
        Self(title.to_owned(), None, children)
    }

    #[must_use]
    /// Display title of the entry.
    pub fn title(&self) -> &str {
        &self.0
    }

    #[must_use]
    /// Page identifier, if the entry has one.
    pub fn page_id(&self) -> Option<&str> {
        self.1.as_deref()
    }

    #[must_use]
    /// Nested entries in declaration order.
    pub fn children(&self) -> &[HierarchySpec] {
        &self.2
    }

    /// Parses a hierarchy from JSON text.
    ///
    /// Page identifiers are normalised so that `./intro.md` and `intro.md` name the same page.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the text is not a `[title, page, children]` tree.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let mut spec: Self = serde_json::from_str(text)?;
        spec.normalise();
        Ok(spec)
    }

    /// Reads and parses the hierarchy declaration at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&text).map_err(|source| Error::Hierarchy {
            path: path.to_path_buf(),
            source,
        })
    }

    fn normalise(&mut self) {
        if let Some(page_id) = self.1.as_mut() {
            if let Some(stripped) = page_id.strip_prefix("./") {
                *page_id = stripped.to_owned();
            }
        }
        for child in &mut self.2 {
            child.normalise();
        }
    }
}

#[cfg(test)]
#[path = "tests/hierarchy.rs"]
mod tests;
