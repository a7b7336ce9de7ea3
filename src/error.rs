//! Failures that abort a navigation rebuild.
//!
//! Structural problems with the hierarchy are raised before any page is written, so an error
//! from [`crate::site::rebuild`] never leaves the content directory half updated.

use std::io;
use std::path::PathBuf;

/// Everything that can stop a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The hierarchy names the same page twice.
    #[error("repeated page in hierarchy: {page_id}")]
    DuplicatePage {
        /// Identifier of the second occurrence.
        page_id: String,
    },

    /// The hierarchy names a page with no file behind it.
    #[error("hierarchy refers to non-existent page: {page_id}")]
    MissingPage {
        /// Identifier declared in the hierarchy.
        page_id: String,
    },

    /// A non-root entry has no page to link to.
    #[error("hierarchy entry {title:?} has no page")]
    UnlinkedEntry {
        /// Title of the offending entry.
        title: String,
    },

    /// The hierarchy file is not a valid `[title, page, children]` tree.
    #[error("malformed hierarchy in {}: {source}", path.display())]
    Hierarchy {
        /// File the hierarchy was read from.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
