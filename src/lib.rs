//! docnav: titles, navigation links and a table of contents for hierarchical markdown pages.
//!
//! A hand-written hierarchy declares the order and nesting of the pages in a directory. docnav
//! flattens it into reading order, regenerates the marked title and navigation regions in each
//! page, and rewrites the root page as a table of contents.
#![allow(clippy::multiple_crate_versions)]

pub mod check;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod input;
pub mod nav;
pub mod node;
pub mod region;
pub mod site;
pub mod toc;

pub use error::{Error, Result};
