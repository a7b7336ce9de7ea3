//! Run settings for a content directory.
//!
//! Settings come from `docnav.toml` in the working directory when it exists and parses. Every
//! key is optional: the `#[facet(default = ...)]` attributes are the single place defaults live,
//! and [`Config::default`] is simply an empty file. The command line then overrides individual
//! settings, so a project only needs a config file when it departs from `class_materials/`.

use facet::Facet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "docnav.toml";

#[derive(Facet, Clone, Debug)]
/// Project preferences loaded from docnav.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 3)]
    /// Nesting depth at which the table of contents stops listing pages.
    pub max_toc_depth: usize,
    #[facet(default = "class_materials".to_string())]
    /// Directory holding the pages and the hierarchy declaration.
    pub content_directory: String,
    #[facet(default = "_toc.json".to_string())]
    /// Hierarchy declaration, relative to the content directory.
    pub hierarchy_file: String,
    #[facet(default = "warn".to_string())]
    /// Minimum level of log output: error, warn, info, debug or trace.
    pub log_verbosity: String,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes treated as pages when scanning the content directory.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        facet_toml::from_str::<Self>("").expect("every config key has a default")
    }
}

impl Config {
    #[must_use]
    /// Parses configuration from TOML text, with absent keys taking their defaults.
    pub fn from_toml(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }

    #[must_use]
    /// Load configuration from `path` if present and valid, otherwise use the defaults.
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|contents| Self::from_toml(&contents))
            .unwrap_or_default()
    }

    #[must_use]
    /// Directory holding the pages.
    pub fn content_dir(&self) -> PathBuf {
        PathBuf::from(&self.content_directory)
    }

    #[must_use]
    /// Full path of the hierarchy declaration.
    pub fn hierarchy_path(&self) -> PathBuf {
        self.content_dir().join(&self.hierarchy_file)
    }

    #[must_use]
    /// Configured verbosity, or `warn` if the setting is not recognised.
    pub fn verbosity(&self) -> Verbosity {
        self.log_verbosity.parse().unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
/// How much the run reports about what it is doing.
pub enum Verbosity {
    /// Only fatal problems.
    #[value(alias = "critical")]
    Error,
    /// Skipped files and other non-fatal problems.
    #[default]
    #[value(alias = "warning")]
    Warn,
    /// Progress through the run.
    Info,
    /// Per-node and per-region detail.
    Debug,
    /// Everything.
    Trace,
}

impl Verbosity {
    #[must_use]
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as clap::ValueEnum>::from_str(s, true)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
