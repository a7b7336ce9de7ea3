//! docnav: keep page titles, navigation links and the table of contents in sync.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use docnav::config::{self, Config, Verbosity};
use docnav::site;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Titles, navigation links and table of contents for markdown pages", long_about = None)]
struct Args {
    /// Directory holding the pages and the hierarchy declaration
    #[arg(value_name = "DIR", env = "DOCS_DIR")]
    content_dir: Option<PathBuf>,

    /// Depth at which the table of contents stops listing pages
    #[arg(long, env = "TOC_MAX_DEPTH")]
    max_toc_depth: Option<usize>,

    /// Hierarchy declaration, relative to the content directory
    #[arg(long, value_name = "FILE")]
    hierarchy: Option<String>,

    /// Minimum level of log output
    #[arg(long, value_enum, ignore_case = true, env = "LOG_LEVEL")]
    log_level: Option<Verbosity>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Configuration file
    #[arg(long, value_name = "FILE", default_value = config::CONFIG_FILENAME)]
    config: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut cfg = Config::load(&args.config);

    // Override config with command line args
    if let Some(dir) = args.content_dir {
        cfg.content_directory = dir.to_string_lossy().into_owned();
    }
    if let Some(depth) = args.max_toc_depth {
        cfg.max_toc_depth = depth;
    }
    if let Some(hierarchy) = args.hierarchy {
        cfg.hierarchy_file = hierarchy;
    }
    if let Some(level) = args.log_level {
        cfg.log_verbosity = level.to_string();
    }
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.verbosity().as_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match site::rebuild(&cfg, args.dry_run) {
        Ok(summary) => {
            info!(
                pages = summary.pages,
                rewritten = summary.rewritten,
                skipped = summary.skipped.len(),
                dry_run = args.dry_run,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
