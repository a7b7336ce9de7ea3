//! Generated regions inside hand-written pages.
//!
//! A page opts into generated content by carrying a pair of HTML comment markers per region.
//! Everything between the markers belongs to docnav and is replaced in full on every run;
//! everything outside them is left byte for byte as it was. A page without the markers for a
//! region is not modified for that region.
//!
//! ```text
//! <!-- begin auto-generated title section -->
//! # Intro
//! <!-- end auto-generated section -->
//! ```
//!
//! Whitespace around a region is absorbed into the match and replaced with the fixed spacing of
//! the rendered block, which makes rewriting idempotent.

use crate::nav::Nav;
use crate::node::Node;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Shared start of every opening marker.
pub const OPEN_PREFIX: &str = "<!-- begin auto-generated ";

/// Marker closing every region.
pub const CLOSE_MARKER: &str = "<!-- end auto-generated section -->";

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| region_regex(RegionKind::Title));
static NAV_RE: LazyLock<Regex> = LazyLock::new(|| region_regex(RegionKind::NavLinks));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The kinds of generated region a page may carry.
pub enum RegionKind {
    /// Title banner at the top of the page.
    Title,
    /// Previous / Up / Next table, usually at the bottom.
    NavLinks,
}

impl RegionKind {
    #[must_use]
    /// Name used inside the opening marker.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::NavLinks => "nav-links",
        }
    }

    #[must_use]
    /// Marker opening a region of this kind.
    pub fn open_marker(self) -> String {
        format!("{OPEN_PREFIX}{} section -->", self.tag())
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Title => LazyLock::force(&TITLE_RE),
            Self::NavLinks => LazyLock::force(&NAV_RE),
        }
    }
}

fn region_regex(kind: RegionKind) -> Regex {
    let pattern = format!(
        r"(?s)\s*{}.*?{}\s*",
        regex::escape(&kind.open_marker()),
        regex::escape(CLOSE_MARKER)
    );
    Regex::new(&pattern).expect("region markers form a valid regex")
}

#[must_use]
/// Renders the title region for a page.
pub fn render_title(title: &str) -> String {
    format!(
        "{open}\n# {title}\n{CLOSE_MARKER}\n\n\n",
        open = RegionKind::Title.open_marker()
    )
}

#[must_use]
/// Renders the navigation table region from resolved neighbours.
pub fn render_nav(nav: &Nav<'_>) -> String {
    format!(
        "\n\n\n{open}\n\
         | Previous | Up | Next |\n\
         |:---------|:---:|-----:|\n\
         | [{}]({}) | [{}]({}) | [{}]({}) |\n\
         {CLOSE_MARKER}\n",
        nav.previous.title,
        nav.previous.href(),
        nav.parent.title,
        nav.parent.href(),
        nav.next.title,
        nav.next.href(),
        open = RegionKind::NavLinks.open_marker(),
    )
}

#[must_use]
/// Replaces the first region of `kind` in `text` with `block`.
///
/// The match runs from the opening marker to the nearest closing marker. An opening marker whose
/// nearest close comes after another region opens is unclosed, and is treated as absent so the
/// text in between survives. Returns `None` if the region is absent.
pub fn replace_region(text: &str, kind: RegionKind, block: &str) -> Option<String> {
    let found = kind.pattern().find(text)?;
    let open = kind.open_marker();
    let body_start = found.as_str().find(&open)? + open.len();
    if found.as_str()[body_start..].contains(OPEN_PREFIX) {
        debug!(region = kind.tag(), "region opened but not closed");
        return None;
    }
    let mut out = String::with_capacity(text.len() - found.len() + block.len());
    out.push_str(&text[..found.start()]);
    out.push_str(block);
    out.push_str(&text[found.end()..]);
    Some(out)
}

#[must_use]
/// Applies each region replacement in turn, skipping regions the text lacks.
pub fn replace_regions(text: &str, blocks: &[(RegionKind, &str)]) -> String {
    let mut current = text.to_owned();
    for &(kind, block) in blocks {
        match replace_region(&current, kind, block) {
            Some(updated) => {
                debug!(region = kind.tag(), updated = updated != current, "region found");
                current = updated;
            }
            None => debug!(region = kind.tag(), "region absent"),
        }
    }
    current
}

#[must_use]
/// Regenerates the title and navigation regions of a page.
pub fn rewrite(raw: &str, node: &Node, nav: &Nav<'_>) -> String {
    let title = render_title(&node.title);
    let links = render_nav(nav);
    replace_regions(
        raw,
        &[
            (RegionKind::Title, title.as_str()),
            (RegionKind::NavLinks, links.as_str()),
        ],
    )
}

#[cfg(test)]
#[path = "tests/region.rs"]
mod tests;
