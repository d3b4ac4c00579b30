// src/crawl/mod.rs
// =============================================================================
// This module handles domain crawling.
//
// Features:
// - Level-by-level crawling starting from a seed URL
// - Same-origin restriction (never leaves the target site)
// - Hard depth cap, so an endless site cannot cause endless work
// - Bounded concurrent fetching within each level
// - Every URL is claimed before it is fetched, so nothing is fetched twice
// =============================================================================

mod links;
mod queue;
mod visited;

pub use links::{discover_links, extract_links, LinkTarget};
pub use queue::{crawl_domain, CrawlOptions, CrawlOutput};
pub use visited::VisitedSet;
