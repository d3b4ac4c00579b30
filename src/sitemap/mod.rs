// src/sitemap/mod.rs
// =============================================================================
// Sitemap discovery: robots.txt -> sitemaps -> nested sitemaps -> page URLs.
//
// Submodules:
// - parse: robots.txt directive parsing and <loc> scanning
// - resolver: the fetch loop with cycle protection
// =============================================================================

mod parse;
mod resolver;

pub use parse::{extract_locs, is_nested_sitemap, parse_robots_sitemaps};
pub use resolver::{resolve_sitemaps, SitemapOptions};
