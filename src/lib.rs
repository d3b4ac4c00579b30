// src/lib.rs
// =============================================================================
// site-scout discovers the content pages of a website and sorts them into
// landing pages and blog/article pages.
//
// Two discovery paths run side by side:
// - crawl: follow same-origin links from the domain root, depth-capped
// - sitemap: robots.txt -> sitemaps -> nested sitemaps -> page URLs
//
// Their union goes through the URL policy (policy) and the classifier
// (classify). discover ties the pieces together.
// =============================================================================

pub mod classify;
pub mod crawl;
pub mod discover;
pub mod error;
pub mod fetch;
pub mod output;
pub mod policy;
pub mod sitemap;

pub use classify::{merge_and_classify, ClassifiedUrl, PageType};
pub use discover::{discover, DiscoveryConfig, DiscoveryReport};
pub use error::{FetchError, PolicyError};
pub use policy::{UrlPolicy, WordLists};
