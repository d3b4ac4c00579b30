// src/fetch/mod.rs
// =============================================================================
// Fetch collaborators used by the crawler and the sitemap resolver.
//
// Two traits, because the two callers want different failure shapes:
//
// - PageFetcher: HTML pages for the crawler. Never fails past the boundary;
//   a failed page is simply None and the crawler moves on.
// - TextFetcher: robots.txt and sitemap XML. Returns a FetchError so the
//   resolver can log why a sitemap was skipped. Always takes a timeout.
//
// HttpFetcher implements both on top of one reqwest::Client.
// =============================================================================

mod http;

pub use http::HttpFetcher;

use crate::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page body, or None if it could not be retrieved.
    async fn fetch(&self, url: &str) -> Option<String>;
}

#[async_trait]
pub trait TextFetcher: Send + Sync {
    /// Fetch a text document; non-2xx statuses and timeouts are errors.
    async fn fetch_text(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}
