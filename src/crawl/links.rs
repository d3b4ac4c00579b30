// src/crawl/links.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate to find every <a href> in the document and the
// `url` crate to resolve each href against the page it was found on.
//
// Two layers:
// - extract_links(): every absolute http(s) URL on the page, nothing else
// - discover_links(): what the crawler actually follows. Deduplicated on
//   canonical form, same origin as the seed (host boundary respected), and
//   not excluded by the URL policy.
// =============================================================================

use crate::policy::{canonicalize, UrlPolicy};
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

// Extracts all absolute http(s) links from HTML content
//
// Parameters:
//   html: the HTML content to parse
//   base_url: the URL of the page (for resolving relative links)
//
// Malformed hrefs are skipped and logged at debug level.
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   base_url = "https://example.com"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            debug!(base_url = %base_url, error = %e, "cannot resolve links against invalid base");
            return links;
        }
    };

    let document = Html::parse_document(html);

    // Constant selector, always valid
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(absolute_url) = resolve_link(&base, href) {
            links.push(absolute_url);
        }
    }

    links
}

/// A followable link: the dedup key plus the address to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    /// Canonical form, used for visited checks and as the result key
    pub canonical: String,
    /// Absolute URL as resolved from the href, used for fetching and as the
    /// base for that page's own relative links
    pub url: String,
}

// Links the crawler should consider following from one page
//
// `page_url` must be the address the page was actually requested with, so
// that "intro" on ".../docs/" resolves to ".../docs/intro".
//
// Returns one target per canonical URL, in page order.
pub fn discover_links(html: &str, page_url: &str, origin: &str, policy: &UrlPolicy) -> Vec<LinkTarget> {
    let origin = canonicalize(origin);
    let mut seen = HashSet::new();

    extract_links(html, page_url)
        .into_iter()
        .map(|url| LinkTarget {
            canonical: canonicalize(&url),
            url,
        })
        .filter(|target| {
            is_same_origin(&target.canonical, &origin) && !policy.is_excluded(&target.canonical, &origin)
        })
        .filter(|target| seen.insert(target.canonical.clone()))
        .collect()
}

// Prefix match that ends on a host boundary, so "https://example.com" does not
// accept "https://example.com.evil.net" or "https://example.community"
fn is_same_origin(canonical: &str, origin: &str) -> bool {
    match canonical.strip_prefix(origin) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

// Resolves a link (possibly relative) to an absolute http(s) URL
fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();

    // Skip in-page anchors and special protocols
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    match base.join(href) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Some(url.to_string()),
        Ok(_) => None,
        Err(e) => {
            debug!(href = %href, base = %base, error = %e, "skipping malformed link");
            None
        }
    }
}
