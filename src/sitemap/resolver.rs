// src/sitemap/resolver.rs
// =============================================================================
// Resolves every content URL reachable from a domain's robots.txt sitemaps.
//
// Flow:
// 1. GET {domain}/robots.txt and collect its `Sitemap:` lines. If this fails
//    the whole sitemap path yields nothing (there is no /sitemap.xml guess).
// 2. Work-list loop over sitemap URLs. Each URL is claimed in a visited set
//    before it is fetched, so index files that point at each other (A -> B
//    -> A) are fetched once each and the loop ends.
// 3. Each <loc> is either another sitemap (ends in .xml, queued) or a
//    content page (canonicalized and kept if the policy allows it).
//
// One failing sitemap is logged and skipped; its siblings and anything
// already queued still get processed.
// =============================================================================

use super::parse::{extract_locs, is_nested_sitemap, parse_robots_sitemaps};
use crate::crawl::VisitedSet;
use crate::error::FetchError;
use crate::fetch::TextFetcher;
use crate::policy::{canonicalize, UrlPolicy};
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Knobs for one sitemap run.
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    /// Timeout applied to robots.txt and every sitemap request
    pub timeout: Duration,
    /// Upper bound on simultaneous sitemap fetches
    pub concurrency: usize,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            concurrency: 8,
        }
    }
}

// Distinct canonical content URLs found through the domain's sitemaps
//
// Never fails: a missing robots.txt gives an empty Vec, and individual
// sitemap failures only shrink the result.
#[instrument(skip_all, fields(domain = %domain))]
pub async fn resolve_sitemaps<F>(
    domain: &str,
    options: &SitemapOptions,
    fetcher: &F,
    policy: &UrlPolicy,
) -> Vec<String>
where
    F: TextFetcher + ?Sized,
{
    let robots_url = format!("{}/robots.txt", domain.trim().trim_end_matches('/'));

    let robots_txt = match fetcher.fetch_text(&robots_url, options.timeout).await {
        Ok(body) => body,
        Err(e) => {
            warn!(url = %robots_url, error = %e, "robots.txt unavailable, skipping sitemaps");
            return Vec::new();
        }
    };

    let declared = parse_robots_sitemaps(&robots_txt);
    info!(count = declared.len(), "sitemaps declared in robots.txt");

    let urls = process_sitemaps(declared, domain, options, fetcher, policy).await;
    info!(count = urls.len(), "sitemap URLs extracted");
    urls
}

// Work-list traversal over sitemap URLs
async fn process_sitemaps<F>(
    initial: Vec<String>,
    domain: &str,
    options: &SitemapOptions,
    fetcher: &F,
    policy: &UrlPolicy,
) -> Vec<String>
where
    F: TextFetcher + ?Sized,
{
    let domain = canonicalize(domain);
    let visited = VisitedSet::new();
    let mut collected = Vec::new();
    let mut seen = HashSet::new();
    let mut pending = initial;
    let concurrency = options.concurrency.max(1);

    while !pending.is_empty() {
        let claimed: Vec<String> = pending
            .into_iter()
            .filter(|url| {
                let fresh = visited.claim(url);
                if !fresh {
                    debug!(url = %url, "skipping already processed sitemap");
                }
                fresh
            })
            .collect();

        let fetched: Vec<(String, Result<String, FetchError>)> = stream::iter(claimed)
            .map(|url| async move {
                let body = fetcher.fetch_text(&url, options.timeout).await;
                (url, body)
            })
            .buffered(concurrency)
            .collect()
            .await;

        let mut nested = Vec::new();

        for (sitemap_url, body) in fetched {
            let xml = match body {
                Ok(xml) => xml,
                Err(e) => {
                    warn!(url = %sitemap_url, error = %e, "failed to process sitemap");
                    continue;
                }
            };

            let locs = extract_locs(&xml);
            debug!(url = %sitemap_url, locs = locs.len(), "sitemap fetched");

            for loc in locs {
                if is_nested_sitemap(&loc) {
                    nested.push(loc);
                    continue;
                }

                let url = canonicalize(&loc);
                if url.is_empty() || url == domain || policy.is_excluded(&url, &domain) {
                    continue;
                }
                if seen.insert(url.clone()) {
                    collected.push(url);
                }
            }
        }

        pending = nested;
    }

    collected
}
