// src/crawl/queue.rs
// =============================================================================
// This module implements domain crawling, one depth level at a time.
//
// How it works:
// 1. The frontier starts as just the seed URL (depth 0)
// 2. Every frontier URL is claimed in the VisitedSet *before* it is fetched
// 3. Claimed URLs are fetched concurrently, up to `concurrency` at once
// 4. Pages above the depth cap have their same-origin links extracted.
//    Relative links resolve against the address the page was requested with,
//    not its canonical form, so a trailing slash still counts
// 5. Unvisited links become the next frontier; repeat until it is empty or
//    the depth cap is passed
//
// A page that fails to fetch stays claimed (it is never retried) and simply
// contributes no links. One bad page never stops the crawl.
// =============================================================================

use super::links::{discover_links, LinkTarget};
use super::visited::VisitedSet;
use crate::fetch::PageFetcher;
use crate::policy::{canonicalize, UrlPolicy};
use anyhow::{anyhow, Result};
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Knobs for one crawl run.
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Deepest level fetched; the seed is depth 0
    pub max_depth: usize,
    /// Upper bound on simultaneous page fetches
    pub concurrency: usize,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_depth: 2,
            concurrency: 16,
        }
    }
}

/// What a crawl found.
#[derive(Debug, Default)]
pub struct CrawlOutput {
    /// Every canonical URL claimed during the run, in claim order
    pub urls: Vec<String>,
    /// Fetched HTML keyed by canonical URL (failed fetches are absent)
    pub pages: HashMap<String, String>,
}

// Crawls a domain starting from a seed URL
//
// Parameters:
//   seed: the URL to start crawling from (usually the domain root)
//   options: depth cap and concurrency limit
//   fetcher: where page bodies come from
//   policy: decides which discovered links are in scope
//
// Example:
//   max_depth=0: only the seed is fetched
//   max_depth=1: the seed + every in-scope page it links to
//   max_depth=2: ... + every in-scope page those link to
#[instrument(skip_all, fields(seed = %seed, max_depth = options.max_depth))]
pub async fn crawl_domain<F>(
    seed: &str,
    options: &CrawlOptions,
    fetcher: &F,
    policy: &UrlPolicy,
) -> Result<CrawlOutput>
where
    F: PageFetcher + ?Sized,
{
    let start = Url::parse(seed.trim()).map_err(|e| anyhow!("Invalid URL '{}': {}", seed, e))?;

    let origin = start.origin();
    if !origin.is_tuple() {
        return Err(anyhow!("URL has no origin: {}", seed));
    }
    let origin = origin.ascii_serialization();

    let visited = VisitedSet::new();
    let mut pages = HashMap::new();
    let mut frontier = vec![LinkTarget {
        canonical: canonicalize(seed),
        url: seed.trim().to_string(),
    }];
    let mut depth = 0;
    let concurrency = options.concurrency.max(1);

    while !frontier.is_empty() && depth <= options.max_depth {
        // Claim before fetching so no URL is fetched twice
        let claimed: Vec<LinkTarget> = frontier
            .into_iter()
            .filter(|target| visited.claim(&target.canonical))
            .collect();

        debug!(depth, count = claimed.len(), "fetching frontier");

        let fetched: Vec<(LinkTarget, Option<String>)> = stream::iter(claimed)
            .map(|target| async move {
                let body = fetcher.fetch(&target.url).await;
                (target, body)
            })
            .buffered(concurrency)
            .collect()
            .await;

        let expand = depth < options.max_depth;
        let mut next = Vec::new();
        let mut queued = HashSet::new();

        for (page, body) in fetched {
            let Some(html) = body else {
                warn!(url = %page.url, depth, "skipping page after failed fetch");
                continue;
            };

            if expand {
                for link in discover_links(&html, &page.url, &origin, policy) {
                    if !visited.contains(&link.canonical) && queued.insert(link.canonical.clone()) {
                        next.push(link);
                    }
                }
            }

            pages.insert(page.canonical, html);
        }

        frontier = next;
        depth += 1;
    }

    let urls = visited.into_vec();
    info!(crawled = urls.len(), stored = pages.len(), "crawl finished");

    Ok(CrawlOutput { urls, pages })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `F: PageFetcher + ?Sized`?
//    - The crawler works with any fetcher: the real HttpFetcher, or an
//      in-memory fake in the tests below
//    - ?Sized also allows passing a `&dyn PageFetcher`
//
// 2. What do stream::iter(...).map(...).buffered(n) do?
//    - stream::iter turns the claimed URLs into a stream
//    - map turns each URL into a future that fetches it
//    - buffered(n) polls up to n of those futures at once and yields the
//      results in the same order the URLs went in
//
// 3. Why `async move` inside map?
//    - Each future needs to own its `target`
//    - `fetcher` is a reference, so moving it just copies the reference
// -----------------------------------------------------------------------------
