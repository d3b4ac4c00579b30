// src/discover.rs
// =============================================================================
// Runs both discovery paths against one domain and classifies the union.
//
// The crawler and the sitemap resolver are independent, so they run
// concurrently with tokio::join! and only meet in the merge step.
// =============================================================================

use crate::classify::{merge_and_classify, ClassifiedUrl};
use crate::crawl::{crawl_domain, CrawlOptions};
use crate::fetch::{PageFetcher, TextFetcher};
use crate::policy::UrlPolicy;
use crate::sitemap::{resolve_sitemaps, SitemapOptions};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Settings for a full discovery run.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    pub crawl: CrawlOptions,
    pub sitemap: SitemapOptions,
}

/// Everything a discovery run produced.
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    /// Final typed output, first-occurrence order
    pub classified: Vec<ClassifiedUrl>,
    /// Raw crawl result (canonical URLs, claim order)
    pub crawled: Vec<String>,
    /// Raw sitemap result (canonical URLs, first-seen order)
    pub sitemap_urls: Vec<String>,
    /// Fetched HTML keyed by canonical URL
    pub pages: HashMap<String, String>,
    pub elapsed: Duration,
}

impl DiscoveryReport {
    // Distinct URLs across both paths, before classification
    pub fn unique_candidates(&self) -> usize {
        let mut all: Vec<&String> = self.crawled.iter().chain(&self.sitemap_urls).collect();
        all.sort();
        all.dedup();
        all.len()
    }
}

// Discovers and classifies the content pages of `domain`
//
// The domain doubles as the crawl seed. It is crawled like any other page
// (its links matter) and only removed during classification.
#[instrument(skip_all, fields(domain = %domain))]
pub async fn discover<F>(
    domain: &str,
    config: &DiscoveryConfig,
    fetcher: &F,
    policy: &UrlPolicy,
) -> Result<DiscoveryReport>
where
    F: PageFetcher + TextFetcher + ?Sized,
{
    let started = Instant::now();

    let (crawl, sitemap_urls) = tokio::join!(
        crawl_domain(domain, &config.crawl, fetcher, policy),
        resolve_sitemaps(domain, &config.sitemap, fetcher, policy),
    );
    let crawl = crawl.with_context(|| format!("crawl of {domain} failed"))?;

    let classified = merge_and_classify(&crawl.urls, &sitemap_urls, domain, policy);

    let report = DiscoveryReport {
        classified,
        crawled: crawl.urls,
        sitemap_urls,
        pages: crawl.pages,
        elapsed: started.elapsed(),
    };

    info!(
        crawled = report.crawled.len(),
        sitemap = report.sitemap_urls.len(),
        classified = report.classified.len(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "discovery finished"
    );

    Ok(report)
}
