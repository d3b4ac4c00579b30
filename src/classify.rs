// src/classify.rs
// =============================================================================
// Merges crawl and sitemap results and labels each URL.
//
// For every distinct canonical URL:
//   domain root         -> dropped
//   is_landing_page()   -> landing_page
//   else is_blog()      -> blog
//   else                -> dropped
//
// If the same URL ever arrives with both labels, landing_page wins no matter
// which one arrived first. Output keeps first-occurrence order.
// =============================================================================

use crate::policy::{canonicalize, UrlPolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Semantic category of a discovered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    /// Primary marketing / product page
    LandingPage,
    /// Blog post or article
    Blog,
}

/// One entry of the final output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedUrl {
    pub link: String,
    #[serde(rename = "type")]
    pub page_type: PageType,
}

// Ordered, deduplicating collection that applies the landing_page tie-break
#[derive(Debug, Default)]
pub struct ClassifiedSet {
    entries: Vec<ClassifiedUrl>,
    index: HashMap<String, usize>,
}

impl ClassifiedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, link: String, page_type: PageType) {
        match self.index.get(&link) {
            Some(&pos) => {
                if page_type == PageType::LandingPage {
                    self.entries[pos].page_type = PageType::LandingPage;
                }
            }
            None => {
                self.index.insert(link.clone(), self.entries.len());
                self.entries.push(ClassifiedUrl { link, page_type });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<ClassifiedUrl> {
        self.entries
    }
}

// Label for one URL, or None if it belongs in neither category
pub fn classify_url(url: &str, domain: &str, policy: &UrlPolicy) -> Option<PageType> {
    let url = canonicalize(url);
    if url == canonicalize(domain) {
        None
    } else if policy.is_landing_page(&url) {
        Some(PageType::LandingPage)
    } else if policy.is_blog(&url) {
        Some(PageType::Blog)
    } else {
        None
    }
}

// Union of both discovery paths, classified
//
// Parameters:
//   crawled: URLs from the domain crawler
//   sitemap: URLs from the sitemap resolver
//   domain: the domain root, which never appears in the output
pub fn merge_and_classify(
    crawled: &[String],
    sitemap: &[String],
    domain: &str,
    policy: &UrlPolicy,
) -> Vec<ClassifiedUrl> {
    let mut set = ClassifiedSet::new();

    for url in crawled.iter().chain(sitemap) {
        if let Some(page_type) = classify_url(url, domain, policy) {
            set.insert(canonicalize(url), page_type);
        }
    }

    set.into_vec()
}

pub fn filter_blog_urls(urls: &[String], policy: &UrlPolicy) -> Vec<String> {
    urls.iter().filter(|url| policy.is_blog(url)).cloned().collect()
}

pub fn filter_landing_page_urls(urls: &[String], policy: &UrlPolicy) -> Vec<String> {
    urls.iter()
        .filter(|url| policy.is_landing_page(url))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::tests::test_policy;

    fn owned(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_classifies_and_drops_root() {
        let crawled = owned(&[
            "https://example.com",
            "https://example.com/blog/my-post",
            "https://example.com/about/team/leadership",
        ]);

        let result = merge_and_classify(&crawled, &[], "https://example.com", &test_policy());

        assert_eq!(
            result,
            vec![
                ClassifiedUrl {
                    link: "https://example.com/blog/my-post".to_string(),
                    page_type: PageType::Blog,
                },
                ClassifiedUrl {
                    link: "https://example.com/about/team/leadership".to_string(),
                    page_type: PageType::LandingPage,
                },
            ]
        );
    }

    #[test]
    fn test_merge_dedupes_across_sources() {
        let crawled = owned(&["https://example.com/pricing", "https://example.com/blog/a-post"]);
        let sitemap = owned(&[
            "https://example.com/Pricing/",
            "https://example.com/blog/a-post?utm=1",
            "https://example.com/docs/guide",
        ]);

        let result = merge_and_classify(&crawled, &sitemap, "https://example.com", &test_policy());
        let links: Vec<_> = result.iter().map(|c| c.link.as_str()).collect();

        assert_eq!(
            links,
            vec![
                "https://example.com/pricing",
                "https://example.com/blog/a-post",
                "https://example.com/docs/guide",
            ]
        );
    }

    #[test]
    fn test_url_matching_both_rules_is_landing_page() {
        let policy = test_policy();
        // "/insights" is a blog postfix but not excluded from landing pages
        let url = "https://example.com/insights/annual-report";
        assert!(policy.is_landing_page(url));
        assert!(policy.is_blog(url));

        let result = merge_and_classify(&owned(&[url]), &[], "https://example.com", &policy);
        assert_eq!(result[0].page_type, PageType::LandingPage);
    }

    #[test]
    fn test_landing_page_wins_regardless_of_arrival_order() {
        let mut set = ClassifiedSet::new();
        set.insert("https://example.com/x".to_string(), PageType::Blog);
        set.insert("https://example.com/x".to_string(), PageType::LandingPage);
        set.insert("https://example.com/x".to_string(), PageType::Blog);

        let entries = set.into_vec();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].page_type, PageType::LandingPage);
    }

    #[test]
    fn test_unclassifiable_urls_are_dropped() {
        let policy = test_policy();
        // excluded from landing pages, and the blog rule rejects author pages
        let url = "https://example.com/blog/author/jane";
        assert_eq!(classify_url(url, "https://example.com", &policy), None);
        assert_eq!(classify_url("https://example.com/report.pdf", "https://example.com", &policy), None);
    }

    #[test]
    fn test_serializes_with_type_field() {
        let entry = ClassifiedUrl {
            link: "https://example.com/blog/my-post".to_string(),
            page_type: PageType::Blog,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"link": "https://example.com/blog/my-post", "type": "blog"})
        );
    }

    #[test]
    fn test_filter_helpers() {
        let policy = test_policy();
        let urls = owned(&["https://example.com/blog/one", "https://example.com/pricing"]);
        assert_eq!(filter_blog_urls(&urls, &policy), vec!["https://example.com/blog/one"]);
        assert_eq!(
            filter_landing_page_urls(&urls, &policy),
            vec!["https://example.com/pricing"]
        );
    }
}
