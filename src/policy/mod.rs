// src/policy/mod.rs
// =============================================================================
// URL policy: the rules that decide what a discovered URL is.
//
// Everything here is synchronous and total. Any &str is valid input,
// including the empty string, and no function panics or returns an error.
// The only state is the immutable WordLists loaded at start-up, which the
// crawler, the sitemap resolver and the classifier all borrow.
//
// Submodules:
// - words: loading and validating the word lists
// - text: keyword helpers for consumers that build on the classified output
// =============================================================================

mod text;
mod words;

pub use text::{clean_text, keyword_from_text, keyword_from_url};
pub use words::{WordLists, REQUIRED_LISTS};

use serde::Serialize;
use url::Url;

/// Substrings that mark a URL as a blog or article listing.
pub const BLOG_URL_POSTFIXES: &[&str] = &[
    "/blog",
    "/blogs",
    "/articles",
    "/article",
    "/posts",
    "/post",
    "/resources",
    "/resource",
    "/categorys",
    "/category/blog",
    "/categorys/blog",
    "/category/articles",
    "/category/article",
    "/category/post",
    "/category/news",
    "/source/articles",
    "/source/article",
    "/news",
    "/stories",
    "/thoughts",
    "/journal",
    "/insights",
];

/// Host prefixes that mark a whole subdomain as a blog.
pub const BLOG_URL_PREFIXES: &[&str] = &[
    "blog.",
    "blogs.",
    "articles.",
    "article.",
    "posts.",
    "post.",
    "resources.",
    "resource.",
    "categorys.",
    "category.",
    "source.",
    "news.",
    "stories.",
    "thoughts.",
    "journal.",
];

/// Path markers for service / product pages.
pub const SERVICE_MARKERS: &[&str] = &[
    "/service/",
    "/feature/",
    "/solution/",
    "/tool/",
    "/platform/",
    "/product/",
    "/software/",
    "/services/",
    "/features/",
    "/solutions/",
    "/tools/",
    "/platforms/",
    "/products/",
    "/softwares/",
];

/// Result of looking a keyword up in the keyword vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatch {
    /// The keyword is itself a vocabulary entry
    Exact,
    /// The keyword contains a vocabulary entry
    Partial,
    /// No vocabulary entry is involved
    None,
}

// Normalizes a URL into the form used for every equality check
//
// Steps:
// 1. lower-case and drop all whitespace / control characters
// 2. cut at the first '?' or '#'
// 3. drop trailing slashes
//
// Cutting before trimming keeps this idempotent: "a/?q" becomes "a", not "a/".
//
// Example:
//   " HTTP://Example.com/Foo/?utm=x " -> "http://example.com/foo"
pub fn canonicalize(url: &str) -> String {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect();

    let end = compact
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(compact.len());

    compact[..end].trim_end_matches('/').to_string()
}

// Host part of a URL ("https://user@blog.x.com/a" -> "blog.x.com")
//
// Falls back to the text before the first '/' for input that does not parse,
// so scheme-less strings like "blog.x.com/a" still have a host.
fn host_of(url: &str) -> String {
    if let Some(host) = Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_owned)) {
        return host;
    }
    url.split('/').next().unwrap_or("").to_string()
}

/// Classification rules bound to one set of word lists.
#[derive(Debug, Clone)]
pub struct UrlPolicy {
    words: WordLists,
}

impl UrlPolicy {
    pub fn new(words: WordLists) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &WordLists {
        &self.words
    }

    pub fn canonicalize(&self, url: &str) -> String {
        canonicalize(url)
    }

    // True if the URL should not be considered at all
    //
    // Three independent reasons:
    // - it contains an excluded_full substring
    // - it is the domain root itself
    // - it has fewer than three '/' characters. "https://host" has two, so this
    //   rejects bare hosts and anything shallower. This is a blunt heuristic
    //   kept exactly as-is; it is not an attempt at path-depth semantics.
    pub fn is_excluded(&self, url: &str, domain: &str) -> bool {
        let url = canonicalize(url);

        self.words
            .excluded_full
            .iter()
            .any(|key| url.contains(key.as_str()))
            || url == canonicalize(domain)
            || url.matches('/').count() < 3
    }

    pub fn is_landing_page(&self, url: &str) -> bool {
        let url = url.to_lowercase();
        !self.has_excluded_suffix(&url)
            && !self
                .words
                .excluded_landing
                .iter()
                .any(|key| url.contains(key.as_str()))
    }

    // Blog if a blog marker is present (path postfix or blog-like subdomain)
    // and no blog exclusion or excluded suffix applies
    pub fn is_blog(&self, url: &str) -> bool {
        let url = url.to_lowercase();
        let host = host_of(&url);

        let marked = BLOG_URL_POSTFIXES.iter().any(|postfix| url.contains(postfix))
            || BLOG_URL_PREFIXES.iter().any(|prefix| host.starts_with(prefix));

        marked
            && !self
                .words
                .excluded_blog
                .iter()
                .any(|word| url.contains(word.as_str()))
            && !self.has_excluded_suffix(&url)
    }

    pub fn is_in_ignore_list(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.ignore_words.iter().any(|ignored| *ignored == word)
    }

    // Walks the vocabulary in list order; the first entry that matches at
    // all decides between Exact and Partial
    pub fn keyword_match(&self, keyword: &str) -> KeywordMatch {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return KeywordMatch::None;
        }

        self.words
            .keywords
            .iter()
            .find_map(|word| {
                if *word == keyword {
                    Some(KeywordMatch::Exact)
                } else if keyword.contains(word.as_str()) {
                    Some(KeywordMatch::Partial)
                } else {
                    None
                }
            })
            .unwrap_or(KeywordMatch::None)
    }

    pub fn contains_service(&self, url: &str) -> bool {
        let url = url.to_lowercase();
        SERVICE_MARKERS.iter().any(|marker| url.contains(marker))
    }

    fn has_excluded_suffix(&self, url: &str) -> bool {
        self.words
            .ends_with
            .iter()
            .any(|suffix| url.ends_with(suffix.as_str()))
    }
}
