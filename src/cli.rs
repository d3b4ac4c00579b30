// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Subcommands:
// - discover: crawl + sitemaps + classification (the full run)
// - crawl:    only the link-following path
// - sitemap:  only the robots.txt / sitemap path
// - classify: run the URL policy over URLs given on the command line
//
// Word lists are read from --words-dir, which applies to every subcommand.
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "site-scout",
    version = "0.1.0",
    about = "Discover and classify the content pages of a website",
    long_about = "site-scout crawls a website and reads its robots.txt sitemaps, then sorts \
                  every page it finds into landing pages and blog/article pages."
)]
pub struct Cli {
    /// Directory holding the word-list CSV files
    #[arg(long, global = true, default_value = "data/const")]
    pub words_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a domain, read its sitemaps and classify every page found
    ///
    /// Example: site-scout discover https://example.com --max-depth 2
    Discover {
        /// Domain root to scan (e.g., https://example.com)
        domain: String,

        #[command(flatten)]
        crawl: CrawlArgs,

        #[command(flatten)]
        sitemap: SitemapArgs,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// Also write the classified URLs to this JSON file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Only follow links from the domain root and list what was crawled
    Crawl {
        /// Domain root to crawl
        domain: String,

        #[command(flatten)]
        crawl: CrawlArgs,
    },

    /// Only resolve the sitemaps declared in robots.txt
    Sitemap {
        /// Domain whose robots.txt is read
        domain: String,

        #[command(flatten)]
        sitemap: SitemapArgs,
    },

    /// Classify URLs without fetching anything
    ///
    /// Example: site-scout classify --domain https://example.com https://example.com/blog/post
    Classify {
        /// Domain root the URLs belong to
        #[arg(long)]
        domain: String,

        /// URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CrawlArgs {
    /// Maximum crawl depth (the domain root is depth 0)
    #[arg(long, default_value_t = 2)]
    pub max_depth: usize,

    /// Maximum number of pages fetched at the same time
    #[arg(long, default_value_t = 16)]
    pub concurrency: usize,
}

#[derive(Args, Debug, Clone)]
pub struct SitemapArgs {
    /// Timeout for robots.txt and each sitemap request, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub sitemap_timeout_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_defaults() {
        let cli = Cli::parse_from(["site-scout", "discover", "https://example.com"]);
        assert_eq!(cli.words_dir, PathBuf::from("data/const"));
        match cli.command {
            Commands::Discover { domain, crawl, sitemap, json, output } => {
                assert_eq!(domain, "https://example.com");
                assert_eq!(crawl.max_depth, 2);
                assert_eq!(crawl.concurrency, 16);
                assert_eq!(sitemap.sitemap_timeout_ms, 5000);
                assert!(!json);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_classify_requires_urls() {
        let result = Cli::try_parse_from(["site-scout", "classify", "--domain", "https://x.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_words_dir_after_subcommand() {
        let cli = Cli::parse_from([
            "site-scout",
            "crawl",
            "https://example.com",
            "--max-depth",
            "0",
            "--words-dir",
            "/tmp/words",
        ]);
        assert_eq!(cli.words_dir, PathBuf::from("/tmp/words"));
        assert!(matches!(cli.command, Commands::Crawl { crawl: CrawlArgs { max_depth: 0, .. }, .. }));
    }
}
