// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr, filtered by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Load the word lists; a missing list stops us before any network work
// 4. Dispatch to the appropriate subcommand handler
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, CrawlArgs, SitemapArgs};
use site_scout::classify::{classify_url, ClassifiedUrl, PageType};
use site_scout::crawl::{crawl_domain, CrawlOptions};
use site_scout::discover::{discover, DiscoveryConfig};
use site_scout::fetch::HttpFetcher;
use site_scout::policy::{keyword_from_url, UrlPolicy, WordLists};
use site_scout::sitemap::{resolve_sitemaps, SitemapOptions};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so that --json output on stdout stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("site_scout=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let words = WordLists::load_dir(&cli.words_dir)
        .with_context(|| format!("cannot load word lists from {}", cli.words_dir.display()))?;
    let policy = UrlPolicy::new(words);

    match cli.command {
        Commands::Discover { domain, crawl, sitemap, json, output } => {
            handle_discover(&domain, &policy, crawl, sitemap, json, output).await
        }
        Commands::Crawl { domain, crawl } => handle_crawl(&domain, &policy, crawl).await,
        Commands::Sitemap { domain, sitemap } => handle_sitemap(&domain, &policy, sitemap).await,
        Commands::Classify { domain, urls } => handle_classify(&domain, &policy, &urls),
    }
}

fn crawl_options(args: &CrawlArgs) -> CrawlOptions {
    CrawlOptions {
        max_depth: args.max_depth,
        concurrency: args.concurrency,
    }
}

fn sitemap_options(args: &SitemapArgs) -> SitemapOptions {
    SitemapOptions {
        timeout: Duration::from_millis(args.sitemap_timeout_ms),
        ..SitemapOptions::default()
    }
}

// Handles the 'discover' subcommand
async fn handle_discover(
    domain: &str,
    policy: &UrlPolicy,
    crawl: CrawlArgs,
    sitemap: SitemapArgs,
    json: bool,
    output: Option<PathBuf>,
) -> Result<i32> {
    println!("🔍 Discovering pages on: {}", domain);
    println!("📊 Max crawl depth: {}", crawl.max_depth);

    let fetcher = HttpFetcher::new()?;
    let config = DiscoveryConfig {
        crawl: crawl_options(&crawl),
        sitemap: sitemap_options(&sitemap),
    };

    let report = discover(domain, &config, &fetcher, policy).await?;

    if let Some(path) = output {
        site_scout::output::save_output(&path, domain, &report.classified)?;
        println!("💾 Output saved to {}", path.display());
    }

    print_results(&report.classified, json)?;

    println!("⏱️  Completed in {} ms", report.elapsed.as_millis());
    println!("   🕸️  Crawled: {}", report.crawled.len());
    println!("   🗺️  From sitemaps: {}", report.sitemap_urls.len());
    println!("   📋 Unique URLs: {}", report.unique_candidates());
    println!("   ✅ Classified: {}", report.classified.len());

    Ok(0)
}

// Handles the 'crawl' subcommand
async fn handle_crawl(domain: &str, policy: &UrlPolicy, crawl: CrawlArgs) -> Result<i32> {
    println!("🔍 Crawling: {}", domain);

    let fetcher = HttpFetcher::new()?;
    let output = crawl_domain(domain, &crawl_options(&crawl), &fetcher, policy).await?;

    for url in &output.urls {
        let marker = if output.pages.contains_key(url) { "📄" } else { "❌" };
        println!("{} {}", marker, url);
    }
    println!("\n📄 Crawled {} URL(s), stored {} page(s)", output.urls.len(), output.pages.len());

    Ok(0)
}

// Handles the 'sitemap' subcommand
async fn handle_sitemap(domain: &str, policy: &UrlPolicy, sitemap: SitemapArgs) -> Result<i32> {
    println!("🗺️  Reading sitemaps for: {}", domain);

    let fetcher = HttpFetcher::new()?;
    let urls = resolve_sitemaps(domain, &sitemap_options(&sitemap), &fetcher, policy).await;

    for url in &urls {
        println!("{}", url);
    }
    println!("\n📋 {} URL(s) from sitemaps", urls.len());

    Ok(0)
}

// Handles the 'classify' subcommand
fn handle_classify(domain: &str, policy: &UrlPolicy, urls: &[String]) -> Result<i32> {
    println!("{:<60} {:<15} {:<20} {:<30}", "URL", "TYPE", "KEYWORD MATCH", "KEYWORD");
    println!("{}", "=".repeat(125));

    for url in urls {
        let canonical = policy.canonicalize(url);
        let page_type = classify_url(&canonical, domain, policy)
            .map(format_type)
            .unwrap_or_else(|| "dropped".to_string());
        let keyword = keyword_from_url(&canonical);
        let keyword_match = format!("{:?}", policy.keyword_match(&keyword));

        println!(
            "{:<60} {:<15} {:<20} {:<30}",
            truncate(&canonical),
            page_type,
            keyword_match,
            keyword
        );
    }

    Ok(0)
}

// Prints the results either as a table or JSON
fn print_results(results: &[ClassifiedUrl], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(results)?;
        println!("{}", json_output);
    } else {
        print_table(results);
    }
    Ok(())
}

fn print_table(results: &[ClassifiedUrl]) {
    println!("{:<60} {:<15}", "URL", "TYPE");
    println!("{}", "=".repeat(75));

    for result in results {
        println!("{:<60} {:<15}", truncate(&result.link), format_type(result.page_type));
    }

    println!();

    let landing = results
        .iter()
        .filter(|r| r.page_type == PageType::LandingPage)
        .count();

    println!("📊 Summary:");
    println!("   🏠 Landing pages: {}", landing);
    println!("   📝 Blog/articles: {}", results.len() - landing);
}

// Truncate URL if too long for display
fn truncate(url: &str) -> String {
    if url.chars().count() > 57 {
        format!("{}...", url.chars().take(57).collect::<String>())
    } else {
        url.to_string()
    }
}

fn format_type(page_type: PageType) -> String {
    match page_type {
        PageType::LandingPage => "🏠 LANDING".to_string(),
        PageType::Blog => "📝 BLOG".to_string(),
    }
}
