//! Linkscout main entry point
//!
//! Command-line interface for serving the crawl API or running a single
//! scrape or crawl and printing its JSON report.

use anyhow::Context;
use clap::{Parser, Subcommand};
use linkscout::config::{load_config_with_hash, parse_bind_address, Config};
use linkscout::crawler::{crawl, scrape, CrawlRequest, HttpFetcher};
use linkscout::url::validate_http_url;
use serde::Serialize;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Linkscout: a bounded web crawler and page scraper
///
/// Linkscout fetches pages, extracts titles, descriptions, headings and links,
/// and follows links breadth-first within page-count, depth and domain limits.
#[derive(Parser, Debug)]
#[command(name = "linkscout")]
#[command(version)]
#[command(about = "A bounded web crawler and page scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API
    Serve {
        /// Address to listen on, overriding the config file
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Scrape a single page and print its report
    Scrape {
        /// Page to scrape
        url: String,
    },

    /// Crawl breadth-first from a start URL and print the result
    Crawl {
        /// Start URL
        url: String,

        /// Maximum number of pages to visit (clamped to 1..=20)
        #[arg(long, allow_hyphen_values = true)]
        max_pages: Option<i64>,

        /// Maximum link depth to follow (clamped to 0..=3)
        #[arg(long, allow_hyphen_values = true)]
        max_depth: Option<i64>,

        /// Follow links to other hosts
        #[arg(long)]
        cross_domain: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load(cli.config.as_ref())?;

    match cli.command {
        Command::Serve { bind } => handle_serve(config, bind).await,
        Command::Scrape { url } => handle_scrape(config, &url).await,
        Command::Crawl {
            url,
            max_pages,
            max_depth,
            cross_domain,
        } => {
            let request = CrawlRequest {
                url,
                max_pages,
                max_depth,
                same_domain: Some(!cross_domain),
            };
            handle_crawl(config, request).await
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("linkscout=info,warn")),
            1 => EnvFilter::new("linkscout=debug,tower_http=debug,info"),
            2 => EnvFilter::new("linkscout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Reports go to stdout, so logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, or the built-in defaults when none is given
fn load(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Handles `serve`: runs the HTTP API until Ctrl-C
async fn handle_serve(mut config: Config, bind: Option<String>) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        parse_bind_address(&bind).context("Invalid --bind address")?;
        config.server.bind_address = bind;
    }

    linkscout::server::serve(&config)
        .await
        .context("Server failed")
}

/// Handles `scrape`: fetches one page and prints its report
async fn handle_scrape(config: Config, url: &str) -> anyhow::Result<()> {
    let url = validate_http_url(url).with_context(|| format!("Cannot scrape {}", url))?;
    let fetcher = HttpFetcher::new(config.fetcher).context("Failed to build HTTP client")?;

    let report = scrape(&fetcher, url.as_str()).await;
    if let Some(error) = &report.page.error {
        tracing::warn!("Scrape of {} reported: {}", report.page.url, error);
    }

    print_json(&report)
}

/// Handles `crawl`: runs a bounded crawl, stopping early on Ctrl-C
async fn handle_crawl(config: Config, request: CrawlRequest) -> anyhow::Result<()> {
    validate_http_url(&request.url).with_context(|| format!("Cannot crawl {}", request.url))?;
    let options = request.options(&config.crawl);
    let fetcher = HttpFetcher::new(config.fetcher).context("Failed to build HTTP client")?;

    tracing::info!(
        "Crawling {} (max pages: {}, max depth: {}, same domain: {})",
        request.url,
        options.max_pages,
        options.max_depth,
        options.same_domain
    );

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, finishing with the pages visited so far");
            interrupt.cancel();
        }
    });

    let result = crawl(&fetcher, request.url.trim(), options, &cancel).await?;
    tracing::info!("Crawl completed: {} pages", result.pages.len());

    print_json(&result)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}
