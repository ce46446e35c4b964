//! Crawler coordinator - breadth-first crawl orchestration
//!
//! The crawl is an explicit state object (frontier, visited set, accumulated
//! reports) advanced one page at a time:
//! - [`Coordinator::next_entry`] dequeues the next unvisited URL
//! - [`Coordinator::record`] turns a fetch outcome into a report and expands
//!   successors, without doing any I/O
//! - [`Coordinator::run`] drives the two with a [`PageFetcher`], one fetch at
//!   a time, until the frontier is empty or the page budget is spent

use crate::crawler::extractor::extract;
use crate::crawler::fetcher::{FetchOutcome, PageFetcher};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::options::CrawlOptions;
use crate::report::{CrawlResult, PageReport};
use crate::url::is_same_domain;
use crate::UrlError;
use tokio_util::sync::CancellationToken;
use url::Url;

/// State of one crawl run
#[derive(Debug)]
pub struct Coordinator {
    start_url: String,
    origin: Url,
    options: CrawlOptions,
    frontier: Frontier,
    reports: Vec<PageReport>,
}

impl Coordinator {
    /// Creates a crawl seeded with `start_url` at depth 0
    ///
    /// Out-of-range limits are clamped to the nearest bound.
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(UrlError)` - `start_url` is not an absolute URL
    pub fn new(start_url: &str, options: CrawlOptions) -> Result<Self, UrlError> {
        let origin = Url::parse(start_url.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

        Ok(Self {
            start_url: start_url.to_string(),
            frontier: Frontier::seeded(origin.as_str()),
            origin,
            options: options.clamped(),
            reports: Vec::new(),
        })
    }

    pub fn options(&self) -> &CrawlOptions {
        &self.options
    }

    /// Reports accumulated so far, in visitation order
    pub fn reports(&self) -> &[PageReport] {
        &self.reports
    }

    /// Returns true once no further page will be visited
    pub fn is_finished(&self) -> bool {
        self.frontier.is_empty() || self.reports.len() >= self.options.max_pages
    }

    /// Dequeues the next URL to fetch
    ///
    /// Entries that fail to normalize or were already visited are skipped.
    /// The returned URL is normalized and already marked visited, so the
    /// dedup decision is settled even if its fetch later fails.
    pub fn next_entry(&mut self) -> Option<FrontierEntry> {
        if self.reports.len() >= self.options.max_pages {
            return None;
        }

        self.frontier.pop_unvisited()
    }

    /// Records the outcome of fetching `entry`
    ///
    /// # Outcome Handling
    ///
    /// | Outcome | Report | Successors |
    /// |---------|--------|------------|
    /// | Failed | url + error | none |
    /// | NonHtml | url + status + "Skipped non-HTML response" | none |
    /// | Html | url + status + title + description + links | links within depth and domain limits |
    pub fn record(&mut self, entry: &FrontierEntry, outcome: FetchOutcome) -> &PageReport {
        let report = match outcome {
            FetchOutcome::Failed { error } => {
                tracing::warn!("Failed to fetch {}: {}", entry.url, error);
                PageReport::failed(entry.url.as_str(), error)
            }

            FetchOutcome::NonHtml {
                status,
                content_type,
            } => {
                tracing::debug!("Not parsing {} ({})", entry.url, content_type);
                PageReport::skipped(entry.url.as_str(), status)
            }

            FetchOutcome::Html { status, body, .. } => {
                let page = extract(&body, &entry.url);
                let report = PageReport {
                    url: entry.url.clone(),
                    status: Some(status),
                    title: page.title,
                    description: page.description,
                    links: page.links,
                    error: None,
                };
                self.expand(entry, &report.links);
                report
            }
        };

        self.reports.push(report);
        &self.reports[self.reports.len() - 1]
    }

    /// Enqueues successors of an HTML page
    fn expand(&mut self, entry: &FrontierEntry, links: &[String]) {
        let depth = entry.depth + 1;
        if depth > self.options.max_depth {
            return;
        }

        for link in links {
            if self.options.same_domain && !is_same_domain(link, &self.origin) {
                tracing::trace!("Skipping off-domain link {}", link);
                continue;
            }

            if self.frontier.is_visited(link) {
                continue;
            }

            self.frontier.push(FrontierEntry::new(link.as_str(), depth));
        }
    }

    /// Runs the crawl loop until it finishes or `cancel` fires
    ///
    /// Exactly one fetch is in flight at any time. Cancellation drops the
    /// in-flight fetch and keeps the reports collected so far.
    pub async fn run(&mut self, fetcher: &dyn PageFetcher, cancel: &CancellationToken) {
        tracing::info!(
            "Starting crawl of {} (max pages {}, max depth {}, same domain {})",
            self.start_url,
            self.options.max_pages,
            self.options.max_depth,
            self.options.same_domain
        );

        let start_time = std::time::Instant::now();

        while let Some(entry) = self.next_entry() {
            tracing::debug!("Processing URL: {} (depth {})", entry.url, entry.depth);

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::info!(
                        "Crawl of {} cancelled after {} pages",
                        self.start_url,
                        self.reports.len()
                    );
                    return;
                }
                outcome = fetcher.fetch(&entry.url) => outcome,
            };

            self.record(&entry, outcome);
        }

        tracing::info!(
            "Crawl of {} completed: {} pages in {:?}, {} left in frontier",
            self.start_url,
            self.reports.len(),
            start_time.elapsed(),
            self.frontier.len()
        );
    }

    /// Consumes the coordinator into the final result
    pub fn into_result(self) -> CrawlResult {
        CrawlResult {
            start_url: self.start_url,
            max_pages: self.options.max_pages,
            max_depth: self.options.max_depth,
            same_domain: self.options.same_domain,
            pages: self.reports,
        }
    }
}

/// Runs a complete breadth-first crawl
///
/// Per-page failures are recorded in the returned pages; the only error is an
/// unparseable `start_url`.
///
/// # Example
///
/// ```no_run
/// use linkscout::config::FetcherConfig;
/// use linkscout::crawler::{crawl, CrawlOptions, HttpFetcher};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpFetcher::new(FetcherConfig::default())?;
/// let options = CrawlOptions::new(5, 1, true);
/// let result = crawl(&fetcher, "https://example.com", options, &CancellationToken::new()).await?;
/// println!("Visited {} pages", result.pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(
    fetcher: &dyn PageFetcher,
    start_url: &str,
    options: CrawlOptions,
    cancel: &CancellationToken,
) -> Result<CrawlResult, UrlError> {
    let mut coordinator = Coordinator::new(start_url, options)?;
    coordinator.run(fetcher, cancel).await;
    Ok(coordinator.into_result())
}
