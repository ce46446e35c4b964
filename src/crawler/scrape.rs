//! Single-page scrape: one fetch, full extraction, no link following

use crate::crawler::extractor::extract;
use crate::crawler::fetcher::{FetchOutcome, PageFetcher};
use crate::report::{PageReport, ScrapeReport, INVALID_URL};
use crate::url::normalize_url;

/// Scrapes exactly one URL
///
/// Callers are expected to have validated `url` as http(s) already. If it
/// still fails to normalize, the report carries only the original URL and
/// an "Invalid URL" error. There are no retries.
///
/// # Returns
///
/// | Outcome | Report |
/// |---------|--------|
/// | URL does not normalize | original url + "Invalid URL" |
/// | Fetch failed | url + error |
/// | Non-HTML response | url + status + "Skipped non-HTML response" |
/// | HTML response | every field |
pub async fn scrape(fetcher: &dyn PageFetcher, url: &str) -> ScrapeReport {
    let normalized = match normalize_url(url) {
        Ok(normalized) => normalized,
        Err(e) => {
            tracing::debug!("Refusing to scrape {}: {}", url, e);
            return PageReport::failed(url, INVALID_URL).into();
        }
    };

    tracing::debug!("Scraping {}", normalized);

    match fetcher.fetch(&normalized).await {
        FetchOutcome::Failed { error } => {
            tracing::warn!("Failed to fetch {}: {}", normalized, error);
            PageReport::failed(normalized, error).into()
        }

        FetchOutcome::NonHtml { status, .. } => PageReport::skipped(normalized, status).into(),

        FetchOutcome::Html { status, body, .. } => {
            let page = extract(&body, &normalized);
            ScrapeReport {
                page: PageReport {
                    url: normalized,
                    status: Some(status),
                    title: page.title,
                    description: page.description,
                    links: page.links,
                    error: None,
                },
                og_title: page.og_title,
                og_description: page.og_description,
                og_image: page.og_image,
                text_preview: page.text_preview,
                headings: page.headings,
            }
        }
    }
}
