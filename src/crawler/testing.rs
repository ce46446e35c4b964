//! In-memory fetcher for exercising crawls without network I/O

use crate::crawler::fetcher::{FetchOutcome, PageFetcher};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Serves canned outcomes keyed by exact URL and records every request
#[derive(Debug, Default)]
pub(crate) struct FakeFetcher {
    responses: HashMap<String, FetchOutcome>,
    hanging: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serves `body` as a 200 text/html response
    pub(crate) fn html(self, url: &str, body: &str) -> Self {
        self.outcome(
            url,
            FetchOutcome::Html {
                status: 200,
                content_type: "text/html; charset=utf-8".to_string(),
                body: body.to_string(),
            },
        )
    }

    pub(crate) fn outcome(mut self, url: &str, outcome: FetchOutcome) -> Self {
        self.responses.insert(url.to_string(), outcome);
        self
    }

    /// Makes fetches of `url` never complete
    pub(crate) fn hang(mut self, url: &str) -> Self {
        self.hanging.insert(url.to_string());
        self
    }

    /// URLs fetched so far, in order
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        if self.hanging.contains(url) {
            std::future::pending::<()>().await;
        }

        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| FetchOutcome::failed(format!("Connection failed: {}", url)))
    }
}
