//! Crawl frontier and visited set
//!
//! The frontier is a strict FIFO queue of `(url, depth)` entries, which is what
//! makes the crawl breadth-first. The visited set holds normalized URLs and
//! only ever grows during a crawl; both are owned by a single crawl run.

use crate::url::normalize_url;
use std::collections::{HashSet, VecDeque};

/// A URL waiting to be visited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// The URL as discovered (normalized again when dequeued)
    pub url: String,

    /// Link distance from the start URL
    pub depth: usize,
}

impl FrontierEntry {
    pub fn new(url: impl Into<String>, depth: usize) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

/// Pending queue plus the set of URLs already settled
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier seeded with a single URL at depth 0
    pub fn seeded(start_url: &str) -> Self {
        let mut frontier = Self::default();
        frontier.push(FrontierEntry::new(start_url, 0));
        frontier
    }

    /// Adds an entry to the back of the queue
    pub fn push(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
    }

    /// Dequeues the next entry that has not been visited yet
    ///
    /// Entries whose URL fails to normalize or is already visited are
    /// discarded. The returned entry carries the normalized URL, which is
    /// marked visited before returning.
    pub fn pop_unvisited(&mut self) -> Option<FrontierEntry> {
        while let Some(entry) = self.queue.pop_front() {
            let normalized = match normalize_url(&entry.url) {
                Ok(normalized) => normalized,
                Err(e) => {
                    tracing::debug!("Dropping unnormalizable URL {}: {}", entry.url, e);
                    continue;
                }
            };

            if !self.visited.insert(normalized.clone()) {
                tracing::trace!("Already visited {}", normalized);
                continue;
            }

            return Some(FrontierEntry::new(normalized, entry.depth));
        }

        None
    }

    /// Returns true if the normalized URL has been dequeued before
    pub fn is_visited(&self, normalized_url: &str) -> bool {
        self.visited.contains(normalized_url)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of pending entries (duplicates included)
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
