//! Crawl frontier: the to-visit queue plus its deduplication set
//!
//! The frontier owns the FIFO queue of URLs still to fetch and the seen-set
//! of every URL ever queued, so revisit-prevention and budget-bounded
//! termination are testable without a network. URLs are keyed by their
//! fragment-stripped form; a URL handed out once is never handed out again,
//! even if rediscovered on a later page.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// Frontier state for one bounded breadth-first crawl
#[derive(Debug)]
pub struct Frontier {
    /// URLs queued for fetching, in discovery order
    queue: VecDeque<Url>,

    /// Every URL ever queued, by fragment-stripped string form
    seen: HashSet<String>,

    /// Count of pages successfully fetched so far
    fetched: usize,

    /// Maximum number of pages to fetch
    budget: usize,
}

impl Frontier {
    /// Creates a frontier seeded with the start URL
    pub fn new(seed: Url, budget: usize) -> Self {
        let mut frontier = Self {
            queue: VecDeque::new(),
            seen: HashSet::new(),
            fetched: 0,
            budget,
        };
        frontier.enqueue(seed);
        frontier
    }

    /// Hands out the next URL to fetch
    ///
    /// Returns `None` once the queue is empty or the budget of successfully
    /// fetched pages is spent. The seen-set guarantees every URL is handed
    /// out at most once.
    pub fn next(&mut self) -> Option<Url> {
        if self.fetched >= self.budget {
            return None;
        }
        self.queue.pop_front()
    }

    /// Queues a discovered URL unless it was already seen
    ///
    /// The fragment is stripped before deduplication so `/page` and
    /// `/page#section` count as the same URL. Returns whether the URL was
    /// actually queued.
    pub fn enqueue(&mut self, url: Url) -> bool {
        let mut url = url;
        url.set_fragment(None);
        if self.seen.insert(url.to_string()) {
            self.queue.push_back(url);
            true
        } else {
            false
        }
    }

    /// Records that a handed-out URL was fetched successfully
    pub fn record_fetched(&mut self) {
        self.fetched += 1;
    }

    /// Whether the crawl is over: queue drained or budget spent
    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty() || self.fetched >= self.budget
    }

    /// Number of pages successfully fetched so far
    pub fn fetched(&self) -> usize {
        self.fetched
    }

    /// Number of URLs still queued
    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_seed_is_first_out() {
        let mut frontier = Frontier::new(url("https://example.com/"), 10);
        assert_eq!(frontier.next().unwrap().as_str(), "https://example.com/");
        assert!(frontier.next().is_none());
    }

    #[test]
    fn test_enqueue_deduplicates() {
        let mut frontier = Frontier::new(url("https://example.com/"), 10);
        assert!(frontier.enqueue(url("https://example.com/a")));
        assert!(!frontier.enqueue(url("https://example.com/a")));
        assert_eq!(frontier.queued(), 2);
    }

    #[test]
    fn test_fragment_stripped_before_dedup() {
        let mut frontier = Frontier::new(url("https://example.com/"), 10);
        assert!(frontier.enqueue(url("https://example.com/a#top")));
        assert!(!frontier.enqueue(url("https://example.com/a#bottom")));
        assert!(!frontier.enqueue(url("https://example.com/a")));
    }

    #[test]
    fn test_seed_never_refetched_when_rediscovered() {
        let mut frontier = Frontier::new(url("https://example.com/"), 10);
        let seed = frontier.next().unwrap();
        frontier.record_fetched();
        assert!(!frontier.enqueue(seed));
        assert!(frontier.next().is_none());
    }

    #[test]
    fn test_budget_bounds_handout() {
        let mut frontier = Frontier::new(url("https://example.com/"), 2);
        frontier.enqueue(url("https://example.com/a"));
        frontier.enqueue(url("https://example.com/b"));

        for _ in 0..2 {
            assert!(frontier.next().is_some());
            frontier.record_fetched();
        }
        // Budget of 2 spent; /b stays queued but is never handed out.
        assert!(frontier.next().is_none());
        assert!(frontier.is_exhausted());
        assert_eq!(frontier.queued(), 1);
    }

    #[test]
    fn test_failed_fetch_does_not_consume_budget() {
        let mut frontier = Frontier::new(url("https://example.com/"), 1);
        frontier.enqueue(url("https://example.com/a"));

        // The seed fetch fails: no record_fetched call.
        assert!(frontier.next().is_some());
        assert_eq!(frontier.fetched(), 0);

        // The budget still allows the next queued URL.
        assert!(frontier.next().is_some());
        frontier.record_fetched();
        assert!(frontier.next().is_none());
    }

    #[test]
    fn test_terminates_on_finite_graph() {
        // Every page links to every other page; the seen-set strictly grows
        // so the frontier must drain.
        let pages: Vec<Url> = (0..5)
            .map(|i| url(&format!("https://example.com/p{}", i)))
            .collect();
        let mut frontier = Frontier::new(pages[0].clone(), 100);
        let mut visited = 0;
        while let Some(_page) = frontier.next() {
            frontier.record_fetched();
            visited += 1;
            for link in &pages {
                frontier.enqueue(link.clone());
            }
            assert!(visited <= pages.len(), "frontier failed to deduplicate");
        }
        assert_eq!(visited, pages.len());
        assert!(frontier.is_exhausted());
    }
}
