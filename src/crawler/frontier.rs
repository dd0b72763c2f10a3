//! Frontier state: the visited set and the pending queue
//!
//! Owned exclusively by one [`Crawler`](super::Crawler) instance for the
//! duration of one crawl; never process-global, so independent crawlers can
//! coexist (the tests build several).

use std::collections::{HashSet, VecDeque};
use url::Url;

/// FIFO frontier with visited-state tracking
///
/// Discipline: a URL enters the queue only if it has not been visited, and
/// is marked visited at the moment it is dequeued for processing, before the
/// fetch happens. A URL may sit in the queue twice (discovered from two
/// pages before either was processed); the visited gate on dequeue discards
/// the second copy.
#[derive(Debug, Default)]
pub struct Frontier {
    visited: HashSet<Url>,
    queue: VecDeque<Url>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the initial section entry points
    pub fn seed<I: IntoIterator<Item = Url>>(&mut self, urls: I) {
        for url in urls {
            self.enqueue(url);
        }
    }

    /// Adds a URL to the back of the queue unless it was already visited
    pub fn enqueue(&mut self, url: Url) {
        if !self.visited.contains(&url) {
            self.queue.push_back(url);
        }
    }

    /// Pops the next genuinely new URL, marking it visited
    ///
    /// Queue entries that were visited since they were enqueued are
    /// discarded on the way. Returns `None` once the queue is exhausted.
    pub fn pop_next(&mut self) -> Option<Url> {
        while let Some(url) = self.queue.pop_front() {
            if self.visited.insert(url.clone()) {
                return Some(url);
            }
        }
        None
    }

    pub fn was_visited(&self, url: &Url) -> bool {
        self.visited.contains(url)
    }

    /// Number of URLs dequeued for processing so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(path: &str) -> Url {
        Url::parse(&format!("https://example.dev{}", path)).unwrap()
    }

    #[test]
    fn test_pop_marks_visited() {
        let mut frontier = Frontier::new();
        frontier.enqueue(url("/a"));

        let popped = frontier.pop_next().unwrap();
        assert_eq!(popped, url("/a"));
        assert!(frontier.was_visited(&url("/a")));
        assert_eq!(frontier.visited_count(), 1);
    }

    #[test]
    fn test_each_url_popped_at_most_once() {
        let mut frontier = Frontier::new();
        // Duplicate queue entries are allowed while unvisited
        frontier.enqueue(url("/a"));
        frontier.enqueue(url("/a"));
        frontier.enqueue(url("/b"));

        let mut popped = Vec::new();
        while let Some(u) = frontier.pop_next() {
            popped.push(u);
        }

        assert_eq!(popped, vec![url("/a"), url("/b")]);
        assert_eq!(frontier.visited_count(), popped.len());
    }

    #[test]
    fn test_enqueue_after_visit_is_ignored() {
        let mut frontier = Frontier::new();
        frontier.enqueue(url("/a"));
        frontier.pop_next().unwrap();

        frontier.enqueue(url("/a"));
        assert!(frontier.is_exhausted());
        assert!(frontier.pop_next().is_none());
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.seed([url("/a"), url("/b"), url("/c")]);

        assert_eq!(frontier.pop_next(), Some(url("/a")));
        assert_eq!(frontier.pop_next(), Some(url("/b")));
        assert_eq!(frontier.pop_next(), Some(url("/c")));
        assert_eq!(frontier.pop_next(), None);
    }

    #[test]
    fn test_independent_instances_share_nothing() {
        let mut a = Frontier::new();
        let mut b = Frontier::new();
        a.enqueue(url("/a"));
        a.pop_next();

        b.enqueue(url("/a"));
        assert_eq!(b.pop_next(), Some(url("/a")));
    }
}
