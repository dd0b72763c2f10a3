//! Crawl loop orchestration
//!
//! Owns the frontier, the HTTP client, the page store, and the crawl log for
//! the duration of one run. Exactly one page is in flight at any time: each
//! URL goes through fetch, extract, save, and link discovery sequentially,
//! followed by a mandatory cooldown, before the next URL starts. That is the
//! whole concurrency contract.

use crate::config::Config;
use crate::crawler::content::extract_content;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::frontier::Frontier;
use crate::crawler::links::extract_links;
use crate::output::{write_summary, CrawlLog, CrawlSummary, PageStore};
use crate::url::{canonical_host, normalize_url};
use crate::Result;
use reqwest::Client;
use scraper::Html;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Breadth-first crawler for one documentation site
///
/// All crawl state is instance-scoped; independent crawlers never share
/// anything, so tests can run several side by side.
pub struct Crawler {
    config: Config,
    base_url: Url,
    host: String,
    client: Client,
    frontier: Frontier,
    store: PageStore,
    log: CrawlLog,
}

impl Crawler {
    /// Builds a crawler from a validated configuration
    ///
    /// Creates the output directory and opens the crawl log immediately so
    /// that filesystem problems surface before the first request.
    pub fn new(config: Config) -> Result<Self> {
        crate::config::validate(&config)?;

        let base_url = Url::parse(&config.site.base_url)?;
        let host = canonical_host(&base_url)?;
        let client = build_http_client()?;

        let output_dir = Path::new(&config.output.output_dir);
        let store = PageStore::new(output_dir)?;
        let log = CrawlLog::open(output_dir)?;

        Ok(Self {
            config,
            base_url,
            host,
            client,
            frontier: Frontier::new(),
            store,
            log,
        })
    }

    /// Runs the crawl to completion and returns the summary
    ///
    /// Seeds the frontier with the site root and the configured section
    /// entry points, then drives the fetch, extract, store, enqueue cycle
    /// until the page budget is reached or the frontier runs dry. Fetch
    /// failures are logged and skipped; filesystem failures abort the run.
    pub async fn start(&mut self) -> Result<CrawlSummary> {
        self.seed_frontier();

        tracing::info!(
            "Starting crawl of {} (budget {} pages, {}ms delay)",
            self.base_url,
            self.config.crawler.max_pages,
            self.config.crawler.delay_ms
        );
        self.log
            .record(&format!("crawl started for {}", self.base_url))?;

        let mut attempted = 0usize;
        let mut saved = 0usize;
        let mut pages = Vec::new();

        loop {
            if self.frontier.visited_count() >= self.config.crawler.max_pages {
                tracing::info!("Page budget reached");
                break;
            }

            let url = match self.frontier.pop_next() {
                Some(url) => url,
                None => {
                    tracing::info!("Frontier exhausted");
                    break;
                }
            };

            attempted += 1;
            pages.push(url.to_string());

            if self.process_url(&url).await? {
                saved += 1;
            }

            if attempted % 10 == 0 {
                tracing::info!(
                    "Progress: {} processed, {} saved, {} queued",
                    attempted,
                    saved,
                    self.frontier.queue_len()
                );
            }

            // Mandatory cooldown after every processed URL, success or
            // failure alike; this bounds the request rate.
            tokio::time::sleep(Duration::from_millis(self.config.crawler.delay_ms)).await;
        }

        let summary = CrawlSummary::new(saved, attempted, pages);
        write_summary(&summary, self.store.output_dir())?;
        self.log.record(&format!(
            "crawl completed: {} of {} pages saved",
            summary.total_pages, summary.attempted_pages
        ))?;
        tracing::info!(
            "Crawl completed: {} of {} pages saved",
            summary.total_pages,
            summary.attempted_pages
        );

        Ok(summary)
    }

    /// Fetches, extracts, saves, and discovers links for one URL
    ///
    /// Returns whether the page was saved. A failed fetch is recorded and
    /// skipped — no retry, no links, no file. Save failures propagate.
    async fn process_url(&mut self, url: &Url) -> Result<bool> {
        tracing::debug!("Fetching {}", url);

        let body = match fetch_page(&self.client, url).await {
            Ok(body) => body,
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Fetch failed for {}: {}", url, e);
                self.log.record(&format!("fetch failed for {}: {}", url, e))?;
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        // Link discovery runs on the unpruned document; navigation regions
        // are stripped for content extraction but their links still count.
        let links = {
            let document = Html::parse_document(&body);
            extract_links(&document, url, &self.host)
        };

        let record = extract_content(&body, url);
        let path = self.store.save(&record)?;
        self.log
            .record(&format!("saved {} -> {}", url, path.display()))?;
        tracing::debug!("Saved {} as {}", url, path.display());

        for link in links {
            if !self.frontier.was_visited(&link) {
                self.frontier.enqueue(link);
            }
        }

        Ok(true)
    }

    /// Seeds the frontier with the site root and the section entry points
    fn seed_frontier(&mut self) {
        let mut seeds = vec![self.base_url.clone()];
        for section in &self.config.site.sections {
            match normalize_url(section, &self.base_url) {
                Ok(url) => seeds.push(url),
                Err(e) => tracing::warn!("Skipping malformed section '{}': {}", section, e),
            }
        }
        self.frontier.seed(seeds);
    }
}

/// Convenience wrapper: builds a crawler and runs it to completion
pub async fn run_crawl(config: Config) -> Result<CrawlSummary> {
    let mut crawler = Crawler::new(config)?;
    crawler.start().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::tempdir;

    fn test_config(output_dir: &str) -> Config {
        let mut config = Config::default();
        config.output.output_dir = output_dir.to_string();
        config.crawler.delay_ms = 0;
        config
    }

    #[test]
    fn test_crawler_construction_creates_output_dir() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("mirror");
        let config = test_config(out.to_str().unwrap());

        let _crawler = Crawler::new(config).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn test_construction_rejects_invalid_config() {
        let dir = tempdir().unwrap();
        let mut config = test_config(dir.path().to_str().unwrap());
        config.crawler.max_pages = 0;
        assert!(Crawler::new(config).is_err());
    }

    #[test]
    fn test_independent_crawlers_coexist() {
        let dir_a = tempdir().unwrap();
        let dir_b = tempdir().unwrap();

        let a = Crawler::new(test_config(dir_a.path().to_str().unwrap())).unwrap();
        let b = Crawler::new(test_config(dir_b.path().to_str().unwrap())).unwrap();

        assert_ne!(a.store.output_dir(), b.store.output_dir());
    }
}
