//! Crawler module: the fetch, extract, store, enqueue cycle
//!
//! - HTTP fetching with a fixed timeout and client signature
//! - link extraction with site-scope filtering
//! - readable-content extraction with ordered selector fallbacks
//! - frontier management and overall crawl coordination

mod content;
mod coordinator;
mod fetcher;
mod frontier;
mod links;

pub use content::{extract_content, PageRecord};
pub use coordinator::{run_crawl, Crawler};
pub use fetcher::{build_http_client, fetch_page, USER_AGENT};
pub use frontier::Frontier;
pub use links::extract_links;
