//! Output module: everything a crawl leaves on disk
//!
//! - self-contained HTML pages ([`PageStore`])
//! - the machine-readable `crawl-summary.json` ([`CrawlSummary`])
//! - the append-only `crawl.log` ([`CrawlLog`])
//! - the generated usage guide and the offline fallback pages

mod demo;
mod instructions;
mod log;
mod page_store;
mod summary;

pub use demo::write_demo_pages;
pub use instructions::{generate_instructions, INSTRUCTIONS_FILENAME};
pub use log::{CrawlLog, LOG_FILENAME};
pub use page_store::PageStore;
pub use summary::{write_summary, CrawlSummary, SUMMARY_FILENAME};
