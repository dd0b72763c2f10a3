//! Crawl summary: the terminal aggregate report of one crawl invocation

use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Filename of the summary written at the output-dir root
pub const SUMMARY_FILENAME: &str = "crawl-summary.json";

/// Aggregate report built once at loop termination, immutable thereafter.
/// The entry point and the instructions generator both consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlSummary {
    /// Count of successful saves
    pub total_pages: usize,

    /// Count of dequeued URLs
    pub attempted_pages: usize,

    pub completed_at: DateTime<Utc>,

    /// Visited URLs in processing order
    pub pages: Vec<String>,

    pub successful_crawl: bool,
}

impl CrawlSummary {
    pub fn new(total_pages: usize, attempted_pages: usize, pages: Vec<String>) -> Self {
        Self {
            total_pages,
            attempted_pages,
            completed_at: Utc::now(),
            pages,
            successful_crawl: total_pages > 0,
        }
    }
}

/// Writes the summary as pretty-printed JSON at the output-dir root
///
/// A write failure here is fatal to the run; there is no partial-summary
/// recovery.
pub fn write_summary(summary: &CrawlSummary, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(SUMMARY_FILENAME);
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(&path, json)?;
    Ok(path)
}
