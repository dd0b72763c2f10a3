//! Append-only crawl log
//!
//! One line per event, `[ISO-timestamp] message`, written alongside the
//! mirrored pages. `tracing` covers the console; this file is the durable
//! record a run leaves behind.

use crate::Result;
use chrono::{SecondsFormat, Utc};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Filename of the log inside the output directory
pub const LOG_FILENAME: &str = "crawl.log";

/// Line-oriented log sink, opened in append mode
#[derive(Debug)]
pub struct CrawlLog {
    file: File,
}

impl CrawlLog {
    /// Opens (or creates) the log file inside `output_dir`
    pub fn open(output_dir: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output_dir.join(LOG_FILENAME))?;
        Ok(Self { file })
    }

    /// Appends one timestamped line
    pub fn record(&mut self, message: &str) -> Result<()> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        writeln!(self.file, "[{}] {}", timestamp, message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_records_timestamped_lines() {
        let dir = tempdir().unwrap();
        let mut log = CrawlLog::open(dir.path()).unwrap();
        log.record("saved https://example.dev/guide").unwrap();
        log.record("fetch failed for https://example.dev/broken")
            .unwrap();

        let content = std::fs::read_to_string(dir.path().join(LOG_FILENAME)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("saved https://example.dev/guide"));
    }

    #[test]
    fn test_reopening_appends() {
        let dir = tempdir().unwrap();
        {
            let mut log = CrawlLog::open(dir.path()).unwrap();
            log.record("first run").unwrap();
        }
        {
            let mut log = CrawlLog::open(dir.path()).unwrap();
            log.record("second run").unwrap();
        }

        let content = std::fs::read_to_string(dir.path().join(LOG_FILENAME)).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
