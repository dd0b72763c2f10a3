//! Usage-guide generation
//!
//! Pure templating over the crawl summary: the crawler has no dependency on
//! this module, it only hands its summary over.

use crate::output::CrawlSummary;
use crate::Result;
use chrono::SecondsFormat;
use std::path::{Path, PathBuf};

/// Filename of the generated guide inside the output directory
pub const INSTRUCTIONS_FILENAME: &str = "instructions.md";

/// At most this many mirrored pages are listed in the guide
const MAX_LISTED_PAGES: usize = 25;

/// Writes `instructions.md` describing how to use the mirrored docs
pub fn generate_instructions(summary: &CrawlSummary, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(INSTRUCTIONS_FILENAME);
    std::fs::write(&path, render(summary))?;
    Ok(path)
}

fn render(summary: &CrawlSummary) -> String {
    let completed_at = summary
        .completed_at
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut page_list = String::new();
    for page in summary.pages.iter().take(MAX_LISTED_PAGES) {
        page_list.push_str(&format!("- {}\n", page));
    }
    if summary.pages.len() > MAX_LISTED_PAGES {
        page_list.push_str(&format!(
            "- ... and {} more\n",
            summary.pages.len() - MAX_LISTED_PAGES
        ));
    }

    format!(
        r#"# Using the Mirrored Documentation

This directory holds a local mirror of documentation pages, extracted down
to their readable content and stored as self-contained HTML files.

## Crawl result

- Pages mirrored: {total_pages}
- Completed at: {completed_at}

## Layout

- `*.html` — one file per page; the filename encodes the source URL path
  (`guide_components.html` came from `/guide/components`)
- `crawl-summary.json` — machine-readable report of this crawl
- `crawl.log` — timestamped record of every fetch and save

Each page keeps a backlink to its source URL in the first paragraph and the
extraction time in a `<meta name="extracted-at">` tag.

## Tips

- Open any `*.html` file directly in a browser; pages have no external
  dependencies.
- Point your editor's workspace search at this directory to search the
  whole documentation set offline.
- Re-running the crawler refreshes files in place; stale pages are simply
  overwritten.

## Source pages

{page_list}"#,
        total_pages = summary.total_pages,
        completed_at = completed_at,
        page_list = page_list,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_guide_mentions_counts_and_pages() {
        let dir = tempdir().unwrap();
        let summary = CrawlSummary::new(
            2,
            3,
            vec![
                "https://example.dev/".to_string(),
                "https://example.dev/guide".to_string(),
            ],
        );

        let path = generate_instructions(&summary, dir.path()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.contains("Pages mirrored: 2"));
        assert!(content.contains("https://example.dev/guide"));
    }

    #[test]
    fn test_long_page_lists_truncated() {
        let pages: Vec<String> = (0..40)
            .map(|i| format!("https://example.dev/page{}", i))
            .collect();
        let summary = CrawlSummary::new(40, 40, pages);

        let content = render(&summary);
        assert!(content.contains("and 15 more"));
        assert!(!content.contains("page30"));
    }
}
