//! Offline fallback content
//!
//! When a crawl saves nothing (site unreachable, scope misconfigured), the
//! entry point writes a few placeholder pages through the regular page store
//! so downstream tooling always finds content in the output directory.

use crate::crawler::PageRecord;
use crate::output::PageStore;
use crate::Result;
use chrono::Utc;
use std::path::PathBuf;
use url::Url;

/// Placeholder pages: (path, title, body fragment)
const DEMO_PAGES: &[(&str, &str, &str)] = &[
    (
        "/",
        "Documentation Mirror (offline placeholder)",
        "<p>The crawl saved no pages, so this placeholder was generated \
         instead. Check the crawl log for fetch failures and re-run once \
         the site is reachable.</p>",
    ),
    (
        "/guide",
        "Guide (offline placeholder)",
        "<p>Placeholder for the guide section. No live content was \
         retrieved during the last crawl.</p>",
    ),
    (
        "/reference",
        "Reference (offline placeholder)",
        "<p>Placeholder for the reference section. No live content was \
         retrieved during the last crawl.</p>",
    ),
];

/// Writes the placeholder set, returning the paths written
pub fn write_demo_pages(store: &PageStore, base_url: &Url) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(DEMO_PAGES.len());

    for (path, title, content) in DEMO_PAGES {
        let record = PageRecord {
            url: base_url.join(path)?,
            title: title.to_string(),
            content: content.to_string(),
            extracted_at: Utc::now(),
        };
        written.push(store.save(&record)?);
    }

    Ok(written)
}
