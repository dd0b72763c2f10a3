//! Page store: serializes extracted pages to self-contained HTML files
//!
//! Each saved document embeds the title, a visible backlink to the source
//! URL, and an extraction-timestamp meta tag, followed by the extracted
//! content fragment verbatim. Nothing is escaped: the fragment comes from
//! the target site's own markup and is trusted as-is.

use crate::crawler::PageRecord;
use crate::url::filename_for;
use crate::Result;
use chrono::SecondsFormat;
use std::path::{Path, PathBuf};

/// Writes mirrored pages into one flat output directory
///
/// Filenames come from [`filename_for`], so saving the same URL twice
/// overwrites the earlier file. Last write wins; there is no merging.
#[derive(Debug)]
pub struct PageStore {
    output_dir: PathBuf,
}

impl PageStore {
    /// Creates the store, creating the output directory if needed
    pub fn new(output_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(output_dir)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Saves one extracted page, returning the path written
    ///
    /// Write failures propagate; the control layer treats them as fatal.
    pub fn save(&self, record: &PageRecord) -> Result<PathBuf> {
        let path = self.output_dir.join(filename_for(&record.url));
        let document = render_document(record);
        std::fs::write(&path, document)?;
        Ok(path)
    }
}

fn render_document(record: &PageRecord) -> String {
    let extracted_at = record
        .extracted_at
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="source-url" content="{url}">
<meta name="extracted-at" content="{extracted_at}">
<title>{title}</title>
</head>
<body>
<p class="source-link">Source: <a href="{url}">{url}</a></p>
<h1>{title}</h1>
{content}
</body>
</html>
"#,
        url = record.url,
        extracted_at = extracted_at,
        title = record.title,
        content = record.content,
    )
}
