//! Content extraction
//!
//! Isolates the readable region of a documentation page. The working copy of
//! the document is pruned first (scripts, styles, navigation chrome), then
//! the title and the primary content region are read off what remains.

use chrono::{DateTime, Utc};
use scraper::{Html, Selector};
use url::Url;

/// Regions removed from the working document before anything is read
const NOISE_SELECTORS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "nav",
    "header",
    "footer",
    "aside",
    ".sidebar",
    ".side-nav",
    ".navigation",
    ".toc",
];

/// Content-region candidates, tried in order; first match wins. A plain
/// ordered chain is all this needs: the priority list is fixed.
const CONTENT_SELECTORS: &[&str] = &[
    "main",
    ".docs-content",
    ".main-content",
    ".content",
    "#content",
    ".documentation",
    "article",
];

/// The transient extracted representation of one page, produced here and
/// consumed immediately by the page store. Not retained after the write.
#[derive(Debug, Clone)]
pub struct PageRecord {
    pub url: Url,
    pub title: String,
    /// Inner markup of the content region, possibly empty
    pub content: String,
    pub extracted_at: DateTime<Utc>,
}

/// Extracts title and primary content from raw page markup
///
/// Title resolution: `<title>`, else the first `h1`/`h2`/`h3`, else
/// `"Untitled"`. Content resolution: first match of [`CONTENT_SELECTORS`],
/// else the full `<body>` markup.
pub fn extract_content(html_source: &str, url: &Url) -> PageRecord {
    let mut document = Html::parse_document(html_source);
    strip_noise(&mut document);

    PageRecord {
        url: url.clone(),
        title: extract_title(&document),
        content: select_content(&document),
        extracted_at: Utc::now(),
    }
}

/// Detaches every node matching a noise selector from the working tree
fn strip_noise(document: &mut Html) {
    let mut doomed = Vec::new();

    for raw in NOISE_SELECTORS {
        if let Ok(selector) = Selector::parse(raw) {
            doomed.extend(document.select(&selector).map(|element| element.id()));
        }
    }

    for id in doomed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Title sources in order of preference
const TITLE_SELECTORS: &[&str] = &["title", "h1", "h2", "h3"];

fn extract_title(document: &Html) -> String {
    for raw in TITLE_SELECTORS {
        if let Ok(selector) = Selector::parse(raw) {
            if let Some(element) = document.select(&selector).next() {
                let text = element.text().collect::<String>().trim().to_string();
                if !text.is_empty() {
                    return text;
                }
            }
        }
    }

    "Untitled".to_string()
}

fn select_content(document: &Html) -> String {
    for raw in CONTENT_SELECTORS {
        if let Ok(selector) = Selector::parse(raw) {
            if let Some(element) = document.select(&selector).next() {
                return element.inner_html();
            }
        }
    }

    // No recognized content region: fall back to whatever the body holds
    if let Ok(selector) = Selector::parse("body") {
        if let Some(body) = document.select(&selector).next() {
            return body.inner_html();
        }
    }

    String::new()
}
