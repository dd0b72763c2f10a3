//! Link extraction
//!
//! Pulls every `a[href]` out of a parsed page, resolves it against the page
//! URL, and keeps only links that stay on the target site. Malformed hrefs
//! are dropped without comment; scope filtering happens here so nothing
//! off-site ever reaches the frontier.

use crate::url::{is_in_scope, normalize_url};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the in-scope absolute URLs referenced by a page
///
/// Result order follows document order; duplicates within one page are
/// collapsed. Downstream membership tests against the visited set do the
/// cross-page dedup.
pub fn extract_links(document: &Html, page_url: &Url, canonical_host: &str) -> Vec<Url> {
    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let href = match element.value().attr("href") {
            Some(h) => h.trim(),
            None => continue,
        };

        // Same-page anchors and non-navigational schemes
        if href.is_empty()
            || href.starts_with('#')
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
            || href.starts_with("javascript:")
            || href.starts_with("data:")
        {
            continue;
        }

        let url = match normalize_url(href, page_url) {
            Ok(u) => u,
            Err(_) => continue,
        };

        if !is_in_scope(&url, canonical_host) {
            continue;
        }

        if seen.insert(url.clone()) {
            links.push(url);
        }
    }

    links
}
