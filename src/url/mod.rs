//! URL handling: normalization, scope filtering, and filename derivation
//!
//! Two URLs that normalize identically are the same frontier entry, so
//! everything that enters the visited set or the queue goes through
//! [`normalize_url`] first.

use crate::UrlError;
use url::Url;

/// Normalizes an href into an absolute, fragment-free URL
///
/// Resolution happens against `base` (the page the href appeared on, or the
/// site root for seeds). The fragment is dropped because `/guide#setup` and
/// `/guide` are the same document.
pub fn normalize_url(href: &str, base: &Url) -> Result<Url, UrlError> {
    let href = href.trim();

    let mut url = base
        .join(href)
        .map_err(|e| UrlError::Parse(format!("'{}': {}", href, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);
    Ok(url)
}

/// Returns the canonical host for a site: the URL's host with any leading
/// `www.` stripped and lowercased.
pub fn canonical_host(base: &Url) -> Result<String, UrlError> {
    let host = base.host_str().ok_or(UrlError::MissingHost)?.to_lowercase();
    Ok(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

/// Checks whether a URL belongs to the target site
///
/// A URL is in scope when its host equals the canonical host, with or
/// without the `www.` prefix. Everything else (external sites, subdomains
/// like `cdn.`) is out of scope.
pub fn is_in_scope(url: &Url, canonical_host: &str) -> bool {
    match url.host_str() {
        Some(host) => {
            let host = host.to_lowercase();
            host == canonical_host || host == format!("www.{}", canonical_host)
        }
        None => false,
    }
}

/// Derives the on-disk filename for a page URL
///
/// The URL path with the leading slash dropped and every remaining slash
/// replaced by an underscore; an empty result becomes `index`; the `.html`
/// suffix is appended unless already present. Deterministic: the same URL
/// always maps to the same filename, which is also how duplicate saves
/// resolve (last write wins).
pub fn filename_for(url: &Url) -> String {
    let path = url.path();
    let flattened = path.trim_start_matches('/').replace('/', "_");

    let stem = if flattened.is_empty() {
        "index".to_string()
    } else {
        flattened
    };

    if stem.ends_with(".html") {
        stem
    } else {
        format!("{}.html", stem)
    }
}
