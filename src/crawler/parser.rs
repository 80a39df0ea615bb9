//! Link extraction from fetched HTML
//!
//! The crawler only discovers links here; page auditing happens elsewhere.
//! Hrefs are resolved against the fetched page's URL, fragments are
//! stripped, and non-navigable schemes are dropped.

use scraper::{Html, Selector};
use url::Url;

/// Extracts all followable links from an HTML document
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The fetched page's URL, for resolving relative hrefs
///
/// # Returns
///
/// Absolute http(s) URLs in document order, fragments stripped. Origin
/// filtering is the caller's concern.
pub fn extract_links(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_href(href, base_url))
        .collect()
}

/// Resolves one href to an absolute URL, or drops it
///
/// Returns None for hrefs the crawler never follows: empty values,
/// fragment-only anchors, and javascript:/mailto:/tel:/data: schemes.
fn resolve_href(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let mut resolved = base_url.join(href).ok()?;
    resolved.set_fragment(None);

    match resolved.scheme() {
        "http" | "https" => Some(resolved),
        _ => None,
    }
}
