//! Local input enumeration
//!
//! Resolves a filesystem path to one or more (URL, HTML) pairs that the
//! rest of the run treats identically to fetched pages. The page list is an
//! explicit value owned by the run; nothing here outlives it.

use crate::SeoGateError;
use std::path::Path;
use url::Url;
use walkdir::WalkDir;

/// One local HTML page, identified by a file:// URL
#[derive(Debug, Clone)]
pub struct LocalPage {
    /// file:// URL of the source file
    pub url: Url,

    /// The file's HTML content
    pub html: String,
}

/// Whether a path looks like an HTML file by extension
fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

/// Converts a local path into a file:// URL
fn file_url(path: &Path) -> Result<Url, SeoGateError> {
    let absolute = path.canonicalize()?;
    Url::from_file_path(&absolute)
        .map_err(|_| SeoGateError::InvalidTarget(path.display().to_string()))
}

/// Reads one walked file into a page, or skips it with a warning
///
/// Both failure modes are absorbed here: a file that cannot be read and a
/// file whose path no longer resolves (e.g. removed mid-walk). Either one
/// is the local analog of a failed fetch.
fn read_local_page(path: &Path) -> Option<LocalPage> {
    let html = match std::fs::read_to_string(path) {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!("Skipping unreadable file {}: {}", path.display(), e);
            return None;
        }
    };
    match file_url(path) {
        Ok(url) => Some(LocalPage { url, html }),
        Err(e) => {
            tracing::warn!("Skipping unresolvable path {}: {}", path.display(), e);
            None
        }
    }
}

/// Enumerates the audit pages behind a local path
///
/// A single file yields exactly one page regardless of its extension; a
/// failure there is a run-level error since the file is the target itself.
/// A directory is walked in sorted order and every `.html`/`.htm` file
/// becomes a page; files that cannot be read or resolved are skipped.
pub fn collect_local_pages(path: &Path) -> Result<Vec<LocalPage>, SeoGateError> {
    if path.is_file() {
        let html = std::fs::read_to_string(path)?;
        return Ok(vec![LocalPage {
            url: file_url(path)?,
            html,
        }]);
    }

    let pages = WalkDir::new(path)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_html_file(e.path()))
        .filter_map(|e| read_local_page(e.path()))
        .collect();
    Ok(pages)
}
