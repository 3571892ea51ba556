//! Asset path resolution and external-source classification.
//!
//! A logical path like `/js/app.js` is resolved against the configured base
//! directory. When minified variants are preferred, an existing non-empty
//! `.min.js` / `.min.css` sibling wins if it is at least as new as the
//! literal file.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Resolve a logical asset path to the best existing candidate file.
///
/// Candidates are tried in order: the `.min` sibling (when `prefer_minified`
/// and the path is an unminified `.js`/`.css`), then the literal path. Among
/// existing, non-empty candidates the one with the greatest mtime is chosen;
/// a later candidate must be strictly newer to displace an earlier one.
///
/// Returns `None` when no candidate file exists or all candidates are empty.
pub fn resolve(logical_path: &str, base_path: &Path, prefer_minified: bool) -> Option<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if prefer_minified
        && let Some(min) = minified_sibling(logical_path)
    {
        candidates.push(min);
    }
    candidates.push(logical_path.to_string());

    let mut best: Option<(PathBuf, SystemTime)> = None;
    for candidate in candidates {
        let path = base_path.join(candidate.trim_start_matches('/'));
        let Ok(meta) = path.metadata() else {
            continue;
        };
        if meta.len() == 0 {
            continue;
        }
        let Ok(mtime) = meta.modified() else {
            continue;
        };
        if best.as_ref().is_none_or(|(_, t)| mtime > *t) {
            best = Some((path, mtime));
        }
    }

    best.map(|(path, _)| path)
}

/// `.min` sibling for an unminified `.js`/`.css` path, if one can exist.
///
/// `/js/app.js` -> `/js/app.min.js`; already-minified paths and other
/// extensions yield `None`.
fn minified_sibling(logical_path: &str) -> Option<String> {
    let (stem, ext) = logical_path.rsplit_once('.')?;
    if !ext.eq_ignore_ascii_case("js") && !ext.eq_ignore_ascii_case("css") {
        return None;
    }
    if stem.to_ascii_lowercase().ends_with(".min") {
        return None;
    }
    Some(format!("{stem}.min.{ext}"))
}

/// Check if the path is an external source (carries a network host).
///
/// True for absolute URLs (`https://cdn.example.com/x.js`) and
/// protocol-relative paths (`//cdn.example.com/x.js`).
pub fn is_external(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }
    url::Url::parse(path).map(|u| u.has_host()).unwrap_or(false)
}
