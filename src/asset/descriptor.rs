//! Asset descriptor type.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use super::resolve;

/// A single registered asset within a bundle request.
///
/// Immutable once added to a request; only the resolved path is computed
/// lazily and cached for the request's lifetime. External and skipped
/// assets never resolve; they are rendered individually and never
/// fingerprinted or concatenated.
#[derive(Debug, Clone)]
pub struct AssetDescriptor {
    /// Web-facing path the caller registered (e.g. `/js/app.js`).
    pub logical_path: String,
    /// Include order, ascending; ties keep registration order.
    pub sort_key: i32,
    /// Path carries a network host; always rendered inline.
    pub is_external: bool,
    /// Caller opted this asset out of combining.
    pub skip: bool,
    /// Lazily resolved absolute path (`None` once resolved = no candidate).
    resolved: OnceCell<Option<PathBuf>>,
}

impl AssetDescriptor {
    /// Create a descriptor; classifies external sources at registration.
    pub fn new(logical_path: &str, sort_key: i32, skip: bool) -> Self {
        Self {
            logical_path: logical_path.to_string(),
            sort_key,
            is_external: resolve::is_external(logical_path),
            skip,
            resolved: OnceCell::new(),
        }
    }

    /// Whether this asset participates in combining at all.
    pub fn is_bundleable(&self) -> bool {
        !self.is_external && !self.skip
    }

    /// Resolve the logical path against `base_path`, caching the outcome.
    ///
    /// External and skipped assets resolve to `None` without touching disk.
    pub fn resolve(&self, base_path: &Path, prefer_minified: bool) -> Option<&Path> {
        self.resolved
            .get_or_init(|| {
                if !self.is_bundleable() {
                    return None;
                }
                resolve::resolve(&self.logical_path, base_path, prefer_minified)
            })
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_external_classified_at_registration() {
        let local = AssetDescriptor::new("/js/app.js", 0, false);
        assert!(!local.is_external);
        assert!(local.is_bundleable());

        let external = AssetDescriptor::new("https://cdn.example.com/lib.js", 0, false);
        assert!(external.is_external);
        assert!(!external.is_bundleable());

        let skipped = AssetDescriptor::new("/js/legacy.js", 0, true);
        assert!(!skipped.is_bundleable());
    }

    #[test]
    fn test_resolve_cached_for_request_lifetime() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("js")).unwrap();
        let file = dir.path().join("js/app.js");
        fs::write(&file, "console.log(1)").unwrap();

        let asset = AssetDescriptor::new("/js/app.js", 0, false);
        assert_eq!(asset.resolve(dir.path(), false), Some(file.as_path()));

        // Deleting the file does not invalidate the cached resolution
        fs::remove_file(&file).unwrap();
        assert_eq!(asset.resolve(dir.path(), false), Some(file.as_path()));
    }

    #[test]
    fn test_external_never_resolves() {
        let dir = TempDir::new().unwrap();
        let asset = AssetDescriptor::new("https://cdn.example.com/lib.js", 0, false);
        assert_eq!(asset.resolve(dir.path(), true), None);
    }
}
