//! Per-invocation asset registry.
//!
//! An explicitly constructed `BundleRequest` holds everything one page (or
//! one CLI run) declares. Each caller owns its own request; there is no
//! process-wide registry shared across concurrent callers.

use anyhow::Result;

use crate::bundle;
use crate::config::Config;
use crate::html;

use super::{AssetDescriptor, BundleKind};

/// Ordered registry of CSS and JS assets for a single bundling run.
#[derive(Debug, Default)]
pub struct BundleRequest {
    css: Vec<AssetDescriptor>,
    js: Vec<AssetDescriptor>,
}

impl BundleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a JS file. Returns false (no registration) for an empty path.
    ///
    /// `sort_key` orders inclusion, starting from the lowest.
    pub fn add_js(&mut self, path: &str, sort_key: i32, skip: bool) -> bool {
        Self::add(&mut self.js, path, sort_key, skip)
    }

    /// Register a CSS file. Returns false (no registration) for an empty path.
    pub fn add_css(&mut self, path: &str, sort_key: i32, skip: bool) -> bool {
        Self::add(&mut self.css, path, sort_key, skip)
    }

    /// Re-adding a logical path replaces the earlier descriptor in place.
    fn add(list: &mut Vec<AssetDescriptor>, path: &str, sort_key: i32, skip: bool) -> bool {
        if path.is_empty() {
            return false;
        }

        let descriptor = AssetDescriptor::new(path, sort_key, skip);
        match list.iter_mut().find(|d| d.logical_path == path) {
            Some(existing) => *existing = descriptor,
            None => list.push(descriptor),
        }
        true
    }

    /// Registered assets of one kind, in registration order.
    pub fn assets(&self, kind: BundleKind) -> &[AssetDescriptor] {
        match kind {
            BundleKind::Css => &self.css,
            BundleKind::Js => &self.js,
        }
    }

    /// Assets of one kind in include order: ascending `sort_key`, ties keep
    /// registration order (stable sort).
    pub fn sorted(&self, kind: BundleKind) -> Vec<&AssetDescriptor> {
        let mut sorted: Vec<&AssetDescriptor> = self.assets(kind).iter().collect();
        sorted.sort_by_key(|d| d.sort_key);
        sorted
    }

    /// Produce the include tags for one kind.
    ///
    /// With combining enabled, external/skipped assets get individual tags
    /// (in include order) followed by a single tag for the combined bundle;
    /// with combining disabled, every asset gets its own tag and no bundle
    /// is produced.
    pub fn render(&self, kind: BundleKind, config: &Config) -> Result<String> {
        let sorted = self.sorted(kind);
        let mut tags = String::new();

        if !config.combine.enabled {
            for asset in &sorted {
                tags.push_str(&html::include_tag(kind, &asset.logical_path));
            }
            return Ok(tags);
        }

        let outcome = bundle::build(&sorted, kind, config)?;
        for path in &outcome.inline {
            tags.push_str(&html::include_tag(kind, path));
        }
        if let Some(built) = &outcome.bundle {
            tags.push_str(&html::include_tag(kind, &built.public_path));
        }
        Ok(tags)
    }
}
