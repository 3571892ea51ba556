//! Manifest persistence.
//!
//! One manifest exists per `(kind, fingerprint)` ever built, recording the
//! change marker observed for every input at the last successful build.
//! Stored as plain JSON: cache files are data, never executable code.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::asset::BundleKind;
use crate::utils::fs::write_atomic;

/// Recorded input state for one produced bundle.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Logical path -> change marker at build time.
    pub entries: FxHashMap<String, String>,
    /// Manifest creation time (Unix timestamp in seconds)
    #[serde(default)]
    pub created_at: u64,
}

impl Manifest {
    /// Create an empty manifest with current timestamp.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            created_at: current_timestamp(),
        }
    }

    /// Record the marker for a bundled logical path.
    pub fn insert(&mut self, logical_path: &str, marker: String) {
        self.entries.insert(logical_path.to_string(), marker);
    }
}

/// Manifest file path for a `(kind, fingerprint)` key.
pub fn manifest_path(cache_dir: &Path, kind: BundleKind, fingerprint: &str) -> PathBuf {
    cache_dir.join(format!("{kind}_{fingerprint}.json"))
}

/// Load the manifest for a `(kind, fingerprint)` key.
///
/// A missing or unparseable manifest yields `None`, never an error; the
/// detector treats both as "never built".
pub fn load_manifest(cache_dir: &Path, kind: BundleKind, fingerprint: &str) -> Option<Manifest> {
    let json = fs::read_to_string(manifest_path(cache_dir, kind, fingerprint)).ok()?;
    serde_json::from_str(&json).ok()
}

/// Persist a manifest, fully replacing any prior one for the same key.
pub fn save_manifest(
    cache_dir: &Path,
    kind: BundleKind,
    fingerprint: &str,
    manifest: &Manifest,
) -> io::Result<()> {
    let json = serde_json::to_string_pretty(manifest).map_err(io::Error::other)?;
    write_atomic(&manifest_path(cache_dir, kind, fingerprint), json.as_bytes())
}

/// Get current Unix timestamp in seconds
fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
