//! Bundle production.
//!
//! Orchestrates one combining run for one kind: partition registered assets,
//! resolve the bundleable ones, fingerprint the resolved set, consult the
//! staleness detector, and rebuild artifact + manifest when stale.

use std::fs;
use std::path::{Path, PathBuf};

use crate::asset::{AssetDescriptor, BundleKind};
use crate::config::Config;
use crate::freshness::{Manifest, Verdict, check, manifest_path, marker, save_manifest};
use crate::utils::fs::write_atomic;
use crate::{debug, log};

use super::error::BundleError;
use super::fingerprint::fingerprint;

/// UTF-8 byte-order mark, stripped from the head of each input file.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// The produced (or reused) bundle of one combining run.
#[derive(Debug)]
pub struct BuiltBundle {
    /// Externally reachable path (`<web_root><web_path><file>`).
    pub public_path: String,
    /// Artifact location on disk.
    pub bundle_path: PathBuf,
    /// What the staleness detector decided for this run.
    pub verdict: Verdict,
}

/// Result of one combining run for one kind.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Logical paths to render individually (external/skipped), in include
    /// order.
    pub inline: Vec<String>,
    /// The combined bundle, absent when nothing was bundleable.
    pub bundle: Option<BuiltBundle>,
}

/// Combine `assets` (already in include order) into one bundle file.
///
/// Unresolvable assets are dropped silently; external and skipped assets
/// pass through as `inline`. Returns the artifact's public path inside the
/// outcome, or no bundle at all when the bundleable set is empty.
///
/// # Errors
///
/// Fails only after the asset set was committed to a fingerprint: a read
/// failure on a resolved file or a write failure on artifact/manifest.
pub fn build(
    assets: &[&AssetDescriptor],
    kind: BundleKind,
    config: &Config,
) -> Result<BuildOutcome, BundleError> {
    let base_path = config.base_path();
    let prefer_minified = config.combine.prefer_minified;

    // Partition, preserving include order within both groups.
    let mut inline = Vec::new();
    let mut bundleable: Vec<(String, PathBuf)> = Vec::new();
    for asset in assets {
        if !asset.is_bundleable() {
            inline.push(asset.logical_path.clone());
        } else if let Some(resolved) = asset.resolve(&base_path, prefer_minified) {
            bundleable.push((asset.logical_path.clone(), resolved.to_path_buf()));
        } else {
            debug!("bundle"; "no file found for {}, dropped", asset.logical_path);
        }
    }

    if bundleable.is_empty() {
        return Ok(BuildOutcome {
            inline,
            bundle: None,
        });
    }

    let lossy: Vec<(String, String)> = bundleable
        .iter()
        .map(|(logical, resolved)| (logical.clone(), resolved.to_string_lossy().into_owned()))
        .collect();
    let pairs: Vec<(&str, &str)> = lossy
        .iter()
        .map(|(logical, resolved)| (logical.as_str(), resolved.as_str()))
        .collect();
    let fp = fingerprint(&pairs);

    let file_name = format!("{kind}_{fp}.{kind}");
    let bundle_path = config.bundle_dir(kind).join(&file_name);
    let cache_dir = config.cache_dir();
    let public_path = format!("{}{}{}", config.paths.web_root, config.web_path(kind), file_name);

    let verdict = check(&bundleable, &bundle_path, kind, &fp, &cache_dir);
    if verdict == Verdict::Unchanged {
        debug!("bundle"; "{file_name} unchanged");
        return Ok(BuildOutcome {
            inline,
            bundle: Some(BuiltBundle {
                public_path,
                bundle_path,
                verdict,
            }),
        });
    }

    // Rebuild: concatenate in include order, marker snapshot per file at
    // read time so the manifest matches what went into the artifact.
    let mut buffer: Vec<u8> = Vec::new();
    let mut manifest = Manifest::new();
    for (logical_path, resolved) in &bundleable {
        let content =
            fs::read(resolved).map_err(|e| BundleError::Read(resolved.clone(), e))?;
        let file_marker =
            marker(resolved).map_err(|e| BundleError::Read(resolved.clone(), e))?;

        let body = content.strip_prefix(UTF8_BOM).unwrap_or(&content);
        let print_path = display_path(resolved, &base_path);
        buffer.extend_from_slice(format!("\n/* Start: {print_path} */\n").as_bytes());
        buffer.extend_from_slice(body);
        buffer.extend_from_slice(format!("\n/* End: {print_path} */\n").as_bytes());

        manifest.insert(logical_path, file_marker);
    }

    write_atomic(&bundle_path, &buffer).map_err(|e| BundleError::Io(bundle_path.clone(), e))?;
    save_manifest(&cache_dir, kind, &fp, &manifest)
        .map_err(|e| BundleError::Io(manifest_path(&cache_dir, kind, &fp), e))?;

    log!("bundle"; "{} ({} files, {})", file_name, bundleable.len(), verdict);

    Ok(BuildOutcome {
        inline,
        bundle: Some(BuiltBundle {
            public_path,
            bundle_path,
            verdict,
        }),
    })
}

/// Boundary-comment path: resolved path with the base directory stripped.
fn display_path(resolved: &Path, base_path: &Path) -> String {
    match resolved.strip_prefix(base_path) {
        Ok(rel) => format!("/{}", rel.display()),
        Err(_) => resolved.display().to_string(),
    }
}
