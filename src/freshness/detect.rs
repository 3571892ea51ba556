//! Staleness verdicts for existing bundles.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::asset::BundleKind;
use crate::debug;

use super::{load_manifest, manifest_path, marker};

/// Outcome of a staleness check for one `(kind, fingerprint)` bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No bundle or no manifest on disk for this fingerprint.
    New,
    /// Bundle and manifest exist but at least one input changed.
    Changed,
    /// Every recorded input still matches its marker.
    Unchanged,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::New => "new",
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
        })
    }
}

/// Decide whether the bundle for `fingerprint` must be (re)built.
///
/// Both the bundle artifact and its manifest must exist for anything other
/// than `New`. Assets are checked in the supplied order and the first
/// mismatch short-circuits to `Changed`; the order never affects the
/// verdict, only how quickly a mismatch is found. A missing asset file here
/// counts as a mismatch, never an error; the rebuild path surfaces it.
pub fn check(
    assets: &[(String, PathBuf)],
    bundle_path: &Path,
    kind: BundleKind,
    fingerprint: &str,
    cache_dir: &Path,
) -> Verdict {
    if !bundle_path.exists() || !manifest_path(cache_dir, kind, fingerprint).exists() {
        return Verdict::New;
    }

    let Some(manifest) = load_manifest(cache_dir, kind, fingerprint) else {
        return Verdict::New;
    };

    for (logical_path, resolved) in assets {
        let Some(recorded) = manifest.entries.get(logical_path) else {
            debug!("freshness"; "{} not in manifest", logical_path);
            return Verdict::Changed;
        };
        match marker(resolved) {
            Ok(current) if current == *recorded => {}
            _ => {
                debug!("freshness"; "{} marker mismatch", logical_path);
                return Verdict::Changed;
            }
        }
    }

    Verdict::Unchanged
}

#[cfg(test)]
mod tests {
    use super::super::{Manifest, save_manifest};
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FP: &str = "a1b2c3d4e5f60718";

    fn write_asset(dir: &TempDir, name: &str, content: &str) -> (String, PathBuf) {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        (format!("/{name}"), path)
    }

    fn save_current_markers(dir: &TempDir, assets: &[(String, PathBuf)]) {
        let mut manifest = Manifest::new();
        for (logical, resolved) in assets {
            manifest.insert(logical, marker(resolved).unwrap());
        }
        save_manifest(dir.path(), BundleKind::Js, FP, &manifest).unwrap();
    }

    #[test]
    fn test_missing_bundle_is_new() {
        let dir = TempDir::new().unwrap();
        let assets = vec![write_asset(&dir, "app.js", "console.log(1)")];
        save_current_markers(&dir, &assets);

        let verdict = check(
            &assets,
            &dir.path().join("no_bundle.js"),
            BundleKind::Js,
            FP,
            dir.path(),
        );
        assert_eq!(verdict, Verdict::New);
    }

    #[test]
    fn test_missing_manifest_is_new() {
        let dir = TempDir::new().unwrap();
        let assets = vec![write_asset(&dir, "app.js", "console.log(1)")];
        let bundle = dir.path().join("js_bundle.js");
        fs::write(&bundle, "combined").unwrap();

        let verdict = check(&assets, &bundle, BundleKind::Js, FP, dir.path());
        assert_eq!(verdict, Verdict::New);
    }

    #[test]
    fn test_matching_markers_are_unchanged() {
        let dir = TempDir::new().unwrap();
        let assets = vec![
            write_asset(&dir, "app.js", "console.log(1)"),
            write_asset(&dir, "lib.js", "console.log(2)"),
        ];
        let bundle = dir.path().join("js_bundle.js");
        fs::write(&bundle, "combined").unwrap();
        save_current_markers(&dir, &assets);

        let verdict = check(&assets, &bundle, BundleKind::Js, FP, dir.path());
        assert_eq!(verdict, Verdict::Unchanged);
    }

    #[test]
    fn test_touched_input_is_changed() {
        let dir = TempDir::new().unwrap();
        let assets = vec![
            write_asset(&dir, "app.js", "console.log(1)"),
            write_asset(&dir, "lib.js", "console.log(2)"),
        ];
        let bundle = dir.path().join("js_bundle.js");
        fs::write(&bundle, "combined").unwrap();
        save_current_markers(&dir, &assets);

        // Growing the file changes its marker regardless of mtime granularity
        fs::write(&assets[1].1, "console.log(2); console.log(3)").unwrap();

        let verdict = check(&assets, &bundle, BundleKind::Js, FP, dir.path());
        assert_eq!(verdict, Verdict::Changed);
    }

    #[test]
    fn test_asset_missing_from_manifest_is_changed() {
        let dir = TempDir::new().unwrap();
        let recorded = vec![write_asset(&dir, "app.js", "console.log(1)")];
        let bundle = dir.path().join("js_bundle.js");
        fs::write(&bundle, "combined").unwrap();
        save_current_markers(&dir, &recorded);

        let mut assets = recorded;
        assets.push(write_asset(&dir, "extra.js", "console.log(9)"));

        let verdict = check(&assets, &bundle, BundleKind::Js, FP, dir.path());
        assert_eq!(verdict, Verdict::Changed);
    }

    #[test]
    fn test_deleted_asset_file_is_changed_not_error() {
        let dir = TempDir::new().unwrap();
        let assets = vec![write_asset(&dir, "app.js", "console.log(1)")];
        let bundle = dir.path().join("js_bundle.js");
        fs::write(&bundle, "combined").unwrap();
        save_current_markers(&dir, &assets);

        fs::remove_file(&assets[0].1).unwrap();

        let verdict = check(&assets, &bundle, BundleKind::Js, FP, dir.path());
        assert_eq!(verdict, Verdict::Changed);
    }
}
