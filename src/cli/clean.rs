//! Clean command: drop all cached manifests and combined output.

use std::fs;

use anyhow::{Context, Result};

use crate::asset::BundleKind;
use crate::config::Config;
use crate::{debug, log};

/// Remove the manifest cache directory and both combined output directories.
pub fn run(config: &Config) -> Result<()> {
    let targets = [
        config.cache_dir(),
        config.bundle_dir(BundleKind::Css),
        config.bundle_dir(BundleKind::Js),
    ];

    let mut removed = 0;
    for dir in targets {
        if !dir.exists() {
            continue;
        }
        fs::remove_dir_all(&dir)
            .with_context(|| format!("failed to remove {}", dir.display()))?;
        debug!("clean"; "removed {}", dir.display());
        removed += 1;
    }

    if removed == 0 {
        log!("clean"; "nothing to remove");
    } else {
        log!("clean"; "removed {} director{}", removed, if removed == 1 { "y" } else { "ies" });
    }
    Ok(())
}
