//! Build command: combine declared assets and emit include tags.

use std::path::Path;

use anyhow::{Context, Result};

use crate::asset::{BundleKind, BundleRequest};
use crate::config::Config;
use crate::log;
use crate::utils::fs::write_atomic;

/// Register the configured assets and produce both bundles.
pub fn run(config: &Config, tags_out: Option<&Path>) -> Result<()> {
    let mut request = BundleRequest::new();
    for entry in &config.assets.css {
        request.add_css(&entry.path, entry.sort, entry.skip);
    }
    for entry in &config.assets.js {
        request.add_js(&entry.path, entry.sort, entry.skip);
    }

    let css = request.render(BundleKind::Css, config)?;
    let js = request.render(BundleKind::Js, config)?;
    let tags = format!("{css}{js}");

    match tags_out {
        Some(path) => {
            let path = config.root_join(path);
            write_atomic(&path, tags.as_bytes())
                .with_context(|| format!("failed to write tags to {}", path.display()))?;
            log!("build"; "tags written to {}", path.display());
        }
        None => print!("{tags}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_tag_snippet() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.root = dir.path().to_path_buf();
        config.combine.prefer_minified = false;

        let css_dir = config.base_path().join("css");
        fs::create_dir_all(&css_dir).unwrap();
        fs::write(css_dir.join("site.css"), "body {}").unwrap();
        config.assets.css.push(crate::config::AssetEntry {
            path: "/css/site.css".to_string(),
            sort: 0,
            skip: false,
        });

        run(&config, Some(Path::new("tags.html"))).unwrap();

        let tags = fs::read_to_string(dir.path().join("tags.html")).unwrap();
        assert!(tags.contains("<link type=\"text/css\""));
        assert!(tags.contains("/css/combined/css_"));
    }
}
