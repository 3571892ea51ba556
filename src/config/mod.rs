//! Configuration management for `kombi.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                            |
//! |-------------|----------------------------------------------------|
//! | `[paths]`   | Base directory, web root/paths, manifest cache dir |
//! | `[combine]` | Combining toggle, minified-variant preference      |
//! | `[assets]`  | Declared `js` / `css` files with sort and skip     |

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::asset::BundleKind;
use crate::utils::path::normalize_path;

/// Root configuration structure representing kombi.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,

    /// Combining settings
    #[serde(default)]
    pub combine: CombineConfig,

    /// Declared assets
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// `[paths]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding the source assets and the combined output
    /// (relative paths are resolved against the project root).
    pub base: PathBuf,
    /// Prefix prepended to public bundle paths (e.g. a CDN origin).
    pub web_root: String,
    /// Web path for combined CSS, absolute with trailing slash.
    pub css: String,
    /// Web path for combined JS, absolute with trailing slash.
    pub js: String,
    /// Manifest cache directory (relative to the project root).
    pub cache: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from("public"),
            web_root: String::new(),
            css: "/css/combined/".to_string(),
            js: "/js/combined/".to_string(),
            cache: PathBuf::from(".kombi/cache"),
        }
    }
}

/// `[combine]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CombineConfig {
    /// When false, every asset is rendered as its own tag and no bundle is
    /// produced.
    pub enabled: bool,
    /// Prefer an existing, newer `.min` sibling over the literal file.
    pub prefer_minified: bool,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prefer_minified: true,
        }
    }
}

/// `[assets]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub js: Vec<AssetEntry>,
    pub css: Vec<AssetEntry>,
}

/// One declared asset.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetEntry {
    /// Web-facing path (`/js/app.js`) or external URL.
    pub path: String,
    /// Include order, ascending, starting from the lowest.
    #[serde(default)]
    pub sort: i32,
    /// Render individually instead of combining.
    #[serde(default)]
    pub skip: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            paths: PathsConfig::default(),
            combine: CombineConfig::default(),
            assets: AssetsConfig::default(),
        }
    }
}

impl Config {
    /// Load and validate the config file.
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::Io(config_path.to_path_buf(), e))?;
        let mut config: Config = toml::from_str(&raw)?;

        config.config_path = normalize_path(config_path);
        config.root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Web-path invariants: absolute, trailing slash.
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("paths.css", &self.paths.css), ("paths.js", &self.paths.js)] {
            if !value.starts_with('/') || !value.ends_with('/') {
                return Err(ConfigError::Validation(format!(
                    "`{field}` must start and end with '/', got `{value}`"
                )));
            }
        }
        Ok(())
    }

    /// Resolve a possibly-relative path against the project root.
    pub fn root_join(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Filesystem directory holding assets and combined output.
    pub fn base_path(&self) -> PathBuf {
        self.root_join(&self.paths.base)
    }

    /// Manifest cache directory.
    pub fn cache_dir(&self) -> PathBuf {
        self.root_join(&self.paths.cache)
    }

    /// Web path for one bundle kind (absolute, trailing slash).
    pub fn web_path(&self, kind: BundleKind) -> &str {
        match kind {
            BundleKind::Css => &self.paths.css,
            BundleKind::Js => &self.paths.js,
        }
    }

    /// Filesystem directory where bundles of one kind are written.
    pub fn bundle_dir(&self, kind: BundleKind) -> PathBuf {
        self.base_path().join(self.web_path(kind).trim_matches('/'))
    }
}
