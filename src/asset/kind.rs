//! Bundle kind definitions.

use std::fmt;

/// Kind of combinable asset.
///
/// Doubles as the output file extension and the filename prefix of
/// produced bundles (`css_<fingerprint>.css`, `js_<fingerprint>.js`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleKind {
    Css,
    Js,
}

impl BundleKind {
    /// Short name, used both as filename prefix and extension.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
        }
    }
}

impl fmt::Display for BundleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
