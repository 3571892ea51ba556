//! Bundle error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures while producing a bundle.
///
/// Missing inputs are not represented here: an asset that cannot be
/// resolved is dropped before fingerprinting, and a missing manifest just
/// means the bundle is new. Only failures after an asset set has been
/// committed to a fingerprint are fatal.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Write failure (disk full, permission denied). The atomic write
    /// discipline guarantees no partial file is left at the final path.
    #[error("IO error when writing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// A resolved asset disappeared between resolution and content read.
    #[error("failed to read asset `{0}`")]
    Read(PathBuf, #[source] std::io::Error),
}
