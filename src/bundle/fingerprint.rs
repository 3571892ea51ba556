//! Bundle identity fingerprints.
//!
//! The fingerprint is a pure function of which logical paths map to which
//! physical files: registration order does not matter, and swapping the
//! physical file behind a logical path (minified vs. unminified) produces a
//! different identity. It doubles as the cache key and the output filename,
//! so any input change also changes the public URL (CDN cache busting).

/// Hex length of a fingerprint, truncated from the full blake3 digest.
pub const FINGERPRINT_LEN: usize = 16;

/// Compute the fingerprint for a set of `(logical path, resolved path)`
/// pairs. Pure and total: never fails, never touches disk.
///
/// The mapping is sorted by logical path (byte-wise ascending) and the
/// resolved paths are joined in that order before digesting.
pub fn fingerprint(pairs: &[(&str, &str)]) -> String {
    let mut sorted = pairs.to_vec();
    sorted.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

    let joined = sorted
        .iter()
        .map(|(_, resolved)| *resolved)
        .collect::<Vec<_>>()
        .join("_");

    let mut hash = hex::encode(blake3::hash(joined.as_bytes()).as_bytes());
    hash.truncate(FINGERPRINT_LEN);
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_shape() {
        let fp = fingerprint(&[("/js/a.js", "/srv/js/a.js")]);
        assert_eq!(fp.len(), FINGERPRINT_LEN);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_order_independent() {
        let forward = fingerprint(&[
            ("/js/a.js", "/srv/js/a.js"),
            ("/js/b.js", "/srv/js/b.min.js"),
        ]);
        let reversed = fingerprint(&[
            ("/js/b.js", "/srv/js/b.min.js"),
            ("/js/a.js", "/srv/js/a.js"),
        ]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_fingerprint_sensitive_to_resolved_path() {
        let unminified = fingerprint(&[
            ("/js/a.js", "/srv/js/a.js"),
            ("/js/b.js", "/srv/js/b.js"),
        ]);
        let minified = fingerprint(&[
            ("/js/a.js", "/srv/js/a.js"),
            ("/js/b.js", "/srv/js/b.min.js"),
        ]);
        assert_ne!(unminified, minified);
    }

    #[test]
    fn test_fingerprint_sensitive_to_asset_set() {
        let one = fingerprint(&[("/js/a.js", "/srv/js/a.js")]);
        let two = fingerprint(&[
            ("/js/a.js", "/srv/js/a.js"),
            ("/js/b.js", "/srv/js/b.js"),
        ]);
        assert_ne!(one, two);
    }

    #[test]
    fn test_fingerprint_empty_set() {
        // Degenerate input still yields a stable, well-formed digest
        assert_eq!(fingerprint(&[]), fingerprint(&[]));
        assert_eq!(fingerprint(&[]).len(), FINGERPRINT_LEN);
    }
}
