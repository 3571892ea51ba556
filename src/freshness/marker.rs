//! Per-file change markers.

use std::fs;
use std::io;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Compute the change marker for a file: unix mtime concatenated with byte
/// size, no separator. Callers must treat the value as opaque; it is only
/// ever compared for equality against a previously recorded marker.
///
/// Not a content hash: an edit that leaves both mtime and size untouched
/// goes undetected. Accepted trade-off, since any fresh write advances
/// mtime in practice.
///
/// # Errors
///
/// Fails with `NotFound` (or another I/O error) when the file cannot be
/// stat'ed at call time.
pub fn marker(path: &Path) -> io::Result<String> {
    let meta = fs::metadata(path)?;
    let mtime = meta
        .modified()?
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    Ok(format!("{}{}", mtime, meta.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_marker_stable_for_unchanged_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.js");
        fs::write(&path, "console.log(1)").unwrap();

        assert_eq!(marker(&path).unwrap(), marker(&path).unwrap());
    }

    #[test]
    fn test_marker_changes_with_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.js");
        fs::write(&path, "console.log(1)").unwrap();
        let before = marker(&path).unwrap();

        fs::write(&path, "console.log(1); console.log(2)").unwrap();
        assert_ne!(before, marker(&path).unwrap());
    }

    #[test]
    fn test_marker_changes_with_mtime() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.js");
        fs::write(&path, "console.log(1)").unwrap();
        let before = marker(&path).unwrap();

        // Same content, rewritten more than a second later
        sleep(Duration::from_millis(1100));
        fs::write(&path, "console.log(1)").unwrap();
        assert_ne!(before, marker(&path).unwrap());
    }

    #[test]
    fn test_marker_missing_file() {
        let err = marker(Path::new("/nonexistent/app.js")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
