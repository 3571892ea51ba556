//! Atomic file writing.
//!
//! Bundle artifacts and manifests may be read by concurrent processes while
//! another process regenerates them. Writes therefore go to a temporary file
//! in the destination directory and are renamed into place, so readers only
//! ever observe a complete file at the final path.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Write `content` to `path` with all-or-nothing visibility.
///
/// Creates parent directories as needed. On failure nothing is left at the
/// final path; the temporary file is cleaned up on drop.
pub fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/out.css");

        write_atomic(&path, b"body {}").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"body {}");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.js");

        write_atomic(&path, b"old").unwrap();
        write_atomic(&path, b"new content").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new content");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.js");

        write_atomic(&path, b"content").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name(), "out.js");
    }
}
