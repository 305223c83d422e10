//! I/O utility functions

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sibling path used while writing, e.g. `report.json` -> `report.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write content to a file atomically using write-then-rename pattern.
///
/// The content is first written to a temporary sibling file, then renamed
/// over the target path, so readers never observe a half-written report.
///
/// # Example
/// ```ignore
/// atomic_write(Path::new("snapshot.json"), &json)?;
/// ```
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = temp_path_for(path);

    fs::write(&temp_path, content)?;

    // Atomic on POSIX systems
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        atomic_write(&path, "{}\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{}\n");

        // Temp file should not exist
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");

        atomic_write(&path, "first").unwrap();
        atomic_write(&path, "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "second");
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        // a non-empty directory cannot be replaced by a file
        let path = dir.path().join("report");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        assert!(atomic_write(&path, "content").is_err());
        assert!(!temp_path_for(&path).exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        let temp = temp_path_for(Path::new("/tmp/report.json"));
        assert_eq!(temp, PathBuf::from("/tmp/report.json.tmp"));
    }
}
