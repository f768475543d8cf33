//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ListingError;

/// Read a whole text file, returning an error if the file doesn't exist
pub fn read_text_required<P: AsRef<Path>>(path: P) -> Result<String, ListingError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ListingError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    fs::read_to_string(path)
        .map_err(|e| ListingError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The target is either completely rewritten or left untouched.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ListingError> {
    write_atomic_with(path, |writer| writer.write_all(contents.as_bytes()))
}

/// Atomically write a file whose contents are produced by `fill`
pub fn write_atomic_with<P, F>(path: P, fill: F) -> Result<(), ListingError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ListingError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory keeps the rename atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| ListingError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    fill(&mut writer)
        .map_err(|e| ListingError::Storage(format!("Failed to write {}: {}", path.display(), e)))?;

    writer
        .flush()
        .map_err(|e| ListingError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ListingError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ListingError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_required_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let err = read_text_required(&path).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Settings.csv");

        write_text_atomic(&path, "1,2,3,4,").unwrap();
        assert_eq!(read_text_required(&path).unwrap(), "1,2,3,4,");
    }

    #[test]
    fn test_write_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Sales.csv");

        write_text_atomic(&path, "a long first version\n").unwrap();
        write_text_atomic(&path, "short\n").unwrap();
        assert_eq!(read_text_required(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Sales.csv");

        write_text_atomic(&path, "data\n").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("Sales.csv.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("Print.csv");

        write_atomic_with(&path, |w| writeln!(w, "Price: 1")).unwrap();
        assert!(path.exists());
    }
}
