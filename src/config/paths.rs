//! Path management for Kimberlynet
//!
//! All data files live side by side in the directory the program is started
//! from.

use std::path::{Path, PathBuf};

use crate::error::ListingError;

/// Manages all paths used by Kimberlynet
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory holding the listing, settings and printout files
    base_dir: PathBuf,
}

impl AppPaths {
    /// Use the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ListingError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            ListingError::Config(format!("Could not determine current directory: {}", e))
        })?;

        Ok(Self { base_dir })
    }

    /// Create AppPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the data directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the listing file
    pub fn listings_file(&self) -> PathBuf {
        self.base_dir.join("Sales.csv")
    }

    /// Get the path to the settings (thresholds) file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("Settings.csv")
    }

    /// Get the path to the filtered printout
    pub fn printout_file(&self) -> PathBuf {
        self.base_dir.join("Print.csv")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Check that the data directory exists
    pub fn ensure_base_dir(&self) -> Result<(), ListingError> {
        if self.base_dir.is_dir() {
            Ok(())
        } else {
            Err(ListingError::Config(format!(
                "Data directory does not exist: {}",
                self.base_dir.display()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert!(paths.ensure_base_dir().is_ok());
    }

    #[test]
    fn test_default_is_current_dir() {
        let paths = AppPaths::new().unwrap();
        assert_eq!(paths.base_dir(), std::env::current_dir().unwrap());
    }

    #[test]
    fn test_missing_dir_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().join("missing"));
        assert!(matches!(
            paths.ensure_base_dir(),
            Err(ListingError::Config(_))
        ));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.listings_file(), temp_dir.path().join("Sales.csv"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("Settings.csv"));
        assert_eq!(paths.printout_file(), temp_dir.path().join("Print.csv"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }
}
