//! Session change journal
//!
//! Changes are held in memory while the session runs and appended to
//! `audit.log` as JSON lines only when the session saves, so a run that
//! ends early leaves no trace on disk.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{ListingError, ListingResult};

use super::entry::AuditEntry;

/// Pending changes for one session
pub struct ChangeJournal {
    path: PathBuf,
    pending: Vec<AuditEntry>,
}

impl ChangeJournal {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            pending: Vec::new(),
        }
    }

    /// Remember a change until the next flush
    pub fn record(&mut self, entry: AuditEntry) {
        self.pending.push(entry);
    }

    /// Changes recorded since the last successful flush
    pub fn pending(&self) -> &[AuditEntry] {
        &self.pending
    }

    /// Append every pending change to the log and return how many were written
    ///
    /// On failure the pending changes are kept.
    pub fn flush(&mut self) -> ListingResult<usize> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        let mut lines = String::new();
        for entry in &self.pending {
            lines.push_str(&serde_json::to_string(entry)?);
            lines.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ListingError::Io(format!("Failed to open audit log: {}", e)))?;
        file.write_all(lines.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| ListingError::Io(format!("Failed to write audit log: {}", e)))?;

        let written = self.pending.len();
        self.pending.clear();
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::Listing;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn read_entries(path: &Path) -> Vec<AuditEntry> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_nothing_written_before_flush() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.log");
        let mut journal = ChangeJournal::new(path.clone());

        journal.record(AuditEntry::listing_added(&Listing::new(1, 10.0, 1, "070", "Main St")));

        assert_eq!(journal.pending().len(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_flush_appends_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.log");
        let listing = Listing::new(1, 10.0, 1, "070", "Main St");

        let mut journal = ChangeJournal::new(path.clone());
        journal.record(AuditEntry::listing_added(&listing));
        assert_eq!(journal.flush().unwrap(), 1);

        journal.record(AuditEntry::listing_removed(&listing));
        journal.record(AuditEntry::session_saved(0, "1,2,3,4,"));
        assert_eq!(journal.flush().unwrap(), 2);
        assert!(journal.pending().is_empty());

        let ops: Vec<_> = read_entries(&path).iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Delete, Operation::Save]);
    }

    #[test]
    fn test_flush_failure_keeps_pending() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.log");
        fs::create_dir(&path).unwrap();

        let mut journal = ChangeJournal::new(path);
        journal.record(AuditEntry::session_saved(0, "1,2,3,4,"));

        assert!(matches!(journal.flush(), Err(ListingError::Io(_))));
        assert_eq!(journal.pending().len(), 1);
    }

    #[test]
    fn test_empty_flush_creates_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.log");
        let mut journal = ChangeJournal::new(path.clone());

        assert_eq!(journal.flush().unwrap(), 0);
        assert!(!path.exists());
    }
}
