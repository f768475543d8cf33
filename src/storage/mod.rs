//! Storage layer for Kimberlynet
//!
//! Holds the listing collection and the filter thresholds in memory, loads
//! them from the data directory at startup and writes them back on exit.

pub mod file_io;
pub mod listings;

pub use file_io::{read_text_required, write_text_atomic};
pub use listings::ListingRepository;

use crate::audit::{AuditEntry, ChangeJournal};
use crate::config::{paths::AppPaths, Settings, Threshold};
use crate::error::ListingError;
use crate::models::Listing;

/// Main storage coordinator owning all session state that gets persisted
pub struct Storage {
    paths: AppPaths,
    pub listings: ListingRepository,
    pub settings: Settings,
    journal: ChangeJournal,
}

impl Storage {
    /// Load listings, then settings, from the data directory
    ///
    /// # Errors
    ///
    /// Fails if either file is missing or malformed.
    pub fn load(paths: AppPaths) -> Result<Self, ListingError> {
        paths.ensure_base_dir()?;

        let mut listings = ListingRepository::new(paths.listings_file());
        listings.load()?;

        let settings = Settings::load(&paths.settings_file())?;

        Ok(Self {
            listings,
            settings,
            journal: ChangeJournal::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Changes not yet written to the audit log
    pub fn journal(&self) -> &ChangeJournal {
        &self.journal
    }

    /// Append a listing after validating it
    pub fn add_listing(&mut self, listing: Listing) -> Result<(), ListingError> {
        let entry = AuditEntry::listing_added(&listing);
        self.listings.add(listing)?;
        self.journal.record(entry);
        Ok(())
    }

    /// Remove the first listing at the given address
    ///
    /// Returns `None` when no listing matches; nothing is recorded then.
    pub fn remove_listing(&mut self, address: &str) -> Option<Listing> {
        let removed = self.listings.remove(address)?;
        self.journal.record(AuditEntry::listing_removed(&removed));
        Some(removed)
    }

    /// Change one threshold, returning the previous value
    pub fn set_threshold(&mut self, value: Threshold) -> Threshold {
        let previous = self.settings.set(value);
        self.journal
            .record(AuditEntry::threshold_changed(previous, value));
        previous
    }

    /// Save settings, then listings, to disk
    pub fn save_all(&mut self) -> Result<(), ListingError> {
        self.settings.save(&self.paths.settings_file())?;
        self.listings.save()?;
        self.journal.record(AuditEntry::session_saved(
            self.listings.count(),
            &self.settings.to_file_string(),
        ));
        Ok(())
    }

    /// Append the session's changes to the audit log
    ///
    /// Failure leaves the data files untouched; callers report it and go on.
    pub fn flush_journal(&mut self) -> Result<usize, ListingError> {
        self.journal.flush()
    }
}
