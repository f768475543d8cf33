//! Listing repository for CSV storage
//!
//! Manages loading and saving listings to Sales.csv: one record per line,
//! `price,area,rent,phone,address`, no header and no quoting. A blank line
//! counts as a record with the wrong number of fields.
//!
//! Areas are written back in shortest form, so `60.0` read from the file is
//! saved as `60`.

use std::io;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::{ListingError, ListingResult};
use crate::models::Listing;

use super::file_io::{read_text_required, write_atomic_with};

/// Number of fields in a listing record
pub const FIELD_COUNT: usize = 5;

/// Repository for listing persistence, preserving file order
pub struct ListingRepository {
    path: PathBuf,
    listings: Vec<Listing>,
}

impl ListingRepository {
    /// Create a new, empty listing repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            listings: Vec::new(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load listings from disk, replacing the in-memory collection
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or any record is malformed.
    pub fn load(&mut self) -> ListingResult<()> {
        let contents = read_text_required(&self.path)?;
        self.listings = parse_listings(&contents, &self.path)?;
        Ok(())
    }

    /// Save listings to disk in collection order
    pub fn save(&self) -> ListingResult<()> {
        write_atomic_with(&self.path, |writer| {
            let mut csv_writer = WriterBuilder::new()
                .has_headers(false)
                .quote_style(QuoteStyle::Never)
                .terminator(Terminator::Any(b'\n'))
                .from_writer(&mut *writer);

            for listing in &self.listings {
                csv_writer
                    .write_record(to_record(listing))
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            }

            csv_writer.flush()
        })
    }

    /// Get all listings in order
    pub fn get_all(&self) -> &[Listing] {
        &self.listings
    }

    /// Append a listing
    pub fn add(&mut self, listing: Listing) -> ListingResult<()> {
        listing.validate()?;
        self.listings.push(listing);
        Ok(())
    }

    /// Remove the first listing with the given address (case-insensitive)
    ///
    /// Later listings sharing the address are left in place. Returns `None`
    /// and leaves the collection untouched when nothing matches.
    pub fn remove(&mut self, address: &str) -> Option<Listing> {
        let index = self.listings.iter().position(|l| l.has_address(address))?;
        Some(self.listings.remove(index))
    }

    /// Count listings
    pub fn count(&self) -> usize {
        self.listings.len()
    }

    /// Check if there are no listings
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Parse listing records from file contents
pub fn parse_listings(contents: &str, path: &Path) -> ListingResult<Vec<Listing>> {
    // The csv reader skips empty lines, so catch them first
    if let Some(index) = contents.lines().position(|line| line.trim().is_empty()) {
        return Err(ListingError::format(
            path,
            index + 1,
            format!("expected {} fields, found a blank line", FIELD_COUNT),
        ));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(contents.as_bytes());

    let mut listings = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ListingError::format(path, index + 1, e.to_string()))?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);
        listings.push(parse_record(&record, path, line)?);
    }

    Ok(listings)
}

fn parse_record(record: &StringRecord, path: &Path, line: usize) -> ListingResult<Listing> {
    if record.len() != FIELD_COUNT {
        return Err(ListingError::format(
            path,
            line,
            format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
        ));
    }

    let price = record[0].trim().parse::<u64>().map_err(|_| {
        ListingError::format(path, line, format!("invalid price '{}'", &record[0]))
    })?;
    let area = record[1].trim().parse::<f64>().map_err(|_| {
        ListingError::format(path, line, format!("invalid area '{}'", &record[1]))
    })?;
    let rent = record[2].trim().parse::<u64>().map_err(|_| {
        ListingError::format(path, line, format!("invalid rent '{}'", &record[2]))
    })?;

    if !area.is_finite() || area <= 0.0 {
        return Err(ListingError::format(
            path,
            line,
            format!("area must be greater than 0, got '{}'", &record[1]),
        ));
    }

    Ok(Listing::new(price, area, rent, &record[3], &record[4]))
}

fn to_record(listing: &Listing) -> [String; FIELD_COUNT] {
    [
        listing.price.to_string(),
        listing.area.to_string(),
        listing.rent.to_string(),
        listing.phone.clone(),
        listing.address.clone(),
    ]
}
