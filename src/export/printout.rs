//! Printout export
//!
//! Writes the matches of a sort run to a human-readable file: one block per
//! listing with its derived costs, blocks separated by a blank line.

use std::io::Write;
use std::path::Path;

use crate::error::{ListingError, ListingResult};
use crate::services::Assortment;
use crate::storage::file_io::write_atomic_with;

/// Write the printout to any writer
pub fn write_printout<W: Write>(assortment: &Assortment, writer: &mut W) -> ListingResult<()> {
    for m in &assortment.matches {
        write!(
            writer,
            "{}\nMonthly cost: {:.2}\nArea cost: {:.2}\n\n",
            m.listing, m.monthly_cost, m.area_cost
        )
        .map_err(|e| ListingError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Write the printout file, replacing any previous one
pub fn export_printout(path: &Path, assortment: &Assortment) -> ListingResult<()> {
    let mut buffer = Vec::new();
    write_printout(assortment, &mut buffer)?;
    write_atomic_with(path, |writer| writer.write_all(&buffer))
}
