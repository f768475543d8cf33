//! Change log for Kimberlynet
//!
//! Records the changes made during a session (listings added or removed,
//! thresholds changed, the save on exit) and appends them to `audit.log`
//! when the session saves.

mod entry;
mod journal;

pub use entry::{AuditEntry, EntityType, Operation};
pub use journal::ChangeJournal;
