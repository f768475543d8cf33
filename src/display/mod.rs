//! Display formatting for terminal output

pub mod listing;

pub use listing::{format_assortment, format_listing_table, format_match, NO_MATCHES, STRIPES};
