//! Export functionality for Kimberlynet
//!
//! Writes filtered listings to a printout file.

pub mod printout;

pub use printout::{export_printout, write_printout};
