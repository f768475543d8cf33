//! Core data models for Kimberlynet
//!
//! Listings and the per-session financial parameters.

pub mod listing;
pub mod params;

pub use listing::Listing;
pub use params::SessionParams;
