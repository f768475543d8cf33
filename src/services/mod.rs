//! Business logic layer for Kimberlynet
//!
//! Cost derivation and the filter/sort engine. Both are pure: they read
//! listings and settings and never touch storage.

pub mod cost;
pub mod filter;

pub use cost::{area_cost, monthly_cost};
pub use filter::{filter_listings, sort_and_filter, sort_listings, Assortment, Match, SortKey};
