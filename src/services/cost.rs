//! Cost calculator
//!
//! Pure functions deriving the monthly cost and the area cost of a listing.

use crate::models::{Listing, SessionParams};

/// Monthly cost of a listing: rent plus the interest on the financed part of
/// the price, net of the tax deduction, spread over twelve months.
///
/// No clamping is applied: a deposit above the price or a deduction above
/// 100% produces a smaller (possibly negative) cost.
pub fn monthly_cost(listing: &Listing, params: &SessionParams) -> f64 {
    let financed = listing.price as f64 - params.deposit as f64;
    let yearly_interest = financed * (params.interest / 100.0) * (1.0 - params.deduction / 100.0);
    listing.rent as f64 + yearly_interest / 12.0
}

/// Price per unit of living area
///
/// Listings are validated to have a positive area; a zero area yields
/// infinity rather than a panic.
pub fn area_cost(listing: &Listing) -> f64 {
    listing.price as f64 / listing.area
}
