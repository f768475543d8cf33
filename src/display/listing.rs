//! Listing display formatting
//!
//! Formats listings and filter results for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Listing;
use crate::services::{Assortment, Match};

/// Rule printed between blocks
pub const STRIPES: &str =
    "______________________________________________________________________________________";

/// Message shown when a filter run matched nothing
pub const NO_MATCHES: &str = "No properties matched your requests!";

#[derive(Tabled)]
struct ListingRow {
    #[tabled(rename = "Street address")]
    address: String,
    #[tabled(rename = "Price (kr)")]
    price: u64,
    #[tabled(rename = "Area (kvm)")]
    area: f64,
    #[tabled(rename = "Rent (kr)")]
    rent: u64,
    #[tabled(rename = "Phone number")]
    phone: String,
}

impl From<&Listing> for ListingRow {
    fn from(listing: &Listing) -> Self {
        Self {
            address: listing.address.clone(),
            price: listing.price,
            area: listing.area,
            rent: listing.rent,
            phone: listing.phone.clone(),
        }
    }
}

/// Format all listings as a table
pub fn format_listing_table(listings: &[Listing]) -> String {
    if listings.is_empty() {
        return "No properties found.".to_string();
    }

    let rows: Vec<ListingRow> = listings.iter().map(ListingRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format one matching listing with its derived costs
pub fn format_match(m: &Match) -> String {
    format!(
        "{}\nMonthly cost: {:.2} kr\nArea cost: {:.2} kr/kvm",
        m.listing, m.monthly_cost, m.area_cost
    )
}

/// Format a filter result, one block per match
pub fn format_assortment(assortment: &Assortment) -> String {
    if assortment.is_empty() {
        return format!("\n{}\n", NO_MATCHES);
    }

    let mut output = String::new();
    for m in &assortment.matches {
        output.push_str(&format_match(m));
        output.push('\n');
        output.push_str(STRIPES);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::SessionParams;
    use crate::services::filter_listings;

    fn sample() -> Listing {
        Listing::new(1_000_000, 60.0, 5000, "070", "Main St")
    }

    #[test]
    fn test_table_contains_rows() {
        let table = format_listing_table(&[sample()]);
        assert!(table.contains("Street address"));
        assert!(table.contains("Main St"));
        assert!(table.contains("1000000"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_listing_table(&[]), "No properties found.");
    }

    #[test]
    fn test_format_assortment() {
        let settings = Settings::new(10_000, 8_000, 20_000, 50.0);
        let params = SessionParams::new(3.0, 100_000, 30.0);
        let result = filter_listings(&[sample()], &settings, &params);

        let text = format_assortment(&result);
        assert!(text.contains("Street address: Main St"));
        assert!(text.contains("Monthly cost: 6575.00 kr"));
        assert!(text.contains("Area cost: 16666.67 kr/kvm"));
        assert!(text.contains(STRIPES));
    }

    #[test]
    fn test_format_empty_assortment() {
        let text = format_assortment(&Assortment::default());
        assert!(text.contains(NO_MATCHES));
    }
}
