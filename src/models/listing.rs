//! Listing model
//!
//! A property for sale: price, living area, monthly rent, a contact phone
//! number and the street address that identifies it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ListingError, ListingResult};

/// A single property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Asking price (kr)
    pub price: u64,

    /// Living space (kvm)
    pub area: f64,

    /// Monthly rent (kr)
    pub rent: u64,

    /// Contact phone number
    pub phone: String,

    /// Street address, used as the key for removal
    pub address: String,
}

impl Listing {
    /// Create a new listing
    pub fn new(
        price: u64,
        area: f64,
        rent: u64,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            price,
            area,
            rent,
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Validate the listing
    ///
    /// Area must be a positive finite number so the area cost is defined.
    pub fn validate(&self) -> ListingResult<()> {
        if !self.area.is_finite() || self.area <= 0.0 {
            return Err(ListingError::Validation(format!(
                "Area must be greater than 0, got {}",
                self.area
            )));
        }

        if self.address.trim().is_empty() {
            return Err(ListingError::Validation(
                "Street address cannot be empty".into(),
            ));
        }

        if self.address.contains(',') || self.phone.contains(',') {
            return Err(ListingError::Validation(
                "Phone number and street address cannot contain commas".into(),
            ));
        }

        Ok(())
    }

    /// Case-insensitive address comparison
    pub fn has_address(&self, address: &str) -> bool {
        self.address.trim().to_lowercase() == address.trim().to_lowercase()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Price: {}", self.price)?;
        writeln!(f, "Area: {}", self.area)?;
        writeln!(f, "Rent: {}", self.rent)?;
        writeln!(f, "Phone number: {}", self.phone)?;
        write!(f, "Street address: {}", self.address)
    }
}
