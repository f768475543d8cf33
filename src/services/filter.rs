//! Filter/sort engine
//!
//! Applies the four threshold predicates to the listing collection and
//! optionally sorts it by one of four keys first.

use std::fmt;

use serde::Serialize;

use crate::config::Settings;
use crate::models::{Listing, SessionParams};

use super::cost::{area_cost, monthly_cost};

/// Key to sort listings by (ascending)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Computed monthly cost
    MonthlyCost,
    /// Raw rent
    Rent,
    /// Computed area cost
    AreaCost,
    /// Raw living area
    Area,
}

impl SortKey {
    /// All keys in menu order
    pub const ALL: [SortKey; 4] = [Self::MonthlyCost, Self::Rent, Self::AreaCost, Self::Area];

    /// Parse a sort key from its menu letter (a-d, case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" => Some(Self::MonthlyCost),
            "b" => Some(Self::Rent),
            "c" => Some(Self::AreaCost),
            "d" => Some(Self::Area),
            _ => None,
        }
    }

    /// Sort value of a listing under this key
    pub fn value(&self, listing: &Listing, params: &SessionParams) -> f64 {
        match self {
            Self::MonthlyCost => monthly_cost(listing, params),
            Self::Rent => listing.rent as f64,
            Self::AreaCost => area_cost(listing),
            Self::Area => listing.area,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthlyCost => write!(f, "Monthly cost"),
            Self::Rent => write!(f, "Rent"),
            Self::AreaCost => write!(f, "Area cost"),
            Self::Area => write!(f, "Area"),
        }
    }
}

/// A listing that passed the filter, with its derived costs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub listing: Listing,
    pub monthly_cost: f64,
    pub area_cost: f64,
}

impl Match {
    fn new(listing: &Listing, params: &SessionParams) -> Self {
        Self {
            listing: listing.clone(),
            monthly_cost: monthly_cost(listing, params),
            area_cost: area_cost(listing),
        }
    }
}

/// Result of a filter run, in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Assortment {
    pub matches: Vec<Match>,
}

impl Assortment {
    /// True when no listing satisfied the thresholds
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// The matching listings without derived costs
    pub fn listings(&self) -> Vec<Listing> {
        self.matches.iter().map(|m| m.listing.clone()).collect()
    }
}

/// Check a listing against all four thresholds (strict inequalities)
pub fn passes(listing: &Listing, settings: &Settings, params: &SessionParams) -> bool {
    monthly_cost(listing, params) < settings.max_monthly_cost as f64
        && listing.rent < settings.max_rent
        && area_cost(listing) < settings.max_area_cost as f64
        && listing.area > settings.min_living_space
}

/// Keep the listings that satisfy every threshold, preserving order
pub fn filter_listings(
    listings: &[Listing],
    settings: &Settings,
    params: &SessionParams,
) -> Assortment {
    Assortment {
        matches: listings
            .iter()
            .filter(|l| passes(l, settings, params))
            .map(|l| Match::new(l, params))
            .collect(),
    }
}

/// Stable ascending sort by the given key
pub fn sort_listings(listings: &[Listing], key: SortKey, params: &SessionParams) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    sorted.sort_by(|a, b| key.value(a, params).total_cmp(&key.value(b, params)));
    sorted
}

/// Sort by the given key, then filter the sorted sequence
pub fn sort_and_filter(
    listings: &[Listing],
    key: SortKey,
    settings: &Settings,
    params: &SessionParams,
) -> Assortment {
    filter_listings(&sort_listings(listings, key, params), settings, params)
}
