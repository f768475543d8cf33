//! User settings for Kimberlynet
//!
//! The four filter thresholds, persisted as an ordered comma-separated list:
//! max monthly cost, max rent, max area cost, min living space.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ListingError, ListingResult};
use crate::storage::file_io::{read_text_required, write_text_atomic};

/// Number of values stored in the settings file
pub const THRESHOLD_COUNT: usize = 4;

/// Identifies one of the four thresholds by its position in the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdKind {
    MonthlyCost,
    Rent,
    AreaCost,
    LivingSpace,
}

impl ThresholdKind {
    /// All kinds in file order
    pub const ALL: [ThresholdKind; THRESHOLD_COUNT] = [
        Self::MonthlyCost,
        Self::Rent,
        Self::AreaCost,
        Self::LivingSpace,
    ];

    /// Position of this threshold in the settings file
    pub fn index(&self) -> usize {
        match self {
            Self::MonthlyCost => 0,
            Self::Rent => 1,
            Self::AreaCost => 2,
            Self::LivingSpace => 3,
        }
    }
}

impl fmt::Display for ThresholdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthlyCost => write!(f, "monthly cost"),
            Self::Rent => write!(f, "rent"),
            Self::AreaCost => write!(f, "area cost"),
            Self::LivingSpace => write!(f, "living space"),
        }
    }
}

/// A new value for one threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    MonthlyCost(u64),
    Rent(u64),
    AreaCost(u64),
    LivingSpace(f64),
}

impl Threshold {
    /// Which threshold this value belongs to
    pub fn kind(&self) -> ThresholdKind {
        match self {
            Self::MonthlyCost(_) => ThresholdKind::MonthlyCost,
            Self::Rent(_) => ThresholdKind::Rent,
            Self::AreaCost(_) => ThresholdKind::AreaCost,
            Self::LivingSpace(_) => ThresholdKind::LivingSpace,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthlyCost(v) | Self::Rent(v) | Self::AreaCost(v) => write!(f, "{}", v),
            Self::LivingSpace(v) => write!(f, "{}", v),
        }
    }
}

/// The four filter thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Listings must cost strictly less than this per month (kr)
    pub max_monthly_cost: u64,

    /// Listings must have a rent strictly below this (kr)
    pub max_rent: u64,

    /// Listings must cost strictly less than this per area unit (kr/kvm)
    pub max_area_cost: u64,

    /// Listings must be strictly larger than this (kvm)
    pub min_living_space: f64,
}

impl Settings {
    /// Create settings from the four threshold values
    pub fn new(max_monthly_cost: u64, max_rent: u64, max_area_cost: u64, min_living_space: f64) -> Self {
        Self {
            max_monthly_cost,
            max_rent,
            max_area_cost,
            min_living_space,
        }
    }

    /// Current value of one threshold
    pub fn get(&self, kind: ThresholdKind) -> Threshold {
        match kind {
            ThresholdKind::MonthlyCost => Threshold::MonthlyCost(self.max_monthly_cost),
            ThresholdKind::Rent => Threshold::Rent(self.max_rent),
            ThresholdKind::AreaCost => Threshold::AreaCost(self.max_area_cost),
            ThresholdKind::LivingSpace => Threshold::LivingSpace(self.min_living_space),
        }
    }

    /// Replace one threshold, returning the previous value
    pub fn set(&mut self, value: Threshold) -> Threshold {
        let previous = self.get(value.kind());
        match value {
            Threshold::MonthlyCost(v) => self.max_monthly_cost = v,
            Threshold::Rent(v) => self.max_rent = v,
            Threshold::AreaCost(v) => self.max_area_cost = v,
            Threshold::LivingSpace(v) => self.min_living_space = v,
        }
        previous
    }

    /// The thresholds in file order
    pub fn values(&self) -> [Threshold; THRESHOLD_COUNT] {
        ThresholdKind::ALL.map(|kind| self.get(kind))
    }

    /// Load settings from disk
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or does not hold four numeric values.
    pub fn load(path: &Path) -> ListingResult<Self> {
        let contents = read_text_required(path)?;
        Self::parse(&contents, path)
    }

    /// Parse the comma-separated settings list, tolerating a trailing delimiter
    pub fn parse(contents: &str, path: &Path) -> ListingResult<Self> {
        let mut raw: Vec<&str> = contents.split(',').map(str::trim).collect();
        while raw.last().is_some_and(|v| v.is_empty()) {
            raw.pop();
        }

        if raw.len() != THRESHOLD_COUNT {
            return Err(ListingError::format(
                path,
                1,
                format!("expected {} values, found {}", THRESHOLD_COUNT, raw.len()),
            ));
        }

        let int = |kind: ThresholdKind| -> ListingResult<u64> {
            let value = raw[kind.index()];
            value.parse::<u64>().map_err(|_| {
                ListingError::format(path, 1, format!("{} is not a whole number: '{}'", kind, value))
            })
        };

        let area = raw[ThresholdKind::LivingSpace.index()];
        let min_living_space = area
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                ListingError::format(path, 1, format!("living space is not a number: '{}'", area))
            })?;

        Ok(Self {
            max_monthly_cost: int(ThresholdKind::MonthlyCost)?,
            max_rent: int(ThresholdKind::Rent)?,
            max_area_cost: int(ThresholdKind::AreaCost)?,
            min_living_space,
        })
    }

    /// Serialize as each value followed by a delimiter
    pub fn to_file_string(&self) -> String {
        self.values().iter().map(|v| format!("{},", v)).collect()
    }

    /// Save settings to disk
    pub fn save(&self, path: &Path) -> ListingResult<()> {
        write_text_atomic(path, &self.to_file_string())
    }
}
