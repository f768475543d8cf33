//! Main menu
//!
//! Nine numbered choices; the first four show the current thresholds.

use crate::config::Settings;
use crate::display::STRIPES;

/// A main menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ChangeMonthlyCost,
    ChangeRent,
    ChangeAreaCost,
    ChangeLivingSpace,
    CreateAssortment,
    SortByParameter,
    AddProperty,
    RemoveProperty,
    Exit,
}

impl MenuChoice {
    /// Map a menu number (1-9) to a choice
    pub fn from_number(n: u64) -> Option<Self> {
        match n {
            1 => Some(Self::ChangeMonthlyCost),
            2 => Some(Self::ChangeRent),
            3 => Some(Self::ChangeAreaCost),
            4 => Some(Self::ChangeLivingSpace),
            5 => Some(Self::CreateAssortment),
            6 => Some(Self::SortByParameter),
            7 => Some(Self::AddProperty),
            8 => Some(Self::RemoveProperty),
            9 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Parse a menu answer
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<u64>().ok().and_then(Self::from_number)
    }
}

/// Render the menu with the current thresholds
pub fn render_menu(settings: &Settings) -> String {
    format!(
        "\nYour options:\n \
         1 - Change desired monthly costs (< {} kr)\n \
         2 - Change desired rent (< {} kr)\n \
         3 - Change desired area cost (< {} kr)\n \
         4 - Change desired living space (> {} kvm)\n \
         5 - Create assortment\n \
         6 - Sort by parameter\n \
         7 - Add new property\n \
         8 - Remove property\n \
         9 - Exit\n{}",
        settings.max_monthly_cost,
        settings.max_rent,
        settings.max_area_cost,
        settings.min_living_space,
        STRIPES
    )
}

/// Render the sort key choices
pub fn render_sort_keys() -> String {
    " a - Monthly cost\n b - Rent\n c - Area cost\n d - Area\n".to_string()
}
