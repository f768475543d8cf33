//! Session parameters
//!
//! Financial inputs captured once at startup and used by every cost
//! computation for the rest of the run.

use serde::{Deserialize, Serialize};

/// Interest, deposit and tax deduction for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Annual interest rate in percent
    pub interest: f64,

    /// Deposit paid up front (kr)
    pub deposit: u64,

    /// Interest deduction rate in percent
    pub deduction: f64,
}

impl SessionParams {
    pub fn new(interest: f64, deposit: u64, deduction: f64) -> Self {
        Self {
            interest,
            deposit,
            deduction,
        }
    }
}
