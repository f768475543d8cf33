//! Change records
//!
//! One record per change made during a session: a listing added or removed,
//! a threshold moved, the data files written on exit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Threshold;
use crate::models::Listing;

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    Save,
}

/// What it happened to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Listing,
    Threshold,
    Session,
}

/// A single change, serialized as one JSON line in `audit.log`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,

    /// Street address for listings, threshold name for thresholds
    pub entity_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        before: Option<serde_json::Value>,
        after: Option<serde_json::Value>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            before,
            after,
        }
    }

    /// A listing was appended to the collection
    pub fn listing_added(listing: &Listing) -> Self {
        Self::new(
            Operation::Create,
            EntityType::Listing,
            listing.address.clone(),
            None,
            serde_json::to_value(listing).ok(),
        )
    }

    /// A listing was taken out of the collection
    pub fn listing_removed(listing: &Listing) -> Self {
        Self::new(
            Operation::Delete,
            EntityType::Listing,
            listing.address.clone(),
            serde_json::to_value(listing).ok(),
            None,
        )
    }

    /// A threshold went from `previous` to `current`
    pub fn threshold_changed(previous: Threshold, current: Threshold) -> Self {
        Self::new(
            Operation::Update,
            EntityType::Threshold,
            current.kind().to_string(),
            Some(serde_json::Value::String(previous.to_string())),
            Some(serde_json::Value::String(current.to_string())),
        )
    }

    /// Both data files were written
    pub fn session_saved(listing_count: usize, settings_line: &str) -> Self {
        Self::new(
            Operation::Save,
            EntityType::Session,
            "exit".to_string(),
            None,
            Some(serde_json::json!({
                "listings": listing_count,
                "settings": settings_line,
            })),
        )
    }
}
