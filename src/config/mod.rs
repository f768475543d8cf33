//! Configuration module for Kimberlynet
//!
//! This module provides configuration management including:
//! - Data directory and file path resolution
//! - Filter threshold persistence

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{Settings, Threshold, ThresholdKind};
