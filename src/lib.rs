//! Kimberlynet - Interactive property listing finder
//!
//! This library provides the core functionality for the Kimberlynet terminal
//! tool. Users enter their interest rate, deposit and tax deduction, then
//! filter, sort, add and remove property listings kept in a flat CSV file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file paths and the filter thresholds
//! - `error`: Custom error types
//! - `models`: Listings and session parameters
//! - `storage`: CSV file storage with atomic writes
//! - `services`: Cost calculator and filter/sort engine
//! - `display`: Terminal formatting
//! - `export`: Printout of filtered listings
//! - `audit`: Change log written on exit
//! - `shell`: The interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use kimberlynet::config::AppPaths;
//! use kimberlynet::storage::Storage;
//!
//! let paths = AppPaths::new()?;
//! let storage = Storage::load(paths)?;
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{ListingError, ListingResult};
