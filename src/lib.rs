//! # fightstats
//!
//! Fighter performance ratings computed from career tracking counters.
//!
//! ## Architecture
//!
//! - **models**: Fighter records, weight-class baselines, fights and rating types
//! - **calculate**: The pure rating engine (categories, overall, movement,
//!   breakdown, opponent difficulty, single fights, combinations)
//! - **storage**: JSONL snapshot files and derived reports
//! - **api**: Read-only REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use calculate::RatingEngine;
pub use models::*;
