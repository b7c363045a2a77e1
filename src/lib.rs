//! Densha - Speed-tracker track loader and distance chart model
//!
//! Loads a bundled speed-tracker CSV, trims idle samples at either end and
//! prepares the distance-over-time series with its scroll window and hover
//! selection.

pub mod charts;
pub mod config;
pub mod data;
pub mod stats;
