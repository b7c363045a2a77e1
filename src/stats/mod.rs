//! Stats module - Track statistics

mod calculator;

pub use calculator::{SpeedStats, TrackSummary};
