//! Statistics Calculator Module
//! Descriptive statistics over a trimmed track.

use crate::data::TrackRow;
use serde::Serialize;
use statrs::statistics::{Data, Distribution, Max, Min, OrderStatistics};

/// Speed statistics in km/h. NaN when no finite speed was recorded.
#[derive(Debug, Clone, Serialize)]
pub struct SpeedStats {
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
    pub max: f64,
}

impl Default for SpeedStats {
    fn default() -> Self {
        Self {
            mean: f64::NAN,
            median: f64::NAN,
            p95: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Summary of one track.
#[derive(Debug, Clone, Serialize)]
pub struct TrackSummary {
    pub samples: usize,
    pub start_secs: i64,
    pub end_secs: i64,
    pub duration_secs: i64,
    pub distance_km: f64,
    pub speed_kmh: SpeedStats,
    pub altitude_min_m: f64,
    pub altitude_max_m: f64,
    /// Sum of positive altitude steps between consecutive samples.
    pub altitude_gain_m: f64,
}

impl TrackSummary {
    /// Summarize `rows`. `None` for an empty track.
    pub fn from_rows(rows: &[TrackRow]) -> Option<Self> {
        let first = rows.first()?;
        let last = rows.last()?;

        let altitudes: Vec<f64> = rows
            .iter()
            .map(|r| r.altitude_m)
            .filter(|a| a.is_finite())
            .collect();
        let (altitude_min_m, altitude_max_m) = if altitudes.is_empty() {
            (f64::NAN, f64::NAN)
        } else {
            let data = Data::new(altitudes.clone());
            (data.min(), data.max())
        };

        let altitude_gain_m = altitudes
            .windows(2)
            .map(|w| (w[1] - w[0]).max(0.0))
            .sum();

        Some(Self {
            samples: rows.len(),
            start_secs: first.elapsed_secs,
            end_secs: last.elapsed_secs,
            duration_secs: last.elapsed_secs.saturating_sub(first.elapsed_secs),
            distance_km: last.distance_km - first.distance_km,
            speed_kmh: Self::speed_stats(rows),
            altitude_min_m,
            altitude_max_m,
            altitude_gain_m,
        })
    }

    fn speed_stats(rows: &[TrackRow]) -> SpeedStats {
        let speeds: Vec<f64> = rows
            .iter()
            .map(|r| r.speed_kmh)
            .filter(|s| s.is_finite())
            .collect();
        if speeds.is_empty() {
            return SpeedStats::default();
        }

        let mut data = Data::new(speeds);
        SpeedStats {
            mean: data.mean().unwrap_or(f64::NAN),
            median: data.median(),
            p95: data.percentile(95),
            max: data.max(),
        }
    }
}
