//! Track Record Module
//! One decoded sample from a speed-tracker log.

use serde::{Deserialize, Serialize};

/// Synthetic row identifier: the row's position in the decoded file.
///
/// Assigned at load time. Unique within one load, not stable across reloads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RowId(pub usize);

/// A single GPS/speed sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Elapsed time (sec)")]
    pub elapsed_secs: i64,
    #[serde(rename = "Distance (km)")]
    pub distance_km: f64,
    #[serde(rename = "Speed (km/h)")]
    pub speed_kmh: f64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Accuracy (meters)")]
    pub accuracy_m: f64,
    #[serde(rename = "Altitude (meters)")]
    pub altitude_m: f64,
    #[serde(skip_deserializing)]
    pub id: RowId,
}
