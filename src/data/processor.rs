//! Data Processor Module
//! Trims idle samples recorded before departure and after arrival.

use crate::data::TrackRow;

/// Rows slower than this (km/h) at either end of a track are idle.
pub const MIN_MOVING_SPEED_KMH: f64 = 1.0;

fn is_idle(row: &TrackRow) -> bool {
    row.speed_kmh < MIN_MOVING_SPEED_KMH
}

/// The window from the first to the last moving row, inclusive.
///
/// Rows inside the window are kept whatever their speed; only the two outer
/// idle runs are cut. Empty when no row is moving.
pub fn moving_span(rows: &[TrackRow]) -> &[TrackRow] {
    let Some(start) = rows.iter().position(|r| !is_idle(r)) else {
        return &[];
    };
    // `start` is moving, so a last moving row exists at or after it
    let end = rows.iter().rposition(|r| !is_idle(r)).unwrap_or(start);
    &rows[start..=end]
}

/// Owned counterpart of [`moving_span`].
pub fn trim_idle(rows: &[TrackRow]) -> Vec<TrackRow> {
    moving_span(rows).to_vec()
}
