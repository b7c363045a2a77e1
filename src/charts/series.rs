//! Chart Series Module
//! Distance-versus-elapsed-time line series built from track rows.

use crate::data::{RowId, TrackRow};
use serde::Serialize;
use std::ops::RangeInclusive;

/// One point of the line: x is elapsed seconds, y is cumulative distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub id: RowId,
    pub elapsed_secs: i64,
    pub distance_km: f64,
}

/// Line series in row order.
#[derive(Debug, Clone, Default)]
pub struct DistanceSeries {
    points: Vec<ChartPoint>,
}

impl DistanceSeries {
    pub fn from_rows(rows: &[TrackRow]) -> Self {
        let points = rows
            .iter()
            .map(|r| ChartPoint {
                id: r.id,
                elapsed_secs: r.elapsed_secs,
                distance_km: r.distance_km,
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest elapsed second, or `None` for an empty series.
    pub fn x_domain(&self) -> Option<RangeInclusive<i64>> {
        let min = self.points.iter().map(|p| p.elapsed_secs).min()?;
        let max = self.points.iter().map(|p| p.elapsed_secs).max()?;
        Some(min..=max)
    }

    /// Smallest and largest distance, ignoring NaN.
    pub fn y_domain(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|p| p.distance_km)
            .filter(|d| !d.is_nan())
            .fold(None, |acc, d| match acc {
                None => Some((d, d)),
                Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
            })
    }

    /// Point whose elapsed second is closest to `x`. Ties go to the earlier
    /// point in row order.
    pub fn nearest(&self, x: i64) -> Option<&ChartPoint> {
        self.points
            .iter()
            .min_by_key(|p| p.elapsed_secs.abs_diff(x))
    }

    /// Points with elapsed seconds inside `range`.
    pub fn within(&self, range: RangeInclusive<i64>) -> Vec<ChartPoint> {
        self.points
            .iter()
            .filter(|p| range.contains(&p.elapsed_secs))
            .copied()
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn series(points: &[(i64, f64)]) -> DistanceSeries {
        let rows: Vec<TrackRow> = points
            .iter()
            .enumerate()
            .map(|(i, &(elapsed, distance))| TrackRow {
                date: "2023-06-30".to_string(),
                time: "16:47:04".to_string(),
                elapsed_secs: elapsed,
                distance_km: distance,
                speed_kmh: 10.0,
                latitude: 35.68,
                longitude: 139.76,
                accuracy_m: 5.0,
                altitude_m: 40.0,
                id: RowId(i),
            })
            .collect();
        DistanceSeries::from_rows(&rows)
    }

    #[test]
    fn maps_rows_to_points() {
        let s = series(&[(5, 0.1), (10, 0.2)]);
        assert_eq!(s.points().len(), 2);
        assert_eq!(s.points()[1].id, RowId(1));
        assert_eq!(s.points()[1].elapsed_secs, 10);
        assert_eq!(s.x_domain(), Some(5..=10));
        assert_eq!(s.y_domain(), Some((0.1, 0.2)));
    }

    #[test]
    fn empty_series_has_no_domain() {
        let s = DistanceSeries::default();
        assert!(s.x_domain().is_none());
        assert!(s.y_domain().is_none());
        assert!(s.nearest(3).is_none());
    }

    #[test]
    fn nearest_prefers_earlier_on_tie() {
        let s = series(&[(0, 0.0), (10, 0.1), (20, 0.2)]);
        assert_eq!(s.nearest(14).unwrap().elapsed_secs, 10);
        assert_eq!(s.nearest(15).unwrap().elapsed_secs, 10);
        assert_eq!(s.nearest(16).unwrap().elapsed_secs, 20);
        assert_eq!(s.nearest(-50).unwrap().elapsed_secs, 0);
    }

    #[test]
    fn within_is_inclusive() {
        let s = series(&[(0, 0.0), (10, 0.1), (20, 0.2), (30, 0.3)]);
        let xs: Vec<i64> = s.within(10..=20).iter().map(|p| p.elapsed_secs).collect();
        assert_eq!(xs, vec![10, 20]);
    }
}
