//! Chart Viewport Module
//! Horizontally scrollable window of fixed length over the series x-domain.

use crate::charts::{ChartPoint, DistanceSeries};
use std::ops::RangeInclusive;

/// Ten minutes of track visible at once.
pub const DEFAULT_VISIBLE_SECS: i64 = 10 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartViewport {
    domain: RangeInclusive<i64>,
    length: i64,
    start: i64,
}

impl ChartViewport {
    /// Viewport at the start of `domain`. A non-positive `length` falls back
    /// to [`DEFAULT_VISIBLE_SECS`].
    pub fn new(domain: RangeInclusive<i64>, length: i64) -> Self {
        let length = if length > 0 { length } else { DEFAULT_VISIBLE_SECS };
        let start = *domain.start();
        Self {
            domain,
            length,
            start,
        }
    }

    /// Viewport over the whole x-domain of `series`; `None` if it is empty.
    pub fn for_series(series: &DistanceSeries, length: i64) -> Option<Self> {
        series.x_domain().map(|domain| Self::new(domain, length))
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    fn max_start(&self) -> i64 {
        self.domain.end().saturating_sub(self.length).max(*self.domain.start())
    }

    pub fn scroll_to(&mut self, start: i64) {
        self.start = start.clamp(*self.domain.start(), self.max_start());
    }

    pub fn scroll_by(&mut self, delta: i64) {
        self.scroll_to(self.start.saturating_add(delta));
    }

    pub fn visible_range(&self) -> RangeInclusive<i64> {
        self.start..=self.start.saturating_add(self.length).min(*self.domain.end())
    }

    pub fn visible_points(&self, series: &DistanceSeries) -> Vec<ChartPoint> {
        series.within(self.visible_range())
    }
}
