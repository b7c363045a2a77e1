//! Chart Selection Module
//! Hover-driven selected elapsed time and the annotation it produces.

use crate::charts::{ChartPoint, DistanceSeries};
use serde::Serialize;

/// Pointer state over the chart, x in data coordinates (seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverPhase {
    Active(f64),
    Ended,
}

/// Currently selected elapsed second, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartSelection {
    selected: Option<i64>,
}

impl ChartSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn set(&mut self, elapsed_secs: i64) {
        self.selected = Some(elapsed_secs);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Follow the pointer: active hover selects the nearest whole second,
    /// leaving the chart clears the selection.
    pub fn hover(&mut self, phase: HoverPhase) {
        match phase {
            HoverPhase::Active(x) if x.is_finite() => self.set(x.round() as i64),
            HoverPhase::Active(_) | HoverPhase::Ended => self.clear(),
        }
    }
}

/// Label attached to the selected point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub selected_secs: i64,
    pub point: ChartPoint,
    pub label: String,
}

/// Annotation for the sample nearest to the current selection.
pub fn annotation(series: &DistanceSeries, selection: &ChartSelection) -> Option<Annotation> {
    let selected_secs = selection.selected()?;
    let point = *series.nearest(selected_secs)?;
    Some(Annotation {
        selected_secs,
        label: format!("{}s · {:.2} km", point.elapsed_secs, point.distance_km),
        point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::series::tests::series;

    #[test]
    fn hover_sets_and_clears() {
        let mut sel = ChartSelection::new();
        assert_eq!(sel.selected(), None);

        sel.hover(HoverPhase::Active(12.6));
        assert_eq!(sel.selected(), Some(13));

        sel.hover(HoverPhase::Active(12.4));
        assert_eq!(sel.selected(), Some(12));

        sel.hover(HoverPhase::Ended);
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn non_finite_hover_clears() {
        let mut sel = ChartSelection::new();
        sel.set(4);
        sel.hover(HoverPhase::Active(f64::NAN));
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn annotation_uses_nearest_point() {
        let s = series(&[(0, 0.0), (10, 0.1), (20, 0.2)]);
        let mut sel = ChartSelection::new();
        assert!(annotation(&s, &sel).is_none());

        sel.set(12);
        let note = annotation(&s, &sel).unwrap();
        assert_eq!(note.selected_secs, 12);
        assert_eq!(note.point.elapsed_secs, 10);
        assert_eq!(note.label, "10s · 0.10 km");
    }

    #[test]
    fn annotation_on_empty_series() {
        let mut sel = ChartSelection::new();
        sel.set(1);
        assert!(annotation(&DistanceSeries::default(), &sel).is_none());
    }
}
