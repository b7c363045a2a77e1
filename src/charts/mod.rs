//! Charts module - Distance chart model

mod selection;
mod series;
mod viewport;

pub use selection::{annotation, Annotation, ChartSelection, HoverPhase};
pub use series::{ChartPoint, DistanceSeries};
pub use viewport::{ChartViewport, DEFAULT_VISIBLE_SECS};
