//! Data module - CSV loading and idle trimming

mod loader;
mod processor;
mod record;

pub use loader::{
    ContentLoader, DecodeError, LoaderError, ResourceBundle, FIELD_DELIMITER, RESOURCE_EXTENSION,
    ROW_DELIMITER,
};
pub use processor::{moving_span, trim_idle, MIN_MOVING_SPEED_KMH};
pub use record::{RowId, TrackRow};
