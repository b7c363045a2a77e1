//! CSV Data Loader Module
//! Locates bundled speed-tracker resources and decodes them into typed rows.

use crate::data::{RowId, TrackRow};
use csv::StringRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

/// File extension of track resources.
pub const RESOURCE_EXTENSION: &str = "csv";

/// Separator between fields of one line.
pub const FIELD_DELIMITER: &str = ", ";

/// Row separator.
pub const ROW_DELIMITER: char = '\n';

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to read resource: {0}")]
    Io(#[from] std::io::Error),
    #[error("Resource is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("Line {line}: found {found} fields, header has {expected}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: csv::Error,
    },
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Resource not found: {name}")]
    ResourceNotFound { name: String },
    #[error("Failed to decode {name}: {source}")]
    DecodeFailed {
        name: String,
        #[source]
        source: DecodeError,
    },
}

/// Read-only directory of resources, looked up by base name.
#[derive(Debug, Clone)]
pub struct ResourceBundle {
    root: PathBuf,
}

impl ResourceBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `<name>.<extension>` inside the bundle, if such a file exists.
    pub fn url(&self, name: &str, extension: &str) -> Option<PathBuf> {
        let path = self.root.join(format!("{}.{}", name, extension));
        path.is_file().then_some(path)
    }
}

/// Decodes speed-tracker CSV content.
///
/// The first line is the header. Fields are separated by exactly `", "` and
/// rows by `'\n'`; a bare comma belongs to the field it appears in. Columns
/// map to [`TrackRow`] fields by header label, in any order, and unknown
/// columns are ignored.
pub struct ContentLoader;

impl ContentLoader {
    /// Load and decode the resource `name` from `bundle`.
    pub fn load_bundled_content(
        bundle: &ResourceBundle,
        name: &str,
    ) -> Result<Vec<TrackRow>, LoaderError> {
        let path = bundle
            .url(name, RESOURCE_EXTENSION)
            .ok_or_else(|| LoaderError::ResourceNotFound {
                name: name.to_string(),
            })?;

        let bytes = fs::read(&path).map_err(|e| LoaderError::DecodeFailed {
            name: name.to_string(),
            source: DecodeError::from(e),
        })?;

        Self::decode(name, &bytes)
    }

    /// Decode raw CSV bytes. `name` is only used for error reporting.
    ///
    /// Header labels are checked against each data line, so a header-only
    /// input decodes to an empty track even when required columns are absent.
    pub fn decode(name: &str, bytes: &[u8]) -> Result<Vec<TrackRow>, LoaderError> {
        let rows = Self::decode_rows(bytes).map_err(|source| LoaderError::DecodeFailed {
            name: name.to_string(),
            source,
        })?;

        debug!(resource = name, rows = rows.len(), "decoded track resource");
        Ok(rows)
    }

    fn decode_rows(bytes: &[u8]) -> Result<Vec<TrackRow>, DecodeError> {
        let text = std::str::from_utf8(bytes)?;
        let mut lines = text
            .split(ROW_DELIMITER)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| (i + 1, split_fields(line)));

        let Some((_, headers)) = lines.next() else {
            return Ok(Vec::new());
        };

        lines
            .enumerate()
            .map(|(index, (line, record))| {
                if record.len() != headers.len() {
                    return Err(DecodeError::FieldCount {
                        line,
                        expected: headers.len(),
                        found: record.len(),
                    });
                }
                let mut row: TrackRow = record
                    .deserialize(Some(&headers))
                    .map_err(|source| DecodeError::Record { line, source })?;
                row.id = RowId(index);
                Ok(row)
            })
            .collect()
    }

    /// Load `name`, logging any failure and substituting an empty track.
    pub fn load_or_empty(bundle: &ResourceBundle, name: &str) -> Vec<TrackRow> {
        match Self::load_bundled_content(bundle, name) {
            Ok(rows) => rows,
            Err(e) => {
                error!(error = %e, root = %bundle.root().display(), "failed to load track");
                Vec::new()
            }
        }
    }
}

fn split_fields(line: &str) -> StringRecord {
    line.split(FIELD_DELIMITER).collect()
}
