//! Settings for locating the track resource and sizing the chart window.

use crate::charts::DEFAULT_VISIBLE_SECS;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Track shipped with the crate.
pub const DEFAULT_RESOURCE_NAME: &str = "speed_tracker_30_Jun_2023_16_47_04";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub resource_dir: PathBuf,
    pub resource_name: String,
    pub visible_secs: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resource_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("resources"),
            resource_name: DEFAULT_RESOURCE_NAME.to_string(),
            visible_secs: DEFAULT_VISIBLE_SECS,
        }
    }
}

impl Settings {
    /// Read settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &data)
    }

    fn parse(path: &Path, data: &str) -> Result<Self, ConfigError> {
        toml::from_str(data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = Settings::parse(Path::new("densha.toml"), "visible_secs = 120\n").unwrap();
        assert_eq!(settings.visible_secs, 120);
        assert_eq!(settings.resource_name, DEFAULT_RESOURCE_NAME);
        assert_eq!(settings.resource_dir, Settings::default().resource_dir);
    }

    #[test]
    fn full_file() {
        let data = "resource_dir = \"/srv/tracks\"\nresource_name = \"commute\"\nvisible_secs = 300\n";
        let settings = Settings::parse(Path::new("densha.toml"), data).unwrap();
        assert_eq!(settings.resource_dir, PathBuf::from("/srv/tracks"));
        assert_eq!(settings.resource_name, "commute");
        assert_eq!(settings.visible_secs, 300);
    }

    #[test]
    fn bad_type_is_parse_error() {
        let err = Settings::parse(Path::new("densha.toml"), "visible_secs = \"ten\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Settings::load(Path::new("/nonexistent/densha.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
