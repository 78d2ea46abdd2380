//! Optional TOML configuration.
//!
//! Embedders that prefer files over the builder can drop a `tracelog.toml`
//! in the platform config directory, or point [`Config::load_from`] at any
//! path. String-typed fields are converted with the lenient `parse_*`
//! accessors; bad values fall back to the defaults instead of failing.

mod structs;

pub use structs::{FileConfig, GeneralConfig, TemplatesConfig};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;
use crate::filter::Destination;
use crate::level::Level;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Verbosity and trace settings.
    pub general: GeneralConfig,
    /// Session file location.
    pub file: FileConfig,
    /// Per-sink rendering templates.
    pub templates: TemplatesConfig,
}

impl Config {
    /// Loads configuration from the default location,
    /// `<config-dir>/tracelog/tracelog.toml`. A missing file yields the
    /// defaults.
    ///
    /// # Errors
    /// Returns an error when the config directory cannot be determined, the
    /// file cannot be read, or the TOML fails to parse.
    pub fn load() -> Result<Self, Error> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path. A missing file yields the
    /// defaults.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the default config file path.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn config_path() -> Result<PathBuf, Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("tracelog").join("tracelog.toml"))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Converts the string-typed mode to the enum, defaulting to full
    /// fan-out on unknown values.
    #[must_use]
    pub fn parse_mode(&self) -> Destination {
        self.general
            .mode
            .parse()
            .unwrap_or(Destination::FileAndConsole)
    }

    /// Converts the level-name list to a set, skipping unknown names. An
    /// explicitly empty list disables all console output.
    #[must_use]
    pub fn parse_levels(&self) -> HashSet<Level> {
        self.general
            .levels
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect()
    }
}
