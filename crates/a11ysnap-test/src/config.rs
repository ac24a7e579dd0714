//! Project-level configuration, loaded from `.a11ysnap.toml`.
//!
//! Lets a project pin the reference directory, turn on record mode,
//! and override the marker palette without touching individual tests.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use a11ysnap_core::{Color, SnapshotConfiguration};

use crate::reference::FileReferenceStore;

/// Errors loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("IO error: {0}")]
    Io(String),
    /// The file is not valid TOML for this schema.
    #[error("parse error: {0}")]
    Parse(String),
}

/// An RGB palette entry as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Workspace-wide snapshot testing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct A11ySnapshotConfig {
    /// Record references instead of comparing against them.
    pub record: bool,
    /// Directory holding reference snapshots, relative to the crate
    /// root.
    pub reference_directory: String,
    /// Marker palette override. Empty means the built-in palette.
    pub marker_palette: Vec<PaletteEntry>,
}

impl Default for A11ySnapshotConfig {
    fn default() -> Self {
        Self {
            record: false,
            reference_directory: "snapshots".to_string(),
            marker_palette: Vec::new(),
        }
    }
}

impl A11ySnapshotConfig {
    /// Default config file name.
    pub const CONFIG_FILE: &'static str = ".a11ysnap.toml";

    /// Parse a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid for this schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Load the configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Save the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml()).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Load from the default config file in the current directory,
    /// falling back to the defaults when the file does not exist.
    #[must_use]
    pub fn load_default() -> Self {
        Self::load_from_file(Path::new(Self::CONFIG_FILE)).unwrap_or_default()
    }

    /// An example config file with the defaults spelled out, for
    /// documentation and scaffolding.
    #[must_use]
    pub fn example() -> String {
        Self::default().to_toml()
    }

    /// A snapshot configuration reflecting the palette override.
    #[must_use]
    pub fn snapshot_configuration(&self) -> SnapshotConfiguration {
        let palette: Vec<Color> = self
            .marker_palette
            .iter()
            .map(|entry| Color::rgb(entry.r, entry.g, entry.b))
            .collect();
        // An empty override falls back inside the builder.
        SnapshotConfiguration::new().with_marker_palette(palette)
    }

    /// A file store rooted at the configured reference directory, with
    /// record mode enabled when the config asks for it.
    #[must_use]
    pub fn file_store(&self) -> FileReferenceStore {
        FileReferenceStore::new(&self.reference_directory).with_record_enabled(self.record)
    }
}
