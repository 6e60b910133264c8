//! Library configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Which sink backs the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Flat JSON document.
    #[default]
    Json,
    /// SQLite database.
    Sqlite,
}

/// Settings used by [`crate::session::library::Library::open`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Backing file location.
    pub data_path: PathBuf,
    /// Storage format.
    pub backend: StorageBackend,
    /// Save after every mutation.
    pub autosave: bool,
    /// Indent JSON output.
    pub pretty_json: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("library.json"),
            backend: StorageBackend::Json,
            autosave: true,
            pretty_json: false,
        }
    }
}

impl LibraryConfig {
    /// Reads settings from a TOML, JSON or YAML file; unset keys keep defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }
}
