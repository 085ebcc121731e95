/// Storage configuration
use crate::error::{Result, StorageError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "groovy.toml";

/// Environment variable prefix (`GROOVY__DATA_DIR=...`)
pub const ENV_PREFIX: &str = "GROOVY";

/// Where the JSON documents live
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_library_file")]
    pub library_file: String,

    #[serde(default = "default_playlists_file")]
    pub playlists_file: String,

    /// Single-playlist document written by older versions
    #[serde(default = "default_legacy_playlist_file")]
    pub legacy_playlist_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            library_file: default_library_file(),
            playlists_file: default_playlists_file(),
            legacy_playlist_file: default_legacy_playlist_file(),
        }
    }
}

impl StorageConfig {
    /// Keep the default file names under another directory
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from `groovy.toml` and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a file (if it exists) and the environment
    ///
    /// Environment variables override file values.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        if path.exists() {
            settings = settings.add_source(config::File::from(path));
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let files = [
            ("library_file", &self.library_file),
            ("playlists_file", &self.playlists_file),
            ("legacy_playlist_file", &self.legacy_playlist_file),
        ];

        for (key, value) in files {
            if value.trim().is_empty() {
                return Err(StorageError::Config(format!("{} must not be empty", key)));
            }
        }

        if self.playlists_file == self.legacy_playlist_file {
            return Err(StorageError::Config(
                "playlists_file and legacy_playlist_file must differ".to_string(),
            ));
        }

        Ok(())
    }

    pub fn library_path(&self) -> PathBuf {
        self.data_dir.join(&self.library_file)
    }

    pub fn playlists_path(&self) -> PathBuf {
        self.data_dir.join(&self.playlists_file)
    }

    pub fn legacy_playlist_path(&self) -> PathBuf {
        self.data_dir.join(&self.legacy_playlist_file)
    }
}

// Default values
fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_library_file() -> String {
    "songs.json".to_string()
}

fn default_playlists_file() -> String {
    "playlists.json".to_string()
}

fn default_legacy_playlist_file() -> String {
    "playlist.json".to_string()
}
