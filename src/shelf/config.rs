use crate::error::{Result, ShelfError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Session settings, read from `config.json` in the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Invalid answers a prompt accepts before giving up (unbounded if unset)
    #[serde(default)]
    pub max_attempts: Option<usize>,

    /// Colored messages
    #[serde(default = "default_color")]
    pub color: bool,

    /// Log filter for the `shelf` target when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            max_attempts: None,
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl ShelfConfig {
    /// Where the config lives when no path is given on the command line.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "shelf", "shelf").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_attempts == Some(0) {
            return Err(ShelfError::Config(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
