use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::{Error, Result};
use crate::session::DEFAULT_TIME_LIMIT_SECS;
use crate::ui::DEFAULT_WRAP_WIDTH;

/// User-authored defaults; the command line overrides each field
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub number_of_words: usize,
    pub time_limit_secs: u64,
    pub wrap_width: usize,
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_of_words: 50,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            wrap_width: DEFAULT_WRAP_WIDTH,
            language: "english".to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.number_of_words == 0 {
            return Err(Error::ConfigInvalid {
                message: "number of words must be at least 1".to_string(),
            });
        }
        if self.wrap_width == 0 {
            return Err(Error::ConfigInvalid {
                message: "wrap width must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Read-only source of stored settings
pub trait ConfigStore {
    fn load(&self) -> Config;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "ignoring unreadable config: {err}");
                Config::default()
            }
        }
    }
}
