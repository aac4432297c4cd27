use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "typetick";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME)
    }

    pub fn config_path() -> PathBuf {
        Self::project()
            .map(|pd| pd.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from(format!("{APP_NAME}_config.json")))
    }

    pub fn log_dir() -> PathBuf {
        Self::project()
            .map(|pd| pd.data_local_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
