//! Application configuration, stored as TOML in the platform config
//! directory via confy.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_NAME: &str = "libero";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory scanned for scout files and watched in live mode.
    pub scout_directory: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            scout_directory: default_scout_directory(),
        }
    }
}

fn default_scout_directory() -> String {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .map(|p| p.join("scout"))
        .unwrap_or_else(|| PathBuf::from("scout"))
        .to_string_lossy()
        .into_owned()
}

/// Load the stored configuration, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_config() -> AppConfig {
    match confy::load(APP_NAME, None) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            AppConfig::default()
        }
    }
}

pub fn store_config(config: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(APP_NAME, None, config)
}

/// Resolve a scout file path, joining with the configured directory if
/// relative.
pub fn resolve_scout_path(config: &AppConfig, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(&config.scout_directory).join(path)
    }
}
