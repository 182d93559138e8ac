//! Gallery configuration loading for the CLI.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::debug;

use vernissage::config::GalleryConfig;

use crate::error::CliError;

/// Load the gallery configuration.
///
/// Uses the explicit path when given; otherwise falls back to `config.toml`
/// in the platform config directory, and to the built-in defaults when no
/// file exists there.
pub fn load_config(path: Option<&String>) -> Result<GalleryConfig, CliError> {
    match path {
        Some(path) => read_config(Path::new(path)),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(GalleryConfig::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<GalleryConfig, CliError> {
    let content = fs::read_to_string(path)?;
    let config: GalleryConfig = toml::from_str(&content).map_err(|err| CliError::Config {
        path: path.display().to_string(),
        err,
    })?;

    debug!(path = path.display().to_string(); "Configuration loaded");

    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vernissage").map(|dirs| dirs.config_dir().join("config.toml"))
}
