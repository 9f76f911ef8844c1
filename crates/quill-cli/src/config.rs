//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use quill::{QuillError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for QuillError {
    fn from(err: ConfigError) -> Self {
        QuillError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (quill/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, QuillError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("quill/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "quill", "quill") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file doesn't exist, cannot be read, or is not a
/// valid configuration.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, QuillError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use quill::html::AnchorTarget;
    use tempfile::tempdir;

    #[test]
    fn test_load_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[links]\ntarget = \"blank\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.links().target(), Some(AnchorTarget::Blank));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, QuillError::Config(_)));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[render]\nindentation = { kind = \"dots\", count = 1 }\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, QuillError::Config(_)));
    }
}
