use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Build settings, read from an optional TOML file and overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSettings {
    /// Directory for per-device configs, relative to the lab file.
    pub output_dir: PathBuf,
    /// Derived topology file, relative to the lab file.
    pub topology_file: PathBuf,
    /// Apply the per-kind cleanup rules to rewritten configs.
    pub clean: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("new_configs"),
            topology_file: PathBuf::from("topology.yml"),
            clean: true,
        }
    }
}

/// Errors returned when loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load settings from `path`, or defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<BuildSettings, SettingsError> {
    let Some(path) = path else {
        return Ok(BuildSettings::default());
    };
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_settings(&raw, path.display().to_string())
}

fn parse_settings(raw: &str, path: String) -> Result<BuildSettings, SettingsError> {
    toml::from_str(raw).map_err(|source| SettingsError::Parse { path, source })
}
