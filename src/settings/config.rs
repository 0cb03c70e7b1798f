//! Display settings and their optional JSON override file.

use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::commands::NodeType;
use crate::spinner::{SpinnerVariant, UnitAlignment};

/// Environment variable naming the settings file
pub const CONFIG_ENV: &str = "CHAR_SPINNER_CONFIG";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not read settings file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User-facing display options
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Background visuals on or off
    pub visual_mode: bool,
    /// Roll numbers in when they change
    pub animate_numbers: bool,
    pub variant: SpinnerVariant,
    pub unit_alignment: UnitAlignment,
    pub should_always_use_system_language: bool,
    pub node_type: NodeType,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            visual_mode: true,
            animate_numbers: true,
            variant: SpinnerVariant::Large,
            unit_alignment: UnitAlignment::Baseline,
            should_always_use_system_language: false,
            node_type: NodeType::Local,
        }
    }
}

impl DisplaySettings {
    pub fn from_json(path: &Path, json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Settings from the file named by [`CONFIG_ENV`], or defaults.
    ///
    /// A broken file is logged and ignored; startup never fails on settings.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(settings) => {
                log::info!("loaded display settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{err}, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings =
            DisplaySettings::from_json(Path::new("s.json"), r#"{ "variant": "simple" }"#).unwrap();
        assert_eq!(settings.variant, SpinnerVariant::Simple);
        assert!(settings.animate_numbers);
        assert_eq!(settings.node_type, NodeType::Local);
    }

    #[test]
    fn test_full_file() {
        let json = r#"{
            "visual_mode": false,
            "animate_numbers": false,
            "variant": "large",
            "unit_alignment": "center",
            "should_always_use_system_language": true,
            "node_type": "RemoteUntilLocal"
        }"#;
        let settings = DisplaySettings::from_json(Path::new("s.json"), json).unwrap();
        assert!(!settings.visual_mode);
        assert_eq!(settings.unit_alignment, UnitAlignment::Center);
        assert_eq!(settings.node_type, NodeType::RemoteUntilLocal);
        assert!(settings.should_always_use_system_language);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = DisplaySettings::from_json(Path::new("broken.json"), "{ nope").unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = DisplaySettings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
