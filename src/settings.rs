//! Runtime settings, optionally loaded from `settings.json`

use crate::config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of the flow field angles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum FieldMode {
    /// `(cos(x * zoom) + sin(y * zoom)) * curve`
    #[default]
    Procedural,
    /// Grayscale of the rasterized string
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub number_of_particles: usize,
    pub cell_size: u32,
    pub zoom: f32,
    pub curve: f32,
    pub mode: FieldMode,
    pub debug: bool,
    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number_of_particles: config::particles::NUMBER_OF_PARTICLES,
            cell_size: config::field::CELL_SIZE,
            zoom: config::field::ZOOM,
            curve: config::field::CURVE,
            mode: FieldMode::Procedural,
            debug: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Clamp values that would make the grid degenerate
    pub fn validated(mut self) -> Self {
        self.cell_size = self.cell_size.max(1);
        self
    }

    /// Read settings from a JSON file. A missing file is `Ok(None)`.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::SettingsIo {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let settings = serde_json::from_str::<Settings>(&content).map_err(|source| {
            Error::SettingsParse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Some(settings.validated()))
    }

    /// Load from the config directory, falling back to defaults
    pub fn load() -> Self {
        let path = settings_path();
        match Self::from_file(&path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}

/// Get the directory holding `settings.json`
/// - If running from source (binary path contains "target") or FLOW_FIELD_DEV is set: ./tmp/flow-field
/// - Otherwise: the user config directory, e.g. ~/.config/flow-field
pub fn config_dir() -> PathBuf {
    let use_local_storage = std::env::var("FLOW_FIELD_DEV").is_ok()
        || std::env::current_exe()
            .map(|p| p.iter().any(|c| c == "target"))
            .unwrap_or(false);

    if use_local_storage {
        let mut path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        path.push("tmp");
        path.push("flow-field");
        path
    } else {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("flow-field")
    }
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("flow-field-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.number_of_particles, 4000);
        assert_eq!(settings.cell_size, 10);
        assert_eq!(settings.mode, FieldMode::Procedural);
        assert!(!settings.debug);
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = std::env::temp_dir().join("flow-field-does-not-exist.json");
        assert!(Settings::from_file(&path).unwrap().is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_file(
            "partial.json",
            r#"{ "cell_size": 20, "mode": { "kind": "text", "text": "HI" } }"#,
        );
        let settings = Settings::from_file(&path).unwrap().unwrap();
        assert_eq!(settings.cell_size, 20);
        assert_eq!(settings.mode, FieldMode::Text("HI".to_string()));
        assert_eq!(settings.number_of_particles, 4000);
    }

    #[test]
    fn test_zero_cell_size_clamped() {
        let path = temp_file("zero.json", r#"{ "cell_size": 0 }"#);
        let settings = Settings::from_file(&path).unwrap().unwrap();
        assert_eq!(settings.cell_size, 1);
    }

    #[test]
    fn test_malformed_file_errors() {
        let path = temp_file("bad.json", "{ not json");
        assert!(matches!(
            Settings::from_file(&path),
            Err(Error::SettingsParse { .. })
        ));
    }
}
