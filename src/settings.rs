//! Runtime configuration
//!
//! A small JSON file next to the binary. Missing or broken files fall back
//! to defaults, so the game always starts.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TARGET_FPS;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Host-tunable knobs. Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame pacing target; 0 disables pacing entirely
    pub target_fps: u32,
    /// Master seed for the per-scene RNGs; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Paint collider outlines through the debug hook
    pub collider_debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            seed: None,
            collider_debug: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a settings file
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Read a settings file, falling back to defaults when it is absent
    /// or unusable
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(err) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.seed, None);
        assert!(!settings.collider_debug);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_json(r#"{"seed": 7}"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.target_fps, 60);
        assert!(!settings.collider_debug);
    }

    #[test]
    fn test_full_file() {
        let json = r#"{"target_fps": 120, "seed": 99, "collider_debug": true}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.target_fps, 120);
        assert_eq!(settings.seed, Some(99));
        assert!(settings.collider_debug);
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let settings = Settings::load(Path::new("does-not-exist.json"));
        assert_eq!(settings.target_fps, 60);
    }
}
