//! Runtime settings
//!
//! Loaded from an optional JSON file. Every field has a default, so a file
//! only needs the keys it wants to change.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Appearance, Arena, SimConfig};

/// Errors from settings loading
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Frame rate cap
    pub target_fps: u32,
    /// Milliseconds between spawns
    pub spawn_interval_ms: f32,
    /// RNG seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,
    /// Ball sprite; procedural circles when absent or unreadable
    pub sprite_path: Option<PathBuf>,
    /// Quit after this many frames (headless runs)
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            target_fps: TARGET_FPS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            seed: None,
            sprite_path: Some(PathBuf::from("assets/ball.png")),
            max_frames: Some(10 * TARGET_FPS as u64),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, or defaults when no path is given.
    ///
    /// A file that cannot be read or fails validation is logged and
    /// replaced by defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "arena must have positive size, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if self.target_fps == 0 {
            return Err(SettingsError::Invalid("target_fps must be > 0".into()));
        }
        if !(self.spawn_interval_ms > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "spawn_interval_ms must be > 0, got {}",
                self.spawn_interval_ms
            )));
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Configured seed, or one derived from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Simulation parameters for these settings
    pub fn sim_config(&self, seed: u64, appearance: Appearance) -> SimConfig {
        SimConfig {
            seed,
            arena: self.arena(),
            spawn_interval_ms: self.spawn_interval_ms,
            appearance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.arena(), Arena::new(800.0, 600.0));
        assert_eq!(settings.target_fps, 120);
        assert_eq!(settings.spawn_interval_ms, 125.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "arena_width": 400 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.arena_width, 400.0);
        assert_eq!(settings.arena_height, ARENA_HEIGHT);
        assert_eq!(settings.resolve_seed(), 42);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "target_fps": 0 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "spawn_interval_ms": -5 }"#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "arena_height": 0 }"#),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Settings::load_file(Path::new("no/such/settings.json")),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        assert_eq!(Settings::load(None), Settings::default());
        assert_eq!(
            Settings::load(Some(Path::new("no/such/settings.json"))),
            Settings::default()
        );
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "bouncing-balls-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "target_fps": 60, "max_frames": null }"#).unwrap();
        let settings = Settings::load(Some(path.as_path()));
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.max_frames, None);
    }

    #[test]
    fn test_error_messages() {
        let err = Settings::from_json(r#"{ "target_fps": 0 }"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid settings: target_fps must be > 0");
        let err = Settings::from_json("[").unwrap_err();
        assert!(err.to_string().starts_with("malformed settings:"));
    }

    #[test]
    fn test_sim_config() {
        let settings = Settings {
            spawn_interval_ms: 250.0,
            ..Default::default()
        };
        let config = settings.sim_config(7, Appearance::Procedural);
        assert_eq!(config.seed, 7);
        assert_eq!(config.spawn_interval_ms, 250.0);
        assert_eq!(config.arena, settings.arena());
    }
}
