//! Session settings
//!
//! Loaded from an optional JSON file; every field falls back to the game's
//! default when omitted.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Playfield and session tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub screen_width: f32,
    pub screen_height: f32,
    /// RNG seed; a random seed is drawn when absent
    pub seed: Option<u64>,
    pub star_count: usize,
    /// Seconds between enemy spawns at difficulty 1.0
    pub base_spawn_interval: f32,
    /// Seconds of play for difficulty to rise by 1.0
    pub difficulty_ramp_secs: f32,
    /// Particles per enemy explosion
    pub explosion_particles: usize,
    /// Health the player loses when rammed by an enemy
    pub contact_damage: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            seed: None,
            star_count: STAR_COUNT,
            base_spawn_interval: BASE_SPAWN_INTERVAL,
            difficulty_ramp_secs: DIFFICULTY_RAMP_SECS,
            explosion_particles: EXPLOSION_PARTICLES,
            contact_damage: CONTACT_DAMAGE,
        }
    }
}

impl Settings {
    /// Default settings with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read, parse and validate a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let min_extent = PLAYER_RADIUS * 2.0;
        if !(self.screen_width > min_extent) {
            return Err(SettingsError::Invalid {
                field: "screen_width",
                reason: format!("must exceed the player's diameter ({min_extent})"),
            });
        }
        if !(self.screen_height > min_extent) {
            return Err(SettingsError::Invalid {
                field: "screen_height",
                reason: format!("must exceed the player's diameter ({min_extent})"),
            });
        }
        if !(self.base_spawn_interval > 0.0) {
            return Err(SettingsError::Invalid {
                field: "base_spawn_interval",
                reason: "must be positive".to_string(),
            });
        }
        if !(self.difficulty_ramp_secs > 0.0) {
            return Err(SettingsError::Invalid {
                field: "difficulty_ramp_secs",
                reason: "must be positive".to_string(),
            });
        }
        if self.contact_damage < 0 {
            return Err(SettingsError::Invalid {
                field: "contact_damage",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Playfield size as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bounds(), Vec2::new(800.0, 600.0));
        assert_eq!(settings.explosion_particles, 20);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "screen_width": 1024 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.screen_width, 1024.0);
        assert_eq!(settings.screen_height, SCREEN_HEIGHT);
        assert_eq!(settings.base_spawn_interval, BASE_SPAWN_INTERVAL);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Settings::from_json(r#"{ "gravity": 9.8 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "screen_width": 10 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "screen_width", .. }));

        let err = Settings::from_json(r#"{ "base_spawn_interval": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "base_spawn_interval", .. }));
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings::with_seed(7);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
