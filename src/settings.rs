//! Game tuning and preferences
//!
//! Persisted as JSON: LocalStorage on the web, a file named by
//! `LASER_DUDE_SETTINGS` natively.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Environment variable naming the native settings file
pub const SETTINGS_ENV: &str = "LASER_DUDE_SETTINGS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    /// Used when the canvas reports no size (and by the native runner)
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Player ===
    /// Acceleration from a held arrow key
    pub player_acceleration: f32,
    /// Inertia lost per second with no key held on an axis
    pub player_friction: f32,
    /// Cap on the per-frame displacement
    pub player_max_speed: f32,
    pub player_spawn_x: f32,
    /// Seconds between shots
    pub fire_cooldown: f32,

    // === Pools ===
    pub laser_pool_size: usize,
    pub enemy_pool_size: usize,

    // === Speeds (px/s) ===
    pub laser_speed: f32,
    pub enemy_speed: f32,
    /// How far past the right edge enemies re-enter
    pub enemy_respawn_offset: f32,

    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,

            player_acceleration: 100.0,
            player_friction: 70.0,
            player_max_speed: 15.0,
            player_spawn_x: 15.0,
            fire_cooldown: 0.5,

            laser_pool_size: 16,
            enemy_pool_size: 8,

            laser_speed: 700.0,
            enemy_speed: 300.0,
            enemy_respawn_offset: 60.0,

            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "laser_dude_settings";

    /// Parse and validate settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<()> {
        fn positive(field: &'static str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(GameError::InvalidSetting {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        fn non_negative(field: &'static str, value: f32) -> Result<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(GameError::InvalidSetting {
                    field,
                    reason: "must be zero or a positive number",
                })
            }
        }

        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("player_acceleration", self.player_acceleration)?;
        non_negative("player_friction", self.player_friction)?;
        positive("player_max_speed", self.player_max_speed)?;
        non_negative("player_spawn_x", self.player_spawn_x)?;
        non_negative("fire_cooldown", self.fire_cooldown)?;
        positive("laser_speed", self.laser_speed)?;
        positive("enemy_speed", self.enemy_speed)?;
        non_negative("enemy_respawn_offset", self.enemy_respawn_offset)?;

        if self.laser_pool_size == 0 {
            return Err(GameError::InvalidSetting {
                field: "laser_pool_size",
                reason: "pool needs at least one slot",
            });
        }
        if self.enemy_pool_size == 0 {
            return Err(GameError::InvalidSetting {
                field: "enemy_pool_size",
                reason: "pool needs at least one slot",
            });
        }
        Ok(())
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Key and JSON value written to LocalStorage
    pub fn storage_record(&self) -> Result<(&'static str, String)> {
        Ok((Self::STORAGE_KEY, self.to_json()?))
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<()> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| GameError::Browser("LocalStorage unavailable".into()))?;

        let (key, json) = self.storage_record()?;
        storage
            .set_item(key, &json)
            .map_err(|e| GameError::Browser(format!("LocalStorage write failed: {e:?}")))?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Load settings from the file named by [`SETTINGS_ENV`], if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from_path(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_path(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "enemy_speed": 450.0, "seed": 9 }"#).unwrap();
        assert_eq!(settings.enemy_speed, 450.0);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.laser_pool_size, 16);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.fire_cooldown = 0.25;
        let parsed = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_storage_record_reloads() {
        let settings = Settings {
            enemy_pool_size: 3,
            seed: Some(77),
            ..Default::default()
        };
        let (key, json) = settings.storage_record().unwrap();
        assert_eq!(key, "laser_dude_settings");
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_empty_pool() {
        let err = Settings::from_json(r#"{ "enemy_pool_size": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidSetting {
                field: "enemy_pool_size",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_speed() {
        let settings = Settings {
            laser_speed: -1.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            player_max_speed: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(GameError::SettingsParse(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("laser_dude_settings_{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(1234),
            ..Default::default()
        };
        settings.save_to_path(&path).unwrap();
        let loaded = Settings::load_from_path(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Settings::load_from_path("/definitely/not/here.json"),
            Err(GameError::SettingsIo(_))
        ));
    }
}
