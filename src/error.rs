//! Error type for settings and browser/GPU setup

use thiserror::Error;

/// Errors raised while configuring or starting the game
#[derive(Debug, Error)]
pub enum GameError {
    /// A settings value is out of range
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting {
        field: &'static str,
        reason: &'static str,
    },

    /// Settings JSON could not be parsed
    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("failed to read settings file: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Window, document or canvas missing
    #[error("browser setup failed: {0}")]
    Browser(String),

    /// Surface, adapter or device creation failed
    #[error("graphics setup failed: {0}")]
    Graphics(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
