//! Initial theme settings.
//!
//! The constants are the build-time defaults. [`ThemeConfig`] is read exactly
//! once when a [`ThemeStore`](crate::ThemeStore) is created; changing it
//! afterwards has no effect on a live store.
//!
//! # Example
//!
//! ```rust
//! use stagelight::{ComponentSkin, ThemeConfig};
//!
//! let config = ThemeConfig::from_toml(r#"
//!     rtl = true
//!     [skins]
//!     header = "red"
//! "#).unwrap();
//!
//! assert!(config.direction.is_rtl());
//! assert_eq!(config.skins.header, ComponentSkin::Red);
//! assert_eq!(config.skins.player, ComponentSkin::Blue);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::mode::{ColorMode, Direction};
use crate::skin::{ComponentSkin, ComponentSkins};

/// Storage key of the persisted color mode.
pub const THEME_MODE_KEY: &str = "themeMode";

pub const DEFAULT_COLOR_MODE: ColorMode = ColorMode::Light;
pub const DEFAULT_DIRECTION: Direction = Direction::Ltr;
pub const DEFAULT_HEADER_SKIN: ComponentSkin = ComponentSkin::Blue;
pub const DEFAULT_SIDEBAR_SKIN: ComponentSkin = ComponentSkin::Blue;
pub const DEFAULT_PLAYER_SKIN: ComponentSkin = ComponentSkin::Blue;

/// Defaults used to seed a new theme store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Mode used when nothing is persisted yet.
    pub mode: ColorMode,
    /// Direction at session start. Never persisted.
    #[serde(with = "rtl_flag", rename = "rtl")]
    pub direction: Direction,
    pub skins: ComponentSkins,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: DEFAULT_COLOR_MODE,
            direction: DEFAULT_DIRECTION,
            skins: ComponentSkins::default(),
        }
    }
}

impl Default for ComponentSkins {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER_SKIN,
            sidebar: DEFAULT_SIDEBAR_SKIN,
            player: DEFAULT_PLAYER_SKIN,
        }
    }
}

impl ThemeConfig {
    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_skins(mut self, skins: ComponentSkins) -> Self {
        self.skins = skins;
        self
    }

    /// Load a config from JSON.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from TOML.
    ///
    /// # Errors
    /// Returns `ConfigError` if parsing fails.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Load a config from a file, choosing the format by extension.
    ///
    /// # Errors
    /// Returns `ConfigError` if reading or parsing fails, or the extension is
    /// neither `toml` nor `json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.into())),
            None => Err(ConfigError::UnsupportedFormat("unknown".into())),
        }
    }
}

/// Serializes [`Direction`] as the `rtl` boolean used in config files.
mod rtl_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::mode::Direction;

    pub fn serialize<S: Serializer>(direction: &Direction, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bool(direction.is_rtl())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Direction, D::Error> {
        bool::deserialize(d).map(Direction::from_rtl)
    }
}
