//! Typed spirograph configuration
//!
//! Organized into two sections:
//! - arm definitions, consumed by the simulation core
//! - display preferences, owned by the host (the core never sees them)
//!
//! Supports JSON and TOML files, dispatched on extension. Defaults are a
//! 1500x800 window at 60 frames per second with circles hidden.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use spirokit_core::Point;
use std::path::{Path, PathBuf};

/// One arm definition at the configuration boundary
///
/// Speed is in degrees per second here; the core converts to radians per
/// second when the chain is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmSettings {
    /// Arm length in pixels
    pub length: f64,
    /// Angular speed in degrees per second (sign selects direction)
    pub speed_deg_per_sec: f64,
}

impl ArmSettings {
    /// Create a new arm definition
    pub fn new(length: f64, speed_deg_per_sec: f64) -> Self {
        Self {
            length,
            speed_deg_per_sec,
        }
    }
}

/// Host display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Simulation ticks (and frames) per second
    pub frame_rate: u32,
    /// Whether to draw each arm's rotation circle
    #[serde(default)]
    pub show_circles: bool,
    /// Stroke color for the arms
    #[serde(default = "default_arm_color")]
    pub arm_color: String,
    /// Stroke color for the traced trail
    #[serde(default = "default_trail_color")]
    pub trail_color: String,
    /// Stroke color for the rotation circles
    #[serde(default = "default_circle_color")]
    pub circle_color: String,
}

fn default_arm_color() -> String {
    "green".to_string()
}

fn default_trail_color() -> String {
    "white".to_string()
}

fn default_circle_color() -> String {
    "blue".to_string()
}

impl DisplaySettings {
    /// The window center, used as the chain anchor
    pub fn center(&self) -> Point {
        Point::new(self.window_width as f64 / 2.0, self.window_height as f64 / 2.0)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            window_width: 1500,
            window_height: 800,
            frame_rate: 60,
            show_circles: false,
            arm_color: default_arm_color(),
            trail_color: default_trail_color(),
            circle_color: default_circle_color(),
        }
    }
}

/// Complete spirograph configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpirographConfig {
    /// Ordered arm definitions, root first
    pub arms: Vec<ArmSettings>,
    /// Display preferences
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Default for SpirographConfig {
    fn default() -> Self {
        Self {
            arms: vec![ArmSettings::new(200.0, 60.0), ArmSettings::new(120.0, -150.0)],
            display: DisplaySettings::default(),
        }
    }
}

impl SpirographConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm lengths in configuration order
    pub fn lengths(&self) -> Vec<f64> {
        self.arms.iter().map(|arm| arm.length).collect()
    }

    /// Arm speeds in degrees per second, in configuration order
    pub fn speeds_deg_per_sec(&self) -> Vec<f64> {
        self.arms.iter().map(|arm| arm.speed_deg_per_sec).collect()
    }

    /// Load a config from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or("none")
                    .to_string(),
            ));
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), arms = config.arms.len(), "loaded config");
        Ok(config)
    }

    /// Save the config to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self).map_err(|e| SettingsError::SaveError(e.to_string()))?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or("none")
                    .to_string(),
            ));
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Validate the configuration
    ///
    /// The same rules the core enforces at chain construction, checked
    /// early so a bad file fails with a settings error that names the key.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.arms.is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "arms".to_string(),
                reason: "at least one arm is required".to_string(),
            });
        }

        for (index, arm) in self.arms.iter().enumerate() {
            if !arm.length.is_finite() || arm.length <= 0.0 {
                return Err(SettingsError::InvalidSetting {
                    key: format!("arms[{}].length", index),
                    reason: format!("must be positive, got {}", arm.length),
                });
            }
            if !arm.speed_deg_per_sec.is_finite() {
                return Err(SettingsError::InvalidSetting {
                    key: format!("arms[{}].speed_deg_per_sec", index),
                    reason: "must be finite".to_string(),
                });
            }
        }

        if self.display.frame_rate == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "display.frame_rate".to_string(),
                reason: "must be > 0".to_string(),
            });
        }
        if self.display.window_width == 0 || self.display.window_height == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "display.window_width/window_height".to_string(),
                reason: "must be > 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Default config file location
/// (`$XDG_CONFIG_HOME/spirokit/config.toml` or platform equivalent)
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))?;
    Ok(dir.join("spirokit").join("config.toml"))
}
