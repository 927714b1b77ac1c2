//! Configuration and settings management for spirokit
//!
//! Provides the typed configuration the simulation core consumes (arm
//! lengths and speeds, with speeds in degrees per second at this boundary)
//! together with the host-owned display preferences the core deliberately
//! does not know about: window size, frame rate, colors, and the circle
//! toggle.
//!
//! Two on-disk representations are supported:
//! - JSON or TOML documents of the full [`SpirographConfig`]
//! - the legacy one-arm-per-line `length,speed` format ([`legacy`])

pub mod config;
pub mod error;
pub mod legacy;

pub use config::{ArmSettings, DisplaySettings, SpirographConfig};
pub use error::{SettingsError, SettingsResult};
