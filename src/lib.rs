//! # Spirokit
//!
//! A spirograph kinematics toolkit: simulate a chain of rotating arms
//! tracing a cumulative path, and export the resulting pattern.
//!
//! ## Architecture
//!
//! Spirokit is organized as a workspace with multiple crates:
//!
//! 1. **spirokit-core** - geometry, the arm chain update engine, trail
//!    accumulation, simulation sessions
//! 2. **spirokit-settings** - typed configuration with JSON/TOML
//!    persistence and the legacy `length,speed` format
//! 3. **spirokit-render** - SVG export of chains and trails
//! 4. **spirokit** - CLI binary that runs a headless simulation

pub use spirokit_render as render;
pub use spirokit_settings as settings;

pub use spirokit_core::{
    Arm, ArmChain, ConfigurationError, Error, Point, Result, Spirograph, Trail,
};
pub use spirokit_render::{RenderError, SvgStyle};
pub use spirokit_settings::{
    ArmSettings, DisplaySettings, SettingsError, SpirographConfig,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
