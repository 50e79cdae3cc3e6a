//! Configuration management for OSM Route Shell.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Defaults for anything missing
//!
//! # Example
//!
//! ```no_run
//! use osmroute_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/osmroute.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Map URL: {}", config.settings().surface.start_url);
//!
//! // Modify a setting
//! config.settings_mut().bridge.observe_delay_ms = 150;
//!
//! // Save just the bridge section atomically
//! config.update_section(ConfigSection::Bridge).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, LoggingSettings, Settings, SurfaceSettings};
