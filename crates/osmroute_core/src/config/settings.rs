//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level
//! updates.

use serde::{Deserialize, Serialize};

use crate::bridge::PageContract;
use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Embedded map surface settings.
    #[serde(default)]
    pub surface: SurfaceSettings,

    /// Page bridge contract (DOM identities and observation delay).
    #[serde(default)]
    pub bridge: PageContract,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the embedded surface points and how its window presents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceSettings {
    /// URL the map webview loads at startup.
    #[serde(default = "default_start_url")]
    pub start_url: String,

    /// Title of the map window.
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

fn default_start_url() -> String {
    "https://www.openstreetmap.org".to_string()
}

fn default_window_title() -> String {
    "OSM Route Shell".to_string()
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            start_url: default_start_url(),
            window_title: default_window_title(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level (RUST_LOG overrides it).
    #[serde(default)]
    pub level: LogLevel,
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Surface,
    Bridge,
    Logging,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Surface => "surface",
            ConfigSection::Bridge => "bridge",
            ConfigSection::Logging => "logging",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[surface]"));
        assert!(toml.contains("[bridge]"));
        assert!(toml.contains("start_url"));
        assert!(toml.contains("origin_field_id"));
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.surface.start_url, settings.surface.start_url);
        assert_eq!(parsed.bridge, settings.bridge);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[bridge]\nobserve_delay_ms = 150";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        // Custom value preserved
        assert_eq!(parsed.bridge.observe_delay_ms, 150);
        // Defaults applied for missing
        assert_eq!(parsed.bridge.origin_field_id, "route_from");
        assert_eq!(parsed.surface.start_url, "https://www.openstreetmap.org");
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }
}
