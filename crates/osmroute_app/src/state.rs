//! Shared application state.
//!
//! Managed via `tauri::Manager::manage()` and accessed in commands via
//! `tauri::State`. The controller is single-owner state behind a mutex
//! only because command dispatch may come from any thread; nothing holds
//! the lock across a send.

use std::sync::Mutex;

use osmroute_core::config::ConfigManager;
use osmroute_core::controller::RouteController;

use crate::surface::MapSurface;

/// Application state shared across Tauri commands.
pub struct AppState {
    /// Shell-side route state and its surface handle.
    pub controller: Mutex<RouteController<MapSurface>>,
    /// Loaded configuration.
    pub config: Mutex<ConfigManager>,
}
