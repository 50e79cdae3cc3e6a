//! Tauri application library entry point.
//!
//! The shell owns two windows: the control window ("main", bundled static
//! assets with the From/To inputs and the GO button) and the map window
//! ("map", pointed at the configured remote URL). The page bridge's
//! listener script is injected into the map window before content loads;
//! the chrome-cleanup script runs once the page finishes loading.

mod commands;
mod state;
mod surface;

use std::path::PathBuf;
use std::sync::Mutex;

use tauri::webview::PageLoadEvent;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

use osmroute_core::bridge::script;
use osmroute_core::config::ConfigManager;
use osmroute_core::controller::RouteController;

/// JS expression the injected listener uses to hand a payload back to the
/// shell; resolves to the `report_field` command.
const REPORT_FIELD_CALL: &str =
    "function (payload) { window.__TAURI_INTERNALS__.invoke('report_field', { payload: payload }); }";

/// Default config path: .config/osmroute.toml (relative to current
/// working directory).
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("osmroute.toml")
}

/// Application entry point. Sets up plugins, windows, and shared state.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                // Use Debug level in development, Info in production
                .level(if cfg!(debug_assertions) {
                    log::LevelFilter::Debug
                } else {
                    log::LevelFilter::Info
                })
                .targets([
                    // Always log to stdout for development
                    tauri_plugin_log::Target::new(tauri_plugin_log::TargetKind::Stdout),
                    // Log to webview console for development
                    tauri_plugin_log::Target::new(tauri_plugin_log::TargetKind::Webview),
                ])
                .build(),
        )
        .setup(|app| {
            // Load configuration (created with defaults on first run)
            let mut config = ConfigManager::new(default_config_path());
            if let Err(e) = config.load_or_create() {
                log::warn!("Failed to load config: {e}. Using defaults.");
            }

            // Core diagnostics go through tracing
            osmroute_core::logging::init_tracing(config.settings().logging.level);

            log::info!("OSM Route Shell starting");
            log::info!("Config: {}", config.path().display());
            log::info!("Core version: {}", osmroute_core::version());

            let contract = config.settings().bridge.clone();
            let surface_settings = config.settings().surface.clone();

            // Render the bridge scripts once from the contract
            let listener = script::listener_script(&contract, REPORT_FIELD_CALL);
            let cleanup = script::cleanup_script(&contract);

            // Map window: remote page + injected bridge
            let map_url: tauri::Url = surface_settings.start_url.parse()?;
            WebviewWindowBuilder::new(app, surface::MAP_WINDOW, WebviewUrl::External(map_url))
                .title(&surface_settings.window_title)
                .initialization_script(listener.as_str())
                .on_page_load(move |window, payload| {
                    if let PageLoadEvent::Finished = payload.event() {
                        log::debug!("Map page loaded: {}", payload.url());
                        if let Err(e) = window.eval(cleanup.as_str()) {
                            log::warn!("Failed to run chrome cleanup: {e}");
                        }
                    }
                })
                .build()?;

            // Controller talks to the map window through the surface
            // capability; it never sees the webview directly.
            let mut controller = RouteController::new();
            controller.attach_surface(surface::MapSurface::new(app.handle().clone()));

            app.manage(state::AppState {
                controller: Mutex::new(controller),
                config: Mutex::new(config),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::route::set_endpoint,
            commands::route::submit_route,
            commands::route::report_field,
            commands::route::current_route,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
