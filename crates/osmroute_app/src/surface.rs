//! Embedded surface backed by the Tauri map webview.

use tauri::{AppHandle, Manager};

use osmroute_core::bridge::script;
use osmroute_core::surface::{EmbeddedSurface, SurfaceError, SurfaceResult};

/// Label of the map window.
pub const MAP_WINDOW: &str = "map";

/// Delivers shell messages into the map page by evaluating script in its
/// webview. Inbound payloads arrive as a DOM `message` event, which is
/// what the injected listener subscribes to.
pub struct MapSurface {
    app: AppHandle,
}

impl MapSurface {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl EmbeddedSurface for MapSurface {
    fn post_message(&self, payload: &str) -> SurfaceResult<()> {
        self.run_script(&script::deliver_message_script(payload))
    }

    fn run_script(&self, script: &str) -> SurfaceResult<()> {
        let window = self
            .app
            .get_webview_window(MAP_WINDOW)
            .ok_or_else(|| SurfaceError::NotReady("map window not created".to_string()))?;
        window
            .eval(script)
            .map_err(|e| SurfaceError::Script(e.to_string()))
    }
}
