//! Route commands wiring the control window, the controller, and the
//! embedded map page together.

use serde::Serialize;
use tauri::{AppHandle, Emitter, State};

use osmroute_core::controller::RouteController;
use osmroute_core::protocol::Endpoint;

use crate::state::AppState;
use crate::surface::MapSurface;

/// Label of the control window receiving `route-state` events.
const CONTROL_WINDOW: &str = "main";

/// Snapshot of the controller's endpoint pair, mirrored into the control
/// window whenever the embedded page reports a change.
#[derive(Debug, Clone, Serialize)]
pub struct RouteState {
    pub origin: String,
    pub destination: String,
}

impl RouteState {
    fn snapshot(controller: &RouteController<MapSurface>) -> Self {
        Self {
            origin: controller.origin().to_string(),
            destination: controller.destination().to_string(),
        }
    }
}

/// An input field in the control window changed.
#[tauri::command]
pub fn set_endpoint(state: State<'_, AppState>, endpoint: Endpoint, value: String) {
    state
        .controller
        .lock()
        .unwrap()
        .set_endpoint(endpoint, value);
}

/// GO pressed: forward the current pair into the map page.
#[tauri::command]
pub fn submit_route(state: State<'_, AppState>) {
    state.controller.lock().unwrap().submit();
}

/// The injected bridge reported a field assignment inside the map page.
#[tauri::command]
pub fn report_field(app: AppHandle, state: State<'_, AppState>, payload: String) {
    log::debug!("Bridge reported: {payload}");
    let mut controller = state.controller.lock().unwrap();
    controller.on_incoming(&payload);

    // Keep the control window's inputs mirrored. Best effort: a closed
    // window just drops the event.
    let _ = app.emit_to(CONTROL_WINDOW, "route-state", RouteState::snapshot(&controller));
}

/// Current endpoint pair, used by the control window on startup.
#[tauri::command]
pub fn current_route(state: State<'_, AppState>) -> RouteState {
    RouteState::snapshot(&state.controller.lock().unwrap())
}
