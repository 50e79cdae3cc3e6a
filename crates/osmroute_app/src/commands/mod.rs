//! Tauri commands exposed to the control window and the map page bridge.

pub mod route;
