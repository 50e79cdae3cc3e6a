//! OSM Route Shell core - shell-side logic for the embedded map front-end
//!
//! This crate contains everything that does not touch a window or a
//! webview: the wire protocol crossing the shell/page boundary, the route
//! controller, the embedded page bridge (script assets plus an executable
//! model of them), configuration, and logging.

pub mod bridge;
pub mod config;
pub mod controller;
pub mod logging;
pub mod protocol;
pub mod surface;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
