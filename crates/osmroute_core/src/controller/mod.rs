//! Shell-side route state and its operations.
//!
//! The controller owns the origin/destination pair shown in the shell's
//! input fields and talks to the embedded page only through the
//! [`EmbeddedSurface`](crate::surface::EmbeddedSurface) capability.

mod route_controller;

pub use route_controller::RouteController;
