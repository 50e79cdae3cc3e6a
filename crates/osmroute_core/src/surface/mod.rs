//! Embedded surface capability.
//!
//! The embedded browser component is external to this system; the shell
//! only requires that it can hand a text payload to the page's
//! inbound-message channel and evaluate script in the page's execution
//! context. This module declares that capability as a trait so the
//! controller stays independent of any particular webview stack.

use thiserror::Error;

/// Errors from the embedded surface.
///
/// All of them are non-fatal to the shell: a failed delivery means the
/// message is lost, nothing more.
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Embedded surface is not ready: {0}")]
    NotReady(String),

    #[error("Failed to run script in embedded surface: {0}")]
    Script(String),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Capability contract for the embedded browser surface.
pub trait EmbeddedSurface {
    /// Deliver a text payload to the page's inbound-message channel.
    ///
    /// Fire-and-forget: delivery is best effort, unacknowledged, and
    /// never retried.
    fn post_message(&self, payload: &str) -> SurfaceResult<()>;

    /// Evaluate a script in the page's execution context.
    fn run_script(&self, script: &str) -> SurfaceResult<()>;
}
