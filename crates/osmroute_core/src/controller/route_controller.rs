//! The shell controller.

use tracing::{debug, warn};

use crate::protocol::{Endpoint, FieldUpdate, RoutePair};
use crate::surface::EmbeddedSurface;

/// Owns the shell's endpoint pair and the optional embedded-surface
/// handle.
///
/// State starts empty and lives for the process lifetime; nothing is
/// persisted. The controller is authoritative for the shell's inputs and
/// the page's DOM fields are authoritative for the page; the two converge
/// through the message channel, last write observed wins.
#[derive(Debug, Default)]
pub struct RouteController<S> {
    origin: String,
    destination: String,
    surface: Option<S>,
}

impl<S: EmbeddedSurface> RouteController<S> {
    pub fn new() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            surface: None,
        }
    }

    /// Attach the embedded surface once it exists. Until then, submits
    /// are dropped silently.
    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Origin => &self.origin,
            Endpoint::Destination => &self.destination,
        }
    }

    /// Apply an edit coming from the shell's own input fields.
    pub fn set_endpoint(&mut self, endpoint: Endpoint, value: impl Into<String>) {
        match endpoint {
            Endpoint::Origin => self.origin = value.into(),
            Endpoint::Destination => self.destination = value.into(),
        }
    }

    /// Forward the current endpoint pair into the embedded page.
    ///
    /// No-op with a warning when either field is empty; no-op when no
    /// surface is attached. Fire-and-forget: the send is not retried and
    /// no acknowledgment is awaited.
    pub fn submit(&self) {
        if self.origin.is_empty() || self.destination.is_empty() {
            warn!("route fields cannot be blank, ignoring submit");
            return;
        }

        let Some(surface) = &self.surface else {
            debug!("no embedded surface attached, dropping submit");
            return;
        };

        let payload = RoutePair::new(&self.origin, &self.destination).encode();
        if let Err(e) = surface.post_message(&payload) {
            debug!("embedded surface did not take the route payload: {e}");
        }
    }

    /// Apply a tagged update reported from the embedded page.
    ///
    /// Unknown tags and payloads without a delimiter are ignored.
    pub fn on_incoming(&mut self, raw: &str) {
        let Some(update) = FieldUpdate::parse(raw) else {
            debug!(payload = raw, "ignoring unrecognized page message");
            return;
        };
        self.set_endpoint(update.endpoint, update.value);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::surface::SurfaceResult;

    /// Records every posted payload for assertions.
    #[derive(Default)]
    struct RecordingSurface {
        sent: RefCell<Vec<String>>,
    }

    impl EmbeddedSurface for RecordingSurface {
        fn post_message(&self, payload: &str) -> SurfaceResult<()> {
            self.sent.borrow_mut().push(payload.to_string());
            Ok(())
        }

        fn run_script(&self, _script: &str) -> SurfaceResult<()> {
            Ok(())
        }
    }

    fn controller_with_surface() -> RouteController<RecordingSurface> {
        let mut controller = RouteController::new();
        controller.attach_surface(RecordingSurface::default());
        controller
    }

    fn sent(controller: &RouteController<RecordingSurface>) -> Vec<String> {
        controller.surface.as_ref().unwrap().sent.borrow().clone()
    }

    #[test]
    fn submit_posts_the_delimited_pair() {
        let mut controller = controller_with_surface();
        controller.set_endpoint(Endpoint::Origin, "Berlin");
        controller.set_endpoint(Endpoint::Destination, "Munich");
        controller.submit();
        assert_eq!(sent(&controller), vec!["Berlin:Munich".to_string()]);
    }

    #[test]
    fn submit_with_empty_field_sends_nothing() {
        let mut controller = controller_with_surface();
        controller.set_endpoint(Endpoint::Origin, "Berlin");
        controller.submit();
        assert!(sent(&controller).is_empty());

        controller.set_endpoint(Endpoint::Origin, "");
        controller.set_endpoint(Endpoint::Destination, "Munich");
        controller.submit();
        assert!(sent(&controller).is_empty());
        assert_eq!(controller.origin(), "");
        assert_eq!(controller.destination(), "Munich");
    }

    #[test]
    fn submit_without_surface_is_silent() {
        let mut controller: RouteController<RecordingSurface> = RouteController::new();
        controller.set_endpoint(Endpoint::Origin, "Berlin");
        controller.set_endpoint(Endpoint::Destination, "Munich");
        controller.submit();
    }

    #[test]
    fn incoming_from_updates_only_origin() {
        let mut controller = controller_with_surface();
        controller.set_endpoint(Endpoint::Destination, "Lyon");
        controller.on_incoming("from:Paris");
        assert_eq!(controller.origin(), "Paris");
        assert_eq!(controller.destination(), "Lyon");
    }

    #[test]
    fn incoming_to_updates_only_destination() {
        let mut controller = controller_with_surface();
        controller.set_endpoint(Endpoint::Origin, "Paris");
        controller.on_incoming("to:Lyon");
        assert_eq!(controller.origin(), "Paris");
        assert_eq!(controller.destination(), "Lyon");
    }

    #[test]
    fn incoming_unknown_tag_changes_nothing() {
        let mut controller = controller_with_surface();
        controller.set_endpoint(Endpoint::Origin, "Paris");
        controller.set_endpoint(Endpoint::Destination, "Lyon");
        controller.on_incoming("bogus:Lyon");
        assert_eq!(controller.origin(), "Paris");
        assert_eq!(controller.destination(), "Lyon");
    }

    #[test]
    fn incoming_without_delimiter_changes_nothing() {
        let mut controller = controller_with_surface();
        controller.on_incoming("garbage");
        assert_eq!(controller.origin(), "");
        assert_eq!(controller.destination(), "");
    }

    #[test]
    fn incoming_value_is_truncated_at_delimiter() {
        // Known corruption from the unescaped wire format.
        let mut controller = controller_with_surface();
        controller.on_incoming("from:Ham:burg");
        assert_eq!(controller.origin(), "Ham");
    }
}
