//! Executable model of the injected page bridge.

use std::rc::Rc;

use tracing::debug;

use super::contract::PageContract;
use super::dom::DocumentModel;
use crate::protocol::{Endpoint, FieldUpdate, RoutePair};

/// The bridge's behavior against a [`DocumentModel`].
///
/// The script assets in [`script`](super::script) realize the same
/// behavior inside the real page; this model is what the tests exercise,
/// through the headless fixture. Outbound messages go to the sink passed
/// at construction (in the real page, the host's message channel).
pub struct PageBridge<D> {
    contract: PageContract,
    document: D,
    outbound: Rc<dyn Fn(String)>,
}

impl<D: DocumentModel> PageBridge<D> {
    pub fn new(contract: PageContract, document: D, outbound: impl Fn(String) + 'static) -> Self {
        Self {
            contract,
            document,
            outbound: Rc::new(outbound),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// One-time cleanup pass hiding page chrome the embedded presentation
    /// does not want. Absent elements are skipped.
    pub fn apply_chrome_cleanup(&mut self) {
        for class in &self.contract.hidden_chrome_classes {
            let hidden = self.document.hide_all_by_class(class);
            debug!(class = %class, hidden, "hid chrome elements");
        }
        if !self.document.hide_first_by_tag(&self.contract.hidden_chrome_tag) {
            debug!(tag = %self.contract.hidden_chrome_tag, "chrome tag not present, skipping");
        }
        if !self.document.pin_to_top(&self.contract.content_container_id) {
            debug!(
                id = %self.contract.content_container_id,
                "content container not present, skipping"
            );
        }
    }

    /// Inbound handler: write both fields, synthesize a change on each,
    /// click the page's go control, then (re)install the value observers.
    ///
    /// Observers land after the writes, so the first message's own writes
    /// are not reported back; writes from later messages are, and the
    /// shell absorbs the echo as a same-value update.
    pub fn handle_message(&mut self, raw: &str) {
        let Some(pair) = RoutePair::decode(raw) else {
            debug!(payload = raw, "ignoring message without delimiter");
            return;
        };

        self.write_field(Endpoint::Origin, &pair.origin);
        self.write_field(Endpoint::Destination, &pair.destination);

        if !self.document.click_first(&self.contract.go_control_class) {
            debug!(class = %self.contract.go_control_class, "go control not present, skipping");
        }

        self.install_observer(Endpoint::Origin);
        self.install_observer(Endpoint::Destination);
    }

    fn write_field(&mut self, endpoint: Endpoint, value: &str) {
        let id = self.contract.field_id(endpoint).to_string();
        if !self.document.set_field_value(&id, value) {
            debug!(%id, "field not present, skipping write");
            return;
        }
        self.document.dispatch_change(&id);
    }

    fn install_observer(&mut self, endpoint: Endpoint) {
        let id = self.contract.field_id(endpoint).to_string();
        let outbound = Rc::clone(&self.outbound);
        let installed = self.document.observe_value(
            &id,
            Box::new(move |new_value| {
                (outbound)(FieldUpdate::new(endpoint, new_value).encode());
            }),
        );
        if !installed {
            debug!(%id, "field not present, skipping observer");
        }
    }
}
