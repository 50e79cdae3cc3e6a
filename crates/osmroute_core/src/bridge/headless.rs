//! Headless document fixture.
//!
//! An in-memory stand-in for the embedded page's document, used to
//! exercise the bridge without a browser. Elements are addressed the same
//! three ways the bridge addresses the real page (id, class signature,
//! tag name), and the fixture tracks value assignments, synthesized
//! change notifications, and clicks for assertions.

use std::collections::HashMap;

use super::dom::{DocumentModel, ValueObserver};

#[derive(Default)]
struct HeadlessElement {
    id: Option<String>,
    class: Option<String>,
    tag: Option<String>,
    value: String,
    change_events: u32,
    clicks: u32,
    hidden: bool,
    pinned_top: bool,
}

/// In-memory document; see the module docs.
#[derive(Default)]
pub struct HeadlessDocument {
    elements: Vec<HeadlessElement>,
    observers: HashMap<String, ValueObserver>,
}

impl HeadlessDocument {
    /// A document shaped like the OpenStreetMap routing page under its
    /// default contract: both route fields, the go control, the chrome
    /// the cleanup pass hides, and the content container.
    pub fn osm_routing_page() -> Self {
        let mut doc = Self::default();
        doc.add_field("route_from");
        doc.add_field("route_to");
        doc.add_classed("routing_go");
        doc.add_classed("leaflet-top leaflet-right");
        doc.add_classed("leaflet-control-attribution leaflet-control");
        doc.add_tagged("header");
        doc.add_container("content");
        doc
    }

    /// Add a form field reachable by `id`, initially empty.
    pub fn add_field(&mut self, id: &str) {
        self.elements.push(HeadlessElement {
            id: Some(id.to_string()),
            ..Default::default()
        });
    }

    /// Add an element reachable by its exact class signature.
    pub fn add_classed(&mut self, class: &str) {
        self.elements.push(HeadlessElement {
            class: Some(class.to_string()),
            ..Default::default()
        });
    }

    /// Add an element reachable by tag name.
    pub fn add_tagged(&mut self, tag: &str) {
        self.elements.push(HeadlessElement {
            tag: Some(tag.to_string()),
            ..Default::default()
        });
    }

    /// Add a container element reachable by `id`.
    pub fn add_container(&mut self, id: &str) {
        self.add_field(id);
    }

    /// Change notifications synthesized on the element with `id`.
    pub fn change_count(&self, id: &str) -> u32 {
        self.by_id(id).map(|e| e.change_events).unwrap_or(0)
    }

    /// Clicks simulated on elements carrying `class`.
    pub fn click_count(&self, class: &str) -> u32 {
        self.elements
            .iter()
            .filter(|e| e.class.as_deref() == Some(class))
            .map(|e| e.clicks)
            .sum()
    }

    /// How many elements carrying `class` are hidden.
    pub fn hidden_count(&self, class: &str) -> usize {
        self.elements
            .iter()
            .filter(|e| e.class.as_deref() == Some(class) && e.hidden)
            .count()
    }

    /// Whether the first element with tag name `tag` is hidden.
    pub fn tag_hidden(&self, tag: &str) -> bool {
        self.elements
            .iter()
            .find(|e| e.tag.as_deref() == Some(tag))
            .map(|e| e.hidden)
            .unwrap_or(false)
    }

    /// Whether the element with `id` has been pinned to the viewport top.
    pub fn pinned_to_top(&self, id: &str) -> bool {
        self.by_id(id).map(|e| e.pinned_top).unwrap_or(false)
    }

    fn by_id(&self, id: &str) -> Option<&HeadlessElement> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id))
    }

    fn by_id_mut(&mut self, id: &str) -> Option<&mut HeadlessElement> {
        self.elements
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id))
    }
}

impl DocumentModel for HeadlessDocument {
    fn set_field_value(&mut self, id: &str, value: &str) -> bool {
        let Some(element) = self.by_id_mut(id) else {
            return false;
        };
        element.value = value.to_string();
        // Assignment through any code path is observed, the same way the
        // property interception behaves in the real page.
        if let Some(observer) = self.observers.get(id) {
            observer(value);
        }
        true
    }

    fn field_value(&self, id: &str) -> Option<String> {
        self.by_id(id).map(|e| e.value.clone())
    }

    fn dispatch_change(&mut self, id: &str) -> bool {
        match self.by_id_mut(id) {
            Some(element) => {
                element.change_events += 1;
                true
            }
            None => false,
        }
    }

    fn click_first(&mut self, class: &str) -> bool {
        match self
            .elements
            .iter_mut()
            .find(|e| e.class.as_deref() == Some(class))
        {
            Some(element) => {
                element.clicks += 1;
                true
            }
            None => false,
        }
    }

    fn hide_all_by_class(&mut self, class: &str) -> usize {
        let mut hidden = 0;
        for element in self
            .elements
            .iter_mut()
            .filter(|e| e.class.as_deref() == Some(class))
        {
            element.hidden = true;
            hidden += 1;
        }
        hidden
    }

    fn hide_first_by_tag(&mut self, tag: &str) -> bool {
        match self
            .elements
            .iter_mut()
            .find(|e| e.tag.as_deref() == Some(tag))
        {
            Some(element) => {
                element.hidden = true;
                true
            }
            None => false,
        }
    }

    fn pin_to_top(&mut self, id: &str) -> bool {
        match self.by_id_mut(id) {
            Some(element) => {
                element.pinned_top = true;
                true
            }
            None => false,
        }
    }

    fn observe_value(&mut self, id: &str, observer: ValueObserver) -> bool {
        if self.by_id(id).is_none() {
            return false;
        }
        self.observers.insert(id.to_string(), observer);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn lookups_on_missing_elements_return_absent() {
        let mut doc = HeadlessDocument::default();
        assert!(!doc.set_field_value("route_from", "x"));
        assert_eq!(doc.field_value("route_from"), None);
        assert!(!doc.dispatch_change("route_from"));
        assert!(!doc.click_first("routing_go"));
        assert_eq!(doc.hide_all_by_class("header-ish"), 0);
        assert!(!doc.hide_first_by_tag("header"));
        assert!(!doc.observe_value("route_from", Box::new(|_| {})));
    }

    #[test]
    fn observer_fires_on_every_assignment() {
        let mut doc = HeadlessDocument::osm_routing_page();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        doc.observe_value(
            "route_from",
            Box::new(move |v| sink.borrow_mut().push(v.to_string())),
        );

        doc.set_field_value("route_from", "a");
        doc.set_field_value("route_from", "b");
        doc.set_field_value("route_to", "c");
        assert_eq!(seen.borrow().as_slice(), ["a", "b"]);
    }

    #[test]
    fn reobserving_replaces_the_previous_observer() {
        let mut doc = HeadlessDocument::osm_routing_page();
        let first = Rc::new(RefCell::new(0u32));
        let second = Rc::new(RefCell::new(0u32));

        let counter = Rc::clone(&first);
        doc.observe_value("route_from", Box::new(move |_| *counter.borrow_mut() += 1));
        let counter = Rc::clone(&second);
        doc.observe_value("route_from", Box::new(move |_| *counter.borrow_mut() += 1));

        doc.set_field_value("route_from", "x");
        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn only_first_matching_control_is_clicked() {
        let mut doc = HeadlessDocument::default();
        doc.add_classed("routing_go");
        doc.add_classed("routing_go");
        doc.click_first("routing_go");
        assert_eq!(doc.click_count("routing_go"), 1);
    }
}
