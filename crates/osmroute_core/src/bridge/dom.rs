//! Abstract document model the bridge operates against.
//!
//! The real page is driven by injected script; tests drive the headless
//! fixture. Both expose the same narrow set of operations, and every
//! lookup-by-identity is best-effort: an absent element yields a
//! `false`/empty result, never an error.

/// Callback invoked with a field's new value after an observed
/// assignment.
pub type ValueObserver = Box<dyn Fn(&str)>;

/// Operations the bridge needs from the embedded page's document.
pub trait DocumentModel {
    /// Assign a form field's value by element id. Returns false when the
    /// element is absent.
    fn set_field_value(&mut self, id: &str, value: &str) -> bool;

    /// Read a form field's value by element id.
    fn field_value(&self, id: &str) -> Option<String>;

    /// Synthesize a generic change notification on the element, as if the
    /// user had typed the value.
    fn dispatch_change(&mut self, id: &str) -> bool;

    /// Simulate activation of the first element carrying `class`.
    fn click_first(&mut self, class: &str) -> bool;

    /// Hide every element carrying `class`. Returns how many were hidden.
    fn hide_all_by_class(&mut self, class: &str) -> usize;

    /// Hide the first element with tag name `tag`.
    fn hide_first_by_tag(&mut self, tag: &str) -> bool;

    /// Pin the element with `id` to the top of the viewport.
    fn pin_to_top(&mut self, id: &str) -> bool;

    /// Observe value assignment on the field with `id` through any code
    /// path, including the bridge's own writes. Installing again replaces
    /// the previous observer. Returns false when the element is absent.
    fn observe_value(&mut self, id: &str, observer: ValueObserver) -> bool;
}
