//! Embedded page bridge.
//!
//! The bridge is the small amount of logic that lives inside the embedded
//! page's execution context. It exists in two coupled forms with one set
//! of semantics:
//!
//! - **Script assets** ([`script`]): the JavaScript actually injected into
//!   the page, rendered from the declared [`PageContract`].
//! - **An executable model** ([`PageBridge`]): the same inbound/outbound
//!   behavior expressed against an abstract [`DocumentModel`], exercised
//!   by the [`HeadlessDocument`] fixture in tests.
//!
//! Everything the bridge does against the page is best-effort: a missing
//! field, control, or chrome element skips that step and surfaces nothing
//! upstream.

mod contract;
mod dom;
mod headless;
mod page_bridge;
pub mod script;

pub use contract::PageContract;
pub use dom::{DocumentModel, ValueObserver};
pub use headless::HeadlessDocument;
pub use page_bridge::PageBridge;
