//! Wire protocol for the shell/embedded-surface boundary.
//!
//! Both directions carry a single UTF-8 payload with a `:` delimiter:
//! - shell to page: the endpoint pair, positionally
//!   (`"<origin>:<destination>"`),
//! - page to shell: one tagged value (`"from:<value>"` / `"to:<value>"`).
//!
//! Delivery is fire-and-forget in both directions, with no ordering
//! guarantee beyond best effort per sender. Values are not escaped; see
//! [`DELIMITER`] for the consequences.

mod message;

pub use message::{Endpoint, FieldUpdate, RoutePair, DELIMITER};
