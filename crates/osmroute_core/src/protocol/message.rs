//! Message types and their delimited text encoding.

use serde::{Deserialize, Serialize};

/// Delimiter separating tag from value, and origin from destination.
///
/// Values are not escaped. A value containing the delimiter is truncated
/// at its first occurrence by whichever side parses the payload next, so
/// `"A:B"` submitted as an origin reaches the page as `"A"`. The format is
/// kept as-is for compatibility with the deployed page bridge.
pub const DELIMITER: char = ':';

/// Which of the two route endpoints a message addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// The starting location, tagged `from` on the wire.
    Origin,
    /// The ending location, tagged `to` on the wire.
    Destination,
}

impl Endpoint {
    /// Wire tag used in page-to-shell updates.
    pub fn tag(&self) -> &'static str {
        match self {
            Endpoint::Origin => "from",
            Endpoint::Destination => "to",
        }
    }

    /// Look up an endpoint by its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "from" => Some(Endpoint::Origin),
            "to" => Some(Endpoint::Destination),
            _ => None,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A tagged single-field update reported from the page back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// Field the update addresses.
    pub endpoint: Endpoint,
    /// The new value, verbatim.
    pub value: String,
}

impl FieldUpdate {
    pub fn new(endpoint: Endpoint, value: impl Into<String>) -> Self {
        Self {
            endpoint,
            value: value.into(),
        }
    }

    /// Parse a `"<tag>:<value>"` payload.
    ///
    /// Returns `None` for unknown tags and for payloads without a
    /// delimiter. The value is the segment between the first and second
    /// delimiter, so a value containing the delimiter comes back
    /// truncated.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(DELIMITER);
        let endpoint = Endpoint::from_tag(parts.next()?)?;
        let value = parts.next()?;
        Some(Self::new(endpoint, value))
    }

    /// Encode as a `"<tag>:<value>"` payload.
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.endpoint.tag(), DELIMITER, self.value)
    }
}

/// The endpoint pair the shell forwards into the page on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePair {
    pub origin: String,
    pub destination: String,
}

impl RoutePair {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Encode as `"<origin>:<destination>"`, unescaped.
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.origin, DELIMITER, self.destination)
    }

    /// Decode the first two delimiter-separated segments of a payload.
    ///
    /// Returns `None` when the payload has no delimiter. Segments past
    /// the second are dropped, which is how delimiter-bearing values get
    /// corrupted on this side.
    pub fn decode(raw: &str) -> Option<Self> {
        let mut parts = raw.split(DELIMITER);
        let origin = parts.next()?;
        let destination = parts.next()?;
        Some(Self::new(origin, destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tags_round_trip() {
        for endpoint in [Endpoint::Origin, Endpoint::Destination] {
            assert_eq!(Endpoint::from_tag(endpoint.tag()), Some(endpoint));
        }
        assert_eq!(Endpoint::from_tag("bogus"), None);
    }

    #[test]
    fn endpoint_serializes_lowercase() {
        let json = serde_json::to_string(&Endpoint::Origin).unwrap();
        assert_eq!(json, "\"origin\"");
        let parsed: Endpoint = serde_json::from_str("\"destination\"").unwrap();
        assert_eq!(parsed, Endpoint::Destination);
    }

    #[test]
    fn field_update_parses_tagged_payloads() {
        let update = FieldUpdate::parse("from:Paris").unwrap();
        assert_eq!(update.endpoint, Endpoint::Origin);
        assert_eq!(update.value, "Paris");

        let update = FieldUpdate::parse("to:Lyon").unwrap();
        assert_eq!(update.endpoint, Endpoint::Destination);
        assert_eq!(update.value, "Lyon");
    }

    #[test]
    fn field_update_ignores_unknown_tag() {
        assert_eq!(FieldUpdate::parse("bogus:Lyon"), None);
    }

    #[test]
    fn field_update_ignores_missing_delimiter() {
        assert_eq!(FieldUpdate::parse("from"), None);
        assert_eq!(FieldUpdate::parse(""), None);
    }

    #[test]
    fn field_update_keeps_empty_value() {
        let update = FieldUpdate::parse("from:").unwrap();
        assert_eq!(update.value, "");
    }

    #[test]
    fn field_update_truncates_value_at_delimiter() {
        // Known corruption: the unescaped delimiter eats the tail.
        let update = FieldUpdate::parse("from:Ham:burg").unwrap();
        assert_eq!(update.value, "Ham");
    }

    #[test]
    fn field_update_encodes_tag_and_value() {
        let payload = FieldUpdate::new(Endpoint::Destination, "Munich").encode();
        assert_eq!(payload, "to:Munich");
    }

    #[test]
    fn route_pair_round_trips_plain_values() {
        let pair = RoutePair::new("Berlin", "Munich");
        assert_eq!(pair.encode(), "Berlin:Munich");
        assert_eq!(RoutePair::decode("Berlin:Munich"), Some(pair));
    }

    #[test]
    fn route_pair_decode_rejects_missing_delimiter() {
        assert_eq!(RoutePair::decode("Berlin"), None);
    }

    #[test]
    fn route_pair_corrupts_delimiter_bearing_values() {
        // Known corruption: an origin of "A:B" shifts the destination.
        let payload = RoutePair::new("A:B", "Lyon").encode();
        let decoded = RoutePair::decode(&payload).unwrap();
        assert_eq!(decoded.origin, "A");
        assert_eq!(decoded.destination, "B");
    }
}
