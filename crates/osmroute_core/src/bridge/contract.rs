//! Declared contract between the bridge and the embedded page.

use serde::{Deserialize, Serialize};

use crate::protocol::Endpoint;

/// DOM identities and knobs the bridge relies on inside the embedded
/// page.
///
/// Defaults match the OpenStreetMap routing form. Every lookup made from
/// these values is best-effort: a page missing an element degrades
/// silently rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContract {
    /// id of the origin form field.
    #[serde(default = "default_origin_field_id")]
    pub origin_field_id: String,

    /// id of the destination form field.
    #[serde(default = "default_destination_field_id")]
    pub destination_field_id: String,

    /// Class of the page's own submit control; the first match is
    /// clicked.
    #[serde(default = "default_go_control_class")]
    pub go_control_class: String,

    /// Class signatures of chrome hidden by the cleanup pass.
    #[serde(default = "default_hidden_chrome_classes")]
    pub hidden_chrome_classes: Vec<String>,

    /// Tag name of the chrome element hidden by the cleanup pass (first
    /// match).
    #[serde(default = "default_hidden_chrome_tag")]
    pub hidden_chrome_tag: String,

    /// id of the container pinned to the viewport top after cleanup.
    #[serde(default = "default_content_container_id")]
    pub content_container_id: String,

    /// Delay between an observed field assignment and the outbound
    /// report, in milliseconds.
    #[serde(default)]
    pub observe_delay_ms: u64,
}

fn default_origin_field_id() -> String {
    "route_from".to_string()
}

fn default_destination_field_id() -> String {
    "route_to".to_string()
}

fn default_go_control_class() -> String {
    "routing_go".to_string()
}

fn default_hidden_chrome_classes() -> Vec<String> {
    vec![
        "leaflet-top leaflet-right".to_string(),
        "leaflet-control-attribution leaflet-control".to_string(),
    ]
}

fn default_hidden_chrome_tag() -> String {
    "header".to_string()
}

fn default_content_container_id() -> String {
    "content".to_string()
}

impl Default for PageContract {
    fn default() -> Self {
        Self {
            origin_field_id: default_origin_field_id(),
            destination_field_id: default_destination_field_id(),
            go_control_class: default_go_control_class(),
            hidden_chrome_classes: default_hidden_chrome_classes(),
            hidden_chrome_tag: default_hidden_chrome_tag(),
            content_container_id: default_content_container_id(),
            observe_delay_ms: 0,
        }
    }
}

impl PageContract {
    /// Field id for an endpoint.
    pub fn field_id(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Origin => &self.origin_field_id,
            Endpoint::Destination => &self.destination_field_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_osm_routing_form() {
        let contract = PageContract::default();
        assert_eq!(contract.origin_field_id, "route_from");
        assert_eq!(contract.destination_field_id, "route_to");
        assert_eq!(contract.go_control_class, "routing_go");
        assert_eq!(contract.hidden_chrome_tag, "header");
        assert_eq!(contract.observe_delay_ms, 0);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let contract: PageContract = toml::from_str("origin_field_id = \"start\"").unwrap();
        assert_eq!(contract.origin_field_id, "start");
        assert_eq!(contract.destination_field_id, "route_to");
        assert_eq!(contract.hidden_chrome_classes.len(), 2);
    }

    #[test]
    fn field_id_maps_endpoints() {
        let contract = PageContract::default();
        assert_eq!(contract.field_id(Endpoint::Origin), "route_from");
        assert_eq!(contract.field_id(Endpoint::Destination), "route_to");
    }
}
