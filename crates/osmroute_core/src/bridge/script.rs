//! Injected script assets.
//!
//! The bridge ships to the page as two staged scripts rendered from the
//! [`PageContract`]: a listener script injected before content load and a
//! chrome-cleanup script evaluated after load. Rendering is plain string
//! templating so the assets stay inspectable; the version marker in the
//! leading comment lets logs match the shell half to the page half.
//!
//! The outbound channel differs per surface implementation, so the
//! listener takes the host-call expression as a parameter: a JS function
//! expression accepting one string argument.

use super::contract::PageContract;
use crate::protocol::{Endpoint, DELIMITER};

/// Version marker stamped into both rendered assets.
pub const SCRIPT_VERSION: &str = "1.0";

/// Render the inbound listener + value observation script.
///
/// `post_call` is the JS expression the page uses to send a payload back
/// to the shell, e.g. a closure over the host's IPC entry point.
pub fn listener_script(contract: &PageContract, post_call: &str) -> String {
    let delim = js_string(&DELIMITER.to_string());
    let origin_id = js_string(&contract.origin_field_id);
    let destination_id = js_string(&contract.destination_field_id);
    let go_class = js_string(&contract.go_control_class);
    let from_tag = js_string(Endpoint::Origin.tag());
    let to_tag = js_string(Endpoint::Destination.tag());
    let delay = contract.observe_delay_ms;

    let mut script = String::new();
    script.push_str(&format!("// osmroute bridge listener v{SCRIPT_VERSION}\n"));
    script.push_str("(function () {\n");
    script.push_str("  'use strict';\n");
    script.push_str(&format!("  var post = {post_call};\n"));
    script.push_str("  function observeValue(element, report) {\n");
    script.push_str("    var proto = Object.getPrototypeOf(element);\n");
    script.push_str("    if (!proto.hasOwnProperty('value')) {\n");
    script.push_str("      return;\n");
    script.push_str("    }\n");
    script.push_str("    var descriptor = Object.getOwnPropertyDescriptor(proto, 'value');\n");
    script.push_str("    Object.defineProperty(element, 'value', {\n");
    script.push_str("      get: function () {\n");
    script.push_str("        return descriptor.get.apply(this, arguments);\n");
    script.push_str("      },\n");
    script.push_str("      set: function () {\n");
    script.push_str("        descriptor.set.apply(this, arguments);\n");
    script.push_str("        var newValue = descriptor.get.apply(this);\n");
    script.push_str(&format!(
        "        setTimeout(function () {{ report(newValue); }}, {delay});\n"
    ));
    script.push_str("      }\n");
    script.push_str("    });\n");
    script.push_str("  }\n");
    script.push_str("  document.addEventListener('message', function (event) {\n");
    script.push_str(&format!(
        "    var parts = String(event.data).split({delim});\n"
    ));
    script.push_str("    if (parts.length < 2) {\n");
    script.push_str("      return;\n");
    script.push_str("    }\n");
    script.push_str(&format!(
        "    var originField = document.getElementById({origin_id});\n"
    ));
    script.push_str(&format!(
        "    var destinationField = document.getElementById({destination_id});\n"
    ));
    script.push_str("    if (originField) {\n");
    script.push_str("      originField.value = parts[0];\n");
    script.push_str("      originField.dispatchEvent(new Event('change'));\n");
    script.push_str("    }\n");
    script.push_str("    if (destinationField) {\n");
    script.push_str("      destinationField.value = parts[1];\n");
    script.push_str("      destinationField.dispatchEvent(new Event('change'));\n");
    script.push_str("    }\n");
    script.push_str(&format!(
        "    var go = document.getElementsByClassName({go_class})[0];\n"
    ));
    script.push_str("    if (go) {\n");
    script.push_str("      go.click();\n");
    script.push_str("    }\n");
    script.push_str("    if (originField) {\n");
    script.push_str("      observeValue(originField, function (value) {\n");
    script.push_str(&format!("        post({from_tag} + {delim} + value);\n"));
    script.push_str("      });\n");
    script.push_str("    }\n");
    script.push_str("    if (destinationField) {\n");
    script.push_str("      observeValue(destinationField, function (value) {\n");
    script.push_str(&format!("        post({to_tag} + {delim} + value);\n"));
    script.push_str("      });\n");
    script.push_str("    }\n");
    script.push_str("  });\n");
    script.push_str("})();\n");
    script
}

/// Render the one-time chrome-cleanup script.
pub fn cleanup_script(contract: &PageContract) -> String {
    let mut script = String::new();
    script.push_str(&format!("// osmroute bridge cleanup v{SCRIPT_VERSION}\n"));
    script.push_str("(function () {\n");
    script.push_str("  'use strict';\n");
    script.push_str("  var list;\n");
    script.push_str("  var index;\n");
    for class in &contract.hidden_chrome_classes {
        script.push_str(&format!(
            "  list = document.getElementsByClassName({});\n",
            js_string(class)
        ));
        script.push_str("  for (index = 0; index < list.length; index++) {\n");
        script.push_str("    list[index].style.display = 'none';\n");
        script.push_str("  }\n");
    }
    script.push_str(&format!(
        "  var tagged = document.getElementsByTagName({})[0];\n",
        js_string(&contract.hidden_chrome_tag)
    ));
    script.push_str("  if (tagged) {\n");
    script.push_str("    tagged.style.display = 'none';\n");
    script.push_str("  }\n");
    script.push_str(&format!(
        "  var content = document.getElementById({});\n",
        js_string(&contract.content_container_id)
    ));
    script.push_str("  if (content) {\n");
    script.push_str("    content.style.top = 0;\n");
    script.push_str("  }\n");
    script.push_str("})();\n");
    script
}

/// Render the host-side delivery script dispatching a payload onto the
/// page's inbound-message channel.
pub fn deliver_message_script(payload: &str) -> String {
    format!(
        "document.dispatchEvent(new MessageEvent('message', {{ data: {} }}));",
        js_string(payload)
    )
}

/// Quote a value as a single-quoted JS string literal.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
