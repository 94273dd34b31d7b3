//! Path serialization
//!
//! Produces `/<segment>/<segment>/.../<source>` where segments are sorted
//! lexicographically by their rendered text, independent of insertion order.

use std::collections::BTreeMap;

use super::signer::base64_url_encode;
use crate::constants::{
    ARGUMENT_SEPARATOR, ENCODED_FORMAT_SEPARATOR, PLAIN_FORMAT_SEPARATOR, PLAIN_SOURCE_PREFIX,
};

/// Render one option as `key` or `key:arguments`
pub fn segment(key: &str, arguments: &str) -> String {
    if arguments.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", key, ARGUMENT_SEPARATOR, arguments)
    }
}

/// Encode the source locator in base64 or plain mode, with optional format
pub fn encode_source(locator: &str, plain: bool, format: Option<&str>) -> String {
    let mut encoded = if plain {
        format!("{}{}", PLAIN_SOURCE_PREFIX, query_escape(locator))
    } else {
        base64_url_encode(locator.as_bytes())
    };

    if let Some(format) = format.filter(|f| !f.is_empty()) {
        encoded.push(if plain {
            PLAIN_FORMAT_SEPARATOR
        } else {
            ENCODED_FORMAT_SEPARATOR
        });
        encoded.push_str(format);
    }

    encoded
}

/// Build the full path from the option map and source settings
pub fn serialize_path(
    options: &BTreeMap<String, String>,
    locator: &str,
    plain: bool,
    format: Option<&str>,
) -> String {
    let mut parts: Vec<String> = options
        .iter()
        .map(|(key, arguments)| segment(key, arguments))
        .collect();
    parts.sort();

    tracing::trace!(segments = ?parts, plain, "Serializing imgproxy path");

    parts.push(encode_source(locator, plain, format));
    format!("/{}", parts.join("/"))
}

/// Form-style query escaping: unreserved bytes kept, space as `+`
fn query_escape(value: &str) -> String {
    // urlencoding leaves only A-Z a-z 0-9 - _ . ~ untouched and never emits
    // a literal '%', so every "%20" comes from a space.
    urlencoding::encode(value).replace("%20", "+")
}
