//! Pre-flight validation and Street View request URL construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::params::{RequestParameters, Source, DEFAULT_FOV, DEFAULT_PITCH, DEFAULT_RADIUS};

/// Street View Static API endpoint.
pub const BASE_URL: &str = "https://maps.googleapis.com/maps/api/streetview";

/// Encode set for the address value: unreserved characters and `/` pass
/// through, everything else (including spaces and commas) is escaped.
const ADDRESS_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Check API key presence, address, and size format.
///
/// Every rule runs independently so one pass reports all problems.
/// An empty size is not an error here; the field has a default upstream.
pub fn validate(api_key_present: bool, address: &str, size: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if !api_key_present {
        errors.push(format!(
            "Google Maps API key not found. Please set the {} variable.",
            crate::node::API_KEY_VARIABLE
        ));
    }

    if address.trim().is_empty() {
        errors.push("Address is required.".to_string());
    }

    if !size.is_empty() && !size_format_is_valid(size) {
        errors.push("Invalid size format. Use 'widthxheight' (e.g., '600x400').".to_string());
    }

    errors
}

/// A size string is `widthxheight` with both dimensions in (0, 640].
fn size_format_is_valid(size: &str) -> bool {
    let lower = size.to_ascii_lowercase();
    let Some((width, height)) = lower.split_once('x') else {
        return false;
    };
    match (width.parse::<u32>(), height.parse::<u32>()) {
        (Ok(w), Ok(h)) => w > 0 && h > 0 && w <= 640 && h <= 640,
        _ => false,
    }
}

/// Build the request URL for a validated parameter set.
///
/// `location`, `size`, and `key` always appear, in that order. Optional
/// parameters follow in a fixed order and only when they differ from their
/// documented default, so identical inputs always yield an identical URL.
/// Only the address value is percent-encoded; the other values come from
/// bounded integer/enum parameters.
pub fn build_url(params: &RequestParameters, api_key: &str) -> String {
    let mut query = vec![
        format!(
            "location={}",
            utf8_percent_encode(&params.address, ADDRESS_ENCODE_SET)
        ),
        format!("size={}", params.size),
        format!("key={}", api_key),
    ];

    if let Some(heading) = params.heading {
        query.push(format!("heading={heading}"));
    }
    if params.fov != DEFAULT_FOV {
        query.push(format!("fov={}", params.fov));
    }
    if params.pitch != DEFAULT_PITCH {
        query.push(format!("pitch={}", params.pitch));
    }
    if params.radius != DEFAULT_RADIUS {
        query.push(format!("radius={}", params.radius));
    }
    if params.source != Source::Default {
        query.push(format!("source={}", params.source));
    }
    if params.return_error_code {
        query.push("return_error_code=true".to_string());
    }

    format!("{}?{}", BASE_URL, query.join("&"))
}
