//! Normalization of gateway output shapes.
//!
//! Depending on model and SDK version, the inference service returns a
//! plain URL string, an array of URLs, an object with a `url` field, a
//! prediction object with an `output` field, or inline binary data as a
//! data URI. [`normalize_output`] tries a fixed, ordered chain of typed
//! matchers and fails with a shape descriptor when none apply.

use base64::Engine;

/// Canonical form of a generated asset.
#[derive(Debug, Clone, PartialEq)]
pub enum ImagePayload {
    /// A fetchable URL (possibly time-limited on the gateway side).
    Url(String),
    /// Raw bytes delivered inline.
    Bytes(Vec<u8>),
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The output matched none of the known shapes. The descriptor is
    /// logged for diagnosis; callers surface a generic message.
    #[error("Unrecognized gateway output shape: {shape}")]
    UnrecognizedShape { shape: String },
}

/// Matchers tried in priority order. The order is part of the contract:
/// plain strings win over arrays, arrays over objects, and the `url`
/// field over the `output` field.
const MATCHERS: &[fn(&serde_json::Value) -> Option<ImagePayload>] = &[
    match_url_string,
    match_data_uri,
    match_url_array,
    match_url_field,
    match_output_field,
    match_any_http_value,
];

/// Reduce a raw gateway output value to a canonical [`ImagePayload`].
pub fn normalize_output(value: &serde_json::Value) -> Result<ImagePayload, OutputError> {
    for matcher in MATCHERS {
        if let Some(payload) = matcher(value) {
            return Ok(payload);
        }
    }
    Err(OutputError::UnrecognizedShape {
        shape: describe_shape(value),
    })
}

/// Encode raw bytes as a `data:` URI for inline submission to the
/// gateway.
pub fn to_data_uri(bytes: &[u8], content_type: &str) -> String {
    format!(
        "data:{content_type};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Decode a `data:` URI into its content type and raw bytes. Returns
/// `None` for anything that is not a well-formed base64 data URI.
pub fn from_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (content_type, encoded) = rest.split_once(";base64,")?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .ok()?;
    Some((content_type.to_string(), bytes))
}

// ---------------------------------------------------------------------------
// Matchers
// ---------------------------------------------------------------------------

fn match_url_string(value: &serde_json::Value) -> Option<ImagePayload> {
    let s = value.as_str()?;
    if s.starts_with("http://") || s.starts_with("https://") {
        Some(ImagePayload::Url(s.to_string()))
    } else {
        None
    }
}

fn match_data_uri(value: &serde_json::Value) -> Option<ImagePayload> {
    let (_, bytes) = from_data_uri(value.as_str()?)?;
    Some(ImagePayload::Bytes(bytes))
}

/// An array of outputs: the first element decides.
fn match_url_array(value: &serde_json::Value) -> Option<ImagePayload> {
    let first = value.as_array()?.first()?;
    normalize_output(first).ok()
}

/// An object exposing the asset location as `url`.
fn match_url_field(value: &serde_json::Value) -> Option<ImagePayload> {
    let url = value.as_object()?.get("url")?;
    match_url_string(url)
}

/// A prediction envelope: the real output nests under `output`.
fn match_output_field(value: &serde_json::Value) -> Option<ImagePayload> {
    let inner = value.as_object()?.get("output")?;
    normalize_output(inner).ok()
}

/// Last resort: any string value in the object that looks like a URL.
fn match_any_http_value(value: &serde_json::Value) -> Option<ImagePayload> {
    value
        .as_object()?
        .values()
        .filter_map(|v| v.as_str())
        .find(|s| s.contains("http"))
        .map(|s| ImagePayload::Url(s.to_string()))
}

/// Compact description of a value's shape, for error logging.
fn describe_shape(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".into(),
        serde_json::Value::Bool(_) => "bool".into(),
        serde_json::Value::Number(_) => "number".into(),
        serde_json::Value::String(s) => format!("string(len={})", s.len()),
        serde_json::Value::Array(a) => match a.first() {
            Some(first) => format!("array(len={}, first={})", a.len(), describe_shape(first)),
            None => "array(empty)".into(),
        },
        serde_json::Value::Object(o) => {
            let keys: Vec<_> = o.keys().map(String::as_str).collect();
            format!("object(keys=[{}])", keys.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    const URL: &str = "https://replicate.delivery/pbxt/abc/out.jpg";

    #[test]
    fn string_array_and_url_object_normalize_identically() {
        let shapes = [json!(URL), json!([URL]), json!({ "url": URL })];
        for shape in &shapes {
            assert_eq!(
                normalize_output(shape).unwrap(),
                ImagePayload::Url(URL.to_string()),
                "shape {shape} did not normalize"
            );
        }
    }

    #[test]
    fn prediction_envelope_unwraps_output() {
        let value = json!({ "output": URL });
        assert_eq!(
            normalize_output(&value).unwrap(),
            ImagePayload::Url(URL.to_string())
        );

        // Nested: output holding an array.
        let value = json!({ "output": [URL] });
        assert_eq!(
            normalize_output(&value).unwrap(),
            ImagePayload::Url(URL.to_string())
        );
    }

    #[test]
    fn data_uri_decodes_to_bytes() {
        let uri = to_data_uri(&[1, 2, 3, 4], "image/jpeg");
        assert_eq!(
            normalize_output(&json!(uri)).unwrap(),
            ImagePayload::Bytes(vec![1, 2, 3, 4])
        );
    }

    #[test]
    fn url_field_wins_over_scan() {
        let value = json!({ "other": "https://elsewhere/x.jpg", "url": URL });
        assert_eq!(
            normalize_output(&value).unwrap(),
            ImagePayload::Url(URL.to_string())
        );
    }

    #[test]
    fn scan_finds_a_url_in_unknown_objects() {
        let value = json!({ "weird_key": URL, "n": 3 });
        assert_eq!(
            normalize_output(&value).unwrap(),
            ImagePayload::Url(URL.to_string())
        );
    }

    #[test]
    fn unknown_shapes_carry_a_descriptor() {
        let err = normalize_output(&json!({ "n": 3 })).unwrap_err();
        assert_matches!(
            err,
            OutputError::UnrecognizedShape { ref shape } if shape.contains("object")
        );

        let err = normalize_output(&json!(42)).unwrap_err();
        assert_matches!(err, OutputError::UnrecognizedShape { ref shape } if shape == "number");
    }
}
