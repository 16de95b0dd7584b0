//! Log Redaction Layer
//!
//! Image payloads can be megabytes of base64; they are replaced with a size
//! marker before a request or response body reaches the log.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Inline data URLs with a base64 body.
static DATA_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"data:[A-Za-z0-9.+/-]+;base64,[A-Za-z0-9+/=]+").unwrap());

/// Bare base64 runs long enough to be an image rather than an identifier.
static BASE64_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9+/]{256,}={0,2}").unwrap());

/// JSON keys whose string values are always image payloads.
const IMAGE_KEYS: &[&str] = &["image", "image_base64", "data_url", "dataUrl"];

/// Redacts base64 image data in free text.
pub fn redact_image_payloads(input: &str) -> String {
    let redacted = DATA_URL_RE.replace_all(input, |caps: &regex::Captures| {
        format!("[REDACTED_DATA_URL {} chars]", caps[0].len())
    });
    BASE64_RUN_RE
        .replace_all(&redacted, |caps: &regex::Captures| {
            format!("[REDACTED_BASE64 {} chars]", caps[0].len())
        })
        .to_string()
}

/// Redacts image payloads inside a JSON value, by key and by content.
pub fn redact_json_payloads(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = serde_json::Map::new();
            for (k, v) in map {
                let redacted = match v {
                    Value::String(s) if IMAGE_KEYS.contains(&k.as_str()) => {
                        Value::String(format!("[REDACTED_IMAGE {} chars]", s.len()))
                    }
                    other => redact_json_payloads(other),
                };
                out.insert(k.clone(), redacted);
            }
            Value::Object(out)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(redact_json_payloads).collect()),
        Value::String(s) => Value::String(redact_image_payloads(s)),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn redacts_data_url_in_text() {
        let raw = "preview=data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAA end";
        let clean = redact_image_payloads(raw);
        assert!(!clean.contains("iVBORw0KGgo"));
        assert!(clean.starts_with("preview=[REDACTED_DATA_URL"));
        assert!(clean.ends_with(" end"));
    }

    #[test]
    fn redacts_long_base64_runs_only() {
        let long = "A".repeat(300);
        let clean = redact_image_payloads(&format!("x {long} y"));
        assert_eq!(clean, "x [REDACTED_BASE64 300 chars] y");
        assert_eq!(redact_image_payloads("friend_01"), "friend_01");
    }

    #[test]
    fn redacts_image_key_in_json() {
        let body = json!({ "image": "AQID", "caption": "여행", "target_user_id": "friend_01" });
        let clean = redact_json_payloads(&body);
        assert_eq!(clean["image"], "[REDACTED_IMAGE 4 chars]");
        assert_eq!(clean["caption"], "여행");
        assert_eq!(clean["target_user_id"], "friend_01");
    }
}
