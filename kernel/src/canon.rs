//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! **Exactly one place** produces canonical JSON bytes in this kernel. All
//! hashing flows that involve JSON (card verification, the provenance
//! writer's content checks) must route through this module.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. No extraneous whitespace (compact form: `{"a":1,"b":2}`).
//! 3. Strings are JSON-escaped per RFC 8259 §7.
//! 4. Numbers are written via `serde_json::Number`'s own text form. Unlike
//!    a carrier format that only ever holds integers, law cards carry
//!    float-valued parameters and drift budgets, so floats are accepted
//!    (not rejected as a carrier-only canonicalizer would) — the property
//!    this module must guarantee is repeat-call stability for a fixed
//!    input, not cross-platform float text agreement.
//! 5. `null`, `true`, `false` are written literally.
//! 6. Output is always valid UTF-8.

use std::io::Write;

/// Produce canonical JSON bytes from a `serde_json::Value`.
#[must_use]
pub fn canonical_json_bytes(value: &serde_json::Value) -> Vec<u8> {
    let mut buf = Vec::new();
    write_value(&mut buf, value);
    buf
}

fn write_value(buf: &mut Vec<u8>, value: &serde_json::Value) {
    match value {
        serde_json::Value::Null => buf.extend_from_slice(b"null"),
        serde_json::Value::Bool(b) => {
            buf.extend_from_slice(if *b { b"true" } else { b"false" });
        }
        serde_json::Value::Number(n) => {
            let _ = write!(buf, "{n}");
        }
        serde_json::Value::String(s) => write_string(buf, s),
        serde_json::Value::Array(arr) => {
            buf.push(b'[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item);
            }
            buf.push(b']');
        }
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            buf.push(b'{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_string(buf, key);
                buf.push(b':');
                write_value(buf, &map[*key]);
            }
            buf.push(b'}');
        }
    }
}

fn write_string(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '\n' => buf.extend_from_slice(b"\\n"),
            '\r' => buf.extend_from_slice(b"\\r"),
            '\t' => buf.extend_from_slice(b"\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(buf, "\\u{:04x}", c as u32);
            }
            c => {
                let mut utf8_buf = [0u8; 4];
                let encoded = c.encode_utf8(&mut utf8_buf);
                buf.extend_from_slice(encoded.as_bytes());
            }
        }
    }
    buf.push(b'"');
}

/// Strip the `sha256` field from a card's JSON object before hashing. A
/// no-op (returns the value unchanged) if `value` is not an object or
/// carries no `sha256` key.
#[must_use]
pub fn without_sha256(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut stripped = map.clone();
            stripped.remove("sha256");
            serde_json::Value::Object(stripped)
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sorted_keys() {
        let v = json!({"z": 1, "a": 2, "m": 3});
        assert_eq!(canonical_json_bytes(&v), b"{\"a\":2,\"m\":3,\"z\":1}");
    }

    #[test]
    fn nested_sorted_keys() {
        let v = json!({"b": {"d": 1, "c": 2}, "a": 3});
        assert_eq!(canonical_json_bytes(&v), b"{\"a\":3,\"b\":{\"c\":2,\"d\":1}}");
    }

    #[test]
    fn compact_no_whitespace() {
        let v: serde_json::Value =
            serde_json::from_str("{ \"a\" : 1 , \"b\" : [ 2 , 3 ] }").unwrap();
        assert_eq!(canonical_json_bytes(&v), b"{\"a\":1,\"b\":[2,3]}");
    }

    #[test]
    fn ordering_invariance() {
        let v1: serde_json::Value = serde_json::from_str(r#"{"x":1,"a":2,"m":3}"#).unwrap();
        let v2: serde_json::Value = serde_json::from_str(r#"{"a":2,"m":3,"x":1}"#).unwrap();
        assert_eq!(canonical_json_bytes(&v1), canonical_json_bytes(&v2));
    }

    #[test]
    fn float_values_round_trip_stably() {
        let v = json!({"gamma": 0.25, "G": 6.674e-11});
        let first = canonical_json_bytes(&v);
        for _ in 0..10 {
            assert_eq!(canonical_json_bytes(&v), first);
        }
        let text = std::str::from_utf8(&first).unwrap();
        assert!(text.starts_with(r#"{"G":"#));
        assert!(text.contains(r#""gamma":0.25"#));
        // Whatever text serde_json chose for G, it must parse back to the
        // same f64 — the guarantee this canonicalizer actually needs.
        let reparsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(reparsed["G"].as_f64(), Some(6.674e-11));
    }

    #[test]
    fn without_sha256_strips_field() {
        let v = json!({"id": "x", "sha256": "deadbeef", "version": "1"});
        let stripped = without_sha256(&v);
        assert_eq!(stripped, json!({"id": "x", "version": "1"}));
    }

    #[test]
    fn without_sha256_noop_when_absent() {
        let v = json!({"id": "x"});
        assert_eq!(without_sha256(&v), v);
    }

    #[test]
    fn string_escaping() {
        let v = json!({"a": "line1\nline2\ttab\\slash\"quote"});
        assert_eq!(
            canonical_json_bytes(&v),
            b"{\"a\":\"line1\\nline2\\ttab\\\\slash\\\"quote\"}".to_vec()
        );
    }

    #[test]
    fn unicode_passthrough() {
        let v = json!({"emoji": "hello 🌍"});
        let bytes = canonical_json_bytes(&v);
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), r#"{"emoji":"hello 🌍"}"#);
    }
}
