//! Canonical hashing for law-card content verification.
//!
//! The SHA-256 input is the card JSON object with the `sha256` field
//! removed, canonicalized per [`crate::canon`]. The output is a lowercase
//! hex digest, compared for exact equality against the card's declared
//! `sha256` field, which is a bare hex string with no domain prefix or
//! algorithm tag.

use sha2::{Digest, Sha256};

use crate::canon::{canonical_json_bytes, without_sha256};

/// Compute the canonical SHA-256 hex digest of a card's JSON value, after
/// stripping any `sha256` field.
#[must_use]
pub fn canonical_sha256(card_json: &serde_json::Value) -> String {
    let stripped = without_sha256(card_json);
    let bytes = canonical_json_bytes(&stripped);
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    hex::encode(hasher.finalize())
}

/// Whether `card_json`'s declared `sha256` (if any) matches its computed
/// canonical hash. Cards with no `sha256` field always verify (nothing to
/// check).
#[must_use]
pub fn verify(card_json: &serde_json::Value) -> bool {
    match card_json.get("sha256").and_then(serde_json::Value::as_str) {
        None => true,
        Some(declared) => declared == canonical_sha256(card_json),
    }
}
