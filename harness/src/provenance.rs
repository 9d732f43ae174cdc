//! Provenance lockfile emission.
//!
//! The on-disk serialization format itself is a thin collaborator; what
//! matters is the key set and the binding of each resolved card's
//! identity into the lockfile.

use std::collections::BTreeMap;
use std::path::Path;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use worldsim_kernel::model::LawCard;

use crate::error::ProvenanceError;

/// Build the lockfile JSON object for a completed run: generation
/// timestamp, step size, step count, a `cards` sub-object keyed by card
/// id, and the drift map. Pure function, kept separate from the disk
/// write for testability.
#[must_use]
pub fn build_lockfile(dt_seconds: f64, steps: u64, cards: &BTreeMap<String, LawCard>, drifts: &BTreeMap<String, f64>, generated_at: &str) -> serde_json::Value {
    let cards_json: BTreeMap<String, serde_json::Value> = cards
        .iter()
        .map(|(id, card)| {
            (
                id.clone(),
                serde_json::json!({
                    "version": card.version,
                    "sha256": card.sha256,
                    "title": card.title,
                }),
            )
        })
        .collect();

    serde_json::json!({
        "generatedAt": generated_at,
        "dtSeconds": dt_seconds,
        "steps": steps,
        "cards": cards_json,
        "drifts": drifts,
    })
}

/// Write the lockfile for a completed run to `path`, indented for human
/// readability.
///
/// # Errors
///
/// Returns [`ProvenanceError`] if serialization or the disk write fails.
pub fn write_lockfile(path: &Path, dt_seconds: f64, steps: u64, cards: &BTreeMap<String, LawCard>, drifts: &BTreeMap<String, f64>) -> Result<(), ProvenanceError> {
    let generated_at = OffsetDateTime::now_utc().format(&Rfc3339).map_err(|e| ProvenanceError::Serialize { detail: e.to_string() })?;
    let value = build_lockfile(dt_seconds, steps, cards, drifts, &generated_at);
    let text = serde_json::to_string_pretty(&value).map_err(|e| ProvenanceError::Serialize { detail: e.to_string() })?;
    std::fs::write(path, text).map_err(|e| ProvenanceError::Io {
        path: path.display().to_string(),
        detail: e.to_string(),
    })
}
