//! Dynamics: bindings of a law card into a world (`Selector`, `Dynamic`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which bodies (or body pairs) a dynamic's law applies to.
///
/// An empty selector (no `bodies`, no `pairs`, or a union that resolves to
/// nothing) means "all bodies".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Selector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bodies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pairs: Option<Vec<[String; 2]>>,
}

impl Selector {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.as_ref().map_or(true, Vec::is_empty) && self.pairs.as_ref().map_or(true, Vec::is_empty)
    }
}

/// One binding of a [`super::card::LawCard`] into a world: the reference,
/// an optional selector, and optional per-binding parameter overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dynamic {
    #[serde(rename = "ref")]
    pub law_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
    #[serde(default, rename = "override", skip_serializing_if = "Option::is_none")]
    pub overrides: Option<BTreeMap<String, f64>>,
}

impl Dynamic {
    /// Read a parameter: the per-dynamic override if present, else `default`.
    #[must_use]
    pub fn param_or(&self, name: &str, default: f64) -> f64 {
        self.overrides
            .as_ref()
            .and_then(|o| o.get(name))
            .copied()
            .unwrap_or(default)
    }
}
