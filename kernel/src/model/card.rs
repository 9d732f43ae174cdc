//! Law cards: self-describing physical laws (`Parameter`, `Equation`,
//! `LawCard`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A named parameter bound into a card: a value, unit, and optional sigma.
/// Structurally identical to [`super::quantity::Quantity`] but kept as a
/// distinct type since the two play different roles in the data model
/// (a body property vs. a card-scoped coefficient).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub value: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,
}

/// Opaque equation metadata. Never consulted by the solver; carried only
/// for provenance and documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Equation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ast: Option<serde_json::Value>,
}

/// A single invariant's allowed relative drift. Values `>= 1.0` disable
/// the check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftBudgetEntry {
    pub rel: f64,
}

/// The `invariants` section of a law card: per-invariant drift budgets
/// plus an optional dissipative flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Invariants {
    #[serde(default, rename = "driftBudget")]
    pub drift_budget: BTreeMap<String, DriftBudgetEntry>,
    #[serde(default)]
    pub dissipative: bool,
}

impl Invariants {
    /// The relative drift budget for `name`, defaulting to `1.0`
    /// (effectively disabled) when absent.
    #[must_use]
    pub fn budget(&self, name: &str) -> f64 {
        self.drift_budget.get(name).map_or(1.0, |b| b.rel)
    }
}

/// A self-describing physical law: identifier, version, parameters,
/// validity domain, and conservation invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawCard {
    pub id: String,
    pub version: String,
    #[serde(rename = "type", default = "default_lawcard_type")]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub kind: Vec<String>,
    #[serde(default)]
    pub equations: Vec<Equation>,
    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,
    /// Opaque to the core; structural shape is the domain's business, not
    /// the solver's. Presence is checked by validation; contents are not.
    #[serde(default)]
    pub validity: Option<serde_json::Value>,
    #[serde(default)]
    pub invariants: Option<Invariants>,
    #[serde(default, rename = "stabilityModel", skip_serializing_if = "Option::is_none")]
    pub stability_model: Option<serde_json::Value>,
    #[serde(default, rename = "testVectors", skip_serializing_if = "Option::is_none")]
    pub test_vectors: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

fn default_lawcard_type() -> String {
    "rg:LawCard".to_string()
}

impl LawCard {
    /// Parse and validate a law-card document. The root `type` must match
    /// `rg:LawCard` or the legacy `gw:LawCard`. Does not verify `sha256`;
    /// that is the resolver's responsibility ([`crate::hash`]).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Deserialize`] if `value` doesn't match the
    /// card schema, or [`ModelError::UnrecognizedType`] if its `type`
    /// field names neither recognized root type.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, ModelError> {
        let card: Self = serde_json::from_value(value.clone()).map_err(|e| ModelError::Deserialize { detail: e.to_string() })?;
        if !card.has_recognized_type() {
            return Err(ModelError::UnrecognizedType {
                expected: "rg:LawCard",
                found: card.type_tag.clone(),
            });
        }
        Ok(card)
    }

    /// Whether `type_tag` is one of the recognized root types: `rg:LawCard`
    /// or the legacy `gw:LawCard`.
    #[must_use]
    pub fn has_recognized_type(&self) -> bool {
        matches!(self.type_tag.as_str(), "rg:LawCard" | "gw:LawCard")
    }

    /// Read a parameter's value by name, if present.
    #[must_use]
    pub fn parameter_value(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).map(|p| p.value)
    }

    /// Whether this card declares itself dissipative
    /// (`invariants.dissipative == true`).
    #[must_use]
    pub fn is_dissipative(&self) -> bool {
        self.invariants
            .as_ref()
            .is_some_and(|inv| inv.dissipative)
    }
}
