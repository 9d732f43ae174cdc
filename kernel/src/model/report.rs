//! Validation and run-result types: `ValidationReport`, `RunResult`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One validation finding: a dotted field path and a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

/// The result of a pre-flight validation pass. Never raises; `ok` is true
/// iff `issues` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ValidationReport {
    pub ok: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            ok: true,
            issues: Vec::new(),
        }
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.ok = false;
        self.issues.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// An invariant's value: either a scalar (energy) or a 3-vector
/// (momentum, angular momentum). Kept as one enum so invariant maps can
/// hold both kinds under a single key type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvariantValue {
    Scalar(f64),
    Vector([f64; 3]),
}

impl InvariantValue {
    /// Euclidean norm: absolute value for a scalar, vector norm otherwise.
    #[must_use]
    pub fn norm(&self) -> f64 {
        match self {
            Self::Scalar(s) => s.abs(),
            Self::Vector(v) => (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt(),
        }
    }
}

/// A named set of invariant measurements (`"Energy"`, `"LinearMomentum"`,
/// `"AngularMomentum"`).
pub type InvariantSet = BTreeMap<String, InvariantValue>;

/// Final per-body position/velocity arrays produced by a run, in the same
/// registration order as `world.entities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalState {
    pub r: Vec<[f64; 3]>,
    pub v: Vec<[f64; 3]>,
}

/// The outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Steps actually executed (1-based).
    pub steps: u64,
    pub dt_seconds: f64,
    pub final_state: FinalState,
    pub initial_invariants: InvariantSet,
    pub final_invariants: InvariantSet,
    pub drifts: BTreeMap<String, f64>,
    /// Whether any bound dynamic's card declares itself dissipative,
    /// derived from `LawCard.invariants.dissipative`.
    pub dissipative: bool,
}
