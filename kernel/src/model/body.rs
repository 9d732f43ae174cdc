//! Bodies and their kinematic state (`Body`, `State`).

use serde::{Deserialize, Serialize};

use super::quantity::{Quantity, Vec3Quantity};

/// A body's kinematic state at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub frame: String,
    /// ISO-8601 timestamp string. Opaque to the solver.
    pub t: String,
    pub position: Vec3Quantity,
    pub velocity: Vec3Quantity,
}

/// A simulated body: identity, mass, and current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: String,
    pub mass: Quantity,
    pub state: State,
}
