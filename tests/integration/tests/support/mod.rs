//! Shared fixture builders for the cross-crate scenario tests.
//! Not a test binary itself — each scenario file does `mod support;`.

use std::collections::BTreeMap;

use serde_json::json;
use worldsim_kernel::model::{DriftBudgetEntry, Invariants, LawCard, Parameter, World};

/// Physical constants for the Earth-Sun orbital drift scenarios.
pub const G: f64 = 6.674e-11;
pub const SUN_MASS_KG: f64 = 1.989e30;
pub const EARTH_MASS_KG: f64 = 5.972e24;
pub const AU_METERS: f64 = 1.496e11;
pub const EARTH_ORBITAL_SPEED_MPS: f64 = 29_780.0;

/// A two-body Sun/Earth world in a circular-orbit approximation, with one
/// dynamic bound to the Newtonian gravity card.
#[must_use]
pub fn earth_sun_world(dt_seconds: f64, steps: u64) -> World {
    let v = json!({
        "id": "earth-sun",
        "version": "1.0.0",
        "type": "rg:World",
        "frames": [{
            "id": "heliocentric",
            "kind": "inertial",
            "metric": "euclidean",
            "units": {"length": "m", "time": "s", "mass": "kg"},
        }],
        "entities": [
            {
                "id": "sun",
                "mass": {"value": SUN_MASS_KG, "unit": "kg"},
                "state": {
                    "frame": "heliocentric", "t": "0",
                    "position": {"value": [0.0, 0.0, 0.0], "unit": "m"},
                    "velocity": {"value": [0.0, 0.0, 0.0], "unit": "m/s"},
                },
            },
            {
                "id": "earth",
                "mass": {"value": EARTH_MASS_KG, "unit": "kg"},
                "state": {
                    "frame": "heliocentric", "t": "0",
                    "position": {"value": [AU_METERS, 0.0, 0.0], "unit": "m"},
                    "velocity": {"value": [0.0, EARTH_ORBITAL_SPEED_MPS, 0.0], "unit": "m/s"},
                },
            },
        ],
        "dynamics": [{"ref": "rg:law/physics.gravity.newton.v1"}],
        "config": {"dtSeconds": dt_seconds, "steps": steps},
    });
    World::from_json_value(&v).unwrap()
}

/// The Newtonian gravity card bound into [`earth_sun_world`].
#[must_use]
pub fn gravity_card() -> LawCard {
    let mut parameters = BTreeMap::new();
    parameters.insert("G".to_string(), Parameter { value: G, unit: "m3 kg-1 s-2".to_string(), sigma: None });
    LawCard {
        id: "rg:law/physics.gravity.newton.v1".to_string(),
        version: "1.0.0".to_string(),
        type_tag: "rg:LawCard".to_string(),
        title: Some("Newtonian Gravity".to_string()),
        kind: vec!["force".to_string()],
        equations: vec![],
        parameters,
        validity: Some(json!({"regime": "non-relativistic"})),
        invariants: Some(Invariants {
            drift_budget: BTreeMap::from([
                ("Energy".to_string(), DriftBudgetEntry { rel: 1e-4 }),
                ("LinearMomentum".to_string(), DriftBudgetEntry { rel: 1e-4 }),
            ]),
            dissipative: false,
        }),
        stability_model: None,
        test_vectors: None,
        provenance: None,
        sha256: None,
    }
}

/// A linear-drag card bound alongside gravity.
#[must_use]
pub fn linear_drag_card(gamma: f64) -> LawCard {
    let mut parameters = BTreeMap::new();
    parameters.insert("gamma".to_string(), Parameter { value: gamma, unit: "kg/s".to_string(), sigma: None });
    LawCard {
        id: "rg:law/fluids.drag.linear.v1".to_string(),
        version: "1.0.0".to_string(),
        type_tag: "rg:LawCard".to_string(),
        title: Some("Linear Drag".to_string()),
        kind: vec!["force".to_string()],
        equations: vec![],
        parameters,
        validity: Some(json!({"regime": "low Reynolds number"})),
        invariants: Some(Invariants {
            drift_budget: BTreeMap::new(),
            dissipative: true,
        }),
        stability_model: None,
        test_vectors: None,
        provenance: None,
        sha256: None,
    }
}
