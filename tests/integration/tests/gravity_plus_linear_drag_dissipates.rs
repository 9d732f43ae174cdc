//! A two-body system under gravity plus linear drag loses mechanical energy
//! monotonically over the run.

mod support;

use std::collections::BTreeMap;

use worldsim_kernel::model::{InvariantValue, RunResult};
use worldsim_harness::{simulate, SolverRegistry};

fn energy_of(result: &RunResult, set: &str) -> f64 {
    let invariants = if set == "initial" { &result.initial_invariants } else { &result.final_invariants };
    match invariants.get("Energy") {
        Some(InvariantValue::Scalar(e)) => *e,
        other => panic!("expected a scalar Energy invariant, got {other:?}"),
    }
}

#[test]
fn linear_drag_strictly_decreases_total_energy() {
    let mut world = support::earth_sun_world(120.0, 2000);
    world.dynamics.push(worldsim_kernel::model::Dynamic {
        law_ref: "rg:law/fluids.drag.linear.v1".to_string(),
        selector: None,
        overrides: None,
    });

    let mut cards = BTreeMap::new();
    let gravity = support::gravity_card();
    cards.insert(gravity.id.clone(), gravity);
    // Large enough that the induced decay (exp(-(gamma/m)*t), t = 2000*120s)
    // dominates the run's Verlet integration error, so the sign of the
    // energy change is unambiguous.
    let drag = support::linear_drag_card(1.5e18);
    cards.insert(drag.id.clone(), drag);

    let registry = SolverRegistry::default();
    let result = simulate(&mut world, &cards, &registry).unwrap();

    assert!(result.dissipative, "run should be flagged dissipative when a bound card declares it");

    let initial_energy = energy_of(&result, "initial");
    let final_energy = energy_of(&result, "final");
    assert!(final_energy < initial_energy, "final energy {final_energy} should be below initial energy {initial_energy} under drag");
}
