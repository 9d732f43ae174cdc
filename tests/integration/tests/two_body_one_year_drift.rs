//! Two-body Earth-Sun orbit over one year at dt=60s: energy drift must stay
//! inside a tighter budget than the 30-day run.

mod support;

use std::collections::BTreeMap;

use worldsim_harness::{simulate, SolverRegistry};

#[test]
fn energy_drift_stays_within_one_year_budget() {
    let dt = 60.0;
    let steps = (365.0 * 86_400.0 / dt) as u64;
    let mut world = support::earth_sun_world(dt, steps);
    let card = support::gravity_card();

    let mut cards = BTreeMap::new();
    cards.insert(card.id.clone(), card);

    let registry = SolverRegistry::default();
    let result = simulate(&mut world, &cards, &registry).unwrap();

    assert_eq!(result.steps, steps);
    let energy_drift = result.drifts.get("Energy").copied().unwrap_or(f64::INFINITY);
    assert!(energy_drift < 1e-5, "energy drift {energy_drift} exceeds 1e-5 over one year at dt=60s");
}
