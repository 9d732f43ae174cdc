//! A world with a blank velocity unit fails pre-flight validation with a
//! specific, actionable message.

mod support;

use std::collections::BTreeMap;

use worldsim_harness::validate;

#[test]
fn blank_velocity_unit_fails_validation() {
    let mut world = support::earth_sun_world(120.0, 100);
    world.entities[1].state.velocity.unit.clear();

    let mut cards = BTreeMap::new();
    let card = support::gravity_card();
    cards.insert(card.id.clone(), card);

    let report = validate(&world, &cards);

    assert!(!report.ok);
    assert!(report.issues.iter().any(|i| i.message.contains("Velocity unit required")));
}
