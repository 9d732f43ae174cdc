//! Pre-flight structural validation.
//!
//! Single pass, never raises: every check appends an issue and continues,
//! so a caller gets the full list of problems in one run rather than
//! stopping at the first.

use std::collections::BTreeMap;

use worldsim_kernel::model::{LawCard, ValidationReport, World};

/// Run the pre-flight structural checks against `world` and the card map
/// resolved for its dynamics, returning the full issue list.
#[must_use]
pub fn validate(world: &World, cards: &BTreeMap<String, LawCard>) -> ValidationReport {
    let mut report = ValidationReport::ok();

    if world.frames.is_empty() {
        report.push("world.frames", "Missing required field: frames");
    }
    if world.entities.is_empty() {
        report.push("world.entities", "Missing required field: entities");
    }
    if world.dynamics.is_empty() {
        report.push("world.dynamics", "Missing required field: dynamics");
    }

    if let Some(frame0) = world.frames.first() {
        for axis in ["length", "time", "mass"] {
            let present = frame0.units.get(axis).is_some_and(|v| !v.is_empty());
            if !present {
                report.push(format!("frames.0.units.{axis}"), format!("{} unit required", capitalize(axis)));
            }
        }
    }

    for body in &world.entities {
        if !body.mass.unit_is_present() {
            report.push(format!("{}.mass.unit", body.id), "Mass unit required");
        }
        if !body.state.position.unit_is_present() {
            report.push(format!("{}.state.position.unit", body.id), "Position unit required");
        }
        if !body.state.velocity.unit_is_present() {
            report.push(format!("{}.state.velocity.unit", body.id), "Velocity unit required");
        }
    }

    for (i, dynamic) in world.dynamics.iter().enumerate() {
        let path = format!("dynamics.{i}");
        let Some(card) = resolve_card(cards, &dynamic.law_ref) else {
            report.push(path, format!("referenced card '{}' not found", dynamic.law_ref));
            continue;
        };
        if card.validity.is_none() {
            report.push(format!("{path}.validity"), format!("card '{}' missing validity section", card.id));
        }
        if card.invariants.is_none() {
            report.push(format!("{path}.invariants"), format!("card '{}' missing invariants section", card.id));
        }
    }

    report
}

fn resolve_card<'a>(cards: &'a BTreeMap<String, LawCard>, law_ref: &str) -> Option<&'a LawCard> {
    cards.get(law_ref).or_else(|| cards.values().find(|c| c.id == law_ref))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
