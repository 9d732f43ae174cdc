//! Simulation driver: the composed velocity-Verlet loop.
//!
//! Couples the gravity solver ([`worldsim_kernel::gravity`]) with the
//! external-law evaluators ([`worldsim_kernel::external_laws`]) into one
//! stepping function, audits conservation invariants at a fixed stride,
//! and aborts early on a gross budget violation.

use std::collections::BTreeMap;

use worldsim_kernel::external_laws::external_accelerations;
use worldsim_kernel::invariants::{audit_invariants, rel_drift};
use worldsim_kernel::model::{Dynamic, FinalState, InvariantSet, LawCard, RunResult, World};
use worldsim_kernel::GRAVITY_LAW_ID;

use crate::error::DriverError;
use crate::registry::SolverRegistry;

/// Recompute invariants and check the gross early-abort condition every
/// 100 steps, and on the final step regardless of stride.
pub const AUDIT_STRIDE: u64 = 100;

/// The fixed "gross" early-abort tolerance: an enabled budget (`rel < 1.0`)
/// is exceeded by more than this multiple of itself before the driver
/// aborts. Hard-coded rather than exposed via card or config.
pub const GROSS_ABORT_FACTOR: f64 = 10.0;

/// Select the gravity dynamic: the first dynamic whose `ref` matches the
/// Newtonian gravity IRI, or the first dynamic if none matches.
fn select_gravity_dynamic(dynamics: &[Dynamic]) -> Result<&Dynamic, DriverError> {
    dynamics.iter().find(|d| d.law_ref == GRAVITY_LAW_ID).or_else(|| dynamics.first()).ok_or(DriverError::NoDynamics)
}

fn card_by_ref<'a>(cards: &'a BTreeMap<String, LawCard>, law_ref: &str) -> Option<&'a LawCard> {
    cards.get(law_ref).or_else(|| cards.values().find(|c| c.id == law_ref))
}

fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

fn add_arrays(a: &[[f64; 3]], b: &[[f64; 3]]) -> Vec<[f64; 3]> {
    a.iter().zip(b).map(|(x, y)| add(*x, *y)).collect()
}

/// Run the composed velocity-Verlet simulation against a validated
/// `world` and its resolved `cards`, using `registry`
/// to look up the gravity dynamic's solver. Writes the final body state
/// back into `world` before returning.
///
/// # Errors
///
/// Returns [`DriverError`] if the world has no dynamics, the gravity
/// dynamic's card cannot be resolved, no solver is registered for it, or
/// `config.steps` is not a positive integer.
pub fn simulate(world: &mut World, cards: &BTreeMap<String, LawCard>, registry: &SolverRegistry) -> Result<RunResult, DriverError> {
    let gravity_dynamic = select_gravity_dynamic(&world.dynamics)?.clone();
    let gravity_card = card_by_ref(cards, &gravity_dynamic.law_ref).ok_or_else(|| DriverError::MissingCard {
        law_ref: gravity_dynamic.law_ref.clone(),
    })?;
    let solver = registry.get(&gravity_card.id).ok_or_else(|| DriverError::MissingSolver {
        card_id: gravity_card.id.clone(),
    })?;

    let index_by_id = world.body_index();
    let mut m: Vec<f64> = Vec::with_capacity(world.entities.len());
    let mut r: Vec<[f64; 3]> = Vec::with_capacity(world.entities.len());
    let mut v: Vec<[f64; 3]> = Vec::with_capacity(world.entities.len());
    for body in &world.entities {
        m.push(body.mass.value);
        r.push(body.state.position.value);
        v.push(body.state.velocity.value);
    }

    let dt = world.dt_seconds();
    let steps = world.steps();
    if steps == 0 {
        return Err(DriverError::InvalidSteps);
    }

    let g = gravity_card.parameter_value("G").unwrap_or(0.0);
    let dynamics = world.dynamics.clone();
    let dissipative = dynamics.iter().filter_map(|d| card_by_ref(cards, &d.law_ref)).any(worldsim_kernel::model::LawCard::is_dissipative);

    let a_grav = |r: &[[f64; 3]]| solver.accelerations(gravity_card, &m, r);
    let a_ext = |v: &[[f64; 3]]| external_accelerations(&dynamics, cards, &gravity_dynamic.law_ref, v, &m, &index_by_id);

    let initial_invariants = audit_invariants(g, &m, &r, &v);
    let drift_budgets: BTreeMap<String, f64> = gravity_card
        .invariants
        .as_ref()
        .map(|inv| inv.drift_budget.iter().map(|(k, entry)| (k.clone(), entry.rel)).collect())
        .unwrap_or_default();

    let mut executed: u64 = 0;
    let mut final_invariants = initial_invariants.clone();
    let mut drifts: BTreeMap<String, f64> = BTreeMap::new();

    for step in 1..=steps {
        // a1 = a_grav(r) + a_ext(v); the opening half-kick uses the prior
        // velocity, not symmetrized with the closing half-kick below.
        let a1 = add_arrays(&a_grav(&r), &a_ext(&v));
        let v_half: Vec<[f64; 3]> = v.iter().zip(&a1).map(|(vi, ai)| add(*vi, scale(*ai, 0.5 * dt))).collect();
        let r_new: Vec<[f64; 3]> = r.iter().zip(&v_half).map(|(ri, vi)| add(*ri, scale(*vi, dt))).collect();
        // The closing half-kick evaluates external accelerations at the
        // half-step velocity for second-order consistency with a
        // velocity-dependent force.
        let a2 = add_arrays(&a_grav(&r_new), &a_ext(&v_half));
        let v_new: Vec<[f64; 3]> = v_half.iter().zip(&a2).map(|(vi, ai)| add(*vi, scale(*ai, 0.5 * dt))).collect();

        r = r_new;
        v = v_new;
        executed = step;

        let is_final = step == steps;
        if step % AUDIT_STRIDE == 0 || is_final {
            let current = audit_invariants(g, &m, &r, &v);
            drifts = current
                .iter()
                .map(|(name, value)| {
                    let baseline = initial_invariants.get(name).expect("audit set always carries the same keys");
                    (name.clone(), rel_drift(value, baseline))
                })
                .collect();
            final_invariants = current;

            let gross_violation = drifts.iter().any(|(name, drift)| {
                let budget = drift_budgets.get(name).copied().unwrap_or(1.0);
                budget < 1.0 && *drift > budget * GROSS_ABORT_FACTOR
            });
            if gross_violation {
                break;
            }
        }
    }

    for (i, body) in world.entities.iter_mut().enumerate() {
        body.state.position.value = r[i];
        body.state.velocity.value = v[i];
    }

    Ok(RunResult {
        steps: executed,
        dt_seconds: dt,
        final_state: FinalState { r, v },
        initial_invariants,
        final_invariants,
        drifts,
        dissipative,
    })
}

/// `audit_invariants`'s return type, re-exported for callers that want to
/// construct an [`InvariantSet`] without importing `worldsim_kernel`
/// directly.
pub type Invariants = InvariantSet;
