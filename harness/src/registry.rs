//! Solver registry: a closed mapping from law-card id to an object exposing
//! `accelerations`.
//!
//! A closed enumeration of law kinds is acceptable; plugin extensibility
//! is not a goal here. This registry still uses a trait object so the
//! driver's composed step is agnostic to which concrete solver backs the
//! gravity dynamic: a named lookup from an id to a contract, built once
//! via a `default()` constructor.

use std::collections::BTreeMap;

use worldsim_kernel::gravity::GravitySolver;
use worldsim_kernel::model::LawCard;
use worldsim_kernel::GRAVITY_LAW_ID;

/// An acceleration solver bound into the registry under a card id.
pub trait AccelerationSolver: std::fmt::Debug {
    /// Pure function of a card's parameters and the current mass/position
    /// arrays.
    fn accelerations(&self, card: &LawCard, m: &[f64], r: &[[f64; 3]]) -> Vec<[f64; 3]>;
}

impl AccelerationSolver for GravitySolver {
    fn accelerations(&self, card: &LawCard, m: &[f64], r: &[[f64; 3]]) -> Vec<[f64; 3]> {
        self.accelerations_for_card(card, m, r)
    }
}

/// Closed mapping from card id to the solver object that implements it.
#[derive(Debug)]
pub struct SolverRegistry {
    solvers: BTreeMap<String, Box<dyn AccelerationSolver>>,
}

impl SolverRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { solvers: BTreeMap::new() }
    }

    /// Bind `solver` under `card_id`. A later call with the same id
    /// replaces the earlier binding.
    pub fn register(&mut self, card_id: impl Into<String>, solver: Box<dyn AccelerationSolver>) {
        self.solvers.insert(card_id.into(), solver);
    }

    /// Look up the solver bound to `card_id`, if any.
    #[must_use]
    pub fn get(&self, card_id: &str) -> Option<&dyn AccelerationSolver> {
        self.solvers.get(card_id).map(std::convert::AsRef::as_ref)
    }
}

impl Default for SolverRegistry {
    /// The default registry: `GravitySolver::default()` bound under
    /// [`GRAVITY_LAW_ID`], the Newtonian-gravity IRI.
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(GRAVITY_LAW_ID, Box::new(GravitySolver::default()));
        registry
    }
}
