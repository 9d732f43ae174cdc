//! Worldsim Kernel: the deterministic physics core of Worldsim.
//!
//! # API Surface
//!
//! The kernel exposes the pure, allocation-local pieces the rest of the
//! system composes:
//!
//! - [`model`] -- the typed data model of worlds, bodies, frames, and law cards
//! - [`canon`] / [`hash`] -- canonical JSON bytes and content hashing for card verification
//! - [`gravity`] -- the N-body Newtonian gravity solver (per-body and dense kernels)
//! - [`external_laws`] -- drag-family acceleration evaluators
//! - [`invariants`] -- energy/momentum/angular-momentum accounting and drift
//! - [`selector`] -- body/pair selector mask resolution
//!
//! # Module Dependency Direction
//!
//! `model` ← `canon`/`hash` ← `selector` ← `gravity`/`external_laws` ← `invariants`
//!
//! One-way only. No cycles. Nothing in this crate performs I/O.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod error;
pub mod external_laws;
pub mod gravity;
pub mod hash;
pub mod invariants;
pub mod model;
pub mod selector;

/// The IRI of the built-in Newtonian gravity law, used to select the
/// gravity dynamic out of a world's dynamics list.
pub const GRAVITY_LAW_ID: &str = "rg:law/physics.gravity.newton.v1";

/// The IRI of the linear-drag external law.
pub const LINEAR_DRAG_LAW_ID: &str = "rg:law/fluids.drag.linear.v1";

/// The IRI of the quadratic-drag external law.
pub const QUADRATIC_DRAG_LAW_ID: &str = "rg:law/fluids.drag.quadratic.v1";
