//! Typed data model for worlds, bodies, frames, and law cards.
//!
//! Every concept is one tagged record type with explicit optional
//! fields; there is no dual-access path between typed and loose
//! representations.

pub mod body;
pub mod card;
pub mod dynamic;
pub mod frame;
pub mod quantity;
pub mod report;
pub mod world;

pub use body::{Body, State};
pub use card::{DriftBudgetEntry, Equation, Invariants, LawCard, Parameter};
pub use dynamic::{Dynamic, Selector};
pub use frame::Frame;
pub use quantity::{Quantity, Vec3Quantity};
pub use report::{FinalState, InvariantSet, InvariantValue, RunResult, ValidationIssue, ValidationReport};
pub use world::World;
