//! Worldsim Cards: law-card resolution with content verification.
//!
//! # Crate dependency graph
//!
//! ```text
//! worldsim_kernel  ←  worldsim_cards  ←  worldsim_harness
//! (model, hashing)     (resolver)         (validator, driver)
//! ```
//!
//! This crate depends only on `worldsim_kernel`; it does not depend on
//! `worldsim_harness`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod resolver;

pub use error::ResolverError;
pub use resolver::{assemble_search_space, resolve_cards, resolve_cards_with_space, SearchSpace, CARD_PATHS_ENV};
