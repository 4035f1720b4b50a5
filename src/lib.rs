//! # noncov
//!
//! A library for detecting non-covalent interactions between two molecular
//! structures (protein-protein, protein-ligand, small-small). Currently the
//! following interactions are implemented:
//!
//! - hydrogen bonds
//! - halogen bonds
//! - pi-stacking (parallel and perpendicular)
//! - salt bridges
//! - hydrophobic contacts
//! - pi-cation
//! - metal coordination
//! - pi-metal
//!
//! ## Architectural Philosophy
//!
//! The library is split into layers with a clear separation of concerns:
//!
//! - **[`models`]: The Data Contract.** Fixed-layout record types for atoms,
//!   rings and whole structures, produced upstream by a structure-loading and
//!   property-assignment collaborator. This crate never mutates them.
//!
//! - **[`geometry`]: Numeric Primitives.** Stateless distance and angle
//!   functions. Degenerate measurements are represented as `None` rather than
//!   NaN so that a missing measurement can never satisfy an angular criterion.
//!
//! - **[`interactions`]: The Detection Core.** The generic proximity join and
//!   angular strictness classifier, plus one detector per interaction family
//!   built by composing the two over family-specific atom/ring subsets.
//!
//! - **[`workflows`]: The Public API.** The highest-level entry point, which
//!   profiles every interaction family between a pair of structures in one
//!   call and is where input validation is enforced.
//!
//! Every detector is a pure function: no state is held between calls, and
//! independent calls may run concurrently without coordination.

pub mod geometry;
pub mod interactions;
pub mod models;
pub mod workflows;
