//! # Workflows Module
//!
//! The highest-level, user-facing layer: profiles every interaction family
//! between a pair of structures in one call, and is the place where input
//! records are validated before any numeric work starts.

pub mod profile;
