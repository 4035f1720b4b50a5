//! # Models Module
//!
//! Fixed-layout record types consumed by the interaction detectors.
//!
//! Atom and ring records are produced upstream, per structure, by a
//! structure-loading and property-assignment collaborator: coordinates,
//! covalent-neighbor reference points, hybridization codes and all boolean
//! property flags (acceptor, donor, halogen, charge, hydrophobe, metal) are
//! expected to be precomputed. This crate treats every record as read-only
//! input and allocates only the aligned result arrays it returns.

pub mod atom;
pub mod error;
pub mod molecule;
pub mod ring;
