use thiserror::Error;

/// Errors for malformed input records.
///
/// Degenerate geometry (zero-length normals, coincident points) is not an
/// error: it is absorbed by the angle primitives as a sentinel that can never
/// satisfy an angular criterion. Only genuinely malformed records are
/// rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("atom {index} has non-finite coordinates")]
    NonFiniteAtomPosition { index: usize },

    #[error("atom {index} has a non-finite neighbor reference in slot {slot}")]
    NonFiniteNeighbor { index: usize, slot: usize },

    #[error("ring {index} has a non-finite centroid or normal")]
    NonFiniteRing { index: usize },

    #[error("unknown hybridization code: {code}")]
    UnknownHybridization { code: u8 },
}
