//! # Interactions Module
//!
//! The detection core: a generic all-pairs proximity join
//! ([`contacts::close_contacts`]), an angular strictness classifier
//! ([`strictness`]), and one detector per interaction family composed from
//! the two.
//!
//! Every detector returns aligned index arrays: entry `i` of each array in a
//! result refers to the same candidate pair. A pair that passes only the
//! distance cutoff is a *crude* interaction; one that also passes the angular
//! criterion for its family is *strict*. Detectors never fail: an empty
//! candidate subset on either side simply yields an empty, correctly-shaped
//! result.

pub mod contacts;
pub mod halogen;
pub mod hbond;
pub mod hydrophobic;
pub mod metal;
pub mod pi_cation;
pub mod salt_bridge;
pub mod stacking;
pub mod strictness;

/// Default half-width in degrees of the angular band around an ideal angle.
pub const ANGLE_TOLERANCE: f64 = 30.0;

/// Aligned pairs of indices into two collections, as emitted by the
/// proximity join and by the distance-only detectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPairs {
    /// Indices into the first collection.
    pub first: Vec<usize>,
    /// Indices into the second collection, aligned with `first`.
    pub second: Vec<usize>,
}

impl ContactPairs {
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Iterates over the aligned `(first, second)` index pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.first.iter().copied().zip(self.second.iter().copied())
    }

    pub(crate) fn push(&mut self, first: usize, second: usize) {
        self.first.push(first);
        self.second.push(second);
    }

    /// Appends `other` with its sides swapped, so that `first` keeps
    /// indexing the same structure on both halves of a symmetrized result.
    pub(crate) fn extend_swapped(&mut self, other: ContactPairs) {
        self.first.extend(other.second);
        self.second.extend(other.first);
    }
}

/// [`ContactPairs`] plus one aligned strictness flag per pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrictPairs {
    pub first: Vec<usize>,
    pub second: Vec<usize>,
    /// `true` where the pair also satisfies the angular criterion.
    pub strict: Vec<bool>,
}

impl StrictPairs {
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Iterates over the aligned `(first, second, strict)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.first
            .iter()
            .copied()
            .zip(self.second.iter().copied())
            .zip(self.strict.iter().copied())
            .map(|((first, second), strict)| (first, second, strict))
    }

    pub(crate) fn push(&mut self, first: usize, second: usize, strict: bool) {
        self.first.push(first);
        self.second.push(second);
        self.strict.push(strict);
    }

    pub(crate) fn extend_swapped(&mut self, other: StrictPairs) {
        self.first.extend(other.second);
        self.second.extend(other.first);
        self.strict.extend(other.strict);
    }
}

/// Ring pairs with the two independent pi-stacking strictness flags.
///
/// A pair may be strict-parallel, strict-perpendicular, or neither (crude,
/// distance only); the two flags are never collapsed into one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackingPairs {
    pub first: Vec<usize>,
    pub second: Vec<usize>,
    pub strict_parallel: Vec<bool>,
    pub strict_perpendicular: Vec<bool>,
}

impl StackingPairs {
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    pub(crate) fn push(&mut self, first: usize, second: usize, parallel: bool, perpendicular: bool) {
        self.first.push(first);
        self.second.push(second);
        self.strict_parallel.push(parallel);
        self.strict_perpendicular.push(perpendicular);
    }
}
