use super::atom::Atom;
use super::error::ModelError;
use super::ring::Ring;
use nalgebra::Point3;

/// One molecular structure: its atom records plus its ring records.
///
/// Detectors take two of these and return aligned index arrays into the
/// `atoms` / `rings` vectors. The engine never mutates a `Molecule`; it is
/// safe to share one across concurrent detector calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub rings: Vec<Ring>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>, rings: Vec<Ring>) -> Self {
        Self { atoms, rings }
    }

    /// Returns the indices of all atoms satisfying `predicate`, in order.
    ///
    /// This is how detectors carve property subsets (acceptors, donors,
    /// cations, ...) out of the full atom table before the proximity join.
    pub fn select_atoms(&self, predicate: impl Fn(&Atom) -> bool) -> Vec<usize> {
        self.atoms
            .iter()
            .enumerate()
            .filter_map(|(index, atom)| predicate(atom).then_some(index))
            .collect()
    }

    /// Gathers the positions of the atoms at `indices`.
    pub fn atom_positions(&self, indices: &[usize]) -> Vec<Point3<f64>> {
        indices.iter().map(|&i| self.atoms[i].position).collect()
    }

    /// Gathers the centroids of all rings.
    pub fn ring_centroids(&self) -> Vec<Point3<f64>> {
        self.rings.iter().map(|ring| ring.centroid).collect()
    }

    /// Checks every record for non-finite fields.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] encountered, identifying the
    /// offending record by index so the caller can diagnose the producer.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (index, atom) in self.atoms.iter().enumerate() {
            if !atom.position.coords.iter().all(|c| c.is_finite()) {
                return Err(ModelError::NonFiniteAtomPosition { index });
            }
            for (slot, neighbor) in atom.neighbors.iter().enumerate() {
                if let Some(n) = neighbor
                    && !n.coords.iter().all(|c| c.is_finite())
                {
                    return Err(ModelError::NonFiniteNeighbor { index, slot });
                }
            }
        }
        for (index, ring) in self.rings.iter().enumerate() {
            let finite = ring.centroid.coords.iter().all(|c| c.is_finite())
                && ring.normal.iter().all(|c| c.is_finite());
            if !finite {
                return Err(ModelError::NonFiniteRing { index });
            }
        }
        Ok(())
    }
}
