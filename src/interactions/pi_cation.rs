use super::StrictPairs;
use super::contacts::close_contacts;
use super::strictness::within_axial_band;
use crate::geometry;
use crate::models::molecule::Molecule;
use tracing::debug;

/// Default centroid-cation distance cutoff in Angstroms.
pub const PI_CATION_CUTOFF: f64 = 5.0;

/// Pi-cation candidates between rings of `mol1` and cations of `mol2`.
///
/// A pair is strict when the cation sits along the ring normal: the angle
/// between the normal and the centroid-to-cation vector is within `tolerance`
/// of the 0/180 axis. Single-sided; call again with the structures swapped to
/// search rings of the second structure.
///
/// `first` indexes rings of `mol1`, `second` atoms of `mol2` (cations).
pub fn pi_cation(mol1: &Molecule, mol2: &Molecule, cutoff: f64, tolerance: f64) -> StrictPairs {
    let cations = mol2.select_atoms(|a| a.is_plus);
    let contacts = close_contacts(
        &mol1.ring_centroids(),
        &mol2.atom_positions(&cations),
        cutoff,
        0.0,
    );

    let mut pairs = StrictPairs::default();
    for (ri, ci) in contacts.iter() {
        let ring = &mol1.rings[ri];
        let cation = &mol2.atoms[cations[ci]];

        let approach = geometry::angle_between(&ring.normal, &(cation.position - ring.centroid));
        let strict = within_axial_band(approach, tolerance);

        pairs.push(ri, cations[ci], strict);
    }
    debug!(candidates = pairs.len(), "ring-cation scan complete");
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::ANGLE_TOLERANCE;
    use crate::models::atom::Atom;
    use crate::models::ring::Ring;
    use nalgebra::{Point3, Vector3};

    fn ring_molecule() -> Molecule {
        Molecule::new(
            Vec::new(),
            vec![Ring::new(Point3::origin(), Vector3::z())],
        )
    }

    fn cation_molecule(p: [f64; 3]) -> Molecule {
        let mut atom = Atom::new(Point3::new(p[0], p[1], p[2]));
        atom.is_plus = true;
        Molecule::new(vec![atom], Vec::new())
    }

    #[test]
    fn cation_above_the_ring_face_is_strict() {
        let pairs = pi_cation(
            &ring_molecule(),
            &cation_molecule([0.0, 0.0, 4.0]),
            PI_CATION_CUTOFF,
            ANGLE_TOLERANCE,
        );
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.strict, vec![true]);
    }

    #[test]
    fn cation_below_the_ring_face_is_also_strict() {
        let pairs = pi_cation(
            &ring_molecule(),
            &cation_molecule([0.0, 0.0, -4.0]),
            PI_CATION_CUTOFF,
            ANGLE_TOLERANCE,
        );
        assert_eq!(pairs.strict, vec![true]);
    }

    #[test]
    fn cation_in_the_ring_plane_is_crude() {
        let pairs = pi_cation(
            &ring_molecule(),
            &cation_molecule([4.0, 0.0, 0.0]),
            PI_CATION_CUTOFF,
            ANGLE_TOLERANCE,
        );
        assert_eq!(pairs.strict, vec![false]);
    }

    #[test]
    fn cation_beyond_cutoff_is_not_reported() {
        let pairs = pi_cation(
            &ring_molecule(),
            &cation_molecule([0.0, 0.0, 5.5]),
            PI_CATION_CUTOFF,
            ANGLE_TOLERANCE,
        );
        assert!(pairs.is_empty());
    }

    #[test]
    fn empty_subsets_yield_empty_results() {
        let empty = Molecule::default();
        assert!(
            pi_cation(
                &empty,
                &cation_molecule([0.0, 0.0, 4.0]),
                PI_CATION_CUTOFF,
                ANGLE_TOLERANCE
            )
            .is_empty()
        );
        assert!(pi_cation(&ring_molecule(), &empty, PI_CATION_CUTOFF, ANGLE_TOLERANCE).is_empty());
    }
}
