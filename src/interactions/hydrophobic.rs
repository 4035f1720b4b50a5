use super::ContactPairs;
use super::contacts::close_contacts;
use crate::models::molecule::Molecule;
use tracing::debug;

/// Default hydrophobe-hydrophobe distance cutoff in Angstroms.
pub const HYDROPHOBIC_CUTOFF: f64 = 4.0;

/// Hydrophobic contacts between the hydrophobic atoms of the two structures.
/// Distance-only and role-symmetric, so a single pass suffices.
///
/// `first` indexes atoms of `mol1`, `second` atoms of `mol2`.
pub fn hydrophobic_contacts(mol1: &Molecule, mol2: &Molecule, cutoff: f64) -> ContactPairs {
    let h1 = mol1.select_atoms(|a| a.is_hydrophobe);
    let h2 = mol2.select_atoms(|a| a.is_hydrophobe);
    let contacts = close_contacts(
        &mol1.atom_positions(&h1),
        &mol2.atom_positions(&h2),
        cutoff,
        0.0,
    );

    let mut pairs = ContactPairs::default();
    for (i, j) in contacts.iter() {
        pairs.push(h1[i], h2[j]);
    }
    debug!(candidates = pairs.len(), "hydrophobe scan complete");
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::atom::Atom;
    use nalgebra::Point3;

    fn hydrophobe_at(p: [f64; 3]) -> Atom {
        let mut atom = Atom::new(Point3::new(p[0], p[1], p[2]));
        atom.is_hydrophobe = true;
        atom
    }

    #[test]
    fn hydrophobes_within_cutoff_are_paired() {
        let mol1 = Molecule::new(vec![hydrophobe_at([0.0, 0.0, 0.0])], Vec::new());
        let mol2 = Molecule::new(
            vec![hydrophobe_at([3.9, 0.0, 0.0]), hydrophobe_at([8.0, 0.0, 0.0])],
            Vec::new(),
        );
        let pairs = hydrophobic_contacts(&mol1, &mol2, HYDROPHOBIC_CUTOFF);
        assert_eq!(pairs.first, vec![0]);
        assert_eq!(pairs.second, vec![0]);
    }

    #[test]
    fn non_hydrophobic_atoms_are_ignored() {
        let mol1 = Molecule::new(vec![Atom::new(Point3::origin())], Vec::new());
        let mol2 = Molecule::new(vec![hydrophobe_at([1.0, 0.0, 0.0])], Vec::new());
        assert!(hydrophobic_contacts(&mol1, &mol2, HYDROPHOBIC_CUTOFF).is_empty());
    }

    #[test]
    fn original_atom_indices_are_preserved_through_the_subset() {
        let mut polar = Atom::new(Point3::new(-1.0, 0.0, 0.0));
        polar.is_donor = true;
        let mol1 = Molecule::new(vec![polar, hydrophobe_at([0.0, 0.0, 0.0])], Vec::new());
        let mol2 = Molecule::new(vec![hydrophobe_at([2.0, 0.0, 0.0])], Vec::new());

        let pairs = hydrophobic_contacts(&mol1, &mol2, HYDROPHOBIC_CUTOFF);
        assert_eq!(pairs.first, vec![1]);
        assert_eq!(pairs.second, vec![0]);
    }

    #[test]
    fn empty_structures_yield_empty_results() {
        let empty = Molecule::default();
        let mol = Molecule::new(vec![hydrophobe_at([0.0, 0.0, 0.0])], Vec::new());
        assert!(hydrophobic_contacts(&empty, &mol, HYDROPHOBIC_CUTOFF).is_empty());
        assert!(hydrophobic_contacts(&mol, &empty, HYDROPHOBIC_CUTOFF).is_empty());
    }
}
