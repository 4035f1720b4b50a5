use super::StrictPairs;
use super::contacts::close_contacts;
use super::strictness::{matches_ideal_angle, neighbor_angles};
use crate::models::molecule::Molecule;
use tracing::debug;

/// Default acceptor-halogen distance cutoff in Angstroms.
pub const HALOGENBOND_CUTOFF: f64 = 4.0;

/// Halogen bond candidates between acceptors of `mol1` and halogens of
/// `mol2`. Same directional double-check as a hydrogen bond, with the
/// halogen standing in for the donor.
///
/// `first` indexes atoms of `mol1` (acceptors), `second` atoms of `mol2`
/// (halogens).
pub fn halogenbond_acceptor_halogen(
    mol1: &Molecule,
    mol2: &Molecule,
    cutoff: f64,
    tolerance: f64,
) -> StrictPairs {
    let acceptors = mol1.select_atoms(|a| a.is_acceptor);
    let halogens = mol2.select_atoms(|a| a.is_halogen);
    let contacts = close_contacts(
        &mol1.atom_positions(&acceptors),
        &mol2.atom_positions(&halogens),
        cutoff,
        0.0,
    );

    let mut pairs = StrictPairs::default();
    for (ai, hi) in contacts.iter() {
        let acceptor = &mol1.atoms[acceptors[ai]];
        let halogen = &mol2.atoms[halogens[hi]];

        let at_acceptor = neighbor_angles(&halogen.position, acceptor);
        let at_halogen = neighbor_angles(&acceptor.position, halogen);
        let strict = matches_ideal_angle(&at_acceptor, acceptor.hybridization, tolerance)
            && matches_ideal_angle(&at_halogen, halogen.hybridization, tolerance);

        pairs.push(acceptors[ai], halogens[hi], strict);
    }
    debug!(candidates = pairs.len(), "acceptor-halogen scan complete");
    pairs
}

/// Halogen bonds between two structures, regardless of which side carries
/// the acceptor. `first` always indexes `mol1`, `second` always `mol2`.
pub fn halogenbonds(mol1: &Molecule, mol2: &Molecule, cutoff: f64, tolerance: f64) -> StrictPairs {
    let mut pairs = halogenbond_acceptor_halogen(mol1, mol2, cutoff, tolerance);
    pairs.extend_swapped(halogenbond_acceptor_halogen(mol2, mol1, cutoff, tolerance));
    pairs
}
