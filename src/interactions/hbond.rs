use super::StrictPairs;
use super::contacts::close_contacts;
use super::strictness::{matches_ideal_angle, neighbor_angles};
use crate::models::molecule::Molecule;
use tracing::debug;

/// Default acceptor-donor distance cutoff in Angstroms.
pub const HBOND_CUTOFF: f64 = 3.5;

/// Hydrogen bond candidates between acceptors of `mol1` and donors of `mol2`.
///
/// A pair is strict when the donor approaches the acceptor within
/// `tolerance` degrees of the acceptor's ideal geometry *and* the acceptor
/// approaches the donor within `tolerance` of the donor's ideal geometry,
/// each judged against that atom's own covalent neighbors. Pairs failing
/// either check are still returned, flagged crude.
///
/// `first` indexes atoms of `mol1` (acceptors), `second` atoms of `mol2`
/// (donors).
pub fn hbond_acceptor_donor(
    mol1: &Molecule,
    mol2: &Molecule,
    cutoff: f64,
    tolerance: f64,
) -> StrictPairs {
    let acceptors = mol1.select_atoms(|a| a.is_acceptor);
    let donors = mol2.select_atoms(|a| a.is_donor);
    let contacts = close_contacts(
        &mol1.atom_positions(&acceptors),
        &mol2.atom_positions(&donors),
        cutoff,
        0.0,
    );

    let mut pairs = StrictPairs::default();
    for (ai, di) in contacts.iter() {
        let acceptor = &mol1.atoms[acceptors[ai]];
        let donor = &mol2.atoms[donors[di]];

        let at_acceptor = neighbor_angles(&donor.position, acceptor);
        let at_donor = neighbor_angles(&acceptor.position, donor);
        let strict = matches_ideal_angle(&at_acceptor, acceptor.hybridization, tolerance)
            && matches_ideal_angle(&at_donor, donor.hybridization, tolerance);

        pairs.push(acceptors[ai], donors[di], strict);
    }
    debug!(candidates = pairs.len(), "acceptor-donor scan complete");
    pairs
}

/// Hydrogen bonds between two structures, regardless of which side carries
/// the acceptor. Runs [`hbond_acceptor_donor`] in both directions and
/// concatenates, so `first` always indexes `mol1` and `second` always `mol2`.
pub fn hbonds(mol1: &Molecule, mol2: &Molecule, cutoff: f64, tolerance: f64) -> StrictPairs {
    let mut pairs = hbond_acceptor_donor(mol1, mol2, cutoff, tolerance);
    pairs.extend_swapped(hbond_acceptor_donor(mol2, mol1, cutoff, tolerance));
    pairs
}
