use super::ContactPairs;
use super::contacts::close_contacts;
use crate::models::molecule::Molecule;
use tracing::debug;

/// Default cation-anion distance cutoff in Angstroms.
pub const SALT_BRIDGE_CUTOFF: f64 = 4.0;

/// Salt bridge candidates between cations of `mol1` and anions of `mol2`.
/// Distance-only: there is no strict/crude distinction for charged contacts.
///
/// `first` indexes atoms of `mol1` (cations), `second` atoms of `mol2`
/// (anions).
pub fn salt_bridge_plus_minus(mol1: &Molecule, mol2: &Molecule, cutoff: f64) -> ContactPairs {
    let cations = mol1.select_atoms(|a| a.is_plus);
    let anions = mol2.select_atoms(|a| a.is_minus);
    let contacts = close_contacts(
        &mol1.atom_positions(&cations),
        &mol2.atom_positions(&anions),
        cutoff,
        0.0,
    );

    let mut pairs = ContactPairs::default();
    for (ci, ai) in contacts.iter() {
        pairs.push(cations[ci], anions[ai]);
    }
    debug!(candidates = pairs.len(), "plus-minus scan complete");
    pairs
}

/// Salt bridges between two structures, regardless of which side carries the
/// positive charge. `first` always indexes `mol1`, `second` always `mol2`.
pub fn salt_bridges(mol1: &Molecule, mol2: &Molecule, cutoff: f64) -> ContactPairs {
    let mut pairs = salt_bridge_plus_minus(mol1, mol2, cutoff);
    pairs.extend_swapped(salt_bridge_plus_minus(mol2, mol1, cutoff));
    pairs
}
