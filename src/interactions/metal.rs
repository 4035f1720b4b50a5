use super::StrictPairs;
use super::contacts::close_contacts;
use super::strictness::{matches_ideal_angle, neighbor_angles, within_axial_band};
use crate::geometry;
use crate::models::molecule::Molecule;
use tracing::debug;

/// Default acceptor-metal distance cutoff in Angstroms.
pub const ACCEPTOR_METAL_CUTOFF: f64 = 4.0;

/// Default centroid-metal distance cutoff in Angstroms.
pub const PI_METAL_CUTOFF: f64 = 5.0;

/// Metal coordination candidates between acceptors of `mol1` and metals of
/// `mol2`.
///
/// Only the acceptor side carries a directional criterion: the metal must
/// approach within `tolerance` of the acceptor's ideal geometry. Deliberately
/// single-sided (mol1 holds acceptors, mol2 holds metals); call again with
/// the structures swapped to search the other direction.
///
/// `first` indexes atoms of `mol1` (acceptors), `second` atoms of `mol2`
/// (metals).
pub fn acceptor_metal(
    mol1: &Molecule,
    mol2: &Molecule,
    cutoff: f64,
    tolerance: f64,
) -> StrictPairs {
    let acceptors = mol1.select_atoms(|a| a.is_acceptor);
    let metals = mol2.select_atoms(|a| a.is_metal);
    let contacts = close_contacts(
        &mol1.atom_positions(&acceptors),
        &mol2.atom_positions(&metals),
        cutoff,
        0.0,
    );

    let mut pairs = StrictPairs::default();
    for (ai, mi) in contacts.iter() {
        let acceptor = &mol1.atoms[acceptors[ai]];
        let metal = &mol2.atoms[metals[mi]];

        let at_acceptor = neighbor_angles(&metal.position, acceptor);
        let strict = matches_ideal_angle(&at_acceptor, acceptor.hybridization, tolerance);

        pairs.push(acceptors[ai], metals[mi], strict);
    }
    debug!(candidates = pairs.len(), "acceptor-metal scan complete");
    pairs
}

/// Pi-metal candidates between rings of `mol1` and metals of `mol2`.
///
/// Same axial criterion as pi-cation, with the metal in place of the cation.
/// Single-sided.
///
/// `first` indexes rings of `mol1`, `second` atoms of `mol2` (metals).
pub fn pi_metal(mol1: &Molecule, mol2: &Molecule, cutoff: f64, tolerance: f64) -> StrictPairs {
    let metals = mol2.select_atoms(|a| a.is_metal);
    let contacts = close_contacts(
        &mol1.ring_centroids(),
        &mol2.atom_positions(&metals),
        cutoff,
        0.0,
    );

    let mut pairs = StrictPairs::default();
    for (ri, mi) in contacts.iter() {
        let ring = &mol1.rings[ri];
        let metal = &mol2.atoms[metals[mi]];

        let approach = geometry::angle_between(&ring.normal, &(metal.position - ring.centroid));
        let strict = within_axial_band(approach, tolerance);

        pairs.push(ri, metals[mi], strict);
    }
    debug!(candidates = pairs.len(), "ring-metal scan complete");
    pairs
}
