use crate::interactions::halogen::{HALOGENBOND_CUTOFF, halogenbonds};
use crate::interactions::hbond::{HBOND_CUTOFF, hbonds};
use crate::interactions::hydrophobic::{HYDROPHOBIC_CUTOFF, hydrophobic_contacts};
use crate::interactions::metal::{ACCEPTOR_METAL_CUTOFF, PI_METAL_CUTOFF, acceptor_metal, pi_metal};
use crate::interactions::pi_cation::{PI_CATION_CUTOFF, pi_cation};
use crate::interactions::salt_bridge::{SALT_BRIDGE_CUTOFF, salt_bridges};
use crate::interactions::stacking::{PI_STACKING_CUTOFF, pi_stacking};
use crate::interactions::{ANGLE_TOLERANCE, ContactPairs, StackingPairs, StrictPairs};
use crate::models::error::ModelError;
use crate::models::molecule::Molecule;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("malformed {structure} structure: {source}")]
    MalformedStructure {
        structure: &'static str,
        source: ModelError,
    },
}

/// Per-family distance cutoffs (Angstroms) and the shared angular tolerance
/// (degrees). `Default` reproduces the public per-family constants; any
/// field may be overridden without changing result shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub hbond_cutoff: f64,
    pub halogenbond_cutoff: f64,
    pub pi_stacking_cutoff: f64,
    pub salt_bridge_cutoff: f64,
    pub hydrophobic_cutoff: f64,
    pub pi_cation_cutoff: f64,
    pub acceptor_metal_cutoff: f64,
    pub pi_metal_cutoff: f64,
    pub angle_tolerance: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hbond_cutoff: HBOND_CUTOFF,
            halogenbond_cutoff: HALOGENBOND_CUTOFF,
            pi_stacking_cutoff: PI_STACKING_CUTOFF,
            salt_bridge_cutoff: SALT_BRIDGE_CUTOFF,
            hydrophobic_cutoff: HYDROPHOBIC_CUTOFF,
            pi_cation_cutoff: PI_CATION_CUTOFF,
            acceptor_metal_cutoff: ACCEPTOR_METAL_CUTOFF,
            pi_metal_cutoff: PI_METAL_CUTOFF,
            angle_tolerance: ANGLE_TOLERANCE,
        }
    }
}

/// Every interaction family between one pair of structures.
///
/// Bidirectional families are already symmetrized; the single-sided families
/// are reported once per direction, with the field name stating which
/// structure carries which role. In every result `first` indexes `mol1` and
/// `second` indexes `mol2` records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionProfile {
    pub hbonds: StrictPairs,
    pub halogen_bonds: StrictPairs,
    pub salt_bridges: ContactPairs,
    pub hydrophobic_contacts: ContactPairs,
    /// Rings of `mol1` against rings of `mol2`.
    pub pi_stacking: StackingPairs,
    /// Rings of `mol1` against cations of `mol2`.
    pub pi_cation: StrictPairs,
    /// Cations of `mol1` against rings of `mol2`.
    pub cation_pi: StrictPairs,
    /// Acceptors of `mol1` against metals of `mol2`.
    pub acceptor_metal: StrictPairs,
    /// Metals of `mol1` against acceptors of `mol2`.
    pub metal_acceptor: StrictPairs,
    /// Rings of `mol1` against metals of `mol2`.
    pub pi_metal: StrictPairs,
    /// Metals of `mol1` against rings of `mol2`.
    pub metal_pi: StrictPairs,
}

impl InteractionProfile {
    /// Total number of candidate pairs across all families and directions.
    pub fn total_contacts(&self) -> usize {
        self.hbonds.len()
            + self.halogen_bonds.len()
            + self.salt_bridges.len()
            + self.hydrophobic_contacts.len()
            + self.pi_stacking.len()
            + self.pi_cation.len()
            + self.cation_pi.len()
            + self.acceptor_metal.len()
            + self.metal_acceptor.len()
            + self.pi_metal.len()
            + self.metal_pi.len()
    }
}

/// Runs every interaction detector between `mol1` and `mol2`.
///
/// # Errors
///
/// Returns [`ProfileError::MalformedStructure`] if either structure fails
/// validation; no detector runs in that case.
#[instrument(skip_all, name = "interaction_profile")]
pub fn interaction_profile(
    mol1: &Molecule,
    mol2: &Molecule,
    config: &InteractionConfig,
) -> Result<InteractionProfile, ProfileError> {
    mol1.validate()
        .map_err(|source| ProfileError::MalformedStructure {
            structure: "first",
            source,
        })?;
    mol2.validate()
        .map_err(|source| ProfileError::MalformedStructure {
            structure: "second",
            source,
        })?;

    info!(
        atoms1 = mol1.atoms.len(),
        rings1 = mol1.rings.len(),
        atoms2 = mol2.atoms.len(),
        rings2 = mol2.rings.len(),
        "Profiling non-covalent interactions."
    );

    let tolerance = config.angle_tolerance;
    let profile = InteractionProfile {
        hbonds: hbonds(mol1, mol2, config.hbond_cutoff, tolerance),
        halogen_bonds: halogenbonds(mol1, mol2, config.halogenbond_cutoff, tolerance),
        salt_bridges: salt_bridges(mol1, mol2, config.salt_bridge_cutoff),
        hydrophobic_contacts: hydrophobic_contacts(mol1, mol2, config.hydrophobic_cutoff),
        pi_stacking: pi_stacking(mol1, mol2, config.pi_stacking_cutoff, tolerance),
        pi_cation: pi_cation(mol1, mol2, config.pi_cation_cutoff, tolerance),
        cation_pi: {
            let mut pairs = StrictPairs::default();
            pairs.extend_swapped(pi_cation(mol2, mol1, config.pi_cation_cutoff, tolerance));
            pairs
        },
        acceptor_metal: acceptor_metal(mol1, mol2, config.acceptor_metal_cutoff, tolerance),
        metal_acceptor: {
            let mut pairs = StrictPairs::default();
            pairs.extend_swapped(acceptor_metal(
                mol2,
                mol1,
                config.acceptor_metal_cutoff,
                tolerance,
            ));
            pairs
        },
        pi_metal: pi_metal(mol1, mol2, config.pi_metal_cutoff, tolerance),
        metal_pi: {
            let mut pairs = StrictPairs::default();
            pairs.extend_swapped(pi_metal(mol2, mol1, config.pi_metal_cutoff, tolerance));
            pairs
        },
    };

    info!(
        total_contacts = profile.total_contacts(),
        "Interaction profile complete."
    );

    Ok(profile)
}
