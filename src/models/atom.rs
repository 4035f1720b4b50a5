use super::error::ModelError;
use nalgebra::Point3;

/// Maximum number of directional neighbor reference points stored per atom.
pub const MAX_NEIGHBORS: usize = 4;

/// Canonical bond angles in degrees, indexed by hybridization code.
pub const IDEAL_ANGLES: [f64; 5] = [0.0, 180.0, 120.0, 109.5, 90.0];

/// Bonding geometry classification of an atom.
///
/// The discriminant doubles as an index into [`IDEAL_ANGLES`], so each
/// variant carries the canonical angle expected between an approaching
/// partner and the atom's covalent neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Hybridization {
    /// No geometry assigned; ideal angle 0 degrees.
    #[default]
    Unspecified = 0,
    /// Linear (sp); ideal angle 180 degrees.
    Sp = 1,
    /// Trigonal planar (sp2); ideal angle 120 degrees.
    Sp2 = 2,
    /// Tetrahedral (sp3); ideal angle 109.5 degrees.
    Sp3 = 3,
    /// Square planar / octahedral; ideal angle 90 degrees.
    SquarePlanar = 4,
}

impl Hybridization {
    /// Returns the canonical angle in degrees for this geometry.
    pub fn ideal_angle(self) -> f64 {
        IDEAL_ANGLES[self as usize]
    }
}

impl TryFrom<u8> for Hybridization {
    type Error = ModelError;

    /// Converts a raw hybridization code from an upstream producer.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownHybridization`] if the code does not
    /// index the ideal-angle table.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Hybridization::Unspecified),
            1 => Ok(Hybridization::Sp),
            2 => Ok(Hybridization::Sp2),
            3 => Ok(Hybridization::Sp3),
            4 => Ok(Hybridization::SquarePlanar),
            _ => Err(ModelError::UnknownHybridization { code }),
        }
    }
}

/// One atom record as consumed by the interaction detectors.
///
/// Property flags are independent of each other: an atom may be both an
/// acceptor and a metal, both plus-charged and hydrophobic, and so on.
/// Neighbor slots beyond the atom's actual covalent neighbor count stay
/// `None`; an empty slot never registers as a valid angle measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Positions of up to [`MAX_NEIGHBORS`] covalently bonded neighbors,
    /// used as directional references for angle measurements.
    pub neighbors: [Option<Point3<f64>>; MAX_NEIGHBORS],
    /// Bonding geometry, selecting the ideal approach angle.
    pub hybridization: Hybridization,
    /// Hydrogen/halogen bond acceptor.
    pub is_acceptor: bool,
    /// Hydrogen bond donor.
    pub is_donor: bool,
    /// Halogen bond donor (C-X halogen).
    pub is_halogen: bool,
    /// Positively charged (cation).
    pub is_plus: bool,
    /// Negatively charged (anion).
    pub is_minus: bool,
    /// Hydrophobic atom.
    pub is_hydrophobe: bool,
    /// Metal atom.
    pub is_metal: bool,
}

impl Atom {
    /// Creates an atom at `position` with no neighbors, unspecified
    /// hybridization and every property flag cleared. Fields are public and
    /// are filled in afterwards by the property-assignment producer.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            neighbors: [None; MAX_NEIGHBORS],
            hybridization: Hybridization::default(),
            is_acceptor: false,
            is_donor: false,
            is_halogen: false,
            is_plus: false,
            is_minus: false,
            is_hydrophobe: false,
            is_metal: false,
        }
    }
}
