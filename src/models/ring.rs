use nalgebra::{Point3, Vector3};

/// One aromatic or planar ring, reduced to its centroid and normal.
///
/// The normal is expected to be near unit length; its tip
/// (`centroid + normal`) also serves as the directional reference point for
/// angle-to-plane measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    /// Geometric center of the ring atoms, in Angstroms.
    pub centroid: Point3<f64>,
    /// Direction perpendicular to the ring plane, anchored at the centroid.
    pub normal: Vector3<f64>,
}

impl Ring {
    pub fn new(centroid: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { centroid, normal }
    }
}
