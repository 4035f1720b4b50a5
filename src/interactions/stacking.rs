use super::StackingPairs;
use super::contacts::close_contacts;
use super::strictness::{within_axial_band, within_perpendicular_band};
use crate::geometry;
use crate::models::molecule::Molecule;
use tracing::debug;

/// Default centroid-centroid distance cutoff in Angstroms.
pub const PI_STACKING_CUTOFF: f64 = 5.0;

/// Pi-stacking candidates between rings of `mol1` and rings of `mol2`.
///
/// Two angles decide the geometry: the angle between the two ring normals,
/// and the angle at the first ring's centroid between its normal tip and the
/// second centroid (the slip angle). A pair is strict-parallel when both are
/// near the 0/180 axis, strict-perpendicular (T-shaped) when the normals are
/// near 90 degrees while the slip angle stays axial. A pair may also be
/// neither: crude, distance only. The two flags are reported independently.
///
/// `first` indexes rings of `mol1`, `second` rings of `mol2`.
pub fn pi_stacking(mol1: &Molecule, mol2: &Molecule, cutoff: f64, tolerance: f64) -> StackingPairs {
    let contacts = close_contacts(&mol1.ring_centroids(), &mol2.ring_centroids(), cutoff, 0.0);

    let mut pairs = StackingPairs::default();
    for (i, j) in contacts.iter() {
        let r1 = &mol1.rings[i];
        let r2 = &mol2.rings[j];

        let normal_angle = geometry::angle_between(&r1.normal, &r2.normal);
        let slip_angle =
            geometry::angle_at_vertex(&(r1.centroid + r1.normal), &r1.centroid, &r2.centroid);

        let axial_slip = within_axial_band(slip_angle, tolerance);
        let parallel = within_axial_band(normal_angle, tolerance) && axial_slip;
        let perpendicular = within_perpendicular_band(normal_angle, tolerance) && axial_slip;

        pairs.push(i, j, parallel, perpendicular);
    }
    debug!(candidates = pairs.len(), "ring-ring stacking scan complete");
    pairs
}
