use crate::geometry;
use crate::models::atom::{Atom, Hybridization, MAX_NEIGHBORS};
use nalgebra::Point3;

/// Measures the angle at `atom` between the ray towards `outer` and the ray
/// towards each of the atom's covalent neighbors, one slot per neighbor.
///
/// Empty neighbor slots and degenerate measurements (neighbor coincident
/// with the atom) stay `None`, so they can never register as a valid angle.
pub fn neighbor_angles(outer: &Point3<f64>, atom: &Atom) -> [Option<f64>; MAX_NEIGHBORS] {
    let mut angles = [None; MAX_NEIGHBORS];
    for (slot, neighbor) in atom.neighbors.iter().enumerate() {
        angles[slot] = neighbor
            .as_ref()
            .and_then(|n| geometry::angle_at_vertex(outer, &atom.position, n));
    }
    angles
}

/// Decides whether a candidate pair is geometrically strict.
///
/// The ideal angle comes from the pair's hybridization; the acceptance band
/// is `(ideal - tolerance, ideal + tolerance)`, open on both ends. A single
/// measured angle inside the band suffices: only one correctly placed
/// neighbor is needed to validate directionality. Undefined measurements
/// never satisfy the band.
pub fn matches_ideal_angle(
    angles: &[Option<f64>],
    hybridization: Hybridization,
    tolerance: f64,
) -> bool {
    let ideal = hybridization.ideal_angle();
    angles
        .iter()
        .flatten()
        .any(|&angle| angle > ideal - tolerance && angle < ideal + tolerance)
}

/// `true` if `angle` lies within `tolerance` of either end of the 0-180
/// degree axis, i.e. the two directions are near-parallel or near-antiparallel.
pub(crate) fn within_axial_band(angle: Option<f64>, tolerance: f64) -> bool {
    angle.is_some_and(|a| a > 180.0 - tolerance || a < tolerance)
}

/// `true` if `angle` lies within `tolerance` of 90 degrees.
pub(crate) fn within_perpendicular_band(angle: Option<f64>, tolerance: f64) -> bool {
    angle.is_some_and(|a| a > 90.0 - tolerance && a < 90.0 + tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_matching_neighbor_slot_is_sufficient() {
        let angles = [Some(10.0), Some(178.0), None, None];
        assert!(matches_ideal_angle(&angles, Hybridization::Sp, 30.0));
    }

    #[test]
    fn no_matching_slot_means_not_strict() {
        let angles = [Some(10.0), Some(100.0), None, None];
        assert!(!matches_ideal_angle(&angles, Hybridization::Sp, 30.0));
    }

    #[test]
    fn band_is_open_at_both_ends() {
        // sp2 ideal = 120, tolerance 30 -> band (90, 150)
        assert!(!matches_ideal_angle(&[Some(90.0)], Hybridization::Sp2, 30.0));
        assert!(!matches_ideal_angle(&[Some(150.0)], Hybridization::Sp2, 30.0));
        assert!(matches_ideal_angle(&[Some(90.1)], Hybridization::Sp2, 30.0));
        assert!(matches_ideal_angle(&[Some(149.9)], Hybridization::Sp2, 30.0));
    }

    #[test]
    fn zero_tolerance_rejects_even_the_ideal_angle() {
        assert!(!matches_ideal_angle(&[Some(180.0)], Hybridization::Sp, 0.0));
    }

    #[test]
    fn strictness_is_monotonic_in_tolerance() {
        let angles = [Some(140.0)];
        let mut previous = false;
        for tolerance in [0.0, 10.0, 20.0, 30.0, 45.0, 60.0] {
            let strict = matches_ideal_angle(&angles, Hybridization::Sp, tolerance);
            assert!(strict || !previous, "strictness regressed as tolerance grew");
            previous = strict;
        }
        assert!(previous);
    }

    #[test]
    fn missing_measurements_never_satisfy_any_band() {
        let angles: [Option<f64>; MAX_NEIGHBORS] = [None; MAX_NEIGHBORS];
        for hybridization in [
            Hybridization::Unspecified,
            Hybridization::Sp,
            Hybridization::Sp2,
            Hybridization::Sp3,
            Hybridization::SquarePlanar,
        ] {
            assert!(!matches_ideal_angle(&angles, hybridization, 90.0));
        }
    }

    #[test]
    fn neighbor_angles_reports_one_slot_per_neighbor() {
        let mut atom = Atom::new(Point3::origin());
        atom.neighbors[0] = Some(Point3::new(0.0, 1.0, 0.0));
        atom.neighbors[2] = Some(Point3::new(-1.0, 0.0, 0.0));

        let angles = neighbor_angles(&Point3::new(1.0, 0.0, 0.0), &atom);
        assert!((angles[0].unwrap() - 90.0).abs() < 1e-9);
        assert_eq!(angles[1], None);
        assert!((angles[2].unwrap() - 180.0).abs() < 1e-9);
        assert_eq!(angles[3], None);
    }

    #[test]
    fn coincident_neighbor_yields_no_measurement() {
        let mut atom = Atom::new(Point3::new(1.0, 1.0, 1.0));
        atom.neighbors[0] = Some(Point3::new(1.0, 1.0, 1.0));
        let angles = neighbor_angles(&Point3::origin(), &atom);
        assert_eq!(angles[0], None);
    }

    #[test]
    fn axial_band_accepts_both_ends_of_the_axis() {
        assert!(within_axial_band(Some(5.0), 30.0));
        assert!(within_axial_band(Some(175.0), 30.0));
        assert!(!within_axial_band(Some(90.0), 30.0));
        assert!(!within_axial_band(Some(30.0), 30.0));
        assert!(!within_axial_band(None, 30.0));
    }

    #[test]
    fn perpendicular_band_is_centered_on_ninety() {
        assert!(within_perpendicular_band(Some(90.0), 30.0));
        assert!(within_perpendicular_band(Some(65.0), 30.0));
        assert!(!within_perpendicular_band(Some(120.0), 30.0));
        assert!(!within_perpendicular_band(None, 30.0));
    }
}
