//! Stateless distance and angle primitives over `nalgebra` points and
//! vectors. All angles are in degrees. A measurement involving a zero-length
//! direction vector is undefined and reported as `None`, never as a spurious
//! zero-degree angle.

use nalgebra::{Point3, Vector3};

/// Below this length a direction vector is treated as degenerate.
const DEGENERACY_EPSILON: f64 = 1e-9;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Angle in degrees between two free direction vectors, in `[0, 180]`.
///
/// Returns `None` if either vector is (near) zero-length.
pub fn angle_between(v1: &Vector3<f64>, v2: &Vector3<f64>) -> Option<f64> {
    let n1 = v1.norm();
    let n2 = v2.norm();
    if n1 < DEGENERACY_EPSILON || n2 < DEGENERACY_EPSILON {
        return None;
    }
    let cosine = (v1.dot(v2) / (n1 * n2)).clamp(-1.0, 1.0);
    Some(cosine.acos().to_degrees())
}

/// Angle in degrees at `vertex` between the ray towards `outer` and the ray
/// towards `reference`.
///
/// Returns `None` if either point coincides with the vertex.
pub fn angle_at_vertex(
    outer: &Point3<f64>,
    vertex: &Point3<f64>,
    reference: &Point3<f64>,
) -> Option<f64> {
    angle_between(&(outer - vertex), &(reference - vertex))
}
