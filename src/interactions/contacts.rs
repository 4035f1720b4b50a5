use super::ContactPairs;
use crate::geometry;
use nalgebra::Point3;

/// All-pairs proximity join between two point collections.
///
/// Returns every index pair `(i, j)` whose euclidean distance lies in the
/// semi-inclusive window `(cutoff_low, cutoff]`: a pair exactly at
/// `cutoff_low` is excluded, exactly at `cutoff` included. Pairs are emitted
/// in row-major order of the underlying distance matrix (all partners of
/// `x[0]` before those of `x[1]`), which keeps results reproducible. Empty
/// inputs yield an empty result, never an error.
///
/// The join is O(|x| * |y|); candidate subsets are expected to be
/// binding-site sized, so no spatial index is built.
pub fn close_contacts(
    x: &[Point3<f64>],
    y: &[Point3<f64>],
    cutoff: f64,
    cutoff_low: f64,
) -> ContactPairs {
    let mut pairs = ContactPairs::default();
    for (i, xi) in x.iter().enumerate() {
        for (j, yj) in y.iter().enumerate() {
            let d = geometry::distance(xi, yj);
            if d > cutoff_low && d <= cutoff {
                pairs.push(i, j);
            }
        }
    }
    pairs
}
