#![warn(missing_docs)]
//! Small numeric helper functions
use nalgebra::Point3;
use uom::si::f64::Length;

/// Convert a `usize` to an `f64`.
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

/// Check whether a point lies within (or on) a sphere of the given radius.
///
/// The comparison uses the Euclidean distance with an inclusive boundary. The sign of
/// `radius` is ignored since a radius of curvature may be given with either sign.
#[must_use]
pub fn within_radius(point: &Point3<Length>, center: &Point3<Length>, radius: Length) -> bool {
    let distance = (point.map(|c| c.value) - center.map(|c| c.value)).norm();
    distance <= radius.value.abs()
}
