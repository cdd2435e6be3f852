//! Spherical surface
//!
//! A full sphere given by its center position on the optical axis and its (signed) radius.
//! The sign of the radius denotes whether the surface vertex bulges toward (positive) or
//! away from (negative) the incoming light; it does not change the sphere geometry itself
//! but is kept for selecting the physically meaningful intersection.

use nalgebra::{Point3, Vector3};
use roots::{find_roots_quadratic, Roots};
use uom::si::f64::Length;

use super::GeoSurface;
use crate::ray::Ray;
use crate::utils::within_radius;
use crate::{
    error::{OptResult, OptraceError},
    meter,
};

#[derive(Debug)]
/// A spherical surface with its center on the optical axis.
pub struct Sphere {
    center: Point3<Length>,
    radius: Length,
}
impl Sphere {
    /// Create a new [`Sphere`] with the given center position and radius.
    ///
    /// # Errors
    ///
    /// This function will return an error if the radius is zero or not finite or if a
    /// component of the center position is not finite.
    pub fn new(center: Point3<Length>, radius: Length) -> OptResult<Self> {
        if !radius.is_normal() {
            return Err(OptraceError::Other(
                "radius of curvature must be != 0.0 and finite".into(),
            ));
        }
        if center.iter().any(|c| !c.is_finite()) {
            return Err(OptraceError::Other(
                "center position entries must be finite".into(),
            ));
        }
        Ok(Self { center, radius })
    }
}

impl GeoSurface for Sphere {
    fn calc_intersect_and_normal(&self, ray: &Ray) -> Option<(Point3<Length>, Vector3<f64>)> {
        let dir = ray.direction().normalize();
        let pos = ray.position().map(|c| c.value);
        let center = self.center.map(|c| c.value);
        let radius = self.radius.value;
        // sphere formula (at origin): x^2 + y^2 + z^2 = r^2
        //
        // insert ray (o: origin relative to sphere center, d: direction):
        // (o + t*d).(o + t*d) - r^2 = 0
        // This translates into the quadratic equation
        // at^2 + bt + c = 0 with
        // a = d.d
        // b = 2 (o.d)
        // c = o.o - r^2
        let oc = pos - center;
        let a = dir.norm_squared();
        let b = 2.0 * oc.dot(&dir);
        let c = radius.mul_add(-radius, oc.norm_squared());
        let roots = find_roots_quadratic(a, b, c);
        let intersection_point = match roots {
            // no intersection
            Roots::No(_) => return None,
            // "just touching" intersection
            Roots::One(t) => {
                if t[0] >= 0.0 {
                    pos + t[0] * dir
                } else {
                    return None;
                }
            }
            // "regular" intersection
            Roots::Two(t) => {
                let real_t = if within_radius(&ray.position(), &self.center, self.radius) {
                    // origin inside the sphere => ray exits through the back face
                    f64::max(t[0], t[1])
                } else {
                    // origin outside the sphere => ray strikes the front face
                    f64::min(t[0], t[1])
                };
                if real_t.is_sign_negative() {
                    // surface behind beam
                    return None;
                }
                pos + real_t * dir
            }
            _ => unreachable!(),
        };
        let normal_vector = (intersection_point - center).normalize();
        Some((
            meter!(
                intersection_point.x,
                intersection_point.y,
                intersection_point.z
            ),
            normal_vector,
        ))
    }
    fn name(&self) -> &'static str {
        "sphere"
    }
}
