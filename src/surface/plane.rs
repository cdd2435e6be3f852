//! Flat surface
//!
//! An infinitely large flat 2D surface oriented perpendicular to the optical axis (xy plane)
//! and positioned at the given z position.

use nalgebra::{Point3, Vector3};
use uom::si::f64::Length;

use super::GeoSurface;
use crate::ray::Ray;
use crate::{
    error::{OptResult, OptraceError},
    meter,
};

#[derive(Debug)]
/// An infinitely large flat surface with its normal collinear to the optical axis.
pub struct Plane {
    z: Length,
}
impl Plane {
    /// Create a new [`Plane`] located at the given z position on the optical axis.
    ///
    /// The plane is oriented vertical with respect to the optical axis (xy plane).
    /// # Errors
    ///
    /// This function will return an error if z is not finite.
    pub fn new(z: Length) -> OptResult<Self> {
        if !z.is_finite() {
            return Err(OptraceError::Other("z must be finite".into()));
        }
        Ok(Self { z })
    }
}

impl GeoSurface for Plane {
    fn calc_intersect_and_normal(&self, ray: &Ray) -> Option<(Point3<Length>, Vector3<f64>)> {
        let mut ray_position = ray.position().map(|c| c.value);
        let ray_direction = ray.direction();
        if ray_direction.z.abs() < f64::EPSILON {
            // Ray propagates parallel to the plane => no intersection
            return None;
        }
        let distance_in_z_direction = self.z.value - ray_position.z;
        let length_in_ray_dir = distance_in_z_direction / ray_direction.z;
        if length_in_ray_dir < 0.0 {
            // Plane lies behind the ray origin => no intersection
            return None;
        }
        ray_position += length_in_ray_dir * ray_direction;
        let intersection_point = meter!(ray_position.x, ray_position.y, self.z.value);
        let normal_vector = Vector3::new(0.0, 0.0, -1.0);
        Some((intersection_point, normal_vector))
    }
    fn name(&self) -> &'static str {
        "plane"
    }
}
