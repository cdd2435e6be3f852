//! Module for handling geometric surfaces
//!
//! This module contains the [`GeoSurface`] trait which handles the interface for calculating
//! intersection points of rays with concrete surface shapes.
use std::fmt::Debug;

use nalgebra::{Point3, Vector3};
use uom::si::f64::Length;

use crate::ray::Ray;

/// Trait for handling geometric surfaces.
///
/// A geometric surface such as [`Plane`](super::Plane) or [`Sphere`](super::Sphere) has to
/// implement this trait in order to be used by the
/// [`refract_on_surface`](crate::ray::Ray::refract_on_surface) function.
pub trait GeoSurface: Send + Sync {
    /// Calculate intersection point and its normal vector of a [`Ray`] with a [`GeoSurface`]
    ///
    /// This function returns `None` if the given ray does not intersect with the surface.
    /// Intersection points behind the ray origin (negative propagation distance) do not
    /// count as intersections.
    fn calc_intersect_and_normal(&self, ray: &Ray) -> Option<(Point3<Length>, Vector3<f64>)>;
    /// Return the surface type as string (for debugging purposes)
    fn name(&self) -> &'static str;
}

impl Debug for dyn GeoSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
