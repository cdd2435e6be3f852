//! Optical surface
//!
//! An [`OpticalSurface`] is one refracting interface of a sequential optical system: a
//! geometric shape (planar or spherical, selected by the radius of curvature), the material
//! *behind* the interface and its placement on the optical axis. The loader-facing
//! description of a surface is a [`SurfaceRecord`] which gets resolved against a glass
//! catalog during system construction.

use nalgebra::{Point3, Vector3};
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use super::{GeoSurface, Plane, Sphere};
use crate::{
    error::{OptResult, OptraceError},
    material::{GlassCatalog, Material},
    ray::Ray,
    refractive_index::RefractiveIndexType,
};

// Radii of curvature below this value (in meters) count as flat. The radius may stem from a
// numeric derivation upstream, so an exact comparison with 0.0 would be too strict.
const FLAT_RADIUS_LIMIT: f64 = 1e-12;

/// Loader-facing description of one surface of a sequential optical system.
///
/// A list of these records (usually produced by an external configuration loader) together
/// with a [`GlassCatalog`] is all that is needed to construct a
/// [`SequentialSystem`](crate::sequential_system::SequentialSystem). A radius of curvature
/// of zero denotes a planar surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceRecord {
    /// free-text comment of this surface
    pub comment: String,
    /// signed radius of curvature (0.0 = planar)
    pub radius: Length,
    /// distance from this surface's vertex to the next surface
    pub thickness: Length,
    /// material filling the space behind this surface
    pub material: Material,
    /// clear semi-diameter (half aperture) of this surface
    pub clear_semi_diameter: Length,
    /// true if this surface is the aperture stop of the system
    pub is_stop: bool,
    /// true if this surface is the global coordinate reference of the system
    pub is_reference: bool,
}
impl Default for SurfaceRecord {
    fn default() -> Self {
        Self {
            comment: String::new(),
            radius: Length::zero(),
            thickness: Length::zero(),
            material: Material::default(),
            clear_semi_diameter: Length::zero(),
            is_stop: false,
            is_reference: false,
        }
    }
}

/// One resolved, placed interface of a sequential optical system.
///
/// In contrast to a [`SurfaceRecord`] the material is already resolved into a concrete
/// refractive index model and the surface carries its derived global z coordinate. The
/// global coordinate is owned by the surrounding system and recomputed whenever the surface
/// list changes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OpticalSurface {
    comment: String,
    radius: Length,
    thickness: Length,
    clear_semi_diameter: Length,
    material: Material,
    refr_index: RefractiveIndexType,
    z: Length,
    is_stop: bool,
    is_reference: bool,
}
impl OpticalSurface {
    /// Create a new [`OpticalSurface`] from a [`SurfaceRecord`], resolving its material
    /// against the given catalog.
    ///
    /// The global z coordinate is initialized to zero and assigned later by the surrounding
    /// system.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - radius or clear semi-diameter are not finite (or the semi-diameter is negative).
    ///  - the thickness is negative or not finite (this would break the monotonic surface
    ///    ordering).
    ///  - the material cannot be resolved against the catalog.
    pub fn new(record: &SurfaceRecord, catalog: &GlassCatalog) -> OptResult<Self> {
        if !record.radius.is_finite() {
            return Err(OptraceError::SystemSetup(
                "surface radius must be finite".into(),
            ));
        }
        if record.thickness.is_sign_negative() || !record.thickness.is_finite() {
            return Err(OptraceError::SurfaceOrder(
                "surface thickness must be >=0.0 and finite".into(),
            ));
        }
        if record.clear_semi_diameter.is_sign_negative() || !record.clear_semi_diameter.is_finite()
        {
            return Err(OptraceError::SystemSetup(
                "clear semi-diameter must be >=0.0 and finite".into(),
            ));
        }
        let refr_index = record.material.resolve(catalog)?;
        Ok(Self {
            comment: record.comment.clone(),
            radius: record.radius,
            thickness: record.thickness,
            clear_semi_diameter: record.clear_semi_diameter,
            material: record.material.clone(),
            refr_index,
            z: Length::zero(),
            is_stop: record.is_stop,
            is_reference: record.is_reference,
        })
    }
    /// Returns the comment of this [`OpticalSurface`].
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }
    /// Returns the signed radius of curvature of this [`OpticalSurface`].
    #[must_use]
    pub fn radius(&self) -> Length {
        self.radius
    }
    /// Returns the distance from this surface's vertex to the next surface.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }
    /// Returns the clear semi-diameter (half aperture) of this [`OpticalSurface`].
    #[must_use]
    pub fn clear_semi_diameter(&self) -> Length {
        self.clear_semi_diameter
    }
    /// Returns the material filling the space behind this [`OpticalSurface`].
    #[must_use]
    pub const fn material(&self) -> &Material {
        &self.material
    }
    /// Returns the refractive index model of the material behind this [`OpticalSurface`].
    #[must_use]
    pub const fn refractive_index(&self) -> &RefractiveIndexType {
        &self.refr_index
    }
    /// Returns the global z coordinate of this surface's vertex on the optical axis.
    #[must_use]
    pub fn z(&self) -> Length {
        self.z
    }
    pub(crate) fn set_z(&mut self, z: Length) {
        self.z = z;
    }
    /// Returns true if this surface is the aperture stop of the system.
    #[must_use]
    pub const fn is_stop(&self) -> bool {
        self.is_stop
    }
    /// Returns true if this surface is the global coordinate reference of the system.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        self.is_reference
    }
    /// Returns true if this surface is planar.
    ///
    /// The radius of curvature is compared against a small limit instead of exactly 0.0.
    #[must_use]
    pub fn is_planar(&self) -> bool {
        self.radius.value.abs() < FLAT_RADIUS_LIMIT
    }
    /// Returns the center of curvature of this surface.
    ///
    /// The center is offset from the surface vertex by the radius along the optical axis.
    /// This function returns `None` for a planar surface.
    #[must_use]
    pub fn sphere_center(&self) -> Option<Point3<Length>> {
        if self.is_planar() {
            None
        } else {
            Some(Point3::new(
                Length::zero(),
                Length::zero(),
                self.z + self.radius,
            ))
        }
    }
    /// Calculate the intersection point of a [`Ray`] with this surface and the surface
    /// normal at that point.
    ///
    /// This function returns `None` if the ray does not intersect with the surface.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<(Point3<Length>, Vector3<f64>)> {
        if let Some(center) = self.sphere_center() {
            Sphere::new(center, self.radius)
                .ok()?
                .calc_intersect_and_normal(ray)
        } else {
            Plane::new(self.z).ok()?.calc_intersect_and_normal(ray)
        }
    }
}
