#![warn(missing_docs)]
//! Module for handling optical rays
use std::fmt::Display;

use nalgebra::{vector, Point3, Vector3};
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::Length,
    length::{millimeter, nanometer},
};

use crate::{
    error::{OptResult, OptraceError},
    meter, millimeter,
    surface::OpticalSurface,
};

///Struct that contains all information about an optical ray
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ray {
    /// Stores the current position of the ray
    pos: Point3<Length>,
    /// Stores the position history of the ray
    pos_hist: Vec<Point3<Length>>,
    /// Stores the current propagation direction of the ray (stored as direction cosine)
    dir: Vector3<f64>,
    /// Wavelength of the ray
    wvl: Length,
    /// Refraction count of the ray
    number_of_refractions: usize,
    /// True if ray is allowed to further propagate, false else
    valid: bool,
    /// optical path length of the ray
    path_length: Length,
    // refractive index of the medium this ray is propagating in.
    refractive_index: f64,
}
impl Ray {
    /// Creates a new [`Ray`].
    ///
    /// The direction vector is normalized. The direction is thus stored as (`direction cosine`)[`https://en.wikipedia.org/wiki/Direction_cosine`]
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the given wavelength is <= 0.0, `NaN` or +inf
    ///  - the direction vector has a zero length
    pub fn new(
        position: Point3<Length>,
        direction: Vector3<f64>,
        wave_length: Length,
    ) -> OptResult<Self> {
        if wave_length.is_zero() || wave_length.is_sign_negative() || !wave_length.is_finite() {
            return Err(OptraceError::Other("wavelength must be >0".into()));
        }
        if direction.norm().is_zero() {
            return Err(OptraceError::DegenerateRayDirection(
                "length of direction must be >0".into(),
            ));
        }
        Ok(Self {
            pos: position,
            pos_hist: Vec::<Point3<Length>>::with_capacity(50),
            dir: direction.normalize(),
            wvl: wave_length,
            path_length: Length::zero(),
            refractive_index: 1.0,
            number_of_refractions: 0,
            valid: true,
        })
    }
    /// Create a new collimated ray.
    ///
    /// Generate a ray collinear with the z axis (optical axis).
    ///
    /// # Errors
    /// This function returns an error if the given wavelength is <= 0.0, `NaN` or +inf
    pub fn new_collimated(position: Point3<Length>, wave_length: Length) -> OptResult<Self> {
        Self::new(position, Vector3::z(), wave_length)
    }
    /// Create a ray with a position at the global coordinate origin pointing along the positive z-axis.
    ///
    /// # Errors
    ///
    /// This function will return an error if the wavelength is <= 0.0 nm or not finite
    pub fn origin_along_z(wave_length: Length) -> OptResult<Self> {
        Self::new_collimated(Point3::origin(), wave_length)
    }
    /// Create a ray passing through a given pupil point under the given field angles.
    ///
    /// The direction encodes the field angles (given in radians) as direction cosines. The
    /// ray origin is placed one millimeter behind the pupil point (along the ray direction),
    /// so that the ray crosses the pupil point exactly at the given position.
    ///
    /// # Errors
    ///
    /// This function will return an error if the wavelength is <= 0.0 nm or not finite or if
    /// one of the angles is not finite.
    pub fn from_field_angle(
        pupil_point: Point3<Length>,
        x_angle: f64,
        y_angle: f64,
        wave_length: Length,
    ) -> OptResult<Self> {
        if !x_angle.is_finite() || !y_angle.is_finite() {
            return Err(OptraceError::Other("field angles must be finite".into()));
        }
        let direction = vector![
            x_angle.sin(),
            y_angle.sin(),
            x_angle.cos() * y_angle.cos()
        ];
        let origin = pupil_point
            - vector![
                millimeter!(direction.x),
                millimeter!(direction.y),
                millimeter!(direction.z)
            ];
        Self::new(origin, direction, wave_length)
    }
    /// Returns the position of this [`Ray`].
    #[must_use]
    pub fn position(&self) -> Point3<Length> {
        self.pos
    }
    /// Returns the direction of this [`Ray`] as a unit vector of direction cosines.
    #[must_use]
    pub const fn direction(&self) -> Vector3<f64> {
        self.dir
    }
    /// Sets the direction of this [`Ray`]. The given vector is normalized.
    ///
    /// # Errors
    ///
    /// This function will return an error if a direction vector of zero length is provided.
    pub fn set_direction(&mut self, dir: Vector3<f64>) -> OptResult<()> {
        if dir.norm().is_zero() {
            return Err(OptraceError::DegenerateRayDirection(
                "length of direction must be >0".into(),
            ));
        }
        self.dir = dir.normalize();
        Ok(())
    }
    /// Returns the wavelength of this [`Ray`].
    #[must_use]
    pub fn wavelength(&self) -> Length {
        self.wvl
    }
    /// Returns the position history of this [`Ray`].
    ///
    /// This function returns all positions (starting point and intersection points) of the
    /// ray path so far, including the current position as last element.
    #[must_use]
    pub fn position_history(&self) -> Vec<Point3<Length>> {
        let mut positions = self.pos_hist.clone();
        positions.push(self.pos);
        positions
    }
    /// Returns the path length of this [`Ray`].
    ///
    /// Return the optical path length of the ray (geometric length weighted by the refractive
    /// index of the traversed media).
    #[must_use]
    pub fn path_length(&self) -> Length {
        self.path_length
    }
    /// Returns the refractive index of the medium this [`Ray`] is currently propagating in.
    #[must_use]
    pub const fn refractive_index(&self) -> f64 {
        self.refractive_index
    }
    /// Sets the refractive index of the medium this [`Ray`] is currently propagating in.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given refractive index is <1.0 or not finite.
    pub fn set_refractive_index(&mut self, refractive_index: f64) -> OptResult<()> {
        if refractive_index < 1.0 || !refractive_index.is_finite() {
            return Err(OptraceError::Other(
                "refractive index must be >=1.0 and finite".into(),
            ));
        }
        self.refractive_index = refractive_index;
        Ok(())
    }
    /// Propagate a ray freely along its direction by the given length.
    ///
    /// This function also respects the refractive index stored in the ray while calculating
    /// the optical path length.
    ///
    /// # Errors
    /// This functions returns an error if the propagation length is not finite.
    pub fn propagate(&mut self, length: Length) -> OptResult<()> {
        if !length.is_finite() {
            return Err(OptraceError::Other(
                "propagation length must be finite".into(),
            ));
        }
        self.pos_hist.push(self.pos);
        self.pos += vector![
            length * self.dir.x,
            length * self.dir.y,
            length * self.dir.z
        ];
        self.path_length += length * self.refractive_index * self.dir.norm();
        Ok(())
    }
    /// Refract the [`Ray`] on a given [`OpticalSurface`] using Snellius' law in vector form.
    ///
    /// The incident refractive index `n1` is (already) stored in the ray itself, the
    /// refractive index behind the surface is given by the parameter `n2`. On success the ray
    /// position moves to the intersection point (the previous position is appended to the
    /// position history), the direction becomes the normalized refracted direction, the
    /// optical path length grows by `n1` times the geometric distance to the intersection
    /// point and the stored medium index becomes `n2`.
    ///
    /// Sequential refractive tracing has no reflection branch: if the angle of incidence
    /// exceeds the critical angle for the index ratio, this function fails and the ray is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the given refractive index `n2` is <1.0 or not finite.
    ///  - the ray does not intersect with the surface ([`OptraceError::NoIntersection`]).
    ///  - total internal reflection occurs ([`OptraceError::TotalInternalReflection`]).
    pub fn refract_on_surface(&mut self, surface: &OpticalSurface, n2: f64) -> OptResult<()> {
        if n2 < 1.0 || !n2.is_finite() {
            return Err(OptraceError::Other(
                "the refractive index must be >=1.0 and finite".into(),
            ));
        }
        let Some((intersection_point, surface_normal)) = surface.intersect(self) else {
            return Err(OptraceError::NoIntersection(
                "ray does not intersect with the surface".into(),
            ));
        };
        // Snell's law in vector form:
        // d' = mu * (d - (d.n) n) + sign(d.n) * sqrt(1 - mu^2 * (1 - (d.n)^2)) * n
        // with mu = n1 / n2, d: incoming direction, n: surface normal (both normalized)
        let mu = self.refractive_index / n2;
        let d = self.dir.normalize();
        let n = surface_normal.normalize();
        let d_dot_n = d.dot(&n);
        let radicand = 1.0 - mu * mu * (1.0 - d_dot_n * d_dot_n);
        if radicand.is_sign_negative() {
            return Err(OptraceError::TotalInternalReflection(
                "angle of incidence exceeds the critical angle".into(),
            ));
        }
        let refracted_dir = mu * (d - d_dot_n * n) + d_dot_n.signum() * radicand.sqrt() * n;
        let pos_in_m = self.pos.map(|c| c.value);
        let intersection_in_m = intersection_point.map(|c| c.value);
        self.path_length +=
            self.refractive_index * meter!((pos_in_m - intersection_in_m).norm());
        self.pos_hist.push(self.pos);
        self.pos = intersection_point;
        self.dir = refracted_dir.normalize();
        self.refractive_index = n2;
        self.number_of_refractions += 1;
        Ok(())
    }
    /// Returns the validity of this [`Ray`].
    ///
    /// The `valid` status denotes, if a [`Ray`] should be further propagated through a
    /// system. A [`Ray`] is set to invalid if its trace was stopped at a surface.
    #[must_use]
    pub const fn valid(&self) -> bool {
        self.valid
    }
    /// Invalidates this [`Ray`].
    pub fn set_invalid(&mut self) {
        self.valid = false;
    }
    /// Returns the number of refractions of this [`Ray`].
    #[must_use]
    pub const fn number_of_refractions(&self) -> usize {
        self.number_of_refractions
    }
}
impl Display for Ray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pos: ({:.4} mm, {:.4} mm, {:.4} mm), dir: ({}, {}, {}), wavelength: {:.1} nm, valid: {}",
            self.pos[0].get::<millimeter>(),
            self.pos[1].get::<millimeter>(),
            self.pos[2].get::<millimeter>(),
            self.dir[0],
            self.dir[1],
            self.dir[2],
            self.wvl.get::<nanometer>(),
            self.valid
        )
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        material::{GlassCatalog, Material},
        millimeter, nanometer,
        surface::SurfaceRecord,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use assert_matches::assert_matches;

    fn plane_at(z: Length) -> OpticalSurface {
        let record = SurfaceRecord {
            material: Material::Vacuum,
            ..Default::default()
        };
        let mut surface = OpticalSurface::new(&record, &GlassCatalog::default()).unwrap();
        surface.set_z(z);
        surface
    }
    #[test]
    fn new() {
        let pos = millimeter!(1.0, 2.0, 3.0);
        let dir = vector![0.0, 0.0, 2.0];
        let wvl = nanometer!(1053.0);
        let ray = Ray::new(pos, dir, wvl);
        assert!(ray.is_ok());
        let ray = ray.unwrap();
        assert_eq!(ray.pos, pos);
        assert_eq!(ray.position(), pos);
        assert_eq!(ray.dir, Vector3::z());
        assert_eq!(ray.wvl, wvl);
        assert_eq!(ray.wavelength(), wvl);
        assert_eq!(ray.path_length, Length::zero());
        assert_eq!(ray.refractive_index, 1.0);
        assert_eq!(ray.pos_hist.len(), 0);
        assert_eq!(ray.valid, true);
        assert_eq!(ray.number_of_refractions, 0);
        assert!(Ray::new(pos, dir, nanometer!(0.0)).is_err());
        assert!(Ray::new(pos, dir, nanometer!(-10.0)).is_err());
        assert!(Ray::new(pos, dir, nanometer!(f64::NAN)).is_err());
        assert!(Ray::new(pos, dir, nanometer!(f64::INFINITY)).is_err());
        assert_matches!(
            Ray::new(pos, Vector3::zero(), wvl),
            Err(OptraceError::DegenerateRayDirection(_))
        );
    }
    #[test]
    fn new_normalizes_direction() {
        let ray = Ray::new(
            millimeter!(0.0, 0.0, 0.0),
            vector![1.0, 2.0, 3.0],
            nanometer!(1053.0),
        )
        .unwrap();
        assert_abs_diff_eq!(ray.direction().norm(), 1.0, epsilon = 1e-9);
    }
    #[test]
    fn new_collimated() {
        let pos = millimeter!(1.0, 2.0, 0.0);
        let wvl = nanometer!(1053.0);
        let ray = Ray::new_collimated(pos, wvl).unwrap();
        assert_eq!(ray.pos, pos);
        assert_eq!(ray.dir, Vector3::z());
        assert_eq!(ray.wvl, wvl);
        assert_eq!(ray.path_length, Length::zero());
        assert_eq!(ray.pos_hist.len(), 0);
        assert_eq!(ray.valid, true);
        assert!(Ray::new_collimated(pos, nanometer!(0.0)).is_err());
        assert!(Ray::new_collimated(pos, nanometer!(f64::NAN)).is_err());
        assert!(Ray::new_collimated(pos, nanometer!(f64::NEG_INFINITY)).is_err());
    }
    #[test]
    fn origin_along_z() {
        let ray = Ray::origin_along_z(nanometer!(550.0)).unwrap();
        assert_eq!(ray.position(), Point3::origin());
        assert_eq!(ray.direction(), Vector3::z());
    }
    #[test]
    fn from_field_angle_on_axis() {
        let ray = Ray::from_field_angle(
            millimeter!(0.0, 0.0, 0.0),
            0.0,
            0.0,
            nanometer!(550.0),
        )
        .unwrap();
        assert_eq!(ray.direction(), Vector3::z());
        assert_eq!(ray.position(), millimeter!(0.0, 0.0, -1.0));
    }
    #[test]
    fn from_field_angle_y() {
        let angle = 5.0_f64.to_radians();
        let ray = Ray::from_field_angle(millimeter!(0.0, 0.0, 0.0), 0.0, angle, nanometer!(550.0))
            .unwrap();
        assert_abs_diff_eq!(ray.direction().norm(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ray.direction().y, angle.sin());
        assert_abs_diff_eq!(ray.direction().z, angle.cos());
        assert_abs_diff_eq!(
            ray.position().y.get::<millimeter>(),
            -angle.sin(),
            epsilon = 1e-9
        );
        assert!(
            Ray::from_field_angle(millimeter!(0.0, 0.0, 0.0), f64::NAN, 0.0, nanometer!(550.0))
                .is_err()
        );
    }
    #[test]
    fn set_direction() {
        let mut ray = Ray::origin_along_z(nanometer!(1000.0)).unwrap();
        assert_matches!(
            ray.set_direction(Vector3::zero()),
            Err(OptraceError::DegenerateRayDirection(_))
        );
        ray.set_direction(vector![0.0, 3.0, 0.0]).unwrap();
        assert_eq!(ray.direction(), vector![0.0, 1.0, 0.0]);
    }
    #[test]
    fn set_refractive_index() {
        let mut ray = Ray::origin_along_z(nanometer!(1053.0)).unwrap();
        assert!(ray.set_refractive_index(f64::NAN).is_err());
        assert!(ray.set_refractive_index(f64::INFINITY).is_err());
        assert!(ray.set_refractive_index(0.99).is_err());
        assert!(ray.set_refractive_index(1.0).is_ok());
        assert!(ray.set_refractive_index(2.0).is_ok());
        assert_eq!(ray.refractive_index(), 2.0);
    }
    #[test]
    fn valid() {
        let mut ray = Ray::origin_along_z(nanometer!(1053.0)).unwrap();
        assert_eq!(ray.valid(), true);
        ray.set_invalid();
        assert_eq!(ray.valid(), false);
    }
    #[test]
    fn display() {
        let ray = Ray::origin_along_z(nanometer!(1001.0)).unwrap();
        assert_eq!(
            format!("{}", ray),
            "pos: (0.0000 mm, 0.0000 mm, 0.0000 mm), dir: (0, 0, 1), wavelength: 1001.0 nm, valid: true"
        );
    }
    #[test]
    fn propagate() {
        let mut ray = Ray::origin_along_z(nanometer!(1053.0)).unwrap();
        assert!(ray.propagate(millimeter!(f64::INFINITY)).is_err());
        assert!(ray.propagate(millimeter!(f64::NAN)).is_err());
        assert!(ray.propagate(millimeter!(1.0)).is_ok());
        assert_eq!(ray.pos_hist, vec![millimeter!(0., 0., 0.)]);
        ray.propagate(millimeter!(1.0)).unwrap();
        assert_eq!(
            ray.pos_hist,
            vec![millimeter!(0., 0., 0.), millimeter!(0., 0., 1.0)]
        );
        assert_eq!(ray.dir, Vector3::z());
        assert_eq!(ray.position(), millimeter!(0., 0., 2.0));
        assert_eq!(ray.path_length(), millimeter!(2.0));
        let mut ray = Ray::new(
            millimeter!(0., 0., 0.),
            vector![0.0, 1.0, 1.0],
            nanometer!(1053.0),
        )
        .unwrap();
        ray.propagate(millimeter!(1.0)).unwrap();
        assert_eq!(
            ray.position(),
            millimeter!(0., 1. / f64::sqrt(2.0), 1. / f64::sqrt(2.0))
        );
    }
    #[test]
    fn propagate_with_refractive_index() {
        let mut ray = Ray::origin_along_z(nanometer!(1053.0)).unwrap();
        ray.set_refractive_index(2.0).unwrap();
        ray.propagate(millimeter!(1.0)).unwrap();
        assert_eq!(ray.position(), millimeter!(0., 0., 1.));
        assert_eq!(ray.path_length(), millimeter!(2.0));
    }
    #[test]
    fn position_history() {
        let mut ray = Ray::origin_along_z(nanometer!(1053.0)).unwrap();
        ray.propagate(millimeter!(1.0)).unwrap();
        ray.propagate(millimeter!(2.0)).unwrap();
        assert_eq!(
            ray.position_history(),
            vec![
                millimeter!(0., 0., 0.),
                millimeter!(0., 0., 1.0),
                millimeter!(0., 0., 3.0)
            ]
        );
    }
    #[test]
    fn refract_on_surface_collimated() {
        let s = plane_at(millimeter!(10.0));
        let mut ray = Ray::origin_along_z(nanometer!(1054.0)).unwrap();
        assert!(ray.refract_on_surface(&s, 0.9).is_err());
        assert!(ray.refract_on_surface(&s, f64::NAN).is_err());
        assert!(ray.refract_on_surface(&s, f64::INFINITY).is_err());
        ray.refract_on_surface(&s, 1.5).unwrap();
        assert_eq!(ray.pos, millimeter!(0., 0., 10.));
        assert_eq!(ray.refractive_index, 1.5);
        assert_eq!(ray.dir, Vector3::z());
        assert_eq!(ray.pos_hist, vec![Point3::origin()]);
        assert_eq!(ray.path_length(), millimeter!(10.0));
        assert_eq!(ray.number_of_refractions(), 1);
    }
    #[test]
    fn refract_on_surface_unit_norm() {
        let s = plane_at(millimeter!(10.0));
        let mut ray = Ray::new(
            millimeter!(0., 0., 0.),
            vector![0.0, 1.0, 1.0],
            nanometer!(1054.0),
        )
        .unwrap();
        ray.refract_on_surface(&s, 1.5).unwrap();
        assert_abs_diff_eq!(ray.direction().norm(), 1.0, epsilon = 1e-9);
    }
    #[test]
    fn refract_on_surface_non_intersecting() {
        let s = plane_at(millimeter!(10.0));
        let mut ray = Ray::new(
            millimeter!(0., 0., 0.),
            vector![0.0, 0.0, -1.0],
            nanometer!(1054.0),
        )
        .unwrap();
        assert_matches!(
            ray.refract_on_surface(&s, 1.5),
            Err(OptraceError::NoIntersection(_))
        );
        assert_eq!(ray.pos, millimeter!(0., 0., 0.));
        assert_eq!(ray.dir, vector![0.0, 0.0, -1.0]);
        assert_eq!(ray.refractive_index, 1.0);
        assert_eq!(ray.path_length, Length::zero());
        assert_eq!(ray.number_of_refractions(), 0);
    }
    #[test]
    fn refract_on_surface_non_collimated() {
        let s = plane_at(millimeter!(10.0));
        let direction = vector![0.0, 1.0, 1.0];
        let mut ray = Ray::new(Point3::origin(), direction, nanometer!(1054.0)).unwrap();
        ray.refract_on_surface(&s, 1.0).unwrap();
        assert_eq!(ray.pos, millimeter!(0., 10., 10.));
        assert_eq!(ray.dir[0], 0.0);
        assert_abs_diff_eq!(ray.dir[1], direction.normalize()[1]);
        assert_abs_diff_eq!(ray.dir[2], direction.normalize()[2]);
        assert_abs_diff_eq!(
            ray.path_length.value,
            2.0_f64.sqrt() * millimeter!(10.0).value
        );
        let mut ray = Ray::new(Point3::origin(), direction, nanometer!(1054.0)).unwrap();
        ray.refract_on_surface(&s, 1.5).unwrap();
        assert_eq!(ray.number_of_refractions(), 1);
        assert_eq!(ray.pos, millimeter!(0., 10., 10.));
        assert_eq!(ray.dir[0], 0.0);
        assert_abs_diff_eq!(ray.dir[1], 0.4714045207910317);
        assert_abs_diff_eq!(ray.dir[2], 0.8819171036881969);
        let direction = vector![1.0, 0.0, 1.0];
        let mut ray = Ray::new(Point3::origin(), direction, nanometer!(1054.0)).unwrap();
        ray.refract_on_surface(&s, 1.5).unwrap();
        assert_eq!(ray.pos, millimeter!(10., 0., 10.));
        assert_abs_diff_eq!(ray.dir[0], 0.4714045207910317);
        assert_abs_diff_eq!(ray.dir[1], 0.0);
        assert_abs_diff_eq!(ray.dir[2], 0.8819171036881969);
    }
    #[test]
    fn refract_on_surface_total_reflection() {
        let s = plane_at(millimeter!(10.0));
        let direction = vector![0.0, 2.0, 1.0];
        let mut ray = Ray::new(millimeter!(0., 0., 0.), direction, nanometer!(1054.0)).unwrap();
        ray.set_refractive_index(1.5).unwrap();
        let unrefracted = ray.clone();
        assert_matches!(
            ray.refract_on_surface(&s, 1.0),
            Err(OptraceError::TotalInternalReflection(_))
        );
        // the ray must be left untouched
        assert_eq!(ray, unrefracted);
    }
    #[test]
    fn refract_on_surface_round_trip() {
        // refraction into the denser medium and back across parallel planes restores the
        // original direction
        let s0 = plane_at(millimeter!(5.0));
        let s1 = plane_at(millimeter!(10.0));
        let direction = vector![0.0, 1.0, 2.0].normalize();
        let mut ray = Ray::new(millimeter!(0., 0., 0.), direction, nanometer!(550.0)).unwrap();
        ray.refract_on_surface(&s0, 1.5).unwrap();
        ray.refract_on_surface(&s1, 1.0).unwrap();
        assert_abs_diff_eq!(ray.dir[0], direction[0], epsilon = 1e-9);
        assert_abs_diff_eq!(ray.dir[1], direction[1], epsilon = 1e-9);
        assert_abs_diff_eq!(ray.dir[2], direction[2], epsilon = 1e-9);
        assert_relative_eq!(ray.direction().norm(), 1.0, max_relative = 1e-9);
    }
}
