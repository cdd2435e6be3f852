#![warn(missing_docs)]
//! Module for handling bundles of rays
use log::debug;
use nalgebra::Point3;
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::{
    aperture::Aperture,
    error::{OptResult, OptraceError},
    fields::{FieldData, FieldType},
    ray::Ray,
    utils::usize_to_f64,
};

/// Generate evenly spaced pupil heights across the full pupil diameter.
///
/// For a single sample only the axial point is returned. Otherwise `nr_of_points` heights
/// are evenly spaced from `-semi_diameter` to `+semi_diameter` (both inclusive).
#[must_use]
pub fn pupil_fan(semi_diameter: Length, nr_of_points: usize) -> Vec<Length> {
    let nr_of_points = nr_of_points.clamp(1, usize::MAX);
    let distance = if nr_of_points > 1 {
        2.0 * semi_diameter / usize_to_f64(nr_of_points - 1)
    } else {
        Length::zero()
    };
    let offset = if nr_of_points > 1 {
        semi_diameter
    } else {
        Length::zero()
    };
    let mut heights: Vec<Length> = Vec::with_capacity(nr_of_points);
    for i in 0..nr_of_points {
        heights.push(usize_to_f64(i) * distance - offset);
    }
    heights
}

/// Struct containing all rays of a created bundle of rays
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Rays {
    /// vector containing rays
    rays: Vec<Ray>,
}
impl Rays {
    /// Generate a bundle of rays from a field definition and an aperture.
    ///
    /// The bundle is the cartesian product of the field points and a tangential fan of
    /// `nr_of_pupil_samples` heights across the entrance pupil. The vignetting factors of
    /// each field point decenter / compress its pupil sampling. All rays start at the given
    /// entrance z position (more precisely: they cross their pupil point exactly at this
    /// position). The bundle is ordered field-major, pupil-minor.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///  - the field definition is not of type [`FieldType::Angle`].
    ///  - `nr_of_pupil_samples` is zero.
    ///  - the given wavelength is <= 0.0 or not finite.
    pub fn from_field_sampling(
        field: &FieldData,
        aperture: &Aperture,
        nr_of_pupil_samples: usize,
        entrance_z: Length,
        wavelength: Length,
    ) -> OptResult<Self> {
        if field.field_type() != FieldType::Angle {
            return Err(OptraceError::Other(
                "only angle-type field tables can generate rays".into(),
            ));
        }
        if nr_of_pupil_samples == 0 {
            return Err(OptraceError::Other(
                "number of pupil samples must be >0".into(),
            ));
        }
        let semi_diameter = aperture.semi_diameter();
        let fan = pupil_fan(semi_diameter, nr_of_pupil_samples);
        let mut rays: Vec<Ray> = Vec::with_capacity(field.nr_of_fields() * fan.len());
        for row in field {
            for height in &fan {
                let pupil_y = if semi_diameter.is_zero() {
                    0.0
                } else {
                    (*height / semi_diameter).value
                };
                let (pupil_x, pupil_y) = row.vignetted_pupil(0.0, pupil_y);
                let pupil_point = Point3::new(
                    pupil_x * semi_diameter,
                    pupil_y * semi_diameter,
                    entrance_z,
                );
                rays.push(Ray::from_field_angle(
                    pupil_point,
                    row.x_rad(),
                    row.y_rad(),
                    wavelength,
                )?);
            }
        }
        debug!(
            "generated {} rays ({} field points x {} pupil samples)",
            rays.len(),
            field.nr_of_fields(),
            fan.len()
        );
        Ok(Self { rays })
    }
    /// Add a single ray to the ray bundle.
    pub fn add_ray(&mut self, ray: Ray) {
        self.rays.push(ray);
    }
    /// Returns an iterator over the rays of this bundle.
    pub fn iter(&self) -> std::slice::Iter<'_, Ray> {
        self.rays.iter()
    }
    /// Returns the number of rays in this bundle.
    #[must_use]
    pub fn nr_of_rays(&self) -> usize {
        self.rays.len()
    }
    /// Returns true if this bundle contains no rays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }
    /// Consume this bundle and return the contained rays.
    #[must_use]
    pub fn into_vec(self) -> Vec<Ray> {
        self.rays
    }
}
impl IntoIterator for Rays {
    type Item = Ray;
    type IntoIter = std::vec::IntoIter<Ray>;

    fn into_iter(self) -> Self::IntoIter {
        self.rays.into_iter()
    }
}
impl<'a> IntoIterator for &'a Rays {
    type Item = &'a Ray;
    type IntoIter = std::slice::Iter<'a, Ray>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
