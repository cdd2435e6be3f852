#![warn(missing_docs)]
//! Module for handling the system aperture
//!
//! The [`Aperture`] defines the light-admitting opening of a sequential optical system. It
//! is sampled during ray generation to create a ray bundle per field point.
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::error::{OptResult, OptraceError};

/// Aperture specification of a sequential optical system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Aperture {
    /// Diameter of the entrance pupil
    EntrancePupilDiameter(Length),
}
impl Aperture {
    /// Create a new entrance pupil diameter [`Aperture`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the given diameter is negative or not finite.
    pub fn new_entrance_pupil_diameter(diameter: Length) -> OptResult<Self> {
        if diameter.is_sign_negative() || !diameter.is_finite() {
            return Err(OptraceError::SystemSetup(
                "entrance pupil diameter must be >=0.0 and finite".into(),
            ));
        }
        Ok(Self::EntrancePupilDiameter(diameter))
    }
    /// Returns the aperture value (e.g. the entrance pupil diameter).
    #[must_use]
    pub const fn value(&self) -> Length {
        match self {
            Self::EntrancePupilDiameter(diameter) => *diameter,
        }
    }
    /// Returns the half diameter of the light-admitting opening.
    #[must_use]
    pub fn semi_diameter(&self) -> Length {
        match self {
            Self::EntrancePupilDiameter(diameter) => *diameter / 2.0,
        }
    }
}
impl Default for Aperture {
    fn default() -> Self {
        Self::EntrancePupilDiameter(Length::zero())
    }
}
