#![warn(missing_docs)]
//! Schott polynomial model
use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;
use uom::si::f64::Length;
use uom::si::length::micrometer;

use super::{RefractiveIndex, RefractiveIndexType};
use crate::error::{OptResult, OptraceError};

/// Refractive index model following the Schott polynomial formula.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RefrIndexSchott {
    a0: f64,
    a1: f64,
    a2: f64,
    a3: f64,
    a4: f64,
    a5: f64,
    wvl_range: Option<Range<Length>>,
}
impl RefrIndexSchott {
    /// Create a new refractive index model following the Schott polynomial formula.
    ///
    /// A valid wavelength range may be attached later with
    /// [`set_wavelength_range`](Self::set_wavelength_range) if the glass catalog records one.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given coefficients are not finite.
    pub fn new(a0: f64, a1: f64, a2: f64, a3: f64, a4: f64, a5: f64) -> OptResult<Self> {
        if !a0.is_finite()
            || !a1.is_finite()
            || !a2.is_finite()
            || !a3.is_finite()
            || !a4.is_finite()
            || !a5.is_finite()
        {
            return Err(OptraceError::Dispersion(
                "all coefficients must be finite.".into(),
            ));
        }
        Ok(Self {
            a0,
            a1,
            a2,
            a3,
            a4,
            a5,
            wvl_range: None,
        })
    }
    /// Returns the wavelength range over which this model is valid (if recorded).
    #[must_use]
    pub const fn wavelength_range(&self) -> Option<&Range<Length>> {
        self.wvl_range.as_ref()
    }
    /// Sets the wavelength range for which this model is valid.
    pub fn set_wavelength_range(&mut self, range: Range<Length>) {
        self.wvl_range = Some(range);
    }
}
impl Default for RefrIndexSchott {
    // BK7
    fn default() -> Self {
        Self {
            a0: 2.271_892_9,
            a1: -1.010_807_7e-2,
            a2: 1.059_250_9e-2,
            a3: 2.081_696_5e-4,
            a4: -7.647_253_8e-6,
            a5: 4.924_099_1e-7,
            wvl_range: None,
        }
    }
}
impl RefractiveIndex for RefrIndexSchott {
    fn get_refractive_index(&self, wavelength: Length) -> OptResult<f64> {
        if let Some(range) = &self.wvl_range {
            if !range.contains(&wavelength) {
                return Err(OptraceError::Dispersion(
                    "wavelength outside valid range".into(),
                ));
            }
        }
        let lambda = wavelength.get::<micrometer>();
        Ok(f64::sqrt(
            self.a5.mul_add(
                lambda.powi(-8),
                self.a4.mul_add(
                    lambda.powi(-6),
                    self.a3.mul_add(
                        lambda.powi(-4),
                        self.a2
                            .mul_add(lambda.powi(-2), self.a1.mul_add(lambda.powi(2), self.a0)),
                    ),
                ),
            ),
        ))
    }
    fn to_enum(&self) -> RefractiveIndexType {
        RefractiveIndexType::Schott(self.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nanometer;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    #[test]
    fn new_wrong() {
        assert!(RefrIndexSchott::new(1.0, 1.0, 1.0, 1.0, 1.0, f64::NAN).is_err());
        assert!(RefrIndexSchott::new(1.0, 1.0, 1.0, 1.0, f64::INFINITY, 1.0).is_err());
        assert!(RefrIndexSchott::new(1.0, 1.0, 1.0, f64::NAN, 1.0, 1.0).is_err());
        assert!(RefrIndexSchott::new(1.0, 1.0, f64::INFINITY, 1.0, 1.0, 1.0).is_err());
        assert!(RefrIndexSchott::new(1.0, f64::NAN, 1.0, 1.0, 1.0, 1.0).is_err());
        assert!(RefrIndexSchott::new(f64::INFINITY, 1.0, 1.0, 1.0, 1.0, 1.0).is_err());
    }
    #[test]
    fn get_refractive_index() {
        // BK7 at the sodium d-line
        let i = RefrIndexSchott::default();
        assert_relative_eq!(
            i.get_refractive_index(nanometer!(587.56)).unwrap(),
            1.5168,
            max_relative = 0.0001
        );
    }
    #[test]
    fn get_refractive_index_with_range() {
        let mut i = RefrIndexSchott::default();
        i.set_wavelength_range(nanometer!(300.0)..nanometer!(2500.0));
        assert!(i.get_refractive_index(nanometer!(550.0)).is_ok());
        assert!(i.get_refractive_index(nanometer!(299.0)).is_err());
    }
    #[test]
    fn get_enum() {
        let i = RefrIndexSchott::default();
        assert_matches!(i.to_enum(), RefractiveIndexType::Schott(_));
    }
}
