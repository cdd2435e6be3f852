#![warn(missing_docs)]
//! Sellmeier (3-term) model
use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;
use uom::si::f64::Length;
use uom::si::length::micrometer;

use super::{RefractiveIndex, RefractiveIndexType};
use crate::error::{OptResult, OptraceError};

/// Refractive index model following the three-term Sellmeier equation.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RefrIndexSellmeier1 {
    k1: f64,
    k2: f64,
    k3: f64,
    l1: f64,
    l2: f64,
    l3: f64,
    wvl_range: Option<Range<Length>>,
}
impl RefrIndexSellmeier1 {
    /// Create a new refractive index model following the Sellmeier equation.
    ///
    /// The `l` coefficients are given in units of µm². A valid wavelength range may be
    /// attached later with [`set_wavelength_range`](Self::set_wavelength_range) if the
    /// glass catalog records one.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given coefficients are not finite.
    pub fn new(k1: f64, k2: f64, k3: f64, l1: f64, l2: f64, l3: f64) -> OptResult<Self> {
        if !k1.is_finite()
            || !k2.is_finite()
            || !k3.is_finite()
            || !l1.is_finite()
            || !l2.is_finite()
            || !l3.is_finite()
        {
            return Err(OptraceError::Dispersion(
                "all coefficients must be finite.".into(),
            ));
        }
        Ok(Self {
            k1,
            k2,
            k3,
            l1,
            l2,
            l3,
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
impl Default for RefrIndexSellmeier1 {
    // N-BK7
    fn default() -> Self {
        Self {
            k1: 1.039_612_12,
            k2: 0.231_792_344,
            k3: 1.010_469_45,
            l1: 0.006_000_698_67,
            l2: 0.020_017_914_4,
            l3: 103.560_653,
            wvl_range: None,
        }
    }
}
impl RefractiveIndex for RefrIndexSellmeier1 {
    fn get_refractive_index(&self, wavelength: Length) -> OptResult<f64> {
        if let Some(range) = &self.wvl_range {
            if !range.contains(&wavelength) {
                return Err(OptraceError::Dispersion(
                    "wavelength outside valid range".into(),
                ));
            }
        }
        let lambda = wavelength.get::<micrometer>();
        let l_sq = lambda * lambda;
        Ok(f64::sqrt(
            1.0 + self.k1 * l_sq / (l_sq - self.l1)
                + self.k2 * l_sq / (l_sq - self.l2)
                + self.k3 * l_sq / (l_sq - self.l3),
        ))
    }
    fn to_enum(&self) -> RefractiveIndexType {
        RefractiveIndexType::Sellmeier1(self.clone())
    }
}
