#![warn(missing_docs)]
//! Constant refractive index model
use serde::Deserialize;
use serde::Serialize;

use super::{RefractiveIndex, RefractiveIndexType};
use crate::error::{OptResult, OptraceError};

/// Refractive index model returning a wavelength-independent constant.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RefrIndexConst {
    refractive_index: f64,
}
impl RefrIndexConst {
    /// Create a new constant refractive index model.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given refractive index is <1.0 or not finite.
    pub fn new(refractive_index: f64) -> OptResult<Self> {
        if refractive_index < 1.0 || !refractive_index.is_finite() {
            return Err(OptraceError::Dispersion(
                "refractive index must be >=1.0 and finite.".into(),
            ));
        }
        Ok(Self { refractive_index })
    }
}
impl Default for RefrIndexConst {
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
        }
    }
}

/// Convenience function returning the refractive index model of vacuum (n = 1.0).
#[must_use]
pub fn refr_index_vacuum() -> RefractiveIndexType {
    RefractiveIndexType::Const(RefrIndexConst::default())
}

impl RefractiveIndex for RefrIndexConst {
    fn get_refractive_index(&self, _wavelength: uom::si::f64::Length) -> OptResult<f64> {
        Ok(self.refractive_index)
    }
    fn to_enum(&self) -> RefractiveIndexType {
        RefractiveIndexType::Const(self.clone())
    }
}
