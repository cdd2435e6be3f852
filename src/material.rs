#![warn(missing_docs)]
//! Module for handling optical materials and the glass catalog
//!
//! A [`Material`] denotes the medium filling the space *behind* an optical surface. It is
//! either the non-refractive default medium (vacuum) or a named catalog glass. Glass names
//! are resolved against an (externally filled) [`GlassCatalog`] which stores, per glass, the
//! dispersion-formula id and coefficient vector of the underlying catalog file. The catalog
//! file format itself (e.g. AGF) is parsed outside of this crate.
use std::collections::HashMap;
use std::fmt::Display;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::error::{OptResult, OptraceError};
use crate::refractive_index::{
    refr_index_vacuum, RefrIndexConrady, RefrIndexSchott, RefrIndexSellmeier1, RefractiveIndex,
    RefractiveIndexType,
};

/// Material filling the space behind an optical surface.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Material {
    /// Non-refractive default medium with a fixed index of 1.0 at all wavelengths.
    #[default]
    Vacuum,
    /// A catalog glass, resolved by name against a [`GlassCatalog`].
    Glass(String),
}
impl Material {
    /// Resolve this [`Material`] into a concrete refractive index model.
    ///
    /// # Errors
    ///
    /// This function will return an error if the material is a glass whose name is not found
    /// in the given catalog or whose catalog entry cannot be mapped onto a dispersion model.
    pub fn resolve(&self, catalog: &GlassCatalog) -> OptResult<RefractiveIndexType> {
        match self {
            Self::Vacuum => Ok(refr_index_vacuum()),
            Self::Glass(name) => catalog.lookup(name)?.to_refractive_index(),
        }
    }
    /// Returns the name of this [`Material`].
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Vacuum => "vacuum",
            Self::Glass(name) => name,
        }
    }
}
impl Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Dispersion-formula ids as stored in the glass catalog.
const FORMULA_SCHOTT: u8 = 1;
const FORMULA_SELLMEIER1: u8 = 2;
const FORMULA_CONRADY: u8 = 5;

/// One glass record of a [`GlassCatalog`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlassEntry {
    dispersion_formula: u8,
    coefficients: Vec<f64>,
    wavelength_range: Option<Range<Length>>,
    nd: f64,
    vd: f64,
}
impl GlassEntry {
    /// Create a new [`GlassEntry`].
    ///
    /// `dispersion_formula` is the catalog's formula id, `coefficients` the corresponding
    /// coefficient vector and `wavelength_range` the valid wavelength domain (if the catalog
    /// records one). `nd` and `vd` are the summary index / Abbe number of the glass.
    ///
    /// # Errors
    ///
    /// This function will return an error if a coefficient is not finite or `nd` is <1.0.
    pub fn new(
        dispersion_formula: u8,
        coefficients: Vec<f64>,
        wavelength_range: Option<Range<Length>>,
        nd: f64,
        vd: f64,
    ) -> OptResult<Self> {
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(OptraceError::Dispersion(
                "all coefficients must be finite.".into(),
            ));
        }
        if nd < 1.0 || !nd.is_finite() {
            return Err(OptraceError::Dispersion(
                "nd must be >=1.0 and finite.".into(),
            ));
        }
        Ok(Self {
            dispersion_formula,
            coefficients,
            wavelength_range,
            nd,
            vd,
        })
    }
    /// Returns the catalog dispersion-formula id of this entry.
    #[must_use]
    pub const fn dispersion_formula(&self) -> u8 {
        self.dispersion_formula
    }
    /// Returns the coefficient vector of this entry.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
    /// Returns the valid wavelength domain of this entry (if recorded).
    #[must_use]
    pub const fn wavelength_range(&self) -> Option<&Range<Length>> {
        self.wavelength_range.as_ref()
    }
    /// Returns the summary d-line index of this entry.
    #[must_use]
    pub const fn nd(&self) -> f64 {
        self.nd
    }
    /// Returns the Abbe number of this entry.
    #[must_use]
    pub const fn vd(&self) -> f64 {
        self.vd
    }
    /// Map this catalog entry onto a concrete refractive index model.
    ///
    /// The model family is selected by the stored formula id, the model parameters are taken
    /// from the stored coefficient vector. A recorded wavelength domain is attached to the
    /// model, so that index lookups outside the domain fail instead of extrapolating.
    ///
    /// # Errors
    ///
    /// This function will return an error if the formula id is not supported or the
    /// coefficient vector is too short for the selected formula.
    pub fn to_refractive_index(&self) -> OptResult<RefractiveIndexType> {
        match self.dispersion_formula {
            FORMULA_SCHOTT => {
                let c = self.checked_coefficients(6)?;
                let mut model = RefrIndexSchott::new(c[0], c[1], c[2], c[3], c[4], c[5])?;
                if let Some(range) = &self.wavelength_range {
                    model.set_wavelength_range(range.clone());
                }
                Ok(model.to_enum())
            }
            FORMULA_SELLMEIER1 => {
                // catalog coefficient order is K1 L1 K2 L2 K3 L3
                let c = self.checked_coefficients(6)?;
                let mut model = RefrIndexSellmeier1::new(c[0], c[2], c[4], c[1], c[3], c[5])?;
                if let Some(range) = &self.wavelength_range {
                    model.set_wavelength_range(range.clone());
                }
                Ok(model.to_enum())
            }
            FORMULA_CONRADY => {
                let c = self.checked_coefficients(3)?;
                let range = self.wavelength_range.clone().ok_or_else(|| {
                    OptraceError::Dispersion(
                        "Conrady formula requires a recorded wavelength range".into(),
                    )
                })?;
                Ok(RefrIndexConrady::new(c[0], c[1], c[2], range)?.to_enum())
            }
            other => Err(OptraceError::Dispersion(format!(
                "unsupported dispersion formula id {other}"
            ))),
        }
    }
    fn checked_coefficients(&self, nr_of_coefficients: usize) -> OptResult<&[f64]> {
        if self.coefficients.len() < nr_of_coefficients {
            return Err(OptraceError::Dispersion(format!(
                "dispersion formula id {} requires {} coefficients",
                self.dispersion_formula, nr_of_coefficients
            )));
        }
        Ok(&self.coefficients)
    }
}

/// A lookup table of named glasses.
///
/// The catalog is filled by an external data source and injected into the optical system at
/// construction time. There is no global registry.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlassCatalog {
    name: String,
    entries: HashMap<String, GlassEntry>,
}
impl GlassCatalog {
    /// Create a new, empty [`GlassCatalog`] with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: HashMap::new(),
        }
    }
    /// Returns the name of this [`GlassCatalog`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Add a glass record to the catalog. An existing record of the same name is replaced.
    pub fn add_glass(&mut self, glass_name: &str, entry: GlassEntry) {
        self.entries.insert(glass_name.to_string(), entry);
    }
    /// Look up a glass record by name.
    ///
    /// # Errors
    ///
    /// This function will return an error if the name is absent from the catalog.
    pub fn lookup(&self, glass_name: &str) -> OptResult<&GlassEntry> {
        self.entries.get(glass_name).ok_or_else(|| {
            OptraceError::UnknownMaterial(format!(
                "glass '{glass_name}' not found in catalog '{}'",
                self.name
            ))
        })
    }
    /// Returns the number of glasses in this catalog.
    #[must_use]
    pub fn nr_of_glasses(&self) -> usize {
        self.entries.len()
    }
    /// Returns true if this catalog contains no glasses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nanometer;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    fn bk7_entry() -> GlassEntry {
        GlassEntry::new(
            2,
            vec![
                1.039_612_12,
                0.006_000_698_67,
                0.231_792_344,
                0.020_017_914_4,
                1.010_469_45,
                103.560_653,
            ],
            None,
            1.5168,
            64.17,
        )
        .unwrap()
    }
    fn test_catalog() -> GlassCatalog {
        let mut catalog = GlassCatalog::new("test");
        catalog.add_glass("N-BK7", bk7_entry());
        catalog
    }
    #[test]
    fn material_default() {
        assert_eq!(Material::default(), Material::Vacuum);
    }
    #[test]
    fn material_name() {
        assert_eq!(Material::Vacuum.name(), "vacuum");
        assert_eq!(Material::Glass("N-BK7".into()).name(), "N-BK7");
        assert_eq!(format!("{}", Material::Glass("N-BK7".into())), "N-BK7");
    }
    #[test]
    fn material_resolve_vacuum() {
        let catalog = GlassCatalog::new("empty");
        let index = Material::Vacuum.resolve(&catalog).unwrap();
        assert_eq!(index.get_refractive_index(nanometer!(550.0)).unwrap(), 1.0);
    }
    #[test]
    fn material_resolve_glass() {
        let catalog = test_catalog();
        let index = Material::Glass("N-BK7".into()).resolve(&catalog).unwrap();
        assert_relative_eq!(
            index.get_refractive_index(nanometer!(587.56)).unwrap(),
            1.5168,
            max_relative = 0.0001
        );
    }
    #[test]
    fn material_resolve_unknown() {
        let catalog = test_catalog();
        assert_matches!(
            Material::Glass("unobtainium".into()).resolve(&catalog),
            Err(OptraceError::UnknownMaterial(_))
        );
    }
    #[test]
    fn entry_wrong_coefficients() {
        assert!(GlassEntry::new(2, vec![1.0, f64::NAN], None, 1.5, 60.0).is_err());
        assert!(GlassEntry::new(2, vec![1.0, 1.0], None, 0.5, 60.0).is_err());
        assert!(GlassEntry::new(2, vec![1.0, 1.0], None, f64::NAN, 60.0).is_err());
    }
    #[test]
    fn entry_too_few_coefficients() {
        let entry = GlassEntry::new(2, vec![1.0, 1.0], None, 1.5, 60.0).unwrap();
        assert_matches!(
            entry.to_refractive_index(),
            Err(OptraceError::Dispersion(_))
        );
    }
    #[test]
    fn entry_unsupported_formula() {
        let entry = GlassEntry::new(13, vec![1.0; 10], None, 1.5, 60.0).unwrap();
        assert_matches!(
            entry.to_refractive_index(),
            Err(OptraceError::Dispersion(_))
        );
    }
    #[test]
    fn entry_with_wavelength_range() {
        let mut entry = bk7_entry();
        entry.wavelength_range = Some(nanometer!(300.0)..nanometer!(2500.0));
        let index = entry.to_refractive_index().unwrap();
        assert!(index.get_refractive_index(nanometer!(550.0)).is_ok());
        assert_matches!(
            index.get_refractive_index(nanometer!(299.0)),
            Err(OptraceError::Dispersion(_))
        );
    }
    #[test]
    fn entry_conrady_requires_range() {
        let entry = GlassEntry::new(5, vec![1.427, 11.1, 5.13e6], None, 1.45, 67.8).unwrap();
        assert_matches!(
            entry.to_refractive_index(),
            Err(OptraceError::Dispersion(_))
        );
        let entry = GlassEntry::new(
            5,
            vec![1.427, 11.1, 5.13e6],
            Some(nanometer!(1000.0)..nanometer!(1100.0)),
            1.45,
            67.8,
        )
        .unwrap();
        assert_matches!(
            entry.to_refractive_index(),
            Ok(RefractiveIndexType::Conrady(_))
        );
    }
    #[test]
    fn catalog_lookup() {
        let catalog = test_catalog();
        assert_eq!(catalog.name(), "test");
        assert_eq!(catalog.nr_of_glasses(), 1);
        assert!(!catalog.is_empty());
        assert!(catalog.lookup("N-BK7").is_ok());
        assert_matches!(
            catalog.lookup("N-BK10"),
            Err(OptraceError::UnknownMaterial(_))
        );
    }
    #[test]
    fn catalog_replaces_entry() {
        let mut catalog = test_catalog();
        let replacement = GlassEntry::new(1, vec![1.0; 6], None, 1.6, 50.0).unwrap();
        catalog.add_glass("N-BK7", replacement.clone());
        assert_eq!(catalog.nr_of_glasses(), 1);
        assert_eq!(catalog.lookup("N-BK7").unwrap(), &replacement);
    }
}
