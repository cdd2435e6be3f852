#![warn(missing_docs)]
//! Module for handling field definitions
//!
//! A field describes the object-space sampling points (angles or heights) used to generate
//! representative ray bundles. Each [`FieldRow`] additionally carries a relative weight and
//! vignetting factors which decenter / compress the pupil sampling for off-axis fields.
use serde::{Deserialize, Serialize};

/// Interpretation of the field coordinates of a [`FieldRow`].
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// field coordinates are angles (in degrees)
    #[default]
    Angle,
    /// field coordinates are object heights
    ObjHeight,
    /// field coordinates are paraxial image heights
    ParaxImgHeight,
    /// field coordinates are real image heights
    RealImgHeight,
}

/// One sampled object point of a field definition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldRow {
    /// x field coordinate (in degrees for [`FieldType::Angle`])
    pub x: f64,
    /// y field coordinate (in degrees for [`FieldType::Angle`])
    pub y: f64,
    /// relative weight of this field point
    pub weight: f64,
    /// vignetting decenter factor in x
    pub vdx: f64,
    /// vignetting decenter factor in y
    pub vdy: f64,
    /// vignetting compression factor in x
    pub vcx: f64,
    /// vignetting compression factor in y
    pub vcy: f64,
    /// vignetting angle
    pub van: f64,
}
impl Default for FieldRow {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            weight: 1.0,
            vdx: 0.0,
            vdy: 0.0,
            vcx: 0.0,
            vcy: 0.0,
            van: 0.0,
        }
    }
}
impl FieldRow {
    /// Create a new [`FieldRow`] with the given field coordinates and weight.
    ///
    /// All vignetting factors are initialized to zero (= no vignetting).
    #[must_use]
    pub fn new(x: f64, y: f64, weight: f64) -> Self {
        Self {
            x,
            y,
            weight,
            ..Default::default()
        }
    }
    /// Returns the x field coordinate in radians (for angle-type fields).
    #[must_use]
    pub fn x_rad(&self) -> f64 {
        self.x.to_radians()
    }
    /// Returns the y field coordinate in radians (for angle-type fields).
    #[must_use]
    pub fn y_rad(&self) -> f64 {
        self.y.to_radians()
    }
    /// Apply the vignetting factors of this field point to a normalized pupil coordinate.
    ///
    /// The pupil coordinates are given in the range -1.0..=1.0. Each axis is decentered by
    /// the `vd` factor and compressed by the `vc` factor. All-zero factors leave the pupil
    /// coordinate unchanged.
    #[must_use]
    pub fn vignetted_pupil(&self, px: f64, py: f64) -> (f64, f64) {
        (
            self.vcx.mul_add(-px, px) + self.vdx,
            self.vcy.mul_add(-py, py) + self.vdy,
        )
    }
}

/// An ordered set of field points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldData {
    field_type: FieldType,
    field_table: Vec<FieldRow>,
}
impl FieldData {
    /// Create a new [`FieldData`] from a field type and an ordered list of field points.
    #[must_use]
    pub fn new(field_type: FieldType, field_table: Vec<FieldRow>) -> Self {
        Self {
            field_type,
            field_table,
        }
    }
    /// Returns the [`FieldType`] of this field definition.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }
    /// Returns the ordered field points of this field definition.
    #[must_use]
    pub fn rows(&self) -> &[FieldRow] {
        &self.field_table
    }
    /// Returns an iterator over the field points.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldRow> {
        self.field_table.iter()
    }
    /// Returns the number of field points.
    #[must_use]
    pub fn nr_of_fields(&self) -> usize {
        self.field_table.len()
    }
    /// Returns true if this field definition contains no field points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_table.is_empty()
    }
}
impl Default for FieldData {
    /// The default field definition contains a single on-axis field point of unit weight.
    fn default() -> Self {
        Self {
            field_type: FieldType::Angle,
            field_table: vec![FieldRow::default()],
        }
    }
}
impl<'a> IntoIterator for &'a FieldData {
    type Item = &'a FieldRow;
    type IntoIter = std::slice::Iter<'a, FieldRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
