//! Annotation record with typed field access
//!
//! The underlying JSON is kept as-is so that every field, including the
//! ones this tool never reads, is written back exactly as it was loaded.

use crate::{Error, Result};
use serde_json::Value;

pub const CATEGORY_ID: &str = "category_id";
pub const VISIBLE_PERCENTAGE: &str = "visible_percentage";
pub const AREA: &str = "area";
pub const SEGMENTATION: &str = "segmentation";

/// Category identifier; wide enough for any JSON integer (`i64` or `u64`)
pub type CategoryId = i128;

/// Largest magnitude at which every integral `f64` is exact
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

/// A single annotation from the dataset's `annotations` array
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// The raw JSON record
    pub data: Value,
    /// Position in the source `annotations` array
    pub index: usize,
}

impl Annotation {
    /// Create a new annotation
    pub fn new(data: Value, index: usize) -> Self {
        Self { data, index }
    }

    /// Class identifier used to group annotations
    pub fn category_id(&self) -> Result<CategoryId> {
        let value = self.field(CATEGORY_ID)?;
        value
            .as_i64()
            .map(CategoryId::from)
            .or_else(|| value.as_u64().map(CategoryId::from))
            .or_else(|| {
                value
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT_INT)
                    .map(|f| f as CategoryId)
            })
            .ok_or_else(|| self.invalid(CATEGORY_ID, format!("expected an integer, got {}", value)))
    }

    /// Visible percentage in the range 0-100
    pub fn visible_percentage(&self) -> Result<f64> {
        self.number(VISIBLE_PERCENTAGE)
    }

    /// Precomputed area stored on the record
    pub fn area(&self) -> Result<f64> {
        self.number(AREA)
    }

    /// Polygon rings of the segmentation mask, each a flat `x, y, x, y, ...` list
    pub fn segmentation(&self) -> Result<Vec<Vec<f64>>> {
        let value = self.field(SEGMENTATION)?;
        let rings = value.as_array().ok_or_else(|| {
            self.invalid(
                SEGMENTATION,
                "expected a list of polygon rings (RLE masks are not supported)".to_string(),
            )
        })?;

        rings
            .iter()
            .map(|ring| -> Result<Vec<f64>> {
                let coords = ring.as_array().ok_or_else(|| {
                    self.invalid(SEGMENTATION, format!("ring is not a list: {}", ring))
                })?;
                coords
                    .iter()
                    .map(|c| {
                        c.as_f64().ok_or_else(|| {
                            self.invalid(SEGMENTATION, format!("non-numeric coordinate {}", c))
                        })
                    })
                    .collect()
            })
            .collect()
    }

    /// Consume the annotation, returning the untouched JSON record
    pub fn into_value(self) -> Value {
        self.data
    }

    fn field(&self, name: &'static str) -> Result<&Value> {
        match self.data.get(name) {
            Some(Value::Null) | None => Err(Error::MissingField {
                index: self.index,
                field: name,
            }),
            Some(value) => Ok(value),
        }
    }

    fn number(&self, name: &'static str) -> Result<f64> {
        let value = self.field(name)?;
        value
            .as_f64()
            .ok_or_else(|| self.invalid(name, format!("expected a number, got {}", value)))
    }

    fn invalid(&self, field: &'static str, reason: String) -> Error {
        Error::InvalidField {
            index: self.index,
            field,
            reason,
        }
    }
}
