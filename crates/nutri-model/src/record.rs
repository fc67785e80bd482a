use serde::{Deserialize, Serialize};

use crate::enums::{Category, IngredientKind, RangeStatus};
use crate::range::ParsedRange;

/// One normalized row: a (country, ingredient, category) range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub country: String,
    /// Ingredient name with the unit suffix removed.
    pub ingredient: String,
    pub kind: IngredientKind,
    pub unit: String,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    /// True iff `minimum` or `maximum` is set.
    pub established: bool,
    pub category: Category,
    /// Footnote marker ids in order of appearance.
    pub references: Vec<String>,
    /// Untouched source text.
    pub original_value: String,
    /// How the range text was read; not part of the written table.
    #[serde(skip)]
    pub status: Option<RangeStatus>,
}

impl NormalizedRecord {
    /// Creates a record from a parsed range, deriving `established`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        country: impl Into<String>,
        ingredient: impl Into<String>,
        kind: IngredientKind,
        unit: impl Into<String>,
        range: ParsedRange,
        category: Category,
        references: Vec<String>,
        original_value: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            ingredient: ingredient.into(),
            kind,
            unit: unit.into(),
            minimum: range.minimum,
            maximum: range.maximum,
            established: range.is_established(),
            category,
            references,
            original_value: original_value.into(),
            status: Some(range.status),
        }
    }

    /// Marker ids joined with commas, or `None` when the value cited nothing.
    pub fn references_joined(&self) -> Option<String> {
        if self.references.is_empty() {
            None
        } else {
            Some(self.references.join(","))
        }
    }

    /// The record's bounds as a range, for display.
    pub fn range(&self) -> ParsedRange {
        ParsedRange {
            minimum: self.minimum,
            maximum: self.maximum,
            status: self.range_status(),
        }
    }

    pub fn range_status(&self) -> RangeStatus {
        self.status.unwrap_or(if self.established {
            RangeStatus::Established
        } else {
            RangeStatus::NotEstablished
        })
    }
}

/// A footnote text, scoped by ingredient kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub marker_id: String,
    pub description: String,
    pub kind: IngredientKind,
}

impl ReferenceEntry {
    pub fn new(
        marker_id: impl Into<String>,
        description: impl Into<String>,
        kind: IngredientKind,
    ) -> Self {
        Self {
            marker_id: marker_id.into(),
            description: description.into(),
            kind,
        }
    }
}
