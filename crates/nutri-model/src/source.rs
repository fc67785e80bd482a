//! Raw source tables as supplied by the data file.
//!
//! Tables keep declaration order: output rows follow the order in which
//! countries and ingredients were written, so that successive runs diff
//! cleanly.

use serde::{Deserialize, Serialize};

use crate::enums::IngredientKind;

/// One cell of a source table: an ingredient label and its raw value text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Label with the unit in parentheses, e.g. `"Vitamina A / Retinol (µg)"`.
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTable {
    pub country: String,
    pub entries: Vec<SourceEntry>,
}

impl CountryTable {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(SourceEntry {
            label: label.into(),
            value: value.into(),
        });
        self
    }
}

/// All countries for one ingredient kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTable {
    pub kind: IngredientKind,
    pub countries: Vec<CountryTable>,
}

impl SourceTable {
    pub fn new(kind: IngredientKind) -> Self {
        Self {
            kind,
            countries: Vec::new(),
        }
    }

    pub fn with_country(mut self, country: CountryTable) -> Self {
        self.countries.push(country);
        self
    }

    pub fn entry_count(&self) -> usize {
        self.countries.iter().map(|c| c.entries.len()).sum()
    }

    pub fn country(&self, name: &str) -> Option<&CountryTable> {
        self.countries.iter().find(|c| c.country == name)
    }
}

/// Footnote texts for one kind, keyed by marker id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerTable {
    pub kind: IngredientKind,
    /// `(marker_id, description)` in declaration order.
    pub markers: Vec<(String, String)>,
}

impl MarkerTable {
    pub fn new(kind: IngredientKind) -> Self {
        Self {
            kind,
            markers: Vec::new(),
        }
    }

    pub fn with_marker(mut self, id: impl Into<String>, description: impl Into<String>) -> Self {
        self.markers.push((id.into(), description.into()));
        self
    }
}

/// Declares that a country encodes several regulatory categories per cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyDeclaration {
    pub country: String,
    /// Kinds whose cells are decomposed by category tag.
    pub composite_kinds: Vec<IngredientKind>,
}

/// Everything one normalization run consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDataset {
    pub vitamins: SourceTable,
    pub minerals: SourceTable,
    pub vitamin_references: MarkerTable,
    pub mineral_references: MarkerTable,
    /// `None` when the data file does not declare strategies.
    pub strategies: Option<Vec<StrategyDeclaration>>,
}

impl SourceDataset {
    pub fn table(&self, kind: IngredientKind) -> &SourceTable {
        match kind {
            IngredientKind::Vitamin => &self.vitamins,
            IngredientKind::Mineral => &self.minerals,
        }
    }

    pub fn references(&self, kind: IngredientKind) -> &MarkerTable {
        match kind {
            IngredientKind::Vitamin => &self.vitamin_references,
            IngredientKind::Mineral => &self.mineral_references,
        }
    }
}
