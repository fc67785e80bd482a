//! TOML data file loading.
//!
//! Layout:
//!
//! ```toml
//! [vitamins."Argentina"]
//! "Vitamina A / Retinol (µg)" = "180 - 3000 [1]"
//!
//! [minerals."Argentina"]
//! "Magnesio (mg)" = "78 - 400 [8]"
//!
//! [references.vitamins]
//! "1" = "Como Retinol Equivalente (RE)."
//!
//! [references.minerals]
//! "1" = "Para embarazadas."
//!
//! [strategies.Guatemala]
//! composite_kinds = ["vitamin"]
//! ```
//!
//! Tables are walked in document order, so countries, ingredients and
//! markers keep the order they were written in.

use std::path::Path;

use nutri_model::{
    CountryTable, IngredientKind, MarkerTable, SourceDataset, SourceEntry, SourceTable,
    StrategyDeclaration,
};
use toml::{Table, Value};
use tracing::info;

use crate::error::{Result, SourceError};
use crate::paths::default_data_path;

const REFERENCES_TABLE: &str = "references";
const STRATEGIES_TABLE: &str = "strategies";
const COMPOSITE_KINDS_KEY: &str = "composite_kinds";

/// Loads the data file at [`default_data_path`].
pub fn load_default_dataset() -> Result<SourceDataset> {
    load_dataset(&default_data_path())
}

/// Reads and parses a data file.
pub fn load_dataset(path: &Path) -> Result<SourceDataset> {
    let text = std::fs::read_to_string(path).map_err(|e| SourceError::io(path, e))?;
    let dataset = parse_dataset(&text, path)?;
    info!(
        path = %path.display(),
        vitamin_countries = dataset.vitamins.countries.len(),
        mineral_countries = dataset.minerals.countries.len(),
        entries = dataset.vitamins.entry_count() + dataset.minerals.entry_count(),
        "data file loaded"
    );
    Ok(dataset)
}

/// Parses data file text. `path` is only used in error messages.
pub fn parse_dataset(text: &str, path: &Path) -> Result<SourceDataset> {
    let document: Table = toml::from_str(text).map_err(|source| SourceError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    let loader = Loader { path };

    let references = loader.required_table(&document, REFERENCES_TABLE, REFERENCES_TABLE)?;
    let strategies = document
        .get(STRATEGIES_TABLE)
        .map(|value| loader.strategies(value))
        .transpose()?;

    Ok(SourceDataset {
        vitamins: loader.source_table(&document, IngredientKind::Vitamin)?,
        minerals: loader.source_table(&document, IngredientKind::Mineral)?,
        vitamin_references: loader.marker_table(references, IngredientKind::Vitamin)?,
        mineral_references: loader.marker_table(references, IngredientKind::Mineral)?,
        strategies,
    })
}

struct Loader<'a> {
    path: &'a Path,
}

impl Loader<'_> {
    fn required_table<'t>(&self, parent: &'t Table, key: &str, name: &str) -> Result<&'t Table> {
        match parent.get(key) {
            None => Err(SourceError::MissingTable {
                path: self.path.to_path_buf(),
                table: name.to_string(),
            }),
            Some(value) => value
                .as_table()
                .ok_or_else(|| self.invalid(name, key, "a table")),
        }
    }

    fn invalid(&self, table: &str, key: &str, expected: &'static str) -> SourceError {
        SourceError::InvalidValue {
            path: self.path.to_path_buf(),
            table: table.to_string(),
            key: key.to_string(),
            expected,
        }
    }

    fn string_value(&self, table: &str, key: &str, value: &Value) -> Result<String> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.invalid(table, key, "a string"))
    }

    fn source_table(&self, document: &Table, kind: IngredientKind) -> Result<SourceTable> {
        let name = kind.table_name();
        let countries = self.required_table(document, name, name)?;
        let mut table = SourceTable::new(kind);
        for (country, value) in countries {
            let entries = value
                .as_table()
                .ok_or_else(|| self.invalid(name, country, "a table of ingredients"))?;
            let scope = format!("{name}.{country}");
            let mut country_table = CountryTable::new(country.as_str());
            for (label, value) in entries {
                country_table.entries.push(SourceEntry {
                    label: label.clone(),
                    value: self.string_value(&scope, label, value)?,
                });
            }
            table.countries.push(country_table);
        }
        Ok(table)
    }

    fn marker_table(&self, references: &Table, kind: IngredientKind) -> Result<MarkerTable> {
        let key = kind.table_name();
        let name = format!("{REFERENCES_TABLE}.{key}");
        let markers = self.required_table(references, key, &name)?;
        let mut table = MarkerTable::new(kind);
        for (marker_id, value) in markers {
            let description = self.string_value(&name, marker_id, value)?;
            table.markers.push((marker_id.clone(), description));
        }
        Ok(table)
    }

    fn strategies(&self, value: &Value) -> Result<Vec<StrategyDeclaration>> {
        let countries = value
            .as_table()
            .ok_or_else(|| self.invalid(STRATEGIES_TABLE, STRATEGIES_TABLE, "a table"))?;
        let mut declarations = Vec::with_capacity(countries.len());
        for (country, value) in countries {
            let scope = format!("{STRATEGIES_TABLE}.{country}");
            let kinds = value
                .get(COMPOSITE_KINDS_KEY)
                .and_then(Value::as_array)
                .ok_or_else(|| self.invalid(&scope, COMPOSITE_KINDS_KEY, "an array of kinds"))?;
            let mut composite_kinds = Vec::with_capacity(kinds.len());
            for kind in kinds {
                let text = kind
                    .as_str()
                    .ok_or_else(|| self.invalid(&scope, COMPOSITE_KINDS_KEY, "kind names"))?;
                let kind = text
                    .parse::<IngredientKind>()
                    .map_err(|_| SourceError::UnknownKind {
                        path: self.path.to_path_buf(),
                        country: country.clone(),
                        value: text.to_string(),
                    })?;
                composite_kinds.push(kind);
            }
            declarations.push(StrategyDeclaration {
                country: country.clone(),
                composite_kinds,
            });
        }
        Ok(declarations)
    }
}
