//! Per-country parsing strategies.
//!
//! Countries that encode several regulatory categories in one cell are
//! declared here instead of being special-cased in the driver. Adding a new
//! composite country is a table entry.

use std::collections::{BTreeMap, BTreeSet};

use nutri_model::{IngredientKind, StrategyDeclaration};

/// Country whose vitamin cells use `AL:`/`PF:`/`UL:` tags in the bundled data.
pub const DEFAULT_COMPOSITE_COUNTRY: &str = "Guatemala";

static STANDARD_STRATEGY: CountryStrategy = CountryStrategy {
    composite_kinds: BTreeSet::new(),
};

/// How one country's cells are parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryStrategy {
    /// Kinds whose cells are decomposed by category tag.
    pub composite_kinds: BTreeSet<IngredientKind>,
}

impl CountryStrategy {
    /// One range per cell.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Decompose tagged cells for the given kinds.
    pub fn composite(kinds: impl IntoIterator<Item = IngredientKind>) -> Self {
        Self {
            composite_kinds: kinds.into_iter().collect(),
        }
    }

    pub fn decomposes(&self, kind: IngredientKind) -> bool {
        self.composite_kinds.contains(&kind)
    }
}

/// Strategy lookup keyed by country name.
///
/// Countries not in the table use [`CountryStrategy::standard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyTable {
    countries: BTreeMap<String, CountryStrategy>,
}

impl StrategyTable {
    /// A table where every country uses the standard strategy.
    pub fn empty() -> Self {
        Self {
            countries: BTreeMap::new(),
        }
    }

    /// Builds a table from data-file declarations.
    pub fn from_declarations(declarations: &[StrategyDeclaration]) -> Self {
        declarations.iter().fold(Self::empty(), |table, declaration| {
            table.with_country(
                declaration.country.clone(),
                CountryStrategy::composite(declaration.composite_kinds.iter().copied()),
            )
        })
    }

    pub fn with_country(mut self, country: impl Into<String>, strategy: CountryStrategy) -> Self {
        self.countries.insert(country.into(), strategy);
        self
    }

    pub fn for_country(&self, country: &str) -> &CountryStrategy {
        self.countries.get(country).unwrap_or(&STANDARD_STRATEGY)
    }

    /// True when `country` decomposes tagged cells of `kind`.
    pub fn decomposes(&self, country: &str, kind: IngredientKind) -> bool {
        self.for_country(country).decomposes(kind)
    }

    pub fn composite_countries(&self) -> impl Iterator<Item = &str> {
        self.countries
            .iter()
            .filter(|(_, strategy)| !strategy.composite_kinds.is_empty())
            .map(|(country, _)| country.as_str())
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::empty().with_country(
            DEFAULT_COMPOSITE_COUNTRY,
            CountryStrategy::composite([IngredientKind::Vitamin]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = StrategyTable::default();
        assert!(table.decomposes("Guatemala", IngredientKind::Vitamin));
        assert!(!table.decomposes("Guatemala", IngredientKind::Mineral));
        assert!(!table.decomposes("Chile", IngredientKind::Vitamin));
        assert_eq!(table.composite_countries().collect::<Vec<_>>(), vec!["Guatemala"]);
    }

    #[test]
    fn test_from_declarations() {
        let table = StrategyTable::from_declarations(&[StrategyDeclaration {
            country: "Honduras".to_string(),
            composite_kinds: vec![IngredientKind::Vitamin, IngredientKind::Mineral],
        }]);
        assert!(table.decomposes("Honduras", IngredientKind::Mineral));
        assert!(!table.decomposes("Guatemala", IngredientKind::Vitamin));
    }

    #[test]
    fn test_empty_table() {
        assert!(!StrategyTable::empty().decomposes("Guatemala", IngredientKind::Vitamin));
        assert_eq!(
            StrategyTable::empty().for_country("Chile"),
            &CountryStrategy::standard()
        );
    }
}
