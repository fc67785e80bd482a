//! Reference catalog: footnote texts keyed by `(marker_id, kind)`.
//!
//! The vitamin and mineral tables number their footnotes independently, so
//! marker `"1"` means different things per kind. Lookups always take both.

use std::collections::HashMap;

use nutri_model::{IngredientKind, MarkerTable, NormalizedRecord, ReferenceEntry};
use tracing::debug;

/// Description used when a marker has no entry for the record's kind.
pub const MISSING_REFERENCE_TEXT: &str = "reference not found";

/// A marker used by a record but absent from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub country: String,
    pub ingredient: String,
    pub kind: IngredientKind,
    pub marker: String,
}

/// Flat list of reference entries with a `(kind, marker_id)` index.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    entries: Vec<ReferenceEntry>,
    index: HashMap<(IngredientKind, String), usize>,
}

impl ReferenceCatalog {
    /// Builds a catalog from any number of marker tables, in order.
    ///
    /// When a marker id repeats within one kind, the first description wins.
    pub fn from_tables<'a>(tables: impl IntoIterator<Item = &'a MarkerTable>) -> Self {
        let mut catalog = Self::default();
        for table in tables {
            for (marker_id, description) in &table.markers {
                catalog.push(ReferenceEntry::new(
                    marker_id.clone(),
                    description.clone(),
                    table.kind,
                ));
            }
        }
        catalog
    }

    fn push(&mut self, entry: ReferenceEntry) {
        let key = (entry.kind, entry.marker_id.clone());
        if self.index.contains_key(&key) {
            debug!(
                marker = %entry.marker_id,
                kind = %entry.kind,
                "duplicate reference marker ignored"
            );
            return;
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(entry);
    }

    /// All entries: vitamins first, then minerals, in declaration order.
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn entries_for(&self, kind: IngredientKind) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter().filter(move |entry| entry.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, marker_id: &str, kind: IngredientKind) -> Option<&ReferenceEntry> {
        self.index
            .get(&(kind, marker_id.to_string()))
            .map(|&position| &self.entries[position])
    }

    /// Resolves a comma-joined reference string into display lines.
    ///
    /// Each id becomes `"[id] description"`. Ids unknown for `kind` become
    /// `"[id] reference not found (kind: Vitamin)"`.
    ///
    /// # Example
    /// ```
    /// use nutri_model::{IngredientKind, MarkerTable};
    /// use nutri_normalization::ReferenceCatalog;
    ///
    /// let vitamins = MarkerTable::new(IngredientKind::Vitamin).with_marker("1", "As RE.");
    /// let catalog = ReferenceCatalog::from_tables([&vitamins]);
    /// assert_eq!(
    ///     catalog.describe("1, 9", IngredientKind::Vitamin),
    ///     vec![
    ///         "[1] As RE.".to_string(),
    ///         "[9] reference not found (kind: Vitamin)".to_string(),
    ///     ]
    /// );
    /// ```
    pub fn describe(&self, references: &str, kind: IngredientKind) -> Vec<String> {
        references
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| match self.lookup(id, kind) {
                Some(entry) => format!("[{id}] {}", entry.description),
                None => format!("[{id}] {MISSING_REFERENCE_TEXT} (kind: {kind})"),
            })
            .collect()
    }

    /// [`describe`](Self::describe) for a record's own markers and kind.
    pub fn describe_record(&self, record: &NormalizedRecord) -> Vec<String> {
        record
            .references_joined()
            .map(|joined| self.describe(&joined, record.kind))
            .unwrap_or_default()
    }

    /// Every record marker that has no catalog entry for the record's kind.
    pub fn unresolved(&self, records: &[NormalizedRecord]) -> Vec<UnresolvedReference> {
        records
            .iter()
            .flat_map(|record| {
                record
                    .references
                    .iter()
                    .filter(|marker| self.lookup(marker, record.kind).is_none())
                    .map(|marker| UnresolvedReference {
                        country: record.country.clone(),
                        ingredient: record.ingredient.clone(),
                        kind: record.kind,
                        marker: marker.clone(),
                    })
            })
            .collect()
    }
}

/// Builds the catalog from the vitamin and mineral footnote tables.
pub fn build_reference_catalog(vitamins: &MarkerTable, minerals: &MarkerTable) -> ReferenceCatalog {
    ReferenceCatalog::from_tables([vitamins, minerals])
}

#[cfg(test)]
mod tests {
    use nutri_model::{Category, ParsedRange};

    use super::*;

    fn catalog() -> ReferenceCatalog {
        build_reference_catalog(
            &MarkerTable::new(IngredientKind::Vitamin)
                .with_marker("1", "Como Retinol Equivalente (RE).")
                .with_marker("2", "Como alfa-tocoferol."),
            &MarkerTable::new(IngredientKind::Mineral)
                .with_marker("1", "Para embarazadas.")
                .with_marker("1", "Duplicate."),
        )
    }

    #[test]
    fn test_entries_in_order() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        let kinds: Vec<IngredientKind> = catalog.entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IngredientKind::Vitamin,
                IngredientKind::Vitamin,
                IngredientKind::Mineral
            ]
        );
        assert_eq!(catalog.entries_for(IngredientKind::Mineral).count(), 1);
    }

    #[test]
    fn test_lookup_scoped_by_kind() {
        let catalog = catalog();
        let vitamin = catalog.lookup("1", IngredientKind::Vitamin).map(|e| &e.description);
        let mineral = catalog.lookup("1", IngredientKind::Mineral).map(|e| &e.description);
        assert_eq!(vitamin.map(String::as_str), Some("Como Retinol Equivalente (RE)."));
        assert_eq!(mineral.map(String::as_str), Some("Para embarazadas."));
        assert!(catalog.lookup("2", IngredientKind::Mineral).is_none());
    }

    #[test]
    fn test_describe_skips_empty_ids() {
        let lines = catalog().describe(" 2 ,, 7", IngredientKind::Vitamin);
        assert_eq!(
            lines,
            vec![
                "[2] Como alfa-tocoferol.".to_string(),
                "[7] reference not found (kind: Vitamin)".to_string(),
            ]
        );
        assert!(catalog().describe("", IngredientKind::Vitamin).is_empty());
    }

    #[test]
    fn test_unresolved() {
        let record = NormalizedRecord::new(
            "Chile",
            "Zinc",
            IngredientKind::Mineral,
            "mg",
            ParsedRange::bounded(1.0, 2.0),
            Category::Standard,
            vec!["1".to_string(), "2".to_string()],
            "1 - 2 [1,2]",
        );
        let unresolved = catalog().unresolved(std::slice::from_ref(&record));
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].marker, "2");
        assert_eq!(unresolved[0].kind, IngredientKind::Mineral);
        assert_eq!(
            catalog().describe_record(&record),
            vec![
                "[1] Para embarazadas.".to_string(),
                "[2] reference not found (kind: Mineral)".to_string(),
            ]
        );
    }
}
