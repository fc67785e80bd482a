use std::collections::{BTreeMap, BTreeSet};

use nutri_model::{Category, IngredientKind, NormalizedRecord, RangeStatus};

/// Counts describing one normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    pub total_records: usize,
    pub vitamin_records: usize,
    pub mineral_records: usize,
    pub established: usize,
    pub not_established: usize,
    /// Records whose text was present but unreadable.
    pub unparseable: usize,
    pub with_references: usize,
    pub countries: usize,
    pub ingredients: usize,
    pub categories: BTreeMap<Category, usize>,
}

impl NormalizationReport {
    pub fn from_records(records: &[NormalizedRecord]) -> Self {
        Self::from_record_iter(records)
    }

    /// Counts any subset of records, e.g. one kind.
    pub fn from_record_iter<'a>(records: impl IntoIterator<Item = &'a NormalizedRecord>) -> Self {
        let mut report = Self::default();
        let mut countries = BTreeSet::new();
        let mut ingredients = BTreeSet::new();
        for record in records {
            report.total_records += 1;
            match record.kind {
                IngredientKind::Vitamin => report.vitamin_records += 1,
                IngredientKind::Mineral => report.mineral_records += 1,
            }
            if record.established {
                report.established += 1;
            } else {
                report.not_established += 1;
            }
            if record.range_status() == RangeStatus::Unparseable {
                report.unparseable += 1;
            }
            if !record.references.is_empty() {
                report.with_references += 1;
            }
            countries.insert(record.country.as_str());
            ingredients.insert(record.ingredient.as_str());
            *report
                .categories
                .entry(record.category.clone())
                .or_insert(0) += 1;
        }
        report.countries = countries.len();
        report.ingredients = ingredients.len();
        report
    }

    pub fn records_of(&self, kind: IngredientKind) -> usize {
        match kind {
            IngredientKind::Vitamin => self.vitamin_records,
            IngredientKind::Mineral => self.mineral_records,
        }
    }
}

#[cfg(test)]
mod tests {
    use nutri_model::ParsedRange;

    use super::*;

    fn record(country: &str, kind: IngredientKind, range: ParsedRange) -> NormalizedRecord {
        NormalizedRecord::new(
            country,
            "Zinc",
            kind,
            "mg",
            range,
            Category::Standard,
            vec![],
            "",
        )
    }

    #[test]
    fn test_counts() {
        let records = vec![
            record("Chile", IngredientKind::Mineral, ParsedRange::bounded(1.0, 25.0)),
            record("Perú", IngredientKind::Mineral, ParsedRange::unparseable()),
            record("Perú", IngredientKind::Vitamin, ParsedRange::not_established()),
        ];
        let report = NormalizationReport::from_records(&records);
        assert_eq!(report.total_records, 3);
        assert_eq!(report.records_of(IngredientKind::Mineral), 2);
        assert_eq!(report.established, 1);
        assert_eq!(report.not_established, 2);
        assert_eq!(report.unparseable, 1);
        assert_eq!(report.countries, 2);
        assert_eq!(report.ingredients, 1);
        assert_eq!(report.categories.get(&Category::Standard), Some(&3));

        let minerals = NormalizationReport::from_record_iter(
            records.iter().filter(|r| r.kind == IngredientKind::Mineral),
        );
        assert_eq!(minerals.total_records, 2);
        assert_eq!(minerals.vitamin_records, 0);
    }
}
