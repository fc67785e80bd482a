//! Normalization driver.
//!
//! Walks the source tables in declaration order and turns every cell into
//! one or more [`NormalizedRecord`]s:
//!
//! 1. split the ingredient label into name and unit
//! 2. extract footnote markers from the value
//! 3. decompose composite cells for countries whose strategy asks for it,
//!    otherwise parse a single range with category `Standard`
//!
//! Parsing problems never abort the run; each cell is handled on its own.

use std::time::Instant;

use nutri_model::{
    Category, IngredientKind, NormalizedRecord, SourceDataset, SourceEntry, SourceTable,
};
use tracing::{debug, debug_span, info, info_span};

use crate::composite::{decompose_categories_with, has_category_tags};
use crate::label::split_label;
use crate::range::{ParseOptions, parse_range_with};
use crate::references::extract_references;
use crate::report::NormalizationReport;
use crate::strategy::StrategyTable;

/// Parse options and country strategies for one run.
#[derive(Debug, Clone, Default)]
pub struct NormalizationContext {
    pub options: ParseOptions,
    pub strategies: StrategyTable,
}

impl NormalizationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the dataset's declared strategies, or the default table when the
    /// data file declares none.
    pub fn for_dataset(dataset: &SourceDataset) -> Self {
        let strategies = dataset
            .strategies
            .as_deref()
            .map(StrategyTable::from_declarations)
            .unwrap_or_default();
        Self::default().with_strategies(strategies)
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_strategies(mut self, strategies: StrategyTable) -> Self {
        self.strategies = strategies;
        self
    }
}

/// Records produced by a run, with summary counts.
#[derive(Debug, Clone)]
pub struct Normalization {
    pub records: Vec<NormalizedRecord>,
    pub report: NormalizationReport,
}

/// Normalizes both source tables: vitamins first, then minerals.
pub fn normalize_dataset(dataset: &SourceDataset, context: &NormalizationContext) -> Normalization {
    let span = info_span!("normalize");
    let _guard = span.enter();
    let start = Instant::now();

    let capacity = dataset.vitamins.entry_count() + dataset.minerals.entry_count();
    let mut records = Vec::with_capacity(capacity);
    for kind in IngredientKind::ALL {
        records.extend(normalize_table(dataset.table(kind), context));
    }
    let report = NormalizationReport::from_records(&records);
    info!(
        records = report.total_records,
        established = report.established,
        unparseable = report.unparseable,
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );
    Normalization { records, report }
}

/// Normalizes every cell of one table, keeping declaration order.
pub fn normalize_table(
    table: &SourceTable,
    context: &NormalizationContext,
) -> Vec<NormalizedRecord> {
    let mut records = Vec::with_capacity(table.entry_count());
    for country in &table.countries {
        let span = debug_span!("country", country = %country.country, kind = %table.kind);
        let _guard = span.enter();
        let before = records.len();
        for entry in &country.entries {
            records.extend(normalize_entry(&country.country, table.kind, entry, context));
        }
        debug!(
            entries = country.entries.len(),
            records = records.len() - before,
            "country normalized"
        );
    }
    records
}

/// Normalizes one cell. Always returns at least one record.
pub fn normalize_entry(
    country: &str,
    kind: IngredientKind,
    entry: &SourceEntry,
    context: &NormalizationContext,
) -> Vec<NormalizedRecord> {
    let label = split_label(&entry.label);
    let extracted = extract_references(&entry.value);

    if context.strategies.decomposes(country, kind) && has_category_tags(&extracted.residual) {
        let parts = decompose_categories_with(&extracted.residual, &context.options);
        if !parts.is_empty() {
            return parts
                .into_iter()
                .map(|part| {
                    NormalizedRecord::new(
                        country,
                        label.name.clone(),
                        kind,
                        label.unit.clone(),
                        part.range,
                        part.category,
                        extracted.markers.clone(),
                        entry.value.clone(),
                    )
                })
                .collect();
        }
        debug!(
            country,
            ingredient = %label.name,
            "composite cell produced no categories, parsing as a single range"
        );
    }

    let range = parse_range_with(&extracted.residual, &context.options);
    vec![NormalizedRecord::new(
        country,
        label.name,
        kind,
        label.unit,
        range,
        Category::Standard,
        extracted.markers,
        entry.value.clone(),
    )]
}
