//! Supplement regulatory range normalization.
//!
//! Turns hand-transcribed `"min - max [refs]"` cells into typed records.
//!
//! # Overview
//!
//! This crate provides:
//! - **Reference extraction**: strip `[1,2]` footnote markers from a cell
//! - **Range parsing**: read the many shapes a range takes in the source data
//! - **Category decomposition**: split `AL:.. / PF:..` cells into one range per regime
//! - **Normalization driver**: walk whole tables into [`NormalizedRecord`]s
//! - **Reference catalog**: resolve markers against per-kind footnote tables
//!
//! # Example
//!
//! ```
//! use nutri_model::{CountryTable, IngredientKind, SourceTable};
//! use nutri_normalization::{NormalizationContext, normalize_table};
//!
//! let table = SourceTable::new(IngredientKind::Vitamin)
//!     .with_country(CountryTable::new("Chile").with_entry("Biotina (µg)", "30 - 150 [4]"));
//! let records = normalize_table(&table, &NormalizationContext::default());
//!
//! assert_eq!(records[0].minimum, Some(30.0));
//! assert_eq!(records[0].references, vec!["4".to_string()]);
//! ```
//!
//! [`NormalizedRecord`]: nutri_model::NormalizedRecord

pub mod catalog;
pub mod composite;
pub mod driver;
pub mod label;
pub mod range;
pub mod references;
pub mod report;
pub mod strategy;

pub use catalog::{
    MISSING_REFERENCE_TEXT, ReferenceCatalog, UnresolvedReference, build_reference_catalog,
};
pub use composite::{
    CategoryRange, decompose_categories, decompose_categories_with, has_category_tags,
};
pub use driver::{
    Normalization, NormalizationContext, normalize_dataset, normalize_entry, normalize_table,
};
pub use label::{DEFAULT_UNIT, IngredientLabel, split_label};
pub use range::{
    ParseOptions, SingleBoundPolicy, correct_spreadsheet_dates, is_unregulated_sentinel,
    parse_range, parse_range_with,
};
pub use references::{ExtractedReferences, extract_references};
pub use report::NormalizationReport;
pub use strategy::{CountryStrategy, DEFAULT_COMPOSITE_COUNTRY, StrategyTable};
