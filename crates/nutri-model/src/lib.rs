//! Domain model for supplement regulatory ranges.
//!
//! Types shared by the loader, the normalization pipeline and the writers:
//! raw source tables, parsed ranges, normalized records and footnote entries.

pub mod enums;
pub mod error;
pub mod range;
pub mod record;
pub mod source;

pub use enums::{Category, IngredientKind, RangeStatus};
pub use error::{ModelError, Result};
pub use range::{NOT_ESTABLISHED_TEXT, ParsedRange};
pub use record::{NormalizedRecord, ReferenceEntry};
pub use source::{
    CountryTable, MarkerTable, SourceDataset, SourceEntry, SourceTable, StrategyDeclaration,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_established_follows_range() {
        let record = NormalizedRecord::new(
            "Chile",
            "Biotina",
            IngredientKind::Vitamin,
            "µg",
            ParsedRange::bounded(30.0, 150.0),
            Category::Standard,
            vec![],
            "30 - 150",
        );
        assert!(record.established);
        assert_eq!(record.references_joined(), None);

        let record = NormalizedRecord::new(
            "Perú",
            "Biotina",
            IngredientKind::Vitamin,
            "µg",
            ParsedRange::not_established(),
            Category::Standard,
            vec!["2".to_string(), "4".to_string()],
            "No establecidos [2, 4]",
        );
        assert!(!record.established);
        assert_eq!(record.references_joined().as_deref(), Some("2,4"));
    }

    #[test]
    fn record_serializes_without_status() {
        let record = NormalizedRecord::new(
            "Chile",
            "Colina",
            IngredientKind::Vitamin,
            "mg",
            ParsedRange::bounded(275.0, 2000.0),
            Category::Standard,
            vec![],
            "275 - 2000",
        );
        let json = serde_json::to_value(&record).expect("serialize record");
        assert!(json.get("status").is_none());
        assert_eq!(json["kind"], "Vitamin");
        assert_eq!(json["category"], "Standard");
    }
}
