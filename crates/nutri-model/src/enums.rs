//! Type-safe enumerations for regulatory range data.
//!
//! The source tables describe these concepts as free text (`"Vitamina"`,
//! `"AL"`, `"Suplementos Alimenticios"`). Parsing them into enums at the
//! boundary keeps typos from producing records that cannot be joined.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Ingredient family a source table belongs to.
///
/// Footnote markers are scoped by kind: marker `"1"` in the vitamin table and
/// marker `"1"` in the mineral table are unrelated notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IngredientKind {
    #[serde(rename = "Vitamin", alias = "vitamin", alias = "vitamina", alias = "Vitamina")]
    Vitamin,
    #[serde(rename = "Mineral", alias = "mineral")]
    Mineral,
}

impl IngredientKind {
    /// All kinds in output order.
    pub const ALL: [IngredientKind; 2] = [IngredientKind::Vitamin, IngredientKind::Mineral];

    /// Returns the label written to output files.
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientKind::Vitamin => "Vitamin",
            IngredientKind::Mineral => "Mineral",
        }
    }

    /// Plural, lowercase table name used by the source data file.
    pub fn table_name(&self) -> &'static str {
        match self {
            IngredientKind::Vitamin => "vitamins",
            IngredientKind::Mineral => "minerals",
        }
    }
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IngredientKind {
    type Err = ModelError;

    /// Accepts English and source-language labels, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "vitamin" | "vitamina" | "vitamins" | "vitaminas" => Ok(IngredientKind::Vitamin),
            "mineral" | "minerals" | "minerales" => Ok(IngredientKind::Mineral),
            _ => Err(ModelError::UnknownKind {
                value: s.to_string(),
            }),
        }
    }
}

/// Regulatory regime a range applies to.
///
/// Most countries publish one range per ingredient ([`Category::Standard`]).
/// Composite cells split the range per regime using short tags; tags outside
/// the known set are carried verbatim in [`Category::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Category {
    Standard,
    /// `AL`: food supplements regulated as foods.
    FoodSupplements,
    /// `PF`: dietary supplements regulated as pharmaceutical products.
    PharmaceuticalProducts,
    /// `UL`: tolerable upper intake level.
    UpperLimit,
    Other(String),
}

impl Category {
    /// Maps a composite tag (`AL`, `PF`, `UL`) to its category.
    ///
    /// Unknown tags pass through unchanged so that no data is dropped.
    pub fn from_tag(tag: &str) -> Category {
        match tag.trim() {
            "AL" => Category::FoodSupplements,
            "PF" => Category::PharmaceuticalProducts,
            "UL" => Category::UpperLimit,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Standard => "Standard",
            Category::FoodSupplements => "Food Supplements",
            Category::PharmaceuticalProducts => "Pharmaceutical Products",
            Category::UpperLimit => "Upper Limit",
            Category::Other(tag) => tag,
        }
    }

    /// Returns true for every variant except [`Category::Other`].
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl TryFrom<String> for Category {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Category {
    type Err = ModelError;

    /// Parses an output label or a composite tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyCategoryTag);
        }
        let category = match trimmed {
            "Standard" => Category::Standard,
            "Food Supplements" => Category::FoodSupplements,
            "Pharmaceutical Products" => Category::PharmaceuticalProducts,
            "Upper Limit" => Category::UpperLimit,
            tag => Category::from_tag(tag),
        };
        Ok(category)
    }
}

/// How a range string was understood.
///
/// `NotEstablished` and `Unparseable` both leave the bounds empty and are
/// written identically to output files; they stay distinct in memory so that
/// garbage input can be counted and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    /// At least one numeric bound was read.
    Established,
    /// Empty text or an explicit "not established" sentinel.
    NotEstablished,
    /// Text was present but no bound could be read from it.
    Unparseable,
}

impl RangeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeStatus::Established => "established",
            RangeStatus::NotEstablished => "not established",
            RangeStatus::Unparseable => "unparseable",
        }
    }
}

impl fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "Vitamina".parse::<IngredientKind>().unwrap(),
            IngredientKind::Vitamin
        );
        assert_eq!(
            " MINERAL ".parse::<IngredientKind>().unwrap(),
            IngredientKind::Mineral
        );
        assert!("herb".parse::<IngredientKind>().is_err());
    }

    #[test]
    fn test_category_tags() {
        assert_eq!(Category::from_tag("AL"), Category::FoodSupplements);
        assert_eq!(Category::from_tag(" PF "), Category::PharmaceuticalProducts);
        assert_eq!(Category::from_tag("UL"), Category::UpperLimit);
        assert_eq!(Category::from_tag("XX"), Category::Other("XX".to_string()));
        assert!(!Category::from_tag("XX").is_known());
    }

    #[test]
    fn test_category_label_round_trip() {
        for category in [
            Category::Standard,
            Category::FoodSupplements,
            Category::PharmaceuticalProducts,
            Category::UpperLimit,
        ] {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("  ".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::UpperLimit).unwrap();
        assert_eq!(json, "\"Upper Limit\"");
    }

    #[test]
    fn test_kind_serializes_as_label() {
        for kind in IngredientKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        let kind: IngredientKind = serde_json::from_str("\"vitamin\"").unwrap();
        assert_eq!(kind, IngredientKind::Vitamin);
    }
}
