//! Ingredient labels carry their unit in parentheses:
//! `"Vitamina A / Retinol (µg)"` is ingredient `"Vitamina A / Retinol"` in
//! `µg`.

use std::sync::LazyLock;

use regex::Regex;

/// Unit recorded when the label has no parenthesized suffix.
pub const DEFAULT_UNIT: &str = "unidad";

static UNIT_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("Invalid unit regex"));

static UNIT_GROUP_WITH_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)").expect("Invalid unit removal regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLabel {
    pub name: String,
    pub unit: String,
}

/// Splits a source label into ingredient name and unit.
///
/// The unit is the first parenthesized group; every parenthesized group is
/// removed from the name.
pub fn split_label(label: &str) -> IngredientLabel {
    let unit = UNIT_GROUP
        .captures(label)
        .and_then(|captures| captures.get(1))
        .map_or_else(|| DEFAULT_UNIT.to_string(), |unit| unit.as_str().to_string());
    let name = UNIT_GROUP_WITH_SPACE.replace_all(label, "").trim().to_string();
    IngredientLabel { name, unit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_extracted() {
        let label = split_label("Vitamina A / Retinol (µg)");
        assert_eq!(label.name, "Vitamina A / Retinol");
        assert_eq!(label.unit, "µg");
    }

    #[test]
    fn test_missing_unit() {
        let label = split_label("Colina");
        assert_eq!(label.name, "Colina");
        assert_eq!(label.unit, DEFAULT_UNIT);
    }

    #[test]
    fn test_first_group_is_unit() {
        let label = split_label("Vitamina E (d-tocoferol) (mg)");
        assert_eq!(label.unit, "d-tocoferol");
        assert_eq!(label.name, "Vitamina E");
    }
}
