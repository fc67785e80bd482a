//! Decomposition of composite category cells.
//!
//! Some countries publish separate ranges per regulatory regime inside one
//! cell: `"AL:15-3000 / PF:160-3000"` means 15–3000 when sold as a food
//! supplement (`AL`) and 160–3000 as a pharmaceutical product (`PF`).

use nutri_model::{Category, ParsedRange};
use tracing::{debug, warn};

use crate::range::{ParseOptions, UNREGULATED_PLURAL, parse_range_with};

/// Tag prefixes that mark a cell as composite.
pub const CATEGORY_TAG_PREFIXES: [&str; 3] = ["AL:", "PF:", "UL:"];

/// One segment of a composite cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRange {
    pub category: Category,
    pub range: ParsedRange,
}

/// Returns true if the value contains a known category tag prefix.
pub fn has_category_tags(value: &str) -> bool {
    CATEGORY_TAG_PREFIXES
        .iter()
        .any(|prefix| value.contains(prefix))
}

/// Splits a composite cell with default parse options.
///
/// # Example
/// ```
/// use nutri_model::Category;
/// use nutri_normalization::decompose_categories;
///
/// let parts = decompose_categories("AL:15-3000 / PF:160-3000");
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[0].category, Category::FoodSupplements);
/// assert_eq!(parts[1].range.bounds(), (Some(160.0), Some(3000.0)));
/// ```
pub fn decompose_categories(value: &str) -> Vec<CategoryRange> {
    decompose_categories_with(value, &ParseOptions::default())
}

/// Splits a composite cell into one range per `TAG:range` segment.
///
/// Segments are separated by `/` and keep their order. A segment without a
/// colon is skipped. The plural unregulated sentinel on its own yields
/// nothing.
pub fn decompose_categories_with(value: &str, options: &ParseOptions) -> Vec<CategoryRange> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNREGULATED_PLURAL) {
        return Vec::new();
    }

    let mut parts = Vec::new();
    for segment in trimmed.split('/') {
        let segment = segment.trim();
        let Some((tag, range_text)) = segment.split_once(':') else {
            debug!(segment, "composite segment without a category tag skipped");
            continue;
        };
        let category = Category::from_tag(tag);
        if !category.is_known() {
            warn!(tag = %tag.trim(), value = %trimmed, "unknown category tag kept verbatim");
        }
        parts.push(CategoryRange {
            category,
            range: parse_range_with(range_text.trim(), options),
        });
    }
    parts
}
