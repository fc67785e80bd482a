//! Footnote marker extraction.
//!
//! Source values cite regulatory notes with bracketed markers:
//! `"180 - 3000 [1]"`, `"No establecido [2, 4]"`. Markers are pulled out and
//! the remaining text is handed to the range parser.

use std::sync::LazyLock;

use regex::Regex;

static MARKER_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("Invalid marker group regex"));

static MARKER_GROUP_WITH_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[[^\]]+\]").expect("Invalid marker removal regex"));

/// A value split into its range text and the markers it cited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedReferences {
    /// Value text with every bracketed group removed.
    pub residual: String,
    /// Marker ids in order of appearance.
    pub markers: Vec<String>,
}

/// Extracts bracketed footnote markers from a raw value.
///
/// Each `[...]` group is split on commas; ids keep their order of appearance.
/// Unterminated or empty brackets are not markers and stay in the residual.
///
/// # Example
/// ```
/// use nutri_normalization::extract_references;
///
/// let extracted = extract_references("180 - 3000 [1]");
/// assert_eq!(extracted.residual, "180 - 3000");
/// assert_eq!(extracted.markers, vec!["1"]);
/// ```
pub fn extract_references(value: &str) -> ExtractedReferences {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ExtractedReferences::default();
    }

    let markers = MARKER_GROUP
        .captures_iter(trimmed)
        .filter_map(|captures| captures.get(1))
        .flat_map(|group| group.as_str().split(','))
        .map(str::trim)
        .filter(|marker| !marker.is_empty())
        .map(str::to_string)
        .collect();

    let residual = MARKER_GROUP_WITH_SPACE
        .replace_all(trimmed, "")
        .trim()
        .to_string();

    ExtractedReferences { residual, markers }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_marker() {
        let extracted = extract_references("180 - 3000 [1]");
        assert_eq!(extracted.residual, "180 - 3000");
        assert_eq!(extracted.markers, vec!["1"]);
    }

    #[test]
    fn test_grouped_markers_keep_order() {
        let extracted = extract_references("No establecido [2, 4, 5] [1]");
        assert_eq!(extracted.residual, "No establecido");
        assert_eq!(extracted.markers, vec!["2", "4", "5", "1"]);
    }

    #[test]
    fn test_composite_syntax_survives() {
        let extracted = extract_references("AL:0,8-6 [1,2]");
        assert_eq!(extracted.residual, "AL:0,8-6");
        assert_eq!(extracted.markers, vec!["1", "2"]);
    }

    #[test]
    fn test_no_markers() {
        let extracted = extract_references("  275 - 2000 ");
        assert_eq!(extracted.residual, "275 - 2000");
        assert!(extracted.markers.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_references(""), ExtractedReferences::default());
        assert_eq!(extract_references("   "), ExtractedReferences::default());
    }

    #[test]
    fn test_blank_group_contributes_nothing() {
        let extracted = extract_references("45 [ , ]");
        assert_eq!(extracted.residual, "45");
        assert!(extracted.markers.is_empty());
    }

    #[test]
    fn test_malformed_brackets_stay() {
        let extracted = extract_references("45 [3");
        assert_eq!(extracted.residual, "45 [3");
        assert!(extracted.markers.is_empty());

        let extracted = extract_references("45 []");
        assert_eq!(extracted.residual, "45 []");
        assert!(extracted.markers.is_empty());
    }
}
