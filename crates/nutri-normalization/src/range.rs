//! Range parsing for regulatory value text.
//!
//! Source cells were typed by hand and passed through a spreadsheet, so the
//! same range shows up in several shapes:
//! - `"180 - 3000"` (padded hyphen)
//! - `"0,8-6"` (decimal comma, bare hyphen)
//! - `"No establecido - 3000"` (one side not regulated)
//! - `"may-15"` (a range the spreadsheet turned into a date)
//! - `"45"` (single value)
//!
//! Parsing never fails. Text that cannot be read produces empty bounds with
//! [`RangeStatus::Unparseable`].

use std::borrow::Cow;

use nutri_model::{ParsedRange, RangeStatus};
use tracing::debug;

/// Lowercase text that marks a bound as not regulated. Matches both
/// `"No establecido"` and `"No establecidos"`.
pub const UNREGULATED_TEXT: &str = "no establecido";

/// Singular form of the unregulated sentinel.
pub const UNREGULATED_SINGULAR: &str = "No establecido";

/// Plural form of the unregulated sentinel.
pub const UNREGULATED_PLURAL: &str = "No establecidos";

/// Abbreviations used inside composite cells: `NE` (no establecido) and
/// `ND` (no descrito).
pub const UNREGULATED_ABBREVIATIONS: [&str; 2] = ["NE", "ND"];

/// Ranges the spreadsheet misread as dates, mapped back to the intended text.
///
/// Matched case-insensitively as substrings, in this order.
pub const SPREADSHEET_DATE_CORRECTIONS: [(&str, &str); 9] = [
    ("may-15", "5 - 15"),
    ("may-25", "5 - 25"),
    ("ene-50", "1 - 50"),
    ("feb-20", "2 - 20"),
    ("feb-60", "2 - 60"),
    ("abr-35", "4 - 35"),
    ("dic-00", "12 - 0"),
    ("1-dic", "1 - 12"),
    ("mar-40", "3 - 40"),
];

/// What to do when only one side of a range is numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingleBoundPolicy {
    /// Use the known bound for both minimum and maximum.
    #[default]
    FillBoth,
    /// Leave the unregulated side empty.
    KeepOpen,
}

/// Options for range parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Policy for `"No establecido - 3000"` style ranges.
    pub single_bound_fallback: SingleBoundPolicy,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_single_bound_fallback(mut self, policy: SingleBoundPolicy) -> Self {
        self.single_bound_fallback = policy;
        self
    }
}

/// Returns true if the whole value is the unregulated sentinel
/// (singular or plural, case-insensitive).
pub fn is_unregulated_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.eq_ignore_ascii_case(UNREGULATED_SINGULAR)
        || trimmed.eq_ignore_ascii_case(UNREGULATED_PLURAL)
}

fn mentions_unregulated(value: &str) -> bool {
    value.to_lowercase().contains(UNREGULATED_TEXT)
}

fn is_abbreviated_sentinel(value: &str) -> bool {
    UNREGULATED_ABBREVIATIONS.contains(&value.trim())
}

/// Rewrites known spreadsheet date misreadings (`"may-15"` → `"5 - 15"`).
///
/// When a token matches, the whole value is lower-cased before replacement.
/// Values without a known token are returned unchanged.
pub fn correct_spreadsheet_dates(value: &str) -> Cow<'_, str> {
    let mut corrected = Cow::Borrowed(value);
    for (token, replacement) in SPREADSHEET_DATE_CORRECTIONS {
        let lowered = corrected.to_lowercase();
        if lowered.contains(token) {
            corrected = Cow::Owned(lowered.replace(token, replacement));
        }
    }
    corrected
}

/// Parses a reference-free value with default options.
///
/// # Example
/// ```
/// use nutri_normalization::parse_range;
///
/// assert_eq!(parse_range("0,8-6").bounds(), (Some(0.8), Some(6.0)));
/// assert_eq!(parse_range("No establecido - 3000").bounds(), (Some(3000.0), Some(3000.0)));
/// assert_eq!(parse_range("No establecidos").bounds(), (None, None));
/// ```
pub fn parse_range(value: &str) -> ParsedRange {
    parse_range_with(value, &ParseOptions::default())
}

/// Parses a reference-free value into a [`ParsedRange`].
pub fn parse_range_with(value: &str, options: &ParseOptions) -> ParsedRange {
    let trimmed = value.trim();
    if trimmed.is_empty() || is_unregulated_sentinel(trimmed) {
        return ParsedRange::not_established();
    }

    let corrected = correct_spreadsheet_dates(trimmed);
    let text = corrected.trim();

    match split_sides(text) {
        Some((min_text, max_text)) => {
            let range = combine_sides(parse_side(min_text), parse_side(max_text), options);
            if range.status == RangeStatus::Unparseable {
                debug!(value = %text, "range sides could not be read");
            }
            range
        }
        None => parse_single(text),
    }
}

/// Splits a range into its two sides.
///
/// The padded hyphen wins; a bare hyphen is used only when the text does not
/// mention the sentinel (decimal commas never collide with the range hyphen).
/// Returns `None` unless exactly two sides result.
fn split_sides(text: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = if text.contains(" - ") {
        text.split(" - ").collect()
    } else if text.contains('-') && !mentions_unregulated(text) {
        text.split('-').collect()
    } else {
        return None;
    };
    match parts.as_slice() {
        [min, max] => Some((min.trim(), max.trim())),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Side {
    Value(f64),
    Unregulated,
    Unreadable,
}

fn parse_side(text: &str) -> Side {
    if text.is_empty() || mentions_unregulated(text) || is_abbreviated_sentinel(text) {
        return Side::Unregulated;
    }
    match parse_number(text) {
        Some(value) => Side::Value(value),
        None => Side::Unreadable,
    }
}

/// Reads a number written with either decimal separator.
fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn combine_sides(min: Side, max: Side, options: &ParseOptions) -> ParsedRange {
    match (min, max) {
        (Side::Value(min), Side::Value(max)) => ParsedRange::bounded(min, max),
        (Side::Value(min), _) => single_bound(Some(min), None, options),
        (_, Side::Value(max)) => single_bound(None, Some(max), options),
        (Side::Unregulated, Side::Unregulated) => ParsedRange::not_established(),
        _ => ParsedRange::unparseable(),
    }
}

/// Applies the single-bound fallback policy to a one-sided range.
fn single_bound(min: Option<f64>, max: Option<f64>, options: &ParseOptions) -> ParsedRange {
    match options.single_bound_fallback {
        SingleBoundPolicy::FillBoth => match min.or(max) {
            Some(value) => ParsedRange::single(value),
            None => ParsedRange::not_established(),
        },
        SingleBoundPolicy::KeepOpen => ParsedRange::new(min, max),
    }
}

fn parse_single(text: &str) -> ParsedRange {
    let lowered = text.to_lowercase();
    if lowered.contains("none")
        || lowered.contains(UNREGULATED_TEXT)
        || is_abbreviated_sentinel(text)
    {
        return ParsedRange::not_established();
    }
    match parse_number(text) {
        Some(value) => ParsedRange::single(value),
        None => {
            debug!(value = %text, "value could not be read as a number");
            ParsedRange::unparseable()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(value: &str) -> (Option<f64>, Option<f64>) {
        parse_range(value).bounds()
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(bounds("180 - 3000"), (Some(180.0), Some(3000.0)));
        assert_eq!(bounds("1,08 - 17,96"), (Some(1.08), Some(17.96)));
    }

    #[test]
    fn test_bare_hyphen_with_decimal_comma() {
        assert_eq!(bounds("0,8-6"), (Some(0.8), Some(6.0)));
        assert_eq!(bounds("0,02-0,15"), (Some(0.02), Some(0.15)));
    }

    #[test]
    fn test_single_bound_fills_both() {
        assert_eq!(bounds("No establecido - 3000"), (Some(3000.0), Some(3000.0)));
        assert_eq!(bounds("0,3 - No establecido"), (Some(0.3), Some(0.3)));
        assert_eq!(bounds("NE-3500"), (Some(3500.0), Some(3500.0)));
    }

    #[test]
    fn test_single_bound_keep_open() {
        let options = ParseOptions::new().with_single_bound_fallback(SingleBoundPolicy::KeepOpen);
        let range = parse_range_with("No establecido - 3000", &options);
        assert_eq!(range.bounds(), (None, Some(3000.0)));
        assert!(range.is_established());

        let range = parse_range_with("0,3 - No establecido", &options);
        assert_eq!(range.bounds(), (Some(0.3), None));
    }

    #[test]
    fn test_spreadsheet_dates() {
        assert_eq!(bounds("may-15"), (Some(5.0), Some(15.0)));
        assert_eq!(bounds("MAY-25"), (Some(5.0), Some(25.0)));
        assert_eq!(bounds("ene-50"), (Some(1.0), Some(50.0)));
        assert_eq!(bounds("1-dic"), (Some(1.0), Some(12.0)));
        assert_eq!(bounds("dic-00"), (Some(12.0), Some(0.0)));
        assert_eq!(bounds("abr-35"), (Some(4.0), Some(35.0)));
    }

    #[test]
    fn test_unknown_date_token_falls_through() {
        // Not in the correction table: read as an ordinary bare-hyphen range.
        assert_eq!(parse_range("jun-30"), parse_range("jun - 30"));
        assert_eq!(bounds("jun-30"), (Some(30.0), Some(30.0)));

        let range = parse_range("oct-nov");
        assert_eq!(range.bounds(), (None, None));
        assert_eq!(range.status, RangeStatus::Unparseable);
    }

    #[test]
    fn test_sentinels() {
        for value in ["No establecidos", "No establecido", "no ESTABLECIDOS", "", "  "] {
            let range = parse_range(value);
            assert_eq!(range.bounds(), (None, None), "{value:?}");
            assert_eq!(range.status, RangeStatus::NotEstablished, "{value:?}");
        }
        assert_eq!(parse_range("None").status, RangeStatus::NotEstablished);
        assert_eq!(parse_range("No Establecidos").status, RangeStatus::NotEstablished);
        assert_eq!(parse_range("NE").status, RangeStatus::NotEstablished);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(bounds("45"), (Some(45.0), Some(45.0)));
        assert_eq!(bounds("2,5"), (Some(2.5), Some(2.5)));
    }

    #[test]
    fn test_garbage_is_unparseable() {
        let range = parse_range("No estblecido");
        assert_eq!(range.bounds(), (None, None));
        assert_eq!(range.status, RangeStatus::Unparseable);

        let range = parse_range("abc - def");
        assert_eq!(range.status, RangeStatus::Unparseable);
    }

    #[test]
    fn test_too_many_sides_is_unparseable() {
        let range = parse_range("AL:70-250 / PF:62-400");
        assert_eq!(range.bounds(), (None, None));
        assert_eq!(range.status, RangeStatus::Unparseable);
    }

    #[test]
    fn test_both_sides_unregulated() {
        let range = parse_range("No establecido - No establecido");
        assert_eq!(range.bounds(), (None, None));
        assert_eq!(range.status, RangeStatus::NotEstablished);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(parse_range("inf").status, RangeStatus::Unparseable);
        assert_eq!(parse_range("NaN").status, RangeStatus::Unparseable);
    }

    #[test]
    fn test_correction_leaves_other_text_alone() {
        assert!(matches!(correct_spreadsheet_dates("180 - 3000"), Cow::Borrowed(_)));
        assert_eq!(correct_spreadsheet_dates("Feb-20"), "2 - 20");
    }
}
