use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::RangeStatus;

/// Text used when rendering an absent bound.
pub const NOT_ESTABLISHED_TEXT: &str = "No establecido";

/// A numeric range read from regulatory text.
///
/// Both bounds empty means the ingredient is unregulated (or the text could
/// not be read, see [`RangeStatus`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedRange {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub status: RangeStatus,
}

impl ParsedRange {
    /// Builds a range from two optional bounds, deriving the status.
    ///
    /// Callers that read text use [`ParsedRange::unparseable`] explicitly
    /// when both bounds are empty because the text was garbage.
    pub fn new(minimum: Option<f64>, maximum: Option<f64>) -> Self {
        let status = if minimum.is_some() || maximum.is_some() {
            RangeStatus::Established
        } else {
            RangeStatus::NotEstablished
        };
        Self {
            minimum,
            maximum,
            status,
        }
    }

    pub fn bounded(minimum: f64, maximum: f64) -> Self {
        Self::new(Some(minimum), Some(maximum))
    }

    /// A single published value used for both bounds.
    pub fn single(value: f64) -> Self {
        Self::new(Some(value), Some(value))
    }

    pub fn not_established() -> Self {
        Self::new(None, None)
    }

    pub fn unparseable() -> Self {
        Self {
            minimum: None,
            maximum: None,
            status: RangeStatus::Unparseable,
        }
    }

    /// True when at least one bound is known.
    pub fn is_established(&self) -> bool {
        self.minimum.is_some() || self.maximum.is_some()
    }

    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        (self.minimum, self.maximum)
    }
}

impl Default for ParsedRange {
    fn default() -> Self {
        Self::not_established()
    }
}

/// Renders the range in the source notation (`"180 - 3000"`, `"45"`,
/// `"No establecido - 1000"`).
///
/// Reading the text back with the parse options that produced the range
/// yields the same bounds. One-sided ranges only come from parsing that keeps
/// open bounds; filling both sides turns `"No establecido - 1000"` into
/// `1000 - 1000`. Bounds are non-negative: a negative single value renders
/// with a leading hyphen and reads back as a range.
impl fmt::Display for ParsedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.minimum, self.maximum) {
            (None, None) => f.write_str(NOT_ESTABLISHED_TEXT),
            (Some(min), Some(max)) if min == max => write!(f, "{min}"),
            (Some(min), Some(max)) => write!(f, "{min} - {max}"),
            (Some(min), None) => write!(f, "{min} - {NOT_ESTABLISHED_TEXT}"),
            (None, Some(max)) => write!(f, "{NOT_ESTABLISHED_TEXT} - {max}"),
        }
    }
}
