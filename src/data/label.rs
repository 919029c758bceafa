use std::sync::LazyLock;

use regex::Regex;

use super::error::LabelParseError;
use super::model::FilterKey;

/// Greedy prefix, so the last `_B` / `_V` in the label wins.
static FILTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*_([BV]).*").expect("filter pattern is valid"));

/// Outcome of looking for a filter letter in an image label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    Matched(FilterKey),
    Unmatched,
}

/// Find the filter letter in an image label such as `M52_Filter_B_003.fits`.
///
/// Only a capital `B` or `V` directly after an underscore counts. When several
/// appear, the last one is taken, so a label like `run_B/img_V.fits` reads as V.
pub fn extract_filter(label: &str) -> LabelMatch {
    FILTER_PATTERN
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
        .and_then(FilterKey::from_char)
        .map_or(LabelMatch::Unmatched, LabelMatch::Matched)
}

/// [`extract_filter`] for row `row`, with a miss turned into an error.
pub fn parse_filter(row: usize, label: &str) -> Result<FilterKey, LabelParseError> {
    match extract_filter(label) {
        LabelMatch::Matched(key) => Ok(key),
        LabelMatch::Unmatched => Err(LabelParseError {
            row,
            label: label.to_string(),
        }),
    }
}
