//! Field extraction helpers for loosely structured JSON payloads
//!
//! Provider JSON drifts between seasons, so fields are looked up by a list
//! of candidate names and numbers are accepted either as numbers or as
//! numeric strings.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static RECORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+-\d+$").unwrap());

/// First field among `keys` that reads as a positive rank
pub fn rank_field(object: &Value, keys: &[&str]) -> Option<u32> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(as_rank)
}

/// First field among `keys` that reads as non-empty text
pub fn text_field(object: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(as_text)
}

/// Reads a positive integer rank from a number or a numeric string
pub fn as_rank(value: &Value) -> Option<u32> {
    let rank = match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0 && *f > 0.0).map(|f| f as u64)),
        Value::String(text) => parse_leading_int(text).map(u64::from),
        _ => None,
    }?;
    u32::try_from(rank).ok().filter(|r| *r > 0)
}

/// Reads trimmed, non-empty text from a string or a number
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Parses the leading digits of `text` ("12", " 7 ", "3.", "25T")
pub fn parse_leading_int(text: &str) -> Option<u32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Whether `text` looks like a win-loss record such as `12-3`
pub fn looks_like_record(text: &str) -> bool {
    RECORD_PATTERN.is_match(text.trim())
}

/// Positional fallback for array-shaped rows: the first string cell longer
/// than two characters that is neither numeric nor a win-loss record.
pub fn heuristic_team_name(cells: &[Value]) -> Option<String> {
    cells.iter().find_map(|cell| {
        let text = cell.as_str()?.trim();
        let numeric = text.parse::<f64>().is_ok();
        (text.chars().count() > 2 && !numeric && !looks_like_record(text))
            .then(|| text.to_string())
    })
}

/// Collapses runs of whitespace into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
