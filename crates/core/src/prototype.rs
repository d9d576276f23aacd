//! Prototype gallery input coercion.
//!
//! A prototype entry carries two ordered label lists (tech stack and
//! features). Submissions are lenient about their shape: anything that is
//! not a JSON array of strings collapses to an empty list rather than
//! failing the request.

use serde_json::Value;

/// Coerce a submitted JSON value into an ordered list of labels.
///
/// Arrays keep their string elements in order; non-string elements are
/// skipped. Absent or non-array values yield an empty list.
pub fn string_labels(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
