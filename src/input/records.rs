use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::input::InputError;
use crate::input::reader::read_to_string_maybe_gz;
use crate::model::raw::RawAssessmentInput;

#[derive(Debug, Clone)]
pub struct AssessmentRecord {
    /// Position among the accepted records.
    pub index: usize,
    /// 1-based line for JSON Lines input.
    pub line: Option<usize>,
    pub input: RawAssessmentInput,
}

pub fn load_records(path: &Path) -> Result<Vec<AssessmentRecord>, InputError> {
    let text = read_to_string_maybe_gz(path)?;
    let records = parse_records(&text, &path.display().to_string())?;
    debug!(path = %path.display(), n_records = records.len(), "loaded assessment records");
    Ok(records)
}

/// Accepts a JSON array, a `{"success": .., "data": [..]}` envelope, a single
/// object, or JSON Lines. Entries that are not objects are skipped.
pub fn parse_records(text: &str, source: &str) -> Result<Vec<AssessmentRecord>, InputError> {
    let trimmed = text.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Err(InputError::Parse(format!("{source} is empty")));
    }

    let mut out = Vec::new();
    match document_items(trimmed) {
        Some(items) => {
            for (pos, item) in items.into_iter().enumerate() {
                push_record(&mut out, item, None, || format!("{source} entry {}", pos + 1));
            }
        }
        None => {
            for (idx, line) in trimmed.lines().enumerate() {
                let line_no = idx + 1;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match serde_json::from_str::<Value>(line) {
                    Ok(value) => push_record(&mut out, value, Some(line_no), || {
                        format!("{source} line {line_no}")
                    }),
                    Err(e) => warn!("malformed JSON in {source}; skipping (line {line_no}): {e}"),
                }
            }
        }
    }

    if out.is_empty() {
        return Err(InputError::Parse(format!(
            "no assessment records found in {source}"
        )));
    }
    Ok(out)
}

/// Items of a single JSON document, or `None` when the text is not one
/// (JSON Lines).
pub(crate) fn document_items(trimmed: &str) -> Option<Vec<Value>> {
    let value = serde_json::from_str::<Value>(trimmed).ok()?;
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Some(items),
            Some(other) if other.is_object() => Some(vec![other]),
            Some(other) => {
                map.insert("data".to_string(), other);
                Some(vec![Value::Object(map)])
            }
            None => Some(vec![Value::Object(map)]),
        },
        other => Some(vec![other]),
    }
}

fn push_record(
    out: &mut Vec<AssessmentRecord>,
    value: Value,
    line: Option<usize>,
    location: impl FnOnce() -> String,
) {
    if !value.is_object() {
        warn!("assessment is not a JSON object; skipping ({})", location());
        return;
    }
    match serde_json::from_value::<RawAssessmentInput>(value) {
        Ok(input) => out.push(AssessmentRecord {
            index: out.len(),
            line,
            input,
        }),
        Err(e) => warn!("unreadable assessment; skipping ({}): {e}", location()),
    }
}
