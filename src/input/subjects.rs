use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::input::InputError;
use crate::input::reader::read_to_string_maybe_gz;
use crate::input::records::document_items;
use crate::model::raw::Subject;

/// Students keyed by their id, as rendered by `RawValue::as_text`.
pub type SubjectIndex = HashMap<String, Subject>;

pub fn load_subjects(path: &Path) -> Result<SubjectIndex, InputError> {
    let text = read_to_string_maybe_gz(path)?;
    let index = parse_subjects(&text, &path.display().to_string())?;
    debug!(path = %path.display(), n_subjects = index.len(), "loaded subjects");
    Ok(index)
}

pub fn parse_subjects(text: &str, source: &str) -> Result<SubjectIndex, InputError> {
    let trimmed = text.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Err(InputError::Parse(format!("{source} is empty")));
    }

    let values: Vec<Value> = match document_items(trimmed) {
        Some(items) => items,
        None => {
            let mut items = Vec::new();
            for (idx, line) in trimmed.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match serde_json::from_str::<Value>(line) {
                    Ok(v) => items.push(v),
                    Err(e) => warn!("malformed JSON in {source}; skipping (line {}): {e}", idx + 1),
                }
            }
            items
        }
    };

    let mut index = SubjectIndex::new();
    for (pos, value) in values.into_iter().enumerate() {
        let subject = match serde_json::from_value::<Subject>(value) {
            Ok(s) => s,
            Err(e) => {
                warn!("unreadable subject in {source}; skipping (entry {}): {e}", pos + 1);
                continue;
            }
        };
        let Some(key) = subject.key() else {
            warn!("subject without id in {source}; skipping (entry {})", pos + 1);
            continue;
        };
        if index.contains_key(&key) {
            warn!("duplicate subject id in {source}; keeping first (id {key})");
            continue;
        }
        index.insert(key, subject);
    }
    Ok(index)
}
