use std::path::Path;

pub mod profile;
pub mod reader;
pub mod records;
pub mod subjects;

pub use profile::{load_profile, parse_profile};
pub use records::{AssessmentRecord, load_records, parse_records};
pub use subjects::{SubjectIndex, load_subjects, parse_subjects};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub(crate) fn require_file(path: &Path) -> Result<(), InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(InputError::InvalidInput(format!(
            "{} is not a regular file",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
