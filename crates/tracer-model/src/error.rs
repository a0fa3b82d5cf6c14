//! Format errors raised while reading the intermediate format.

use crate::parser::Section;
use thiserror::Error;

/// An intermediate-format error. Line numbers are 1-indexed.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("line {line}: unknown section '{name}'")]
    UnknownSection { name: String, line: usize },

    #[error("line {line}: section '{section}' appears more than once")]
    DuplicateSection { section: Section, line: usize },

    #[error("line {line}: unrecognized layout entry: {text}")]
    UnknownCell { text: String, line: usize },

    #[error("line {line}: malformed entry in {section} section: {text}")]
    Malformed {
        section: Section,
        text: String,
        line: usize,
    },

    #[error("line {line}: {section} index {found} out of order, expected {expected}")]
    IndexOutOfOrder {
        section: Section,
        expected: usize,
        found: i64,
        line: usize,
    },

    #[error("line {line}: {what} index {index} out of range (have {len})")]
    OutOfRange {
        what: &'static str,
        index: i64,
        len: usize,
        line: usize,
    },

    #[error("line {line}: layout cell {index} is not a location")]
    NotALocation { index: usize, line: usize },

    #[error("line {line}: missing colon in expression section: {text}")]
    MissingColon { text: String, line: usize },

    #[error("failed to read model: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    /// Line at which the error occurred, if it is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ModelError::UnknownSection { line, .. }
            | ModelError::DuplicateSection { line, .. }
            | ModelError::UnknownCell { line, .. }
            | ModelError::Malformed { line, .. }
            | ModelError::IndexOutOfOrder { line, .. }
            | ModelError::OutOfRange { line, .. }
            | ModelError::NotALocation { line, .. }
            | ModelError::MissingColon { line, .. } => Some(*line),
            ModelError::Io(_) => None,
        }
    }
}

/// Result type for model parsing.
pub type ModelResult<T> = Result<T, ModelError>;
