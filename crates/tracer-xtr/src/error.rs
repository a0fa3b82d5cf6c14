//! Format errors raised while reading an XTR trace.

use crate::dbm::DbmError;
use thiserror::Error;

/// An XTR trace error. Line numbers are 1-indexed.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("line {line}: expecting a dot ('.') but got '{found}'")]
    ExpectedDot { found: String, line: usize },

    #[error("line {line}: expecting a dot ('.') but got EOF")]
    DotAtEof { line: usize },

    #[error("line {line}: expected an integer in {context}")]
    ExpectedInteger { context: &'static str, line: usize },

    #[error("line {line}: invalid select value in transition")]
    SelectValue { line: usize },

    #[error("line {line}: negative {what} index {index}")]
    NegativeIndex {
        what: &'static str,
        index: i32,
        line: usize,
    },

    #[error("line {line}: {what} index {index} out of range (have {len})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
        line: usize,
    },

    #[error("line {line}: legacy edge index 0 of process {process} has no 0-based equivalent")]
    LegacyEdgeZero { process: usize, line: usize },

    #[error("line {line}: transition fires no edges")]
    EmptyTransition { line: usize },

    #[error("line {line}: {source}")]
    Dbm { source: DbmError, line: usize },

    #[error("line {line}: trace ends without a terminating dot")]
    Unterminated { line: usize },

    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),
}

impl TraceError {
    /// Line at which the error occurred, if it is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            TraceError::ExpectedDot { line, .. }
            | TraceError::DotAtEof { line }
            | TraceError::ExpectedInteger { line, .. }
            | TraceError::SelectValue { line }
            | TraceError::NegativeIndex { line, .. }
            | TraceError::OutOfRange { line, .. }
            | TraceError::LegacyEdgeZero { line, .. }
            | TraceError::EmptyTransition { line }
            | TraceError::Dbm { line, .. }
            | TraceError::Unterminated { line } => Some(*line),
            TraceError::Io(_) => None,
        }
    }
}

/// Result type for trace reading.
pub type TraceResult<T> = Result<T, TraceError>;
