use thiserror::Error;
use tracer_model::{EdgeId, ExprIndex, LayoutIndex, LocalEdge, LocalLocation, ProcessId};

/// A model/trace inconsistency found while rendering.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("state has {found} {what} entries but the model has {expected}")]
    Shape {
        what: &'static str,
        found: usize,
        expected: usize,
    },

    #[error("process {0} is not in the model")]
    Process(ProcessId),

    #[error("process {process} has no location {index}")]
    Location {
        process: String,
        index: LocalLocation,
    },

    #[error("process {process} has no edge {index}")]
    Edge { process: String, index: LocalEdge },

    #[error("edge {0} is not in the edge table")]
    GlobalEdge(EdgeId),

    #[error("layout cell {0} is missing or has no name")]
    Cell(LayoutIndex),

    #[error("expression {0} is not in the expression table")]
    MissingExpression(ExprIndex),
}

pub type ReportResult<T> = Result<T, ReportError>;
