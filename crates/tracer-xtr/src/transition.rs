//! Transitions: the edges fired in one step.

use crate::error::{TraceError, TraceResult};
use crate::reader::{in_range, non_negative, XtrReader};
use tracer_model::{LocalEdge, Model, ProcessId};
use tracing::trace;

/// One fired edge, by process-local index, with its select bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeUse {
    pub process: ProcessId,
    pub edge: LocalEdge,
    pub select: Vec<i32>,
}

/// Edges fired together. More than one edge means a synchronisation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transition {
    pub edges: Vec<EdgeUse>,
}

impl Transition {
    pub fn is_synchronisation(&self) -> bool {
        self.edges.len() > 1
    }

    /// Read `process edge [select...]` entries until a dot line.
    ///
    /// An entry ended by `;` carries a 0-based edge index. An entry ended by
    /// a bare newline comes from the older format, which counts edges from 1.
    pub fn read(model: &Model, r: &mut XtrReader<'_>) -> TraceResult<Self> {
        let mut edges = Vec::new();
        while let Some(process) = r.read_int() {
            let line = r.line();
            let edge = r.read_int().ok_or(TraceError::ExpectedInteger {
                context: "transition",
                line,
            })?;

            let mut select = Vec::new();
            r.skip_spaces();
            while !r.at_line_end() && r.peek() != Some(b';') {
                let value = r.read_int().ok_or(TraceError::SelectValue { line })?;
                select.push(value);
                r.skip_spaces();
            }
            if r.peek() == Some(b'\r') {
                r.bump();
            }
            let legacy = r.bump() == Some(b'\n');

            let process = non_negative("process", process, line)?;
            let process = in_range("process", process, model.process_count(), line)?;
            let mut edge = non_negative("edge", edge, line)?;
            if legacy {
                trace!(process, edge, line, "1-based edge index");
                edge = edge
                    .checked_sub(1)
                    .ok_or(TraceError::LegacyEdgeZero { process, line })?;
            }
            let edge = in_range(
                "edge",
                edge,
                model.processes()[process].edges().len(),
                line,
            )?;

            edges.push(EdgeUse {
                process: ProcessId(process),
                edge: LocalEdge(edge),
                select,
            });
        }

        if edges.is_empty() {
            return Err(TraceError::EmptyTransition { line: r.line() });
        }
        r.expect_dot()?;
        Ok(Self { edges })
    }
}
