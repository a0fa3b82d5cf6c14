//! Whole traces.

use crate::error::{TraceError, TraceResult};
use crate::reader::XtrReader;
use crate::state::State;
use crate::transition::Transition;
use std::io::Read;
use tracer_model::Model;
use tracing::debug;

/// A transition and the state recorded with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub transition: Transition,
    pub state: State,
}

/// An initial state followed by steps, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub initial: State,
    pub steps: Vec<Step>,
}

impl Trace {
    /// Parse XTR text against `model`.
    pub fn parse(model: &Model, source: &str) -> TraceResult<Self> {
        Self::read(model, &mut XtrReader::new(source))
    }

    /// Read a whole stream and parse it.
    pub fn from_reader<R: Read>(model: &Model, mut reader: R) -> TraceResult<Self> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::parse(model, &source)
    }

    /// Read the initial state, then state/transition pairs until a lone `.`.
    /// Within a step the state comes before the transition in the file.
    pub fn read(model: &Model, r: &mut XtrReader<'_>) -> TraceResult<Self> {
        let initial = State::read(model, r)?;
        let mut steps = Vec::new();
        loop {
            r.skip_spaces();
            match r.peek() {
                Some(b'.') => {
                    r.bump();
                    break;
                }
                None => return Err(TraceError::Unterminated { line: r.line() }),
                Some(_) => {}
            }

            let state = State::read(model, r)?;
            let transition = Transition::read(model, r)?;
            debug!(
                step = steps.len() + 1,
                edges = transition.edges.len(),
                line = r.line(),
                "read step"
            );
            steps.push(Step { transition, state });
        }
        debug!(steps = steps.len(), "trace read");
        Ok(Self { initial, steps })
    }

    /// All states in order, the initial one first.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        std::iter::once(&self.initial).chain(self.steps.iter().map(|s| &s.state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::Bound;
    use crate::fixtures;
    use tracer_model::{ClockId, LocalEdge, LocalLocation, ProcessId};

    #[test]
    fn test_read_trace() {
        let model = fixtures::model();
        let trace = Trace::parse(&model, fixtures::TRACE).unwrap();

        assert_eq!(trace.initial.locations, [LocalLocation(0), LocalLocation(0)]);
        assert_eq!(
            trace.initial.dbm.get(ClockId(1), ClockId(0)),
            Some(Bound::new(5, false))
        );
        assert_eq!(trace.steps.len(), 1);

        let step = &trace.steps[0];
        assert_eq!(step.state.locations, [LocalLocation(1), LocalLocation(1)]);
        assert_eq!(step.state.integers, [1]);
        let fired: Vec<_> = step
            .transition
            .edges
            .iter()
            .map(|e| (e.process, e.edge))
            .collect();
        assert_eq!(
            fired,
            [(ProcessId(0), LocalEdge(0)), (ProcessId(1), LocalEdge(0))]
        );
        assert_eq!(trace.states().count(), 2);
    }

    #[test]
    fn test_initial_state_only() {
        let model = fixtures::model();
        let trace = Trace::parse(&model, "0 1\n.\n.\n4\n.\n.\n").unwrap();
        assert!(trace.steps.is_empty());
        assert_eq!(trace.initial.integers, [4]);
    }

    #[test]
    fn test_unterminated_trace() {
        let model = fixtures::model();
        let source = fixtures::TRACE.trim_end().trim_end_matches('.');
        assert!(matches!(
            Trace::parse(&model, source),
            Err(TraceError::Unterminated { .. })
        ));
    }

    #[test]
    fn test_from_reader() {
        let model = fixtures::model();
        let trace = Trace::from_reader(&model, fixtures::TRACE.as_bytes()).unwrap();
        assert_eq!(trace, Trace::parse(&model, fixtures::TRACE).unwrap());
    }
}
