use crate::error::{ReportError, ReportResult};
use std::fmt::Write;
use tracer_model::{ExprIndex, LayoutIndex, Model, Process};
use tracer_xtr::{EdgeUse, State, Trace, Transition};

/// Render a whole trace: the initial state, then each step's transition and
/// state.
pub fn render_trace(model: &Model, trace: &Trace) -> ReportResult<String> {
    let mut reporter = Reporter::new(model);
    reporter.trace(trace)?;
    Ok(reporter.finish())
}

/// Render one state on a single line, without prefix.
pub fn render_state(model: &Model, state: &State) -> ReportResult<String> {
    Reporter::new(model).state_line(state)
}

/// Render one transition on a single line, without prefix.
pub fn render_transition(model: &Model, transition: &Transition) -> ReportResult<String> {
    Reporter::new(model).transition_line(transition)
}

/// Accumulates rendered text. Never modifies the model or the trace.
pub struct Reporter<'m> {
    model: &'m Model,
    output: String,
}

impl<'m> Reporter<'m> {
    pub fn new(model: &'m Model) -> Self {
        Self {
            model,
            output: String::new(),
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn trace(&mut self, trace: &Trace) -> ReportResult<()> {
        self.state(&trace.initial)?;
        for step in &trace.steps {
            self.output.push('\n');
            self.transition(&step.transition)?;
            self.output.push('\n');
            self.state(&step.state)?;
        }
        Ok(())
    }

    pub fn state(&mut self, state: &State) -> ReportResult<()> {
        let line = self.state_line(state)?;
        let _ = writeln!(self.output, "State: {line}");
        Ok(())
    }

    pub fn transition(&mut self, transition: &Transition) -> ReportResult<()> {
        let line = self.transition_line(transition)?;
        let _ = writeln!(self.output, "Transition: {line}");
        Ok(())
    }

    /// `P.loc ... name=value ... x-y<=c ...`
    fn state_line(&self, state: &State) -> ReportResult<String> {
        let model = self.model;
        check_shape("location", state.locations.len(), model.process_count())?;
        check_shape("integer", state.integers.len(), model.integer_count())?;
        check_shape("clock", state.dbm.dim(), model.clock_count())?;

        let mut parts = Vec::new();
        for (process, local) in model.processes().iter().zip(&state.locations) {
            let index = process
                .location(*local)
                .ok_or_else(|| ReportError::Location {
                    process: process.name.clone(),
                    index: *local,
                })?;
            parts.push(format!("{}.{}", process.name, self.cell_name(index)?));
        }

        for (name, value) in model.integers().iter().zip(&state.integers) {
            parts.push(format!("{name}={value}"));
        }

        let clocks = model.clocks();
        for (i, j, bound) in state.dbm.constraints() {
            parts.push(format!("{}-{}{}", clocks[i.get()], clocks[j.get()], bound));
        }

        Ok(parts.join(" "))
    }

    fn transition_line(&self, transition: &Transition) -> ReportResult<String> {
        let edges = transition
            .edges
            .iter()
            .map(|edge| self.edge_use(edge))
            .collect::<ReportResult<Vec<_>>>()?;
        Ok(edges.join(" "))
    }

    /// `P.src -> P.dst [selects] {guard; sync; update;}`
    fn edge_use(&self, used: &EdgeUse) -> ReportResult<String> {
        let model = self.model;
        let process: &Process = model
            .process(used.process)
            .ok_or(ReportError::Process(used.process))?;
        let id = process.edge(used.edge).ok_or_else(|| ReportError::Edge {
            process: process.name.clone(),
            index: used.edge,
        })?;
        let edge = model.edge(id).ok_or(ReportError::GlobalEdge(id))?;

        let mut out = format!(
            "{p}.{} -> {p}.{}",
            self.cell_name(edge.source)?,
            self.cell_name(edge.target)?,
            p = process.name
        );
        if !used.select.is_empty() {
            let values: Vec<String> = used.select.iter().map(i32::to_string).collect();
            let _ = write!(out, " [{}]", values.join(","));
        }
        let _ = write!(
            out,
            " {{{}; {}; {};}}",
            self.expression(edge.guard)?,
            self.expression(edge.sync)?,
            self.expression(edge.update)?
        );
        Ok(out)
    }

    fn cell_name(&self, index: LayoutIndex) -> ReportResult<&'m str> {
        self.model
            .cell_name(index)
            .ok_or(ReportError::Cell(index))
    }

    fn expression(&self, index: ExprIndex) -> ReportResult<&'m str> {
        self.model
            .expression(index)
            .ok_or(ReportError::MissingExpression(index))
    }
}

fn check_shape(what: &'static str, found: usize, expected: usize) -> ReportResult<()> {
    if found == expected {
        Ok(())
    } else {
        Err(ReportError::Shape {
            what,
            found,
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracer_model::{parse, ClockId, LocalEdge, LocalLocation, ParseConfig, ProcessId};
    use tracer_xtr::{Bound, Dbm, Step};

    const MODEL: &str = "\
layout
0:clock:0:t(0)
1:clock:1:x
2:var:0:5:0:0:n
3:location::idle
4:location::busy
5:location::off
6:location::on

processes
0:3:A
1:5:B

locations
3:0:0
4:0:0
5:1:0
6:1:0

edges
0:3:4:1:2:3
0:4:3:0:0:0
1:5:6:0:4:9

expressions
0:0:0:1
1:0:0:x >= 2
2:0:0:go!
3:0:0:n = n + 1
4:0:0:go?
";

    fn model() -> Model {
        parse(MODEL, &ParseConfig { priced: false }).unwrap()
    }

    fn state(locations: [usize; 2], n: i32) -> State {
        State {
            locations: locations.into_iter().map(LocalLocation).collect(),
            integers: vec![n],
            dbm: Dbm::new(2),
        }
    }

    fn fire(process: usize, edge: usize, select: Vec<i32>) -> EdgeUse {
        EdgeUse {
            process: ProcessId(process),
            edge: LocalEdge(edge),
            select,
        }
    }

    #[test]
    fn test_render_state() {
        let model = model();
        let mut s = state([1, 0], 3);
        s.dbm
            .set(ClockId(1), ClockId(0), Bound::new(5, true))
            .unwrap();
        assert_eq!(
            render_state(&model, &s).unwrap(),
            "A.busy B.off n=3 t(0)-x<=0 x-t(0)<5"
        );
    }

    #[test]
    fn test_render_transition() {
        let model = model();
        let t = Transition {
            edges: vec![fire(0, 0, vec![])],
        };
        assert_eq!(
            render_transition(&model, &t).unwrap(),
            "A.idle -> A.busy {x >= 2; go!; n = n + 1;}"
        );

        let t = Transition {
            edges: vec![fire(0, 1, vec![2, -1])],
        };
        assert_eq!(
            render_transition(&model, &t).unwrap(),
            "A.busy -> A.idle [2,-1] {1; 1; 1;}"
        );
    }

    #[test]
    fn test_missing_expression_is_fatal_at_print_time() {
        // B's only edge has update expression 9, which is never declared.
        let model = model();
        let t = Transition {
            edges: vec![fire(1, 0, vec![])],
        };
        match render_transition(&model, &t) {
            Err(ReportError::MissingExpression(index)) => assert_eq!(index, ExprIndex(9)),
            other => panic!("expected missing expression, got {other:?}"),
        }
    }

    #[test]
    fn test_render_trace_order() {
        let model = model();
        let trace = Trace {
            initial: state([0, 0], 0),
            steps: vec![Step {
                transition: Transition {
                    edges: vec![fire(0, 0, vec![])],
                },
                state: state([1, 0], 1),
            }],
        };
        let text = render_trace(&model, &trace).unwrap();
        assert_eq!(
            text,
            "State: A.idle B.off n=0 t(0)-x<=0\n\
             \n\
             Transition: A.idle -> A.busy {x >= 2; go!; n = n + 1;}\n\
             \n\
             State: A.busy B.off n=1 t(0)-x<=0\n"
        );
    }

    #[test]
    fn test_out_of_range_indices() {
        let model = model();
        assert!(matches!(
            render_state(&model, &state([2, 0], 0)),
            Err(ReportError::Location { index: LocalLocation(2), .. })
        ));

        let mut short = state([0, 0], 0);
        short.integers.clear();
        assert!(matches!(
            render_state(&model, &short),
            Err(ReportError::Shape { what: "integer", found: 0, expected: 1 })
        ));

        let t = Transition {
            edges: vec![fire(1, 1, vec![])],
        };
        assert!(matches!(
            render_transition(&model, &t),
            Err(ReportError::Edge { index: LocalEdge(1), .. })
        ));

        let t = Transition {
            edges: vec![fire(5, 0, vec![])],
        };
        assert!(matches!(
            render_transition(&model, &t),
            Err(ReportError::Process(ProcessId(5)))
        ));
    }
}
