//! Symbolic states.

use crate::bound::Bound;
use crate::dbm::{Dbm, DbmError};
use crate::error::{TraceError, TraceResult};
use crate::reader::{in_range, non_negative, XtrReader};
use tracer_model::{ClockId, LocalLocation, Model};

/// One symbolic state: a location per process, a value per integer and a
/// zone over the clocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Indexed by process.
    pub locations: Vec<LocalLocation>,
    /// Indexed by integer id.
    pub integers: Vec<i32>,
    pub dbm: Dbm,
}

impl State {
    /// Read a state: the location vector, the bound list and the integer
    /// vector, each closed by a dot line.
    pub fn read(model: &Model, r: &mut XtrReader<'_>) -> TraceResult<Self> {
        let mut locations = Vec::with_capacity(model.process_count());
        for process in model.processes() {
            let index = r
                .read_int()
                .ok_or_else(|| expected_integer("location vector", r))?;
            let line = r.line();
            let index = non_negative("location", index, line)?;
            let index = in_range("location", index, process.locations().len(), line)?;
            locations.push(LocalLocation(index));
        }
        r.expect_dot()?;

        let dbm = read_dbm(model.clock_count(), r)?;

        let mut integers = Vec::with_capacity(model.integer_count());
        for _ in 0..model.integer_count() {
            let value = r
                .read_int()
                .ok_or_else(|| expected_integer("integer vector", r))?;
            integers.push(value);
        }
        r.expect_dot()?;

        Ok(Self {
            locations,
            integers,
            dbm,
        })
    }
}

fn expected_integer(context: &'static str, r: &XtrReader<'_>) -> TraceError {
    TraceError::ExpectedInteger {
        context,
        line: r.line(),
    }
}

/// `i j bound` triples, each closed by a dot line, until a read fails; then
/// the dot line closing the list.
fn read_dbm(dim: usize, r: &mut XtrReader<'_>) -> TraceResult<Dbm> {
    let mut dbm = Dbm::new(dim);
    while let Some(i) = r.read_int() {
        let line = r.line();
        let j = r.read_int().ok_or_else(|| expected_integer("bound", r))?;
        let raw = r.read_int().ok_or_else(|| expected_integer("bound", r))?;
        r.expect_dot()?;

        let bound = Bound::decode(raw);
        let stored = match (usize::try_from(i), usize::try_from(j)) {
            (Ok(i), Ok(j)) => dbm.set(ClockId(i), ClockId(j), bound),
            _ => Err(DbmError::OutOfRange {
                i: i.into(),
                j: j.into(),
                dim,
            }),
        };
        stored.map_err(|source| TraceError::Dbm { source, line })?;
    }
    r.expect_dot()?;
    Ok(dbm)
}
