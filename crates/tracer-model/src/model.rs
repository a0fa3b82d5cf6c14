//! The topology model: layout, processes, edges and expressions.

use crate::cell::Cell;
use crate::error::ModelResult;
use crate::index::{EdgeId, ExprIndex, LayoutIndex, LocalEdge, LocalLocation, ProcessId};
use crate::parser::{parse, ParseConfig};
use std::collections::BTreeMap;
use std::io::Read;

/// A process of the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub name: String,
    /// Initial location as declared in the `processes` section.
    pub initial: LayoutIndex,
    locations: Vec<LayoutIndex>,
    edges: Vec<EdgeId>,
}

impl Process {
    pub fn new(name: String, initial: LayoutIndex) -> Self {
        Self {
            name,
            initial,
            locations: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Layout index of a local location.
    pub fn location(&self, local: LocalLocation) -> Option<LayoutIndex> {
        self.locations.get(local.0).copied()
    }

    /// Global edge of a local edge.
    pub fn edge(&self, local: LocalEdge) -> Option<EdgeId> {
        self.edges.get(local.0).copied()
    }

    /// Locations in local order.
    pub fn locations(&self) -> &[LayoutIndex] {
        &self.locations
    }

    /// Edges in local order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn push_location(&mut self, index: LayoutIndex) -> LocalLocation {
        self.locations.push(index);
        LocalLocation(self.locations.len() - 1)
    }

    pub(crate) fn push_edge(&mut self, edge: EdgeId) -> LocalEdge {
        self.edges.push(edge);
        LocalEdge(self.edges.len() - 1)
    }
}

/// A syntactic edge. Locations are global layout indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub process: ProcessId,
    pub source: LayoutIndex,
    pub target: LayoutIndex,
    pub guard: ExprIndex,
    pub sync: ExprIndex,
    pub update: ExprIndex,
}

/// A model as described by the intermediate format.
///
/// Built once by the [`Parser`](crate::Parser) and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    pub(crate) layout: Vec<Cell>,
    pub(crate) instructions: Vec<i32>,
    pub(crate) processes: Vec<Process>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) expressions: BTreeMap<ExprIndex, String>,
    pub(crate) integers: Vec<String>,
    pub(crate) clocks: Vec<String>,
}

impl Model {
    /// Parse a model from intermediate-format text.
    pub fn parse(source: &str, config: &ParseConfig) -> ModelResult<Self> {
        parse(source, config)
    }

    /// Read a whole stream and parse it.
    pub fn from_reader<R: Read>(mut reader: R, config: &ParseConfig) -> ModelResult<Self> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        parse(&source, config)
    }

    pub fn layout(&self) -> &[Cell] {
        &self.layout
    }

    pub fn cell(&self, index: LayoutIndex) -> Option<&Cell> {
        self.layout.get(index.0)
    }

    /// Name of a layout cell; `None` if out of range or anonymous.
    pub fn cell_name(&self, index: LayoutIndex) -> Option<&str> {
        self.cell(index).and_then(Cell::name)
    }

    pub fn instructions(&self) -> &[i32] {
        &self.instructions
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.get(id.0)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Source text of an expression.
    pub fn expression(&self, index: ExprIndex) -> Option<&str> {
        self.expressions.get(&index).map(String::as_str)
    }

    pub fn expressions(&self) -> impl Iterator<Item = (ExprIndex, &str)> {
        self.expressions.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Clock names; position is the DBM row/column. Entry 0 is the reference clock.
    pub fn clocks(&self) -> &[String] {
        &self.clocks
    }

    /// Integer and meta variable names; position is the slot in a state.
    pub fn integers(&self) -> &[String] {
        &self.integers
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    pub fn clock_count(&self) -> usize {
        self.clocks.len()
    }

    pub fn integer_count(&self) -> usize {
        self.integers.len()
    }
}
