//! Cell and topology model of a compiled timed-automata network, together
//! with the parser for its textual intermediate format.
//!
//! The intermediate format numbers everything globally: clocks, integers and
//! locations share one layout, and edges live in one flat table. Traces on the
//! other hand use process-local numbering. The index newtypes in [`index`]
//! keep the two schemes apart.

pub mod cell;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
mod scan;

pub use cell::{Cell, CellKind, IntegerDecl, Location, LocationFlag, Range};
pub use error::{ModelError, ModelResult};
pub use index::{
    ClockId, EdgeId, ExprIndex, IntegerId, LayoutIndex, LocalEdge, LocalLocation, ProcessId,
};
pub use model::{Edge, Model, Process};
pub use parser::{parse, ParseConfig, Parser, Section};
