//! Symbolic traces in the XTR format.
//!
//! A trace is an initial [`State`] followed by steps, each a [`Transition`]
//! and the state it leads to. States are sized from a [`tracer_model::Model`]
//! and use the model's clock and integer tables; transitions name edges by
//! process-local index.

pub mod bound;
pub mod dbm;
pub mod error;
pub mod reader;
pub mod state;
pub mod trace;
pub mod transition;

#[cfg(test)]
mod fixtures;

pub use bound::Bound;
pub use dbm::{Dbm, DbmError};
pub use error::{TraceError, TraceResult};
pub use reader::XtrReader;
pub use state::State;
pub use trace::{Step, Trace};
pub use transition::{EdgeUse, Transition};
