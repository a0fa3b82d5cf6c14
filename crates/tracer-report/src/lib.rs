//! Human readable rendering of XTR traces.
//!
//! Every process-local index in a trace is translated back through the
//! model to a name: locations via the process's location list, edges via its
//! edge list and the global edge table, labels via the expression table.

mod error;
mod reporter;

pub use error::{ReportError, ReportResult};
pub use reporter::{render_state, render_trace, render_transition, Reporter};
