//! Layout cells: the declared entities of a model.

use crate::index::{ClockId, ExprIndex, IntegerId, ProcessId};
use std::fmt;

/// Urgency flag of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationFlag {
    #[default]
    None,
    Committed,
    Urgent,
}

impl fmt::Display for LocationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationFlag::None => write!(f, "none"),
            LocationFlag::Committed => write!(f, "committed"),
            LocationFlag::Urgent => write!(f, "urgent"),
        }
    }
}

/// A location cell. Owner and invariant are unknown until the `locations`
/// section attaches them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub flag: LocationFlag,
    pub process: Option<ProcessId>,
    pub invariant: Option<ExprIndex>,
}

/// An inclusive value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub min: i32,
    pub max: i32,
}

/// Declaration of an integer or meta variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerDecl {
    pub range: Range,
    pub init: i32,
    /// Position in the model's integer table.
    pub id: IntegerId,
}

/// Kind-specific payload of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    Const { value: i32 },
    Clock { id: ClockId },
    Integer(IntegerDecl),
    Meta(IntegerDecl),
    SysMeta(Range),
    Location(Location),
    Fixed(Range),
    Cost,
}

impl CellKind {
    /// Keyword used for this kind in the layout section.
    pub fn keyword(&self) -> &'static str {
        match self {
            CellKind::Const { .. } => "const",
            CellKind::Clock { .. } => "clock",
            CellKind::Integer(_) => "var",
            CellKind::Meta(_) => "meta",
            CellKind::SysMeta(_) => "sys_meta",
            CellKind::Location(_) => "location",
            CellKind::Fixed(_) => "static",
            CellKind::Cost => "cost",
        }
    }
}

/// One entry of the layout. The kind is fixed at construction; only the
/// owner and invariant of a location may be filled in afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    name: Option<String>,
    kind: CellKind,
}

impl Cell {
    pub fn new(name: Option<String>, kind: CellKind) -> Self {
        Self { name, kind }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> &CellKind {
        &self.kind
    }

    pub fn as_location(&self) -> Option<&Location> {
        match &self.kind {
            CellKind::Location(loc) => Some(loc),
            _ => None,
        }
    }

    pub(crate) fn as_location_mut(&mut self) -> Option<&mut Location> {
        match &mut self.kind {
            CellKind::Location(loc) => Some(loc),
            _ => None,
        }
    }
}
