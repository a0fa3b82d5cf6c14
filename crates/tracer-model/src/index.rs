//! Index newtypes.
//!
//! Global indices address the flat tables of a [`Model`](crate::Model);
//! local indices address the per-process location and edge lists. Only
//! [`Process::location`](crate::Process::location) and
//! [`Process::edge`](crate::Process::edge) convert local to global.

use std::fmt;

macro_rules! index_type {
    ($(#[$meta:meta])* $name:ident($repr:ty)) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $repr);

        impl $name {
            #[inline]
            pub fn get(self) -> $repr {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

index_type!(
    /// Position in the global layout.
    LayoutIndex(usize)
);
index_type!(
    /// Position in the process table.
    ProcessId(usize)
);
index_type!(
    /// Position in the global edge table.
    EdgeId(usize)
);
index_type!(
    /// Position within one process's location list.
    LocalLocation(usize)
);
index_type!(
    /// Position within one process's edge list.
    LocalEdge(usize)
);
index_type!(
    /// Key into the expression table. Not necessarily dense.
    ExprIndex(i32)
);
index_type!(
    /// Position in the clock name table; row/column of a DBM.
    ClockId(usize)
);
index_type!(
    /// Position in the integer name table; slot of a state's integer vector.
    IntegerId(usize)
);
