//! Clock difference bounds.

use std::fmt;

/// Upper bound `(value, strict)` on a clock difference.
///
/// On the wire a bound is the integer `value * 2 + strict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bound {
    pub value: i32,
    pub strict: bool,
}

impl Bound {
    /// `<= 0`.
    pub const ZERO: Bound = Bound {
        value: 0,
        strict: false,
    };

    /// `< inf`. The value is the largest 31-bit signed integer.
    pub const INFINITY: Bound = Bound {
        value: i32::MAX >> 1,
        strict: true,
    };

    pub const fn new(value: i32, strict: bool) -> Self {
        Self { value, strict }
    }

    /// Decode the wire representation.
    pub const fn decode(raw: i32) -> Self {
        Self {
            value: raw >> 1,
            strict: raw & 1 != 0,
        }
    }

    /// Encode to the wire representation.
    pub const fn raw(self) -> i32 {
        (self.value << 1) | self.strict as i32
    }

    /// Whether this bound leaves the difference unconstrained.
    pub fn is_infinity(self) -> bool {
        self.value == Self::INFINITY.value
    }

    /// Comparison operator: `<` if strict, `<=` otherwise.
    pub fn op(self) -> &'static str {
        if self.strict {
            "<"
        } else {
            "<="
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op(), self.value)
    }
}
