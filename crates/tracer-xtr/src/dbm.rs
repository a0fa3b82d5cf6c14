//! Difference bound matrices, stored and printed as given.

use crate::bound::Bound;
use std::fmt;
use thiserror::Error;
use tracer_model::ClockId;

/// Rejected DBM write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DbmError {
    #[error("bound index ({i}, {j}) out of range for {dim} clocks")]
    OutOfRange { i: i64, j: i64, dim: usize },

    #[error("diagonal bound ({i}, {i}) must be {}, got {bound}", Bound::ZERO)]
    Diagonal { i: usize, bound: Bound },
}

/// Square matrix of bounds; entry `(i, j)` bounds `clock_i - clock_j`.
///
/// Row 0 belongs to the reference clock. A fresh matrix holds `ZERO` on row 0
/// and the diagonal and `INFINITY` elsewhere.
#[derive(Clone, PartialEq, Eq)]
pub struct Dbm {
    dim: usize,
    bounds: Vec<Bound>,
}

impl Dbm {
    pub fn new(dim: usize) -> Self {
        let mut bounds = vec![Bound::INFINITY; dim * dim];
        for i in 0..dim {
            bounds[i] = Bound::ZERO;
            bounds[i * dim + i] = Bound::ZERO;
        }
        Self { dim, bounds }
    }

    /// Number of clocks, including the reference clock.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, i: ClockId, j: ClockId) -> Option<Bound> {
        if i.0 < self.dim && j.0 < self.dim {
            Some(self.bounds[i.0 * self.dim + j.0])
        } else {
            None
        }
    }

    /// Store a bound. Diagonal entries only accept `ZERO`.
    pub fn set(&mut self, i: ClockId, j: ClockId, bound: Bound) -> Result<(), DbmError> {
        if i.0 >= self.dim || j.0 >= self.dim {
            return Err(DbmError::OutOfRange {
                i: i.0 as i64,
                j: j.0 as i64,
                dim: self.dim,
            });
        }
        if i == j && bound != Bound::ZERO {
            return Err(DbmError::Diagonal { i: i.0, bound });
        }
        self.bounds[i.0 * self.dim + j.0] = bound;
        Ok(())
    }

    /// Off-diagonal entries with a finite bound, row by row.
    pub fn constraints(&self) -> impl Iterator<Item = (ClockId, ClockId, Bound)> + '_ {
        (0..self.dim)
            .flat_map(move |i| (0..self.dim).map(move |j| (i, j)))
            .filter(|(i, j)| i != j)
            .map(|(i, j)| (ClockId(i), ClockId(j), self.bounds[i * self.dim + j]))
            .filter(|(_, _, bound)| !bound.is_infinity())
    }
}

impl fmt::Debug for Dbm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<_> = self.bounds.chunks(self.dim.max(1)).collect();
        f.debug_struct("Dbm")
            .field("dim", &self.dim)
            .field("bounds", &rows)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_reference_zeroed() {
        let dbm = Dbm::new(3);
        for i in 0..3 {
            assert_eq!(dbm.get(ClockId(0), ClockId(i)), Some(Bound::ZERO));
            assert_eq!(dbm.get(ClockId(i), ClockId(i)), Some(Bound::ZERO));
        }
        assert_eq!(dbm.get(ClockId(1), ClockId(0)), Some(Bound::INFINITY));
        assert_eq!(dbm.get(ClockId(2), ClockId(1)), Some(Bound::INFINITY));
        assert_eq!(dbm.get(ClockId(3), ClockId(0)), None);
    }

    #[test]
    fn test_constraints_skip_infinity_and_diagonal() {
        let mut dbm = Dbm::new(2);
        let found: Vec<_> = dbm.constraints().collect();
        assert_eq!(found, [(ClockId(0), ClockId(1), Bound::ZERO)]);

        dbm.set(ClockId(1), ClockId(0), Bound::new(5, false)).unwrap();
        dbm.set(ClockId(0), ClockId(1), Bound::new(-2, true)).unwrap();
        let found: Vec<_> = dbm.constraints().collect();
        assert_eq!(
            found,
            [
                (ClockId(0), ClockId(1), Bound::new(-2, true)),
                (ClockId(1), ClockId(0), Bound::new(5, false)),
            ]
        );
    }

    #[test]
    fn test_set_rejects() {
        let mut dbm = Dbm::new(2);
        assert_eq!(
            dbm.set(ClockId(2), ClockId(0), Bound::ZERO),
            Err(DbmError::OutOfRange { i: 2, j: 0, dim: 2 })
        );
        assert_eq!(
            dbm.set(ClockId(1), ClockId(1), Bound::new(1, false)),
            Err(DbmError::Diagonal {
                i: 1,
                bound: Bound::new(1, false)
            })
        );
        assert!(dbm.set(ClockId(1), ClockId(1), Bound::ZERO).is_ok());
    }

    #[test]
    fn test_empty_dbm() {
        let dbm = Dbm::new(0);
        assert_eq!(dbm.constraints().count(), 0);
        assert_eq!(format!("{dbm:?}"), "Dbm { dim: 0, bounds: [] }");
    }
}
