//! Classify positions by parity.

use std::fmt;

/// The class of a position within a sequence.
///
/// Values at [`Parity::Even`] positions are candidates for the minimum and values at
/// [`Parity::Odd`] positions are candidates for the maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Positions `0, 2, 4, ...` (min candidates).
    Even,
    /// Positions `1, 3, 5, ...` (max candidates).
    Odd,
}

impl Parity {
    /// Returns the class of the 0-based `position`.
    #[inline]
    pub const fn of(position: usize) -> Self {
        if position % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => f.write_str("even"),
            Self::Odd => f.write_str("odd"),
        }
    }
}
