//! The result of a reduction.

use crate::Parity;
use std::fmt;

/// The minimum over even positions and the maximum over odd positions of a sequence.
///
/// A fresh value starts at [`Extrema::EMPTY`], whose fields are the identity of their
/// respective comparison: any real candidate replaces them. A field still holding its sentinel
/// after a reduction means no element of that class was seen (or every candidate equaled the
/// sentinel, which is indistinguishable and not treated as an error).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extrema {
    /// Smallest value found at an even position.
    pub min: i32,
    /// Largest value found at an odd position.
    pub max: i32,
}

impl Extrema {
    /// No candidates observed.
    pub const EMPTY: Self = Self {
        min: i32::MAX,
        max: i32::MIN,
    };

    /// Offers `value`, found at `position`, to the field matching its class.
    #[inline]
    pub fn observe(&mut self, position: usize, value: i32) {
        match Parity::of(position) {
            Parity::Even => self.min = self.min.min(value),
            Parity::Odd => self.max = self.max.max(value),
        }
    }

    /// Combines two partial results.
    ///
    /// Associative and commutative, with [`Extrema::EMPTY`] as identity.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns true if neither field has moved off its sentinel.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Default for Extrema {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for Extrema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_extrema() -> impl Strategy<Value = Extrema> {
        (any::<i32>(), any::<i32>()).prop_map(|(min, max)| Extrema { min, max })
    }

    #[test]
    fn observe_routes_by_parity() {
        let mut extrema = Extrema::default();
        extrema.observe(0, 5);
        assert_eq!(
            extrema,
            Extrema {
                min: 5,
                max: i32::MIN
            }
        );
        extrema.observe(1, -3);
        assert_eq!(extrema, Extrema { min: 5, max: -3 });
        extrema.observe(2, 10);
        extrema.observe(3, 2);
        assert_eq!(extrema, Extrema { min: 5, max: 2 });
    }

    #[test]
    fn sentinel_values_are_accepted() {
        let mut extrema = Extrema::EMPTY;
        extrema.observe(0, i32::MAX);
        extrema.observe(1, i32::MIN);
        assert!(extrema.is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Extrema { min: 5, max: 2 }.to_string(), "5 - 2");
        assert_eq!(
            Extrema::EMPTY.to_string(),
            format!("{} - {}", i32::MAX, i32::MIN)
        );
    }

    proptest! {
        #[test]
        fn merge_identity(a in any_extrema()) {
            prop_assert_eq!(a.merge(Extrema::EMPTY), a);
            prop_assert_eq!(Extrema::EMPTY.merge(a), a);
        }

        #[test]
        fn merge_commutative(a in any_extrema(), b in any_extrema()) {
            prop_assert_eq!(a.merge(b), b.merge(a));
        }

        #[test]
        fn merge_associative(a in any_extrema(), b in any_extrema(), c in any_extrema()) {
            prop_assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
        }
    }
}
