//! Unsigned and signed ordering.

use core::cmp::Ordering;

use crate::{config::Width, int::BigInt, int::ToBigInt};

impl<W: Width<N>, const N: usize> BigInt<W, N> {
    /// Compare `self` and `rhs` read as unsigned, most significant word
    /// first.
    #[must_use]
    pub const fn ucmp(&self, rhs: &Self) -> Ordering {
        let mut i = N;
        while i > 0 {
            i -= 1;
            if self.words[i] < rhs.words[i] {
                return Ordering::Less;
            }
            if self.words[i] > rhs.words[i] {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }

    /// Unsigned `self < rhs`.
    #[must_use]
    pub const fn ult(&self, rhs: &Self) -> bool {
        matches!(self.ucmp(rhs), Ordering::Less)
    }

    /// Unsigned `self <= rhs`.
    #[must_use]
    pub const fn ule(&self, rhs: &Self) -> bool {
        !matches!(self.ucmp(rhs), Ordering::Greater)
    }

    /// Unsigned `self > rhs`.
    #[must_use]
    pub const fn ugt(&self, rhs: &Self) -> bool {
        matches!(self.ucmp(rhs), Ordering::Greater)
    }

    /// Unsigned `self >= rhs`.
    #[must_use]
    pub const fn uge(&self, rhs: &Self) -> bool {
        !matches!(self.ucmp(rhs), Ordering::Less)
    }

    /// Checks `self` equals `value` once converted to a [`BigInt`].
    ///
    /// `false` when `value` has no integer representation, so
    /// `x.eq_value(2.5)` never holds.
    #[must_use]
    pub fn eq_value<T: ToBigInt<W, N>>(&self, value: T) -> bool {
        value.to_bigint().is_some_and(|value| value == *self)
    }
}

impl<W: Width<N>, const N: usize> Ord for BigInt<W, N> {
    /// Signed comparison: a negative value is below every non-negative one.
    fn cmp(&self, rhs: &Self) -> Ordering {
        match (self.is_negative(), rhs.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.ucmp(rhs),
        }
    }
}

impl<W: Width<N>, const N: usize> PartialOrd for BigInt<W, N> {
    #[inline]
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
