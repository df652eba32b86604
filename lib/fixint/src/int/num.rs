//! [`num_traits`] integration, so a [`BigInt`] can be used by code generic
//! over numeric types.

use num_traits::{
    Bounded, CheckedDiv, CheckedRem, ConstOne, ConstZero, Num, One, Pow,
    Signed, WrappingAdd, WrappingMul, WrappingNeg, WrappingShl, WrappingShr,
    WrappingSub, Zero,
};

use crate::{config::Width, error::ParseIntError, int::BigInt};

impl<W: Width<N>, const N: usize> Zero for BigInt<W, N> {
    #[inline]
    fn zero() -> Self {
        BigInt::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl<W: Width<N>, const N: usize> One for BigInt<W, N> {
    #[inline]
    fn one() -> Self {
        BigInt::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        BigInt::is_one(self)
    }
}

impl<W: Width<N>, const N: usize> ConstZero for BigInt<W, N> {
    const ZERO: Self = BigInt::<W, N>::ZERO;
}

impl<W: Width<N>, const N: usize> ConstOne for BigInt<W, N> {
    const ONE: Self = BigInt::<W, N>::ONE;
}

impl<W: Width<N>, const N: usize> Bounded for BigInt<W, N> {
    fn min_value() -> Self {
        BigInt::MIN
    }

    fn max_value() -> Self {
        BigInt::MAX
    }
}

impl<W: Width<N>, const N: usize> Num for BigInt<W, N> {
    type FromStrRadixErr = ParseIntError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseIntError> {
        BigInt::<W, N>::from_str_radix(s, radix)
    }
}

impl<W: Width<N>, const N: usize> Signed for BigInt<W, N> {
    fn abs(&self) -> Self {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if *self <= *other {
            BigInt::ZERO
        } else {
            self.wrapping_sub(other)
        }
    }

    fn signum(&self) -> Self {
        BigInt::signum(self)
    }

    fn is_positive(&self) -> bool {
        BigInt::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }
}

impl<W: Width<N>, const N: usize> WrappingAdd for BigInt<W, N> {
    fn wrapping_add(&self, v: &Self) -> Self {
        BigInt::wrapping_add(self, v)
    }
}

impl<W: Width<N>, const N: usize> WrappingSub for BigInt<W, N> {
    fn wrapping_sub(&self, v: &Self) -> Self {
        BigInt::wrapping_sub(self, v)
    }
}

impl<W: Width<N>, const N: usize> WrappingMul for BigInt<W, N> {
    fn wrapping_mul(&self, v: &Self) -> Self {
        BigInt::wrapping_mul(self, v)
    }
}

impl<W: Width<N>, const N: usize> WrappingNeg for BigInt<W, N> {
    fn wrapping_neg(&self) -> Self {
        BigInt::wrapping_neg(self)
    }
}

impl<W: Width<N>, const N: usize> WrappingShl for BigInt<W, N> {
    fn wrapping_shl(&self, rhs: u32) -> Self {
        BigInt::wrapping_shl(self, i64::from(rhs))
    }
}

impl<W: Width<N>, const N: usize> WrappingShr for BigInt<W, N> {
    fn wrapping_shr(&self, rhs: u32) -> Self {
        BigInt::wrapping_shr(self, i64::from(rhs))
    }
}

impl<W: Width<N>, const N: usize> CheckedDiv for BigInt<W, N> {
    /// Floor division, `None` on a zero divisor.
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.checked_floor_div(v)
    }
}

impl<W: Width<N>, const N: usize> CheckedRem for BigInt<W, N> {
    /// Floor modulo, `None` on a zero divisor.
    fn checked_rem(&self, v: &Self) -> Option<Self> {
        self.checked_floor_mod(v)
    }
}

impl<W: Width<N>, const N: usize> Pow<u32> for BigInt<W, N> {
    type Output = BigInt<W, N>;

    fn pow(self, rhs: u32) -> Self::Output {
        self.ipow(&BigInt::from(rhs))
    }
}

impl<W: Width<N>, const N: usize> Pow<BigInt<W, N>> for BigInt<W, N> {
    type Output = BigInt<W, N>;

    /// # Panics
    ///
    /// If `rhs` is negative.
    fn pow(self, rhs: BigInt<W, N>) -> Self::Output {
        self.ipow(&rhs)
    }
}

impl<'a, W: Width<N>, const N: usize> Pow<&'a BigInt<W, N>>
    for &BigInt<W, N>
{
    type Output = BigInt<W, N>;

    /// # Panics
    ///
    /// If `rhs` is negative.
    fn pow(self, rhs: &'a BigInt<W, N>) -> Self::Output {
        self.ipow(rhs)
    }
}
