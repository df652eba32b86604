//! Additive and multiplicative arithmetic.

use core::{
    iter::{Product, Sum},
    ops::Neg,
};

use super::impl_binary_op;
use crate::{
    config::Width,
    int::BigInt,
    word::{adc, carrying_mac, sbb},
};

impl<W: Width<N>, const N: usize> BigInt<W, N> {
    /// Add `rhs` to `self` in place, wrapping around at the width.
    pub fn add_in_place(&mut self, rhs: &Self) -> &mut Self {
        let bits = Self::CONFIG.word_bits;
        let mut carry = 0;
        for (a, &b) in self.words.iter_mut().zip(rhs.words.iter()) {
            (*a, carry) = adc(*a, b, carry, bits);
        }
        self
    }

    /// Subtract `rhs` from `self` in place, wrapping around at the width.
    pub fn sub_in_place(&mut self, rhs: &Self) -> &mut Self {
        let bits = Self::CONFIG.word_bits;
        let mut borrow = 0;
        for (a, &b) in self.words.iter_mut().zip(rhs.words.iter()) {
            (*a, borrow) = sbb(*a, b, borrow, bits);
        }
        self
    }

    /// Negate `self` in place. [`Self::MIN`] stays [`Self::MIN`].
    pub fn neg_in_place(&mut self) -> &mut Self {
        *self = self.wrapping_neg();
        self
    }

    /// Multiply `self` by `rhs` in place, keeping the low [`Self::BITS`]
    /// bits of the product.
    pub fn mul_in_place(&mut self, rhs: &Self) -> &mut Self {
        *self = self.wrapping_mul(rhs);
        self
    }

    /// Compute `self + rhs`, wrapping around at the width.
    #[must_use]
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        let bits = Self::CONFIG.word_bits;
        let mut words = [0; N];
        let mut carry = 0;
        let mut i = 0;
        while i < N {
            (words[i], carry) = adc(self.words[i], rhs.words[i], carry, bits);
            i += 1;
        }
        Self::from_words_unchecked(words)
    }

    /// Compute `self - rhs`, wrapping around at the width.
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        let bits = Self::CONFIG.word_bits;
        let mut words = [0; N];
        let mut borrow = 0;
        let mut i = 0;
        while i < N {
            (words[i], borrow) =
                sbb(self.words[i], rhs.words[i], borrow, bits);
            i += 1;
        }
        Self::from_words_unchecked(words)
    }

    /// Compute the two's complement `-self`: every bit inverted, plus one.
    #[must_use]
    pub const fn wrapping_neg(&self) -> Self {
        let bits = Self::CONFIG.word_bits;
        let mask = Self::CONFIG.word_mask;
        let mut words = [0; N];
        let mut carry = 1;
        let mut i = 0;
        while i < N {
            (words[i], carry) = adc(!self.words[i] & mask, 0, carry, bits);
            i += 1;
        }
        Self::from_words_unchecked(words)
    }

    /// Compute `self * rhs`, keeping the low [`Self::BITS`] bits.
    ///
    /// Partial products landing at or above word `N` are never computed.
    /// Two's complement makes the same routine correct for signed operands.
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: &Self) -> Self {
        let bits = Self::CONFIG.word_bits;
        let mut words = [0; N];
        let mut i = 0;
        while i < N {
            let a = self.words[i];
            if a != 0 {
                let mut carry = 0;
                let mut j = 0;
                while i + j < N {
                    (words[i + j], carry) =
                        carrying_mac(words[i + j], a, rhs.words[j], carry, bits);
                    j += 1;
                }
            }
            i += 1;
        }
        Self::from_words_unchecked(words)
    }

    /// Square `self`, keeping the low [`Self::BITS`] bits.
    #[must_use]
    pub const fn wrapping_square(&self) -> Self {
        self.wrapping_mul(self)
    }
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_in_place);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_in_place);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul_in_place);

impl<W: Width<N>, const N: usize> Neg for BigInt<W, N> {
    type Output = BigInt<W, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl<W: Width<N>, const N: usize> Neg for &BigInt<W, N> {
    type Output = BigInt<W, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl<W: Width<N>, const N: usize> Sum for BigInt<W, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a, W: Width<N>, const N: usize> Sum<&'a BigInt<W, N>> for BigInt<W, N> {
    fn sum<I: Iterator<Item = &'a BigInt<W, N>>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<W: Width<N>, const N: usize> Product for BigInt<W, N> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a, W: Width<N>, const N: usize> Product<&'a BigInt<W, N>>
    for BigInt<W, N>
{
    fn product<I: Iterator<Item = &'a BigInt<W, N>>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}
