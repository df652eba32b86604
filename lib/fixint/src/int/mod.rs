//! This module contains [`BigInt`], a fixed-width two's complement integer
//! stored as an array of words, generic over its [`Width`].
//!
//! Every operation wraps around modulo `2^BITS`, exactly like the primitive
//! integer types do with `wrapping_*` methods. Most operations come in two
//! forms:
//!
//! * a pure form (`wrapping_add`, `floor_div`, the `+`/`/` operators, ...),
//!   which leaves its operands untouched and returns a new value;
//! * an in-place form (`add_in_place`, `floor_div_in_place`, the `+=`/`/=`
//!   operators, ...), which overwrites the receiver's words and returns it
//!   for chaining.
//!
//! # Examples
//!
//! ```rust
//! use fixint::Int256;
//!
//! let a = Int256::from(-7i64);
//! let b = Int256::from(2i64);
//!
//! assert_eq!(a / b, Int256::from(-4i64)); // floor division
//! assert_eq!(a % b, Int256::from(1i64)); // floor modulo
//! assert_eq!((a * b).to_string(), "-14");
//!
//! let mut c = a;
//! c.add_in_place(&b).neg_in_place();
//! assert_eq!(c, Int256::from(5i64));
//! ```

use core::{
    fmt::{self, Debug},
    marker::PhantomData,
};

use educe::Educe;
use zeroize::Zeroize;

use crate::{
    config::{Config, Width},
    word::Word,
};

mod arith;
mod bitwise;
mod cmp;
mod convert;
mod div;
mod native;
mod num;
mod radix;

pub use convert::ToBigInt;

/// Stack-allocated fixed-width signed integer.
///
/// Generic over the [`Width`] marker `W` and the number `N` of [`Word`]s.
/// There is no separate sign: a value is negative when the top bit of its
/// most significant word is set.
#[derive(Educe)]
#[educe(Copy, Clone, PartialEq, Eq, Hash)]
pub struct BigInt<W: Width<N>, const N: usize> {
    /// Words in little-endian order, each masked to `W::WORD_BITS` bits.
    words: [Word; N],
    width: PhantomData<W>,
}

impl<W: Width<N>, const N: usize> BigInt<W, N> {
    /// Width configuration of this integer type.
    pub const CONFIG: Config = W::CONFIG;
    /// Total number of bits.
    pub const BITS: usize = Self::CONFIG.total_bits as usize;
    /// Zero.
    pub const ZERO: Self = Self::from_words_unchecked([0; N]);
    /// One.
    pub const ONE: Self = {
        let mut words = [0; N];
        words[0] = 1;
        Self::from_words_unchecked(words)
    };
    /// Minus one, all bits set.
    pub const MINUS_ONE: Self =
        Self::from_words_unchecked([Self::CONFIG.word_mask; N]);
    /// Smallest representable value, `-2^(BITS - 1)`.
    pub const MIN: Self = {
        let mut words = [0; N];
        words[N - 1] = Self::CONFIG.sign_bit_mask;
        Self::from_words_unchecked(words)
    };
    /// Largest representable value, `2^(BITS - 1) - 1`.
    pub const MAX: Self = {
        let mut words = [Self::CONFIG.word_mask; N];
        words[N - 1] ^= Self::CONFIG.sign_bit_mask;
        Self::from_words_unchecked(words)
    };
    /// [`i64::MIN`] as a [`BigInt`], lower bound of exact native conversion.
    pub const NATIVE_MIN: Self = Self::from_i64(i64::MIN);
    /// [`i64::MAX`] as a [`BigInt`], upper bound of exact native conversion.
    pub const NATIVE_MAX: Self = Self::from_i64(i64::MAX);

    pub(crate) const fn from_words_unchecked(words: [Word; N]) -> Self {
        Self { words, width: PhantomData }
    }

    /// Create a new [`BigInt`] from the provided little-endian `words`.
    ///
    /// Bits above the configured word width are discarded.
    #[must_use]
    pub const fn from_words(mut words: [Word; N]) -> Self {
        let mask = Self::CONFIG.word_mask;
        let mut i = 0;
        while i < N {
            words[i] &= mask;
            i += 1;
        }
        Self::from_words_unchecked(words)
    }

    /// Returns reference to the inner words, least significant first.
    #[must_use]
    pub const fn as_words(&self) -> &[Word; N] {
        &self.words
    }

    /// Most significant word.
    #[inline(always)]
    const fn top_word(&self) -> Word {
        self.words[N - 1]
    }

    /// Checks `self` is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < N {
            if self.words[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Checks `self` is one.
    #[must_use]
    pub const fn is_one(&self) -> bool {
        if self.words[0] != 1 {
            return false;
        }
        let mut i = 1;
        while i < N {
            if self.words[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Checks `self` is minus one, i.e. every bit is set.
    #[must_use]
    pub const fn is_minus_one(&self) -> bool {
        let mask = Self::CONFIG.word_mask;
        let mut i = 0;
        while i < N {
            if self.words[i] != mask {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Checks the sign bit of `self` is set.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.top_word() & Self::CONFIG.sign_bit_mask != 0
    }

    /// Checks `self` is strictly greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Returns true if this number is even.
    #[inline]
    #[must_use]
    pub const fn is_even(&self) -> bool {
        self.words[0] & 1 == 0
    }

    /// Returns true if this number is odd.
    #[inline]
    #[must_use]
    pub const fn is_odd(&self) -> bool {
        self.words[0] & 1 == 1
    }

    /// Return the minimum number of bits needed to encode this number,
    /// read as unsigned.
    #[must_use]
    pub const fn bit_len(&self) -> usize {
        let word_bits = Self::CONFIG.word_bits as usize;
        let mut index = N;
        while index > 0 {
            index -= 1;
            let word = self.words[index];
            if word != 0 {
                return index * word_bits + (Word::BITS - word.leading_zeros())
                    as usize;
            }
        }
        0
    }

    /// Number of leading zero bits, read as unsigned.
    #[must_use]
    pub const fn leading_zeros(&self) -> usize {
        Self::BITS - self.bit_len()
    }

    /// Number of set bits.
    #[must_use]
    pub const fn count_ones(&self) -> usize {
        let mut ones = 0;
        let mut i = 0;
        while i < N {
            ones += self.words[i].count_ones() as usize;
            i += 1;
        }
        ones
    }

    /// Find the `i`-th bit of `self`.
    ///
    /// Bits past [`Self::BITS`] read as `false`.
    #[must_use]
    pub const fn get_bit(&self, i: usize) -> bool {
        if i >= Self::BITS {
            return false;
        }
        let word_bits = Self::CONFIG.word_bits as usize;
        (self.words[i / word_bits] >> (i % word_bits)) & 1 == 1
    }

    /// Returns `-1`, `0` or `1` according to the sign of `self`.
    #[must_use]
    pub const fn signum(&self) -> Self {
        if self.is_negative() {
            Self::MINUS_ONE
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }
}

impl<W: Width<N>, const N: usize> Default for BigInt<W, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<W: Width<N>, const N: usize> Debug for BigInt<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl<W: Width<N>, const N: usize> Zeroize for BigInt<W, N> {
    // The width marker carries no data and does not need to be zeroized.
    fn zeroize(&mut self) {
        self.words.zeroize();
    }
}

impl<W: Width<N>, const N: usize> AsRef<[Word]> for BigInt<W, N> {
    #[inline]
    fn as_ref(&self) -> &[Word] {
        &self.words
    }
}

/// Implement a binary operator and its assigning form, for owned and
/// borrowed operands, on top of an `*_in_place` method.
macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $in_place:ident) => {
        impl<'a, W: Width<N>, const N: usize>
            core::ops::$op_assign<&'a BigInt<W, N>> for BigInt<W, N>
        {
            #[inline]
            fn $method_assign(&mut self, rhs: &'a BigInt<W, N>) {
                self.$in_place(rhs);
            }
        }

        impl<W: Width<N>, const N: usize> core::ops::$op_assign
            for BigInt<W, N>
        {
            #[inline]
            fn $method_assign(&mut self, rhs: BigInt<W, N>) {
                self.$in_place(&rhs);
            }
        }

        impl<'a, W: Width<N>, const N: usize> core::ops::$op<&'a BigInt<W, N>>
            for BigInt<W, N>
        {
            type Output = BigInt<W, N>;

            #[inline]
            fn $method(mut self, rhs: &'a BigInt<W, N>) -> Self::Output {
                self.$in_place(rhs);
                self
            }
        }

        impl<W: Width<N>, const N: usize> core::ops::$op for BigInt<W, N> {
            type Output = BigInt<W, N>;

            #[inline]
            fn $method(mut self, rhs: BigInt<W, N>) -> Self::Output {
                self.$in_place(&rhs);
                self
            }
        }

        impl<'a, 'b, W: Width<N>, const N: usize>
            core::ops::$op<&'b BigInt<W, N>> for &'a BigInt<W, N>
        {
            type Output = BigInt<W, N>;

            #[inline]
            fn $method(self, rhs: &'b BigInt<W, N>) -> Self::Output {
                let mut result = *self;
                result.$in_place(rhs);
                result
            }
        }

        impl<'a, W: Width<N>, const N: usize> core::ops::$op<BigInt<W, N>>
            for &'a BigInt<W, N>
        {
            type Output = BigInt<W, N>;

            #[inline]
            fn $method(self, rhs: BigInt<W, N>) -> Self::Output {
                let mut result = *self;
                result.$in_place(&rhs);
                result
            }
        }
    };
}

pub(crate) use impl_binary_op;

#[cfg(test)]
mod tests {
    use crate::{declare_width, Int256, Int64};

    declare_width!(W128x8, Int128x8, 128, 8);

    #[test]
    fn constants() {
        assert!(Int256::ZERO.is_zero());
        assert!(Int256::ONE.is_one());
        assert!(Int256::MINUS_ONE.is_minus_one());
        assert!(Int256::MIN.is_negative());
        assert!(Int256::MAX.is_positive());
        assert_eq!(Int256::as_words(&Int256::MINUS_ONE), &[u32::MAX; 8]);
        assert_eq!(Int256::MAX.wrapping_add(&Int256::ONE), Int256::MIN);
        assert_eq!(Int64::NATIVE_MIN, Int64::MIN);
        assert_eq!(Int64::NATIVE_MAX, Int64::MAX);
        assert_eq!(Int128x8::MIN.as_words()[15], 0x80);
    }

    #[test]
    fn predicates() {
        let two = Int256::from(2u64);
        assert!(two.is_even() && !two.is_odd() && two.is_positive());
        assert!(!Int256::ZERO.is_negative() && !Int256::ZERO.is_positive());
        let minus_three = Int256::from(-3i64);
        assert!(minus_three.is_odd() && minus_three.is_negative());
        assert_eq!(minus_three.signum(), Int256::MINUS_ONE);
        assert_eq!(Int256::ZERO.signum(), Int256::ZERO);
    }

    #[test]
    fn from_words_masks_stray_bits() {
        let value = Int128x8::from_words([0x1FF; 16]);
        assert!(value.is_minus_one());
        assert_eq!(value.as_words(), &[0xFF; 16]);
    }

    #[test]
    fn bit_inspection() {
        let words = [0b1100, 0, 0, 0, 0, 0, 0, 0];
        let num = Int256::from_words(words);
        assert_eq!(num.bit_len(), 4);
        assert!(num.get_bit(2) && num.get_bit(3) && !num.get_bit(0));
        assert!(!num.get_bit(1000));
        assert_eq!(num.count_ones(), 2);

        let words = [0, 0b1100, 0, 0, 0, 0, 0, 0];
        let num = Int256::from_words(words);
        assert_eq!(num.bit_len(), 32 + 4);
        assert_eq!(num.leading_zeros(), 256 - 36);

        assert_eq!(Int256::ZERO.bit_len(), 0);
        assert_eq!(Int256::MINUS_ONE.bit_len(), 256);
        assert_eq!(Int128x8::from(0x1_0000u64).bit_len(), 17);
    }
}
