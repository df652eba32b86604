//! Bitwise logic and shifts.
//!
//! A shift moves whole words first (`amount / word_bits`), then blends
//! adjacent words for the remaining `amount % word_bits` bits. Right shifts
//! are logical: vacated bits are always zero, whatever the sign.

use core::ops::{Not, Shl, ShlAssign, Shr, ShrAssign};

use super::impl_binary_op;
use crate::{
    config::Width,
    int::BigInt,
    word::{Native, SignedNative, Word},
};

impl<W: Width<N>, const N: usize> BigInt<W, N> {
    /// Bitwise AND of `self` and `rhs`, in place.
    pub fn and_in_place(&mut self, rhs: &Self) -> &mut Self {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a &= b;
        }
        self
    }

    /// Bitwise OR of `self` and `rhs`, in place.
    pub fn or_in_place(&mut self, rhs: &Self) -> &mut Self {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a |= b;
        }
        self
    }

    /// Bitwise XOR of `self` and `rhs`, in place.
    pub fn xor_in_place(&mut self, rhs: &Self) -> &mut Self {
        for (a, b) in self.words.iter_mut().zip(rhs.words.iter()) {
            *a ^= b;
        }
        self
    }

    /// Invert every bit of `self`, in place.
    pub fn not_in_place(&mut self) -> &mut Self {
        let mask = Self::CONFIG.word_mask;
        for word in &mut self.words {
            *word = !*word & mask;
        }
        self
    }

    /// Shift `self` left by `amount` bits, in place. A negative `amount`
    /// shifts right.
    pub fn shl_in_place(&mut self, amount: SignedNative) -> &mut Self {
        if amount < 0 {
            self.shift_right(amount.unsigned_abs())
        } else {
            self.shift_left(amount.unsigned_abs())
        }
    }

    /// Shift `self` right by `amount` bits, in place. A negative `amount`
    /// shifts left.
    pub fn shr_in_place(&mut self, amount: SignedNative) -> &mut Self {
        if amount < 0 {
            self.shift_left(amount.unsigned_abs())
        } else {
            self.shift_right(amount.unsigned_abs())
        }
    }

    /// Compute `self << amount`. Bits shifted past the width are lost.
    #[must_use]
    pub fn wrapping_shl(&self, amount: SignedNative) -> Self {
        let mut result = *self;
        result.shl_in_place(amount);
        result
    }

    /// Compute the logical `self >> amount`.
    #[must_use]
    pub fn wrapping_shr(&self, amount: SignedNative) -> Self {
        let mut result = *self;
        result.shr_in_place(amount);
        result
    }

    /// Shift left by a non-negative `amount` of bits.
    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn shift_left(&mut self, amount: Native) -> &mut Self {
        if amount >= Self::BITS as Native {
            *self = Self::ZERO;
            return self;
        }

        let word_bits = Self::CONFIG.word_bits;
        let word_shift = (amount / Native::from(word_bits)) as usize;
        let bit_shift = (amount % Native::from(word_bits)) as u32;

        if word_shift > 0 {
            for i in (0..N).rev() {
                self.words[i] =
                    if i >= word_shift { self.words[i - word_shift] } else { 0 };
            }
        }

        if bit_shift > 0 {
            let mask = Native::from(Self::CONFIG.word_mask);
            for i in (0..N).rev() {
                let low = if i > 0 { Native::from(self.words[i - 1]) } else { 0 };
                let blended = (Native::from(self.words[i]) << bit_shift)
                    | (low >> (word_bits - bit_shift));
                self.words[i] = (blended & mask) as Word;
            }
        }

        self
    }

    /// Logical shift right by a non-negative `amount` of bits.
    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn shift_right(&mut self, amount: Native) -> &mut Self {
        if amount >= Self::BITS as Native {
            *self = Self::ZERO;
            return self;
        }

        let word_bits = Self::CONFIG.word_bits;
        let word_shift = (amount / Native::from(word_bits)) as usize;
        let bit_shift = (amount % Native::from(word_bits)) as u32;

        if word_shift > 0 {
            for i in 0..N {
                self.words[i] = if i + word_shift < N {
                    self.words[i + word_shift]
                } else {
                    0
                };
            }
        }

        if bit_shift > 0 {
            let mask = Native::from(Self::CONFIG.word_mask);
            for i in 0..N {
                let high =
                    if i + 1 < N { Native::from(self.words[i + 1]) } else { 0 };
                let blended = (Native::from(self.words[i]) >> bit_shift)
                    | (high << (word_bits - bit_shift));
                self.words[i] = (blended & mask) as Word;
            }
        }

        self
    }
}

impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, and_in_place);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, or_in_place);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor_in_place);

impl<W: Width<N>, const N: usize> Not for BigInt<W, N> {
    type Output = BigInt<W, N>;

    #[inline]
    fn not(mut self) -> Self::Output {
        self.not_in_place();
        self
    }
}

impl<W: Width<N>, const N: usize> Not for &BigInt<W, N> {
    type Output = BigInt<W, N>;

    #[inline]
    fn not(self) -> Self::Output {
        let mut result = *self;
        result.not_in_place();
        result
    }
}

/// Shift operators taking a primitive amount.
macro_rules! impl_shift {
    (signed: $($int:ty),*) => {
        $(
            impl_shift!(@impl $int, |amount: $int| {
                let amount = amount as SignedNative;
                (amount < 0, amount.unsigned_abs())
            });
        )*
    };
    (unsigned: $($int:ty),*) => {
        $(
            impl_shift!(@impl $int, |amount: $int| (false, amount as Native));
        )*
    };
    (@impl $int:ty, $split:expr) => {
        impl<W: Width<N>, const N: usize> ShlAssign<$int> for BigInt<W, N> {
            #[inline]
            #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
            fn shl_assign(&mut self, rhs: $int) {
                let (reverse, amount): (bool, Native) = $split(rhs);
                if reverse {
                    self.shift_right(amount);
                } else {
                    self.shift_left(amount);
                }
            }
        }

        impl<W: Width<N>, const N: usize> ShrAssign<$int> for BigInt<W, N> {
            #[inline]
            #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
            fn shr_assign(&mut self, rhs: $int) {
                let (reverse, amount): (bool, Native) = $split(rhs);
                if reverse {
                    self.shift_left(amount);
                } else {
                    self.shift_right(amount);
                }
            }
        }

        impl<W: Width<N>, const N: usize> Shl<$int> for BigInt<W, N> {
            type Output = BigInt<W, N>;

            #[inline]
            fn shl(mut self, rhs: $int) -> Self::Output {
                self <<= rhs;
                self
            }
        }

        impl<W: Width<N>, const N: usize> Shl<$int> for &BigInt<W, N> {
            type Output = BigInt<W, N>;

            #[inline]
            fn shl(self, rhs: $int) -> Self::Output {
                *self << rhs
            }
        }

        impl<W: Width<N>, const N: usize> Shr<$int> for BigInt<W, N> {
            type Output = BigInt<W, N>;

            #[inline]
            fn shr(mut self, rhs: $int) -> Self::Output {
                self >>= rhs;
                self
            }
        }

        impl<W: Width<N>, const N: usize> Shr<$int> for &BigInt<W, N> {
            type Output = BigInt<W, N>;

            #[inline]
            fn shr(self, rhs: $int) -> Self::Output {
                *self >> rhs
            }
        }
    };
}

impl_shift!(signed: i8, i16, i32, i64, isize);
impl_shift!(unsigned: u8, u16, u32, u64, usize);

impl<W: Width<N>, const N: usize> BigInt<W, N> {
    /// A [`BigInt`] shift amount as a native integer.
    fn shift_amount(&self) -> SignedNative {
        match self.checked_to_i64() {
            Some(amount) => amount,
            None => panic!("shift amount has no native representation"),
        }
    }
}

impl<W: Width<N>, const N: usize> ShlAssign<&BigInt<W, N>> for BigInt<W, N> {
    /// # Panics
    ///
    /// If `rhs` does not fit a signed native integer.
    fn shl_assign(&mut self, rhs: &BigInt<W, N>) {
        self.shl_in_place(rhs.shift_amount());
    }
}

impl<W: Width<N>, const N: usize> ShrAssign<&BigInt<W, N>> for BigInt<W, N> {
    /// # Panics
    ///
    /// If `rhs` does not fit a signed native integer.
    fn shr_assign(&mut self, rhs: &BigInt<W, N>) {
        self.shr_in_place(rhs.shift_amount());
    }
}

impl<W: Width<N>, const N: usize> ShlAssign for BigInt<W, N> {
    fn shl_assign(&mut self, rhs: BigInt<W, N>) {
        *self <<= &rhs;
    }
}

impl<W: Width<N>, const N: usize> ShrAssign for BigInt<W, N> {
    fn shr_assign(&mut self, rhs: BigInt<W, N>) {
        *self >>= &rhs;
    }
}

impl<W: Width<N>, const N: usize> Shl for BigInt<W, N> {
    type Output = BigInt<W, N>;

    fn shl(mut self, rhs: BigInt<W, N>) -> Self::Output {
        self <<= &rhs;
        self
    }
}

impl<W: Width<N>, const N: usize> Shr for BigInt<W, N> {
    type Output = BigInt<W, N>;

    fn shr(mut self, rhs: BigInt<W, N>) -> Self::Output {
        self >>= &rhs;
        self
    }
}

impl<'a, W: Width<N>, const N: usize> Shl<&'a BigInt<W, N>>
    for &BigInt<W, N>
{
    type Output = BigInt<W, N>;

    fn shl(self, rhs: &'a BigInt<W, N>) -> Self::Output {
        let mut result = *self;
        result <<= rhs;
        result
    }
}

impl<'a, W: Width<N>, const N: usize> Shr<&'a BigInt<W, N>>
    for &BigInt<W, N>
{
    type Output = BigInt<W, N>;

    fn shr(self, rhs: &'a BigInt<W, N>) -> Self::Output {
        let mut result = *self;
        result >>= rhs;
        result
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{declare_width, Int256, Int64};

    declare_width!(W120x6, Int120x6, 120, 6);

    #[test]
    fn logic() {
        let a = Int256::from(0b1100u64);
        let b = Int256::from(0b1010u64);
        assert_eq!(a & b, Int256::from(0b1000u64));
        assert_eq!(a | b, Int256::from(0b1110u64));
        assert_eq!(a ^ b, Int256::from(0b0110u64));
        assert_eq!(!Int256::ZERO, Int256::MINUS_ONE);
        assert_eq!(!&a, -a - Int256::ONE);

        let mut c = a;
        c &= &b;
        c |= Int256::ONE;
        c ^= Int256::from(0b1001u64);
        assert_eq!(c, Int256::ZERO);
    }

    #[test]
    fn not_stays_masked_on_narrow_words() {
        let inverted = !Int120x6::ZERO;
        assert!(inverted.as_words().iter().all(|&w| w == 0x3F));
        assert!(inverted.is_minus_one());
    }

    #[test]
    fn shifts_cross_word_boundaries() {
        let one = Int256::ONE;
        assert_eq!((one << 31u32).as_words()[0], 0x8000_0000);
        assert_eq!((one << 32u32).as_words()[1], 1);
        assert_eq!((one << 255u32), Int256::MIN);
        assert_eq!(Int256::from(u64::MAX) << 4i32 >> 4i32, Int256::from(u64::MAX));
        assert_eq!(Int256::from(0xABCD_0000u64) >> 16u8, Int256::from(0xABCDu64));
    }

    #[test]
    fn right_shift_is_logical() {
        assert_eq!(Int256::MINUS_ONE >> 255u32, Int256::ONE);
        assert_eq!(Int256::MIN >> 1u32, Int256::ONE << 254u32);
        assert!(!(Int64::from(-8i64) >> 1u32).is_negative());
    }

    #[test]
    fn negative_amount_reverses_direction() {
        let x = Int256::from(0x100u64);
        assert_eq!(x << -4i64, Int256::from(0x10u64));
        assert_eq!(x >> -4i64, Int256::from(0x1000u64));
        assert_eq!(x.wrapping_shl(-8), Int256::ONE);
        assert_eq!(x.wrapping_shr(-8), Int256::from(0x1_0000u64));
        assert_eq!(x << i64::MIN, Int256::ZERO);
    }

    #[test]
    fn oversized_amount_clears() {
        let x = Int256::MINUS_ONE;
        assert_eq!(x << 256u32, Int256::ZERO);
        assert_eq!(x >> 256u32, Int256::ZERO);
        assert_eq!(x << u64::MAX, Int256::ZERO);
        assert_eq!(x >> usize::MAX, Int256::ZERO);
    }

    #[test]
    fn bigint_amount() {
        let x = Int256::from(3u64);
        assert_eq!(x << Int256::from(2u64), Int256::from(12u64));
        assert_eq!(&x >> &Int256::from(-2i64), Int256::from(12u64));
        let mut y = x;
        y <<= Int256::ONE;
        y >>= &Int256::from(2u64);
        assert_eq!(y, Int256::ONE);
    }

    #[test]
    #[should_panic(expected = "shift amount has no native representation")]
    fn bigint_amount_out_of_native_range() {
        let _ = Int256::ONE << (Int256::ONE << 100u32);
    }

    #[test]
    fn in_place_shifts_chain() {
        let mut x = Int256::from(5u64);
        x.shl_in_place(10).shr_in_place(8).shl_in_place(-1);
        assert_eq!(x, Int256::from(10u64));
    }

    #[test]
    fn shift_inverse() {
        proptest!(|(value: u64, n in 0u32..192)| {
            let x = Int256::from(value);
            prop_assert_eq!((x << n) >> n, x);
        });
    }

    #[test]
    fn narrow_words_shift_like_native() {
        proptest!(|(value: u64, n in 0u32..64)| {
            let x = Int120x6::from(value);
            prop_assert_eq!((x >> n).to_u64(), value >> n);
            prop_assert_eq!((x << n).to_u64(), value << n);
        });
    }

    #[test]
    fn shift_matches_multiplication() {
        proptest!(|(value: i64, n in 0u32..200)| {
            let x = Int256::from(value);
            let two = Int256::from(2u64);
            prop_assert_eq!(x << n, x * two.ipow(&Int256::from(n)));
        });
    }
}
