//! Word-sized primitives every [`BigInt`](crate::BigInt) operation is built
//! from.
//!
//! A [`Word`] holds at most half of the [`Native`] width, so the sum of three
//! words and the product of two words (plus two words of carry) always fit a
//! native integer. All helpers take the configured `bits` per word and mask
//! their results back into that range.

/// Storage type for a single word.
pub type Word = u32;

/// Native unsigned integer used for intermediate word arithmetic.
pub type Native = u64;

/// Native signed integer.
pub type SignedNative = i64;

/// Number of bits in a [`Native`] integer.
pub const NATIVE_BITS: u32 = Native::BITS;

/// Default (and maximum) number of significant bits in a [`Word`]: half of
/// [`NATIVE_BITS`].
pub const DEFAULT_WORD_BITS: u32 = NATIVE_BITS / 2;

/// Mask with the lower `bits` bits set.
#[inline(always)]
#[must_use]
pub const fn mask(bits: u32) -> Native {
    (1 << bits) - 1
}

/// Calculate `a + b + carry`, returning the word of the result and the new
/// carry.
#[inline(always)]
#[must_use]
pub const fn adc(a: Word, b: Word, carry: Word, bits: u32) -> (Word, Word) {
    let tmp = a as Native + b as Native + carry as Native;
    ((tmp & mask(bits)) as Word, (tmp >> bits) as Word)
}

/// Calculate `a - b - borrow`, returning the word of the result and the new
/// borrow.
///
/// The word is computed as `(a + mask + 1) - (b + borrow)`, so the
/// intermediate value never goes below zero.
#[inline(always)]
#[must_use]
pub const fn sbb(a: Word, b: Word, borrow: Word, bits: u32) -> (Word, Word) {
    let tmp = (a as Native + mask(bits) + 1) - (b as Native + borrow as Native);
    let borrow = if tmp >> bits == 0 { 1 } else { 0 };
    ((tmp & mask(bits)) as Word, borrow)
}

/// Calculate `a + (b * c) + carry`, returning the least significant word
/// and setting carry to the most significant word.
#[inline(always)]
#[must_use]
pub const fn carrying_mac(
    a: Word,
    b: Word,
    c: Word,
    carry: Word,
    bits: u32,
) -> (Word, Word) {
    let tmp = a as Native + (b as Native * c as Native) + carry as Native;
    ((tmp & mask(bits)) as Word, (tmp >> bits) as Word)
}
