//! Conversion to and from strings of digits in bases 2 to 36.
//!
//! Both directions work a chunk of digits at a time: the largest `k` such
//! that `base^k` still fits a [`Native`] integer. A chunk is parsed or
//! printed with native arithmetic, and only one [`BigInt`] multiplication
//! or division is spent per chunk.

use alloc::{string::String, vec::Vec};
use core::{
    fmt::{self, Binary, Display, LowerHex, Octal, UpperHex},
    str::FromStr,
};

use crate::{
    config::Width,
    error::{ParseErrorKind, ParseIntError},
    int::BigInt,
    word::Native,
};

/// Valid bases.
const RADIX_RANGE: core::ops::RangeInclusive<u32> = 2..=36;

/// Number of digits `k` per chunk and `base^k`, for the largest `k` with
/// `base^k <= Native::MAX`.
fn chunk(base: u32) -> (usize, Native) {
    let base = Native::from(base);
    let mut digits = 1;
    let mut power = base;
    while let Some(next) = power.checked_mul(base) {
        power = next;
        digits += 1;
    }
    (digits, power)
}

impl<W: Width<N>, const N: usize> BigInt<W, N> {
    /// Parse a string of digits in the given `radix`, with an optional
    /// leading `+` or `-`.
    ///
    /// Digits above 9 are letters, in either case. Values beyond the width
    /// wrap around.
    ///
    /// # Errors
    ///
    /// * [`ParseErrorKind::InvalidRadix`] if `radix` is not in `2..=36`.
    /// * [`ParseErrorKind::Empty`] if there are no digits.
    /// * [`ParseErrorKind::InvalidDigit`] if a character is not a digit of
    ///   `radix`.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseIntError> {
        if !RADIX_RANGE.contains(&radix) {
            return Err(ParseIntError::new(ParseErrorKind::InvalidRadix));
        }

        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseIntError::new(ParseErrorKind::Empty));
        }
        if !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(ParseIntError::new(ParseErrorKind::InvalidDigit));
        }

        // Only ASCII digits are left, so every byte is a character.
        let (chunk_len, _) = chunk(radix);
        let first_len = match digits.len() % chunk_len {
            0 => chunk_len,
            len => len,
        };

        let mut acc = Self::ZERO;
        let mut start = 0;
        let mut len = first_len;
        while start < digits.len() {
            let piece = &digits.as_bytes()[start..start + len];
            let mut value: Native = 0;
            let mut scale: Native = 1;
            for &byte in piece {
                let digit =
                    char::from(byte).to_digit(radix).map_or(0, Native::from);
                value = value * Native::from(radix) + digit;
                scale *= Native::from(radix);
            }

            acc.mul_in_place(&Self::from_u64(scale))
                .add_in_place(&Self::from_u64(value));
            start += len;
            len = chunk_len;
        }

        if negative {
            acc.neg_in_place();
        }
        Ok(acc)
    }

    /// Parse a string of digits in the given `base`, or return `None` if it
    /// is not a valid integer in that base.
    ///
    /// See [`Self::from_str_radix`] for the accepted syntax.
    #[must_use]
    pub fn from_base_str(s: &str, base: u32) -> Option<Self> {
        Self::from_str_radix(s, base).ok()
    }

    /// Format `self` in the given `base` with lowercase digits.
    ///
    /// With `unsigned` unset, base 10 prints the signed value and every
    /// other base prints the bits read as unsigned. Returns `None` if `base`
    /// is not in `2..=36`.
    #[must_use]
    pub fn to_base_string(
        &self,
        base: u32,
        unsigned: Option<bool>,
    ) -> Option<String> {
        if !RADIX_RANGE.contains(&base) {
            return None;
        }

        let unsigned = unsigned.unwrap_or(base != 10);
        if !unsigned && self.is_negative() {
            let mut out = String::from("-");
            out.push_str(&self.unsigned_abs().digits(base));
            Some(out)
        } else {
            Some(self.digits(base))
        }
    }

    /// Digits of `self` read as unsigned, for a valid `base`.
    fn digits(&self, base: u32) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let (chunk_len, power) = chunk(base);
        let divisor = Self::from_u64(power);
        let radix = Native::from(base);

        // Least significant digit first.
        let mut reversed = Vec::new();
        let mut rest = *self;
        loop {
            let (quotient, remainder) = rest.udivmod(&divisor);
            let mut value = remainder.to_u64();
            if quotient.is_zero() {
                while value != 0 {
                    reversed.push(digit(value % radix, base));
                    value /= radix;
                }
                break;
            }
            for _ in 0..chunk_len {
                reversed.push(digit(value % radix, base));
                value /= radix;
            }
            rest = quotient;
        }

        reversed.into_iter().rev().collect()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn digit(value: Native, base: u32) -> char {
    char::from_digit(value as u32, base).unwrap_or('?')
}

impl<W: Width<N>, const N: usize> FromStr for BigInt<W, N> {
    type Err = ParseIntError;

    /// Parse a base 10 integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl<W: Width<N>, const N: usize> Display for BigInt<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.unsigned_abs().digits(10))
    }
}

impl<W: Width<N>, const N: usize> LowerHex for BigInt<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.digits(16))
    }
}

impl<W: Width<N>, const N: usize> UpperHex for BigInt<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.digits(16).to_ascii_uppercase())
    }
}

impl<W: Width<N>, const N: usize> Binary for BigInt<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.digits(2))
    }
}

impl<W: Width<N>, const N: usize> Octal for BigInt<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &self.digits(8))
    }
}
