//! Conversions between [`BigInt`] and native integers, floats and strings.

use alloc::string::{String, ToString};

use crate::{
    config::Width,
    int::BigInt,
    number::Number,
    word::{Native, SignedNative, Word},
};

/// Position of the implicit leading one of an `f64` mantissa.
const MANTISSA_BITS: u32 = 52;
/// Exponent bias of an `f64`, including the mantissa width.
const EXPONENT_BIAS: i32 = 1023 + MANTISSA_BITS as i32;

/// Split a finite `f64` into `(negative, mantissa, exponent)` with
/// `|value| == mantissa * 2^exponent`.
fn float_parts(value: f64) -> (bool, u64, i32) {
    let bits = value.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> MANTISSA_BITS) & 0x7FF) as i32;
    let fraction = bits & ((1 << MANTISSA_BITS) - 1);
    if biased == 0 {
        // Subnormal numbers have no implicit leading one.
        (negative, fraction, 1 - EXPONENT_BIAS)
    } else {
        (negative, fraction | (1 << MANTISSA_BITS), biased - EXPONENT_BIAS)
    }
}

/// Checks a finite `f64` has no fractional part.
fn is_integral(value: f64) -> bool {
    let (_, mantissa, exponent) = float_parts(value);
    if exponent >= 0 {
        return true;
    }
    let shift = exponent.unsigned_abs();
    mantissa == 0 || (shift < 64 && mantissa & ((1 << shift) - 1) == 0)
}

impl<W: Width<N>, const N: usize> BigInt<W, N> {
    /// Create a [`BigInt`] from a `u128` integer.
    ///
    /// Bits above [`Self::BITS`] are discarded.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u128(mut value: u128) -> Self {
        let bits = Self::CONFIG.word_bits;
        let mask = Self::CONFIG.word_mask as u128;
        let mut words = [0; N];
        let mut i = 0;
        while i < N && value != 0 {
            words[i] = (value & mask) as Word;
            value >>= bits;
            i += 1;
        }
        Self::from_words_unchecked(words)
    }

    /// Create a [`BigInt`] from an unsigned native integer.
    #[must_use]
    pub const fn from_u64(value: Native) -> Self {
        Self::from_u128(value as u128)
    }

    /// Create a [`BigInt`] from an `i128` integer.
    ///
    /// The magnitude is taken with unsigned arithmetic, so `i128::MIN` is
    /// handled without overflow.
    #[must_use]
    pub const fn from_i128(value: i128) -> Self {
        let magnitude = Self::from_u128(value.unsigned_abs());
        if value < 0 {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }

    /// Create a [`BigInt`] from a signed native integer.
    #[must_use]
    pub const fn from_i64(value: SignedNative) -> Self {
        Self::from_i128(value as i128)
    }

    /// Create a [`BigInt`] from a float, truncating toward zero.
    ///
    /// Returns `None` for NaN and infinities. Magnitudes beyond the width
    /// wrap around like any other integer conversion.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let (negative, mantissa, exponent) = float_parts(value);
        let magnitude = if exponent >= 0 {
            Self::from_u64(mantissa).wrapping_shl(i64::from(exponent))
        } else {
            let shift = exponent.unsigned_abs();
            if shift >= Native::BITS {
                Self::ZERO
            } else {
                Self::from_u64(mantissa >> shift)
            }
        };

        Some(if negative { magnitude.wrapping_neg() } else { magnitude })
    }

    /// Create a [`BigInt`] from any supported value.
    ///
    /// # Panics
    ///
    /// If `value` has no integer representation: a fractional or
    /// non-finite float, or a string that is not a base-10 integer.
    #[must_use]
    pub fn new<T: ToBigInt<W, N>>(value: T) -> Self {
        match value.to_bigint() {
            Some(int) => int,
            None => panic!("value has no integer representation"),
        }
    }

    /// Create a [`BigInt`] from any supported value, or `None` if it has no
    /// integer representation.
    #[must_use]
    pub fn convert<T: ToBigInt<W, N>>(value: T) -> Option<Self> {
        value.to_bigint()
    }

    /// Low 64 bits of `self` as an unsigned native integer.
    ///
    /// Values outside of the native range wrap around.
    #[must_use]
    pub const fn to_u64(&self) -> Native {
        let bits = Self::CONFIG.word_bits;
        let mut value: Native = 0;
        let mut i = N;
        while i > 0 {
            i -= 1;
            value = (value << bits) | self.words[i] as Native;
        }
        value
    }

    /// `self` as a signed native integer.
    ///
    /// Exact when `self` lies within [`Self::NATIVE_MIN`] and
    /// [`Self::NATIVE_MAX`]; otherwise the native result wraps around.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn to_i64(&self) -> SignedNative {
        if self.is_negative() {
            (self.wrapping_neg().to_u64() as SignedNative).wrapping_neg()
        } else {
            self.to_u64() as SignedNative
        }
    }

    /// `self` as an unsigned native integer, or `None` if it is negative or
    /// does not fit.
    #[must_use]
    pub fn checked_to_u64(&self) -> Option<Native> {
        (!self.is_negative() && self.bit_len() <= Native::BITS as usize)
            .then(|| self.to_u64())
    }

    /// `self` as a signed native integer, or `None` if it does not fit.
    #[must_use]
    pub fn checked_to_i64(&self) -> Option<SignedNative> {
        self.fits_native().then(|| self.to_i64())
    }

    /// Checks `self` lies within the signed native range.
    fn fits_native(&self) -> bool {
        Self::NATIVE_MIN <= *self && *self <= Self::NATIVE_MAX
    }

    /// `self` as a float.
    ///
    /// Exact within the signed native range. Larger magnitudes go through
    /// the decimal representation and lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        if self.fits_native() {
            return self.to_i64() as f64;
        }
        self.to_string()
            .parse()
            .expect("decimal digits should parse as a float")
    }
}

/// Values that can be turned into a [`BigInt`].
pub trait ToBigInt<W: Width<N>, const N: usize> {
    /// Convert `self`, or return `None` if it has no integer
    /// representation.
    fn to_bigint(&self) -> Option<BigInt<W, N>>;
}

impl<W: Width<N>, const N: usize> ToBigInt<W, N> for BigInt<W, N> {
    fn to_bigint(&self) -> Option<BigInt<W, N>> {
        Some(*self)
    }
}

impl<W: Width<N>, const N: usize> ToBigInt<W, N> for &BigInt<W, N> {
    fn to_bigint(&self) -> Option<BigInt<W, N>> {
        Some(**self)
    }
}

impl<W: Width<N>, const N: usize> ToBigInt<W, N> for f64 {
    /// Only finite floats without a fractional part convert.
    fn to_bigint(&self) -> Option<BigInt<W, N>> {
        if self.is_finite() && is_integral(*self) {
            BigInt::from_f64(*self)
        } else {
            None
        }
    }
}

impl<W: Width<N>, const N: usize> ToBigInt<W, N> for f32 {
    fn to_bigint(&self) -> Option<BigInt<W, N>> {
        f64::from(*self).to_bigint()
    }
}

impl<W: Width<N>, const N: usize> ToBigInt<W, N> for &str {
    fn to_bigint(&self) -> Option<BigInt<W, N>> {
        BigInt::from_base_str(self, 10)
    }
}

impl<W: Width<N>, const N: usize> ToBigInt<W, N> for String {
    fn to_bigint(&self) -> Option<BigInt<W, N>> {
        BigInt::from_base_str(self, 10)
    }
}

impl<W: Width<N>, const N: usize> ToBigInt<W, N> for Number<W, N> {
    fn to_bigint(&self) -> Option<BigInt<W, N>> {
        match self {
            Number::Int(int) => Some(*int),
            Number::Float(float) => float.to_bigint(),
        }
    }
}

/// Conversions from primitive integers.
macro_rules! impl_from_primitive {
    ($int:ty, $func_name:ident, $via:ty) => {
        impl<W: Width<N>, const N: usize> From<$int> for BigInt<W, N> {
            #[inline]
            fn from(value: $int) -> BigInt<W, N> {
                BigInt::$func_name(value as $via)
            }
        }

        impl<W: Width<N>, const N: usize> ToBigInt<W, N> for $int {
            #[inline]
            fn to_bigint(&self) -> Option<BigInt<W, N>> {
                Some(BigInt::from(*self))
            }
        }
    };
}

impl_from_primitive!(u8, from_u128, u128);
impl_from_primitive!(u16, from_u128, u128);
impl_from_primitive!(u32, from_u128, u128);
impl_from_primitive!(u64, from_u128, u128);
impl_from_primitive!(usize, from_u128, u128);
impl_from_primitive!(u128, from_u128, u128);
impl_from_primitive!(i8, from_i128, i128);
impl_from_primitive!(i16, from_i128, i128);
impl_from_primitive!(i32, from_i128, i128);
impl_from_primitive!(i64, from_i128, i128);
impl_from_primitive!(isize, from_i128, i128);
impl_from_primitive!(i128, from_i128, i128);

impl<W: Width<N>, const N: usize> From<bool> for BigInt<W, N> {
    fn from(value: bool) -> Self {
        Self::from(u8::from(value))
    }
}

impl<W: Width<N>, const N: usize> TryFrom<BigInt<W, N>> for i64 {
    type Error = BigInt<W, N>;

    /// Returns the original value back if it does not fit.
    fn try_from(value: BigInt<W, N>) -> Result<Self, Self::Error> {
        value.checked_to_i64().ok_or(value)
    }
}

impl<W: Width<N>, const N: usize> TryFrom<BigInt<W, N>> for u64 {
    type Error = BigInt<W, N>;

    /// Returns the original value back if it does not fit.
    fn try_from(value: BigInt<W, N>) -> Result<Self, Self::Error> {
        value.checked_to_u64().ok_or(value)
    }
}

impl<W: Width<N>, const N: usize> From<BigInt<W, N>> for f64 {
    fn from(value: BigInt<W, N>) -> Self {
        value.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{declare_width, Int256, Int64};

    declare_width!(W64x16, Int64x16, 64, 16);

    #[test]
    fn minus_one_is_all_ones() {
        let minus_one = Int256::from_i64(-1);
        assert!(minus_one.as_words().iter().all(|&w| w == u32::MAX));
    }

    #[test]
    fn native_extremes() {
        let min = Int256::from_i64(i64::MIN);
        assert!(min.is_negative());
        assert_eq!(min.to_i64(), i64::MIN);
        assert_eq!(Int256::from_u64(u64::MAX).to_u64(), u64::MAX);
        assert!(Int256::from_u64(u64::MAX).is_positive());
        // 64-bit integers reinterpret the top bit as a sign.
        assert_eq!(Int64::from_u64(u64::MAX), Int64::MINUS_ONE);
        assert_eq!(Int64x16::from_i64(i64::MIN), Int64x16::MIN);
    }

    #[test]
    fn from_u128_wraps_to_width() {
        let value = Int64::from_u128((7u128 << 64) | 5);
        assert_eq!(value, Int64::from(5u64));
    }

    #[test]
    fn to_i64_wraps_outside_native_range() {
        let big = Int256::from(u64::MAX) + Int256::from(2u64);
        assert_eq!(big.to_i64(), 1);
        assert_eq!(big.checked_to_i64(), None);
        assert_eq!(big.checked_to_u64(), None);
        assert_eq!(Int256::from(-1i64).checked_to_u64(), None);
        assert_eq!(i64::try_from(Int256::from(-9i64)), Ok(-9));
        assert!(u64::try_from(Int256::from(-9i64)).is_err());
    }

    #[test]
    fn from_f64_truncates_toward_zero() {
        assert_eq!(Int256::from_f64(2.9), Some(Int256::from(2u64)));
        assert_eq!(Int256::from_f64(-2.9), Some(Int256::from(-2i64)));
        assert_eq!(Int256::from_f64(0.25), Some(Int256::ZERO));
        assert_eq!(Int256::from_f64(-0.0), Some(Int256::ZERO));
        assert_eq!(Int256::from_f64(f64::NAN), None);
        assert_eq!(Int256::from_f64(f64::INFINITY), None);
        assert_eq!(
            Int256::from_f64(2f64.powi(100)),
            Some(Int256::ONE << 100u32)
        );
    }

    #[test]
    fn to_f64() {
        assert_eq!(Int256::from(-12i64).to_f64(), -12.0);
        let huge = Int256::ONE << 200u32;
        assert_eq!(huge.to_f64(), 2f64.powi(200));
        assert_eq!((-huge).to_f64(), -(2f64.powi(200)));
    }

    #[test]
    fn new_and_convert() {
        assert_eq!(Int256::new(42u8), Int256::from(42u64));
        assert_eq!(Int256::new("-17"), Int256::from(-17i64));
        assert_eq!(Int256::new(8.0f64), Int256::from(8u64));
        assert_eq!(Int256::convert(8.5f64), None);
        assert_eq!(Int256::convert(f64::NAN), None);
        assert_eq!(Int256::convert("12z"), None);
        assert_eq!(Int256::convert(String::from("99")), Some(Int256::from(99u64)));
    }

    #[test]
    #[should_panic(expected = "value has no integer representation")]
    fn new_panics_on_fraction() {
        let _ = Int256::new(0.5f64);
    }

    #[test]
    fn unsigned_reconstruction_identity() {
        proptest!(|(value: u64)| {
            let int = Int256::from(value);
            prop_assert_eq!(Int256::from(int.to_u64()), int);
        });
    }

    #[test]
    fn signed_round_trip() {
        proptest!(|(value: i64)| {
            prop_assert_eq!(Int256::from(value).to_i64(), value);
            prop_assert_eq!(Int64x16::from(value).to_i64(), value);
            prop_assert_eq!(Int256::from(value).to_f64(), value as f64);
        });
    }

    #[test]
    fn float_within_native_range() {
        proptest!(|(value in -1e18f64..1e18f64)| {
            let expected = value as i64;
            prop_assert_eq!(Int256::from_f64(value), Some(Int256::from(expected)));
        });
    }
}
