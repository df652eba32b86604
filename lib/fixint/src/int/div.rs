//! Unsigned long division, signed floor division and integer powers.

use super::impl_binary_op;
use crate::{config::Width, int::BigInt};

impl<W: Width<N>, const N: usize> BigInt<W, N> {
    /// Binary restoring long division of `self` by a non-zero `divisor`,
    /// both read as unsigned.
    fn long_division(&self, divisor: &Self) -> (Self, Self) {
        let half_max = Self::CONFIG.half_max;
        let mut remainder = *self;
        let mut denominator = *divisor;
        let mut current = Self::ONE;
        let mut quotient = Self::ZERO;

        // Line the denominator up with the top of the remainder. Stop
        // before the top bit of the denominator would be shifted out.
        let mut overflow = false;
        while denominator.ule(&remainder) {
            if denominator.top_word() >= half_max {
                overflow = true;
                break;
            }
            denominator.shift_left(1);
            current.shift_left(1);
        }
        if !overflow {
            denominator.shift_right(1);
            current.shift_right(1);
        }

        while !current.is_zero() {
            if denominator.ule(&remainder) {
                remainder.sub_in_place(&denominator);
                quotient.or_in_place(&current);
            }
            denominator.shift_right(1);
            current.shift_right(1);
        }

        (quotient, remainder)
    }

    /// Unsigned quotient and remainder of `self` by `rhs`, from a single
    /// division pass.
    ///
    /// # Panics
    ///
    /// If `rhs` is zero.
    #[must_use]
    pub fn udivmod(&self, rhs: &Self) -> (Self, Self) {
        assert!(!rhs.is_zero(), "divide by zero");
        self.long_division(rhs)
    }

    /// Like [`Self::udivmod`], but returns `None` if `rhs` is zero.
    #[must_use]
    pub fn checked_udivmod(&self, rhs: &Self) -> Option<(Self, Self)> {
        (!rhs.is_zero()).then(|| self.long_division(rhs))
    }

    /// Unsigned quotient of `self` by `rhs`.
    ///
    /// # Panics
    ///
    /// If `rhs` is zero.
    #[must_use]
    pub fn udiv(&self, rhs: &Self) -> Self {
        self.udivmod(rhs).0
    }

    /// Unsigned remainder of `self` by `rhs`.
    ///
    /// # Panics
    ///
    /// If `rhs` is zero.
    #[must_use]
    pub fn umod(&self, rhs: &Self) -> Self {
        self.udivmod(rhs).1
    }

    /// Signed quotient and remainder of `self` by `rhs`, with the quotient
    /// rounded toward negative infinity.
    ///
    /// The remainder is zero or has the sign of `rhs`, and
    /// `self == rhs * quotient + remainder` always holds (modulo the width).
    ///
    /// # Panics
    ///
    /// If `rhs` is zero.
    #[must_use]
    pub fn floor_divmod(&self, rhs: &Self) -> (Self, Self) {
        assert!(!rhs.is_zero(), "divide by zero");
        self.floor_division(rhs)
    }

    /// Like [`Self::floor_divmod`], but returns `None` if `rhs` is zero.
    #[must_use]
    pub fn checked_floor_divmod(&self, rhs: &Self) -> Option<(Self, Self)> {
        (!rhs.is_zero()).then(|| self.floor_division(rhs))
    }

    fn floor_division(&self, rhs: &Self) -> (Self, Self) {
        // `MIN / -1` has no representable magnitude to divide with.
        if rhs.is_minus_one() {
            return (self.wrapping_neg(), Self::ZERO);
        }

        let (mut quotient, remainder) =
            self.unsigned_abs().long_division(&rhs.unsigned_abs());
        if self.is_negative() != rhs.is_negative() {
            quotient.neg_in_place();
            if !remainder.is_zero() {
                quotient.sub_in_place(&Self::ONE);
            }
        }

        let remainder = self.wrapping_sub(&rhs.wrapping_mul(&quotient));
        (quotient, remainder)
    }

    /// Floor division of `self` by `rhs`.
    ///
    /// # Panics
    ///
    /// If `rhs` is zero.
    #[must_use]
    pub fn floor_div(&self, rhs: &Self) -> Self {
        self.floor_divmod(rhs).0
    }

    /// Floor modulo of `self` by `rhs`: zero or of the sign of `rhs`.
    ///
    /// # Panics
    ///
    /// If `rhs` is zero.
    #[must_use]
    pub fn floor_mod(&self, rhs: &Self) -> Self {
        self.floor_divmod(rhs).1
    }

    /// Floor division, or `None` if `rhs` is zero.
    #[must_use]
    pub fn checked_floor_div(&self, rhs: &Self) -> Option<Self> {
        self.checked_floor_divmod(rhs).map(|(q, _)| q)
    }

    /// Floor modulo, or `None` if `rhs` is zero.
    #[must_use]
    pub fn checked_floor_mod(&self, rhs: &Self) -> Option<Self> {
        self.checked_floor_divmod(rhs).map(|(_, r)| r)
    }

    /// Replace `self` with its floor quotient by `rhs`.
    ///
    /// # Panics
    ///
    /// If `rhs` is zero.
    pub fn floor_div_in_place(&mut self, rhs: &Self) -> &mut Self {
        *self = self.floor_div(rhs);
        self
    }

    /// Replace `self` with its floor remainder by `rhs`.
    ///
    /// # Panics
    ///
    /// If `rhs` is zero.
    pub fn floor_mod_in_place(&mut self, rhs: &Self) -> &mut Self {
        *self = self.floor_mod(rhs);
        self
    }

    /// Raise `self` to the power `exp` by repeated squaring, wrapping
    /// around at the width.
    ///
    /// # Panics
    ///
    /// If `exp` is negative.
    #[must_use]
    pub fn ipow(&self, exp: &Self) -> Self {
        assert!(!exp.is_negative(), "negative exponent");
        if exp.is_zero() {
            return Self::ONE;
        }
        if exp.is_one() {
            return *self;
        }

        let mut base = *self;
        let mut exp = *exp;
        let mut acc = Self::ONE;
        while !exp.is_one() {
            if exp.is_odd() {
                acc.mul_in_place(&base);
            }
            exp.shift_right(1);
            base = base.wrapping_square();
        }
        acc.wrapping_mul(&base)
    }

    /// Replace `self` with `self` raised to the power `exp`.
    ///
    /// # Panics
    ///
    /// If `exp` is negative.
    pub fn ipow_in_place(&mut self, exp: &Self) -> &mut Self {
        *self = self.ipow(exp);
        self
    }

    /// Absolute value. [`Self::MIN`] stays [`Self::MIN`].
    #[must_use]
    pub const fn abs(&self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            *self
        }
    }

    /// Absolute value to be read as unsigned, so the magnitude of
    /// [`Self::MIN`] is the correct `2^(BITS - 1)`.
    #[must_use]
    pub const fn unsigned_abs(&self) -> Self {
        self.abs()
    }
}

impl_binary_op!(Div, div, DivAssign, div_assign, floor_div_in_place);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, floor_mod_in_place);

#[cfg(test)]
mod tests {
    use num_bigint::BigInt as Oracle;
    use proptest::prelude::*;

    use crate::{declare_width, Int256, Int64};

    declare_width!(W80x10, Int80x10, 80, 10);

    fn int(value: i64) -> Int256 {
        Int256::from(value)
    }

    fn oracle(value: Int256) -> Oracle {
        value.to_string().parse().unwrap()
    }

    fn wide(lo: u64, hi: u64) -> Int256 {
        (Int256::from(hi) << 160u32) | Int256::from(lo)
    }

    #[test]
    fn udivmod_small() {
        let (q, r) = Int256::from(10u64).udivmod(&Int256::from(3u64));
        assert_eq!(q, Int256::from(3u64));
        assert_eq!(r, Int256::ONE);
        assert_eq!(Int256::from(3u64).udiv(&Int256::from(10u64)), Int256::ZERO);
        assert_eq!(Int256::from(3u64).umod(&Int256::from(10u64)), int(3));
    }

    #[test]
    fn udiv_reads_operands_as_unsigned() {
        // -1 is the largest unsigned value.
        assert_eq!(Int256::MINUS_ONE.udiv(&Int256::MINUS_ONE), Int256::ONE);
        assert_eq!(Int256::MINUS_ONE.udiv(&int(2)), Int256::MAX);
        assert_eq!(Int256::MINUS_ONE.umod(&int(2)), Int256::ONE);
        assert_eq!(int(5).udiv(&Int256::MIN), Int256::ZERO);
        assert_eq!(Int256::MIN.udiv(&Int256::MIN), Int256::ONE);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn udiv_by_zero_panics() {
        let _ = Int256::ONE.udiv(&Int256::ZERO);
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn floor_div_by_zero_panics() {
        let _ = Int256::ONE / Int256::ZERO;
    }

    #[test]
    fn checked_forms() {
        assert_eq!(Int256::ONE.checked_udivmod(&Int256::ZERO), None);
        assert_eq!(Int256::ONE.checked_floor_div(&Int256::ZERO), None);
        assert_eq!(Int256::ONE.checked_floor_mod(&Int256::ZERO), None);
        assert_eq!(int(-7).checked_floor_div(&int(2)), Some(int(-4)));
        assert_eq!(int(-7).checked_floor_mod(&int(2)), Some(int(1)));
    }

    #[test]
    fn floor_semantics() {
        assert_eq!(int(7) / int(2), int(3));
        assert_eq!(int(-7) / int(2), int(-4));
        assert_eq!(int(7) / int(-2), int(-4));
        assert_eq!(int(-7) / int(-2), int(3));
        assert_eq!(int(7) % int(2), int(1));
        assert_eq!(int(-7) % int(2), int(1));
        assert_eq!(int(7) % int(-2), int(-1));
        assert_eq!(int(-7) % int(-2), int(-1));
        assert_eq!(int(-6) / int(2), int(-3));
        assert_eq!(int(-6) % int(2), Int256::ZERO);
    }

    #[test]
    fn division_by_minus_one() {
        assert_eq!(Int256::MIN / Int256::MINUS_ONE, Int256::MIN);
        assert_eq!(Int256::MIN % Int256::MINUS_ONE, Int256::ZERO);
        assert_eq!(int(9) / Int256::MINUS_ONE, int(-9));
        assert_eq!(Int256::MIN / Int256::ONE, Int256::MIN);
    }

    #[test]
    fn in_place_division() {
        let mut x = int(-100);
        x.floor_div_in_place(&int(7)).floor_mod_in_place(&int(5));
        // floor(-100 / 7) = -15, -15 mod 5 = 0
        assert_eq!(x, Int256::ZERO);

        let mut y = int(100);
        y /= int(-7);
        y %= &int(4);
        // floor(100 / -7) = -15, -15 mod 4 = 1
        assert_eq!(y, int(1));
    }

    #[test]
    fn ipow() {
        let two = Int256::from(2u64);
        assert_eq!(two.ipow(&Int256::from(10u64)), Int256::from(1024u64));
        assert_eq!(int(-3).ipow(&int(3)), int(-27));
        assert_eq!(int(12345).ipow(&Int256::ZERO), Int256::ONE);
        assert_eq!(int(12345).ipow(&Int256::ONE), int(12345));
        assert_eq!(Int256::ZERO.ipow(&Int256::ZERO), Int256::ONE);
        assert_eq!(two.ipow(&int(255)), Int256::MIN);
        assert_eq!(two.ipow(&int(256)), Int256::ZERO);
        assert_eq!(Int64::from(3u64).ipow(&Int64::from(40u64)).to_u64(), 3u64.pow(40));

        let mut x = int(5);
        x.ipow_in_place(&int(3));
        assert_eq!(x, int(125));
    }

    #[test]
    #[should_panic(expected = "negative exponent")]
    fn ipow_negative_exponent_panics() {
        let _ = Int256::ONE.ipow(&Int256::MINUS_ONE);
    }

    #[test]
    fn abs() {
        assert_eq!(int(-5).abs(), int(5));
        assert_eq!(int(5).abs(), int(5));
        assert_eq!(Int256::MIN.abs(), Int256::MIN);
        assert_eq!(Int256::MIN.unsigned_abs().bit_len(), 256);
    }

    #[test]
    fn division_identity() {
        proptest!(|(x_lo: u64, x_hi: u64, y_lo: u64, y_hi in 0u64..1024)| {
            let x = wide(x_lo, x_hi);
            let y = wide(y_lo, y_hi);
            prop_assume!(!y.is_zero());
            let (q, r) = x.udivmod(&y);
            prop_assert_eq!(y * q + r, x);
            prop_assert!(r.ult(&y));
        });
    }

    #[test]
    fn floor_matches_native() {
        proptest!(|(x: i64, y: i64)| {
            prop_assume!(y != 0);
            let (q, r) = int(x).floor_divmod(&int(y));
            let expected_q = i128::from(x).div_euclid(i128::from(y))
                - i128::from(
                y < 0 && i128::from(x).rem_euclid(i128::from(y)) != 0,
            );
            let expected_r = i128::from(x) - i128::from(y) * expected_q;
            prop_assert_eq!(q, Int256::from(expected_q));
            prop_assert_eq!(r, Int256::from(expected_r));
            prop_assert!(r.is_zero() || r.is_negative() == (y < 0));
        });
    }

    #[test]
    fn floor_matches_oracle() {
        proptest!(|(x_lo: u64, x_hi: u64, y: i64, negate: bool)| {
            prop_assume!(y != 0);
            let x = if negate { -wide(x_lo, x_hi) } else { wide(x_lo, x_hi) };
            let y = int(y);
            let (q, r) = x.floor_divmod(&y);
            let (ox, oy) = (oracle(x), oracle(y));
            let mut oq = &ox / &oy;
            let zero = Oracle::from(0);
            if (&ox % &oy) != zero && (ox < zero) != (oy < zero) {
                oq -= Oracle::from(1);
            }
            prop_assert_eq!(oracle(q), oq.clone());
            prop_assert_eq!(oracle(r), ox - oy * oq);
        });
    }

    #[test]
    fn narrow_words_divide() {
        proptest!(|(x: i64, y in 1i64..1 << 40)| {
            let (q, r) = Int80x10::from(x).floor_divmod(&Int80x10::from(y));
            let expected_q = x.div_euclid(y);
            prop_assert_eq!(q.to_i64(), expected_q);
            prop_assert_eq!(r.to_i64(), x.rem_euclid(y));
        });
    }

    #[test]
    fn power_laws() {
        proptest!(|(x: i64, a in 0u32..40, b in 0u32..40)| {
            let x = int(x);
            let (ea, eb) = (Int256::from(a), Int256::from(b));
            prop_assert_eq!(x.ipow(&(ea + eb)), x.ipow(&ea) * x.ipow(&eb));
            prop_assert_eq!(x.ipow(&Int256::ZERO), Int256::ONE);
            prop_assert_eq!(x.ipow(&Int256::ONE), x);
        });
    }
}
