//! Operators mixing a [`BigInt`] with a native number on either side.
//!
//! A primitive integer operand is converted with [`From`] and the result
//! is a [`BigInt`]. A float operand promotes the whole operation to `f64`,
//! following the [`Number`] dispatch table.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor,
    BitXorAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub,
    SubAssign,
};

use crate::{config::Width, int::BigInt, number::Number};

/// `BigInt op primitive` and `primitive op BigInt` for one operator.
macro_rules! impl_int_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident; $($int:ty),*) => {
        $(
            impl<W: Width<N>, const N: usize> $op<$int> for BigInt<W, N> {
                type Output = BigInt<W, N>;

                #[inline]
                fn $method(self, rhs: $int) -> Self::Output {
                    $op::$method(self, BigInt::<W, N>::from(rhs))
                }
            }

            impl<W: Width<N>, const N: usize> $op<$int> for &BigInt<W, N> {
                type Output = BigInt<W, N>;

                #[inline]
                fn $method(self, rhs: $int) -> Self::Output {
                    $op::$method(*self, BigInt::<W, N>::from(rhs))
                }
            }

            impl<W: Width<N>, const N: usize> $op<BigInt<W, N>> for $int {
                type Output = BigInt<W, N>;

                #[inline]
                fn $method(self, rhs: BigInt<W, N>) -> Self::Output {
                    $op::$method(BigInt::<W, N>::from(self), rhs)
                }
            }

            impl<W: Width<N>, const N: usize> $op<&BigInt<W, N>> for $int {
                type Output = BigInt<W, N>;

                #[inline]
                fn $method(self, rhs: &BigInt<W, N>) -> Self::Output {
                    $op::$method(BigInt::<W, N>::from(self), rhs)
                }
            }

            impl<W: Width<N>, const N: usize> $op_assign<$int> for BigInt<W, N> {
                #[inline]
                fn $method_assign(&mut self, rhs: $int) {
                    $op_assign::$method_assign(self, BigInt::<W, N>::from(rhs));
                }
            }
        )*
    };
}

/// Every integer operator for the given primitives.
macro_rules! impl_int_ops {
    ($($int:ty),*) => {
        impl_int_op!(Add, add, AddAssign, add_assign; $($int),*);
        impl_int_op!(Sub, sub, SubAssign, sub_assign; $($int),*);
        impl_int_op!(Mul, mul, MulAssign, mul_assign; $($int),*);
        impl_int_op!(Div, div, DivAssign, div_assign; $($int),*);
        impl_int_op!(Rem, rem, RemAssign, rem_assign; $($int),*);
        impl_int_op!(BitAnd, bitand, BitAndAssign, bitand_assign; $($int),*);
        impl_int_op!(BitOr, bitor, BitOrAssign, bitor_assign; $($int),*);
        impl_int_op!(BitXor, bitxor, BitXorAssign, bitxor_assign; $($int),*);
    };
}

impl_int_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// `BigInt op f64` and `f64 op BigInt`, evaluated as [`Number`]s.
macro_rules! impl_float_op {
    ($($op:ident, $method:ident);*) => {
        $(
            impl<W: Width<N>, const N: usize> $op<f64> for BigInt<W, N> {
                type Output = f64;

                #[inline]
                fn $method(self, rhs: f64) -> f64 {
                    $op::$method(Number::Int(self), Number::Float(rhs)).to_f64()
                }
            }

            impl<W: Width<N>, const N: usize> $op<f64> for &BigInt<W, N> {
                type Output = f64;

                #[inline]
                fn $method(self, rhs: f64) -> f64 {
                    $op::$method(*self, rhs)
                }
            }

            impl<W: Width<N>, const N: usize> $op<BigInt<W, N>> for f64 {
                type Output = f64;

                #[inline]
                fn $method(self, rhs: BigInt<W, N>) -> f64 {
                    $op::$method(Number::Float(self), Number::Int(rhs)).to_f64()
                }
            }

            impl<W: Width<N>, const N: usize> $op<&BigInt<W, N>> for f64 {
                type Output = f64;

                #[inline]
                fn $method(self, rhs: &BigInt<W, N>) -> f64 {
                    $op::$method(self, *rhs)
                }
            }
        )*
    };
}

impl_float_op!(Add, add; Sub, sub; Mul, mul; Div, div; Rem, rem);

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Int256, Int64};

    #[test]
    fn primitive_operands() {
        let x = Int256::from(10u64);
        assert_eq!(x + 5i32, Int256::from(15u64));
        assert_eq!(3u8 - x, Int256::from(-7i64));
        assert_eq!(&x * -2i64, Int256::from(-20i64));
        assert_eq!(x / -3i64, Int256::from(-4i64));
        assert_eq!(-7i64 % &x, Int256::from(3u64));
        assert_eq!(x & 6u16, Int256::from(2u64));
        assert_eq!(1usize | x, Int256::from(11u64));
        assert_eq!(x ^ 0xFFu128, Int256::from(0xF5u64));

        let mut y = Int64::from(7u64);
        y += 1u8;
        y *= -3i16;
        y -= 1i128;
        y /= 5u32;
        assert_eq!(y, Int64::from(-5i64));
    }

    #[test]
    fn float_operands_promote() {
        let x = Int256::from(5u64);
        assert_eq!(x * 0.5, 2.5);
        assert_eq!(1.5 + x, 6.5);
        assert_eq!(x / 2.0, 2.0);
        assert_eq!(-x / 2.0, -3.0);
        assert_eq!(x % -2.0, -1.0);
        assert_eq!(10.0 - &x, 5.0);
        assert_eq!(x / 0.0, f64::INFINITY);
    }

    #[test]
    fn primitive_ops_match_native() {
        proptest!(|(a: i32, b: i32)| {
            let x = Int256::from(a);
            let (a, b) = (i64::from(a), i64::from(b));
            prop_assert_eq!(x + b, Int256::from(a + b));
            prop_assert_eq!(b - x, Int256::from(b - a));
            prop_assert_eq!(x * b, Int256::from(a * b));
            if b != 0 {
                let floor = a.div_euclid(b)
                    - i64::from(b < 0 && a.rem_euclid(b) != 0);
                prop_assert_eq!(x / b, Int256::from(floor));
            }
        });
    }
}
