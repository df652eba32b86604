//! Mixed integer and float arithmetic.
//!
//! [`Number`] is either a [`BigInt`] or a native float. Binary operations
//! promote their operands the way a numeric tower does:
//!
//! | left  | right | result                      |
//! |-------|-------|-----------------------------|
//! | Int   | Int   | Int, wrapping at the width  |
//! | Int   | Float | Float                       |
//! | Float | Int   | Float                       |
//! | Float | Float | Float                       |
//!
//! Division and remainder follow floor semantics for both kinds. `pow`
//! stays an integer only for a non-negative integer exponent.
//!
//! # Examples
//!
//! ```rust
//! use fixint::{Int256, Number};
//!
//! let seven = Number::from(Int256::from(7u64));
//! let two = Number::<_, 8>::from(2i64);
//!
//! assert_eq!(seven / two, Number::Int(Int256::from(3u64)));
//! assert_eq!(seven / Number::from(2.0), Number::Float(3.0));
//! assert_eq!(two.pow(Number::from(-1i64)), Number::Float(0.5));
//! ```

use core::{
    fmt::{self, Display},
    ops::{Add, Div, Mul, Neg, Rem, Sub},
};

use educe::Educe;
use num_traits::float::{Float, FloatCore};

use crate::{config::Width, int::BigInt};

/// An integer of fixed width or a native float.
#[derive(Educe)]
#[educe(Copy, Clone, Debug, PartialEq)]
pub enum Number<W: Width<N>, const N: usize> {
    /// Fixed-width integer.
    Int(BigInt<W, N>),
    /// Native float.
    Float(f64),
}

/// Operands of a binary operation after promotion.
enum Promoted<W: Width<N>, const N: usize> {
    Ints(BigInt<W, N>, BigInt<W, N>),
    Floats(f64, f64),
}

impl<W: Width<N>, const N: usize> Promoted<W, N> {
    fn new(lhs: Number<W, N>, rhs: Number<W, N>) -> Self {
        match (lhs, rhs) {
            (Number::Int(a), Number::Int(b)) => Promoted::Ints(a, b),
            (a, b) => Promoted::Floats(a.to_f64(), b.to_f64()),
        }
    }
}

impl<W: Width<N>, const N: usize> Number<W, N> {
    /// Checks `self` holds an integer.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// The integer held by `self`, if any.
    #[must_use]
    pub const fn as_int(&self) -> Option<&BigInt<W, N>> {
        match self {
            Number::Int(int) => Some(int),
            Number::Float(_) => None,
        }
    }

    /// `self` as a float. Integers outside of the native range lose
    /// precision.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Int(int) => int.to_f64(),
            Number::Float(float) => *float,
        }
    }

    /// Raise `self` to the power `exp`.
    ///
    /// An integer raised to a non-negative integer stays an integer (see
    /// [`BigInt::ipow`]). Every other combination, including a negative
    /// integer exponent, is computed on floats.
    #[must_use]
    pub fn pow(self, exp: Self) -> Self {
        match Promoted::new(self, exp) {
            Promoted::Ints(base, exp) if !exp.is_negative() => {
                Number::Int(base.ipow(&exp))
            }
            Promoted::Ints(base, exp) => {
                Number::Float(Float::powf(base.to_f64(), exp.to_f64()))
            }
            Promoted::Floats(base, exp) => Number::Float(Float::powf(base, exp)),
        }
    }
}

/// Floor of `a / b` for floats. Division by zero follows IEEE 754.
fn float_floor_div(a: f64, b: f64) -> f64 {
    FloatCore::floor(a / b)
}

/// Floor remainder of `a / b` for floats: zero or of the sign of `b`.
fn float_floor_mod(a: f64, b: f64) -> f64 {
    a - b * float_floor_div(a, b)
}

/// Binary operators dispatching on the promoted operands.
macro_rules! impl_number_op {
    ($op:ident, $method:ident, $int:expr, $float:expr) => {
        impl<W: Width<N>, const N: usize> $op for Number<W, N> {
            type Output = Number<W, N>;

            fn $method(self, rhs: Number<W, N>) -> Self::Output {
                match Promoted::new(self, rhs) {
                    Promoted::Ints(a, b) => Number::Int($int(a, b)),
                    Promoted::Floats(a, b) => Number::Float($float(a, b)),
                }
            }
        }
    };
}

impl_number_op!(
    Add,
    add,
    |a: BigInt<W, N>, b: BigInt<W, N>| a + b,
    |a: f64, b: f64| a + b
);
impl_number_op!(
    Sub,
    sub,
    |a: BigInt<W, N>, b: BigInt<W, N>| a - b,
    |a: f64, b: f64| a - b
);
impl_number_op!(
    Mul,
    mul,
    |a: BigInt<W, N>, b: BigInt<W, N>| a * b,
    |a: f64, b: f64| a * b
);
impl_number_op!(
    Div,
    div,
    |a: BigInt<W, N>, b: BigInt<W, N>| a.floor_div(&b),
    float_floor_div
);
impl_number_op!(
    Rem,
    rem,
    |a: BigInt<W, N>, b: BigInt<W, N>| a.floor_mod(&b),
    float_floor_mod
);

impl<W: Width<N>, const N: usize> Neg for Number<W, N> {
    type Output = Number<W, N>;

    fn neg(self) -> Self::Output {
        match self {
            Number::Int(int) => Number::Int(-int),
            Number::Float(float) => Number::Float(-float),
        }
    }
}

impl<W: Width<N>, const N: usize> Display for Number<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(int) => Display::fmt(int, f),
            Number::Float(float) => Display::fmt(float, f),
        }
    }
}

impl<W: Width<N>, const N: usize> From<BigInt<W, N>> for Number<W, N> {
    fn from(value: BigInt<W, N>) -> Self {
        Number::Int(value)
    }
}

impl<W: Width<N>, const N: usize> From<f64> for Number<W, N> {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl<W: Width<N>, const N: usize> From<f32> for Number<W, N> {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

macro_rules! impl_from_int {
    ($($int:ty),*) => {
        $(
            impl<W: Width<N>, const N: usize> From<$int> for Number<W, N> {
                fn from(value: $int) -> Self {
                    Number::Int(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
