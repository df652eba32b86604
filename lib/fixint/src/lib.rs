/*!
Fixed-width two's complement integers built from arrays of native words.

> Note that `fixint` is still `0.*.*`, so breaking changes
> [may occur at any time](https://semver.org/#spec-item-4). If you must depend
> on `fixint`, we recommend pinning to a specific version, i.e., `=0.y.z`.

## Integers

[`BigInt`](crate::BigInt) behaves like a native signed integer of any width
that is a multiple of its word width (at least 64 bits). The width is a type
parameter, fixed by a [`Width`](crate::Width) marker:

- [`Int64`], [`Int128`], [`Int256`], [`Int512`] and [`Int1024`] are
  provided, with 32-bit words.
- [`declare_width!`] declares any other width, optionally with narrower
  words.

Every operation wraps around modulo `2^BITS`. Division and modulo round
toward negative infinity, right shifts are logical, and every value can be
read as unsigned through the `u*` family (`ult`, `udiv`, `umod`, ...).

```rust
use fixint::Int256;

let x: Int256 = "-123456789012345678901234567890".parse().unwrap();
let y = Int256::from(1_000_000_007u64);

let (q, r) = x.floor_divmod(&y);
assert_eq!(y * q + r, x);
assert!(!r.is_negative());

assert_eq!(Int256::from(2u64).ipow(&Int256::from(10u64)), Int256::from(1024u64));
assert_eq!(Int256::from(255u64).to_base_string(16, None).as_deref(), Some("ff"));
```

## Mixed arithmetic

Operators accept primitive integers on either side and produce a
[`BigInt`]. A float operand produces an `f64`. [`Number`] holds either kind
and applies the same promotion at run time.
*/

#![cfg_attr(not(any(test, feature = "std")), no_std)]
extern crate alloc;

pub mod config;
pub mod error;
pub mod int;
pub mod number;
pub mod word;

pub use config::{
    Config, Int1024, Int128, Int256, Int512, Int64, Width, W1024, W128, W256,
    W512, W64,
};
pub use error::{ConfigError, ParseErrorKind, ParseIntError};
pub use int::{BigInt, ToBigInt};
pub use number::Number;
