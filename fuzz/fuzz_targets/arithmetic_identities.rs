#![no_main]
use fixint::Int256;
use fixint_fuzz::Operands;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: Operands| {
    let Operands { lhs: x, rhs: y } = input;

    assert_eq!((x + y) - y, x);
    assert_eq!(x + (-x), Int256::ZERO);
    assert_eq!(x * y, y * x);
    assert_eq!(Int256::from(x.to_u64()).to_u64(), x.to_u64());

    if let Some((q, r)) = x.checked_udivmod(&y) {
        assert_eq!(y * q + r, x);
        assert!(r.ult(&y));
    }

    if let Some((q, r)) = x.checked_floor_divmod(&y) {
        assert_eq!(y * q + r, x);
        assert!(r.is_zero() || r.is_negative() == y.is_negative());
    }

    let n = y.to_u64() % 256;
    if n + (x.bit_len() as u64) < 256 {
        assert_eq!((x << n) >> n, x);
    }
});
