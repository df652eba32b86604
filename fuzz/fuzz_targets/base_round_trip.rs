#![no_main]
use fixint::Int256;
use fixint_fuzz::Formatted;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: Formatted| {
    let Formatted { value, base, unsigned } = input;
    let s = value
        .to_base_string(base, Some(unsigned))
        .expect("base is in range");
    assert_eq!(Int256::from_base_str(&s, base), Some(value));
});
