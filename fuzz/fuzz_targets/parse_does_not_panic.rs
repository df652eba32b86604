#![no_main]
use fixint::Int256;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, u8)| {
    let (s, radix) = data;
    _ = Int256::from_base_str(s, u32::from(radix));
    _ = s.parse::<Int256>();
    _ = Int256::convert(s);
});
