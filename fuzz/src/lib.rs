use fixint::Int256;
use libfuzzer_sys::arbitrary::{
    Arbitrary, Result as ArbitraryResult, Unstructured,
};

type Words = [u32; 8];

#[derive(Debug)]
pub struct Operands {
    pub lhs: Int256,
    pub rhs: Int256,
}

#[derive(Debug)]
pub struct Formatted {
    pub value: Int256,
    pub base: u32,
    pub unsigned: bool,
}

impl<'a> Arbitrary<'a> for Operands {
    fn arbitrary(u: &mut Unstructured<'a>) -> ArbitraryResult<Self> {
        let lhs: Words = u.arbitrary()?;
        let rhs: Words = u.arbitrary()?;
        Ok(Operands {
            lhs: Int256::from_words(lhs),
            rhs: Int256::from_words(rhs),
        })
    }
}

impl<'a> Arbitrary<'a> for Formatted {
    fn arbitrary(u: &mut Unstructured<'a>) -> ArbitraryResult<Self> {
        let words: Words = u.arbitrary()?;
        let base = u.int_in_range(2..=36)?;
        let unsigned = u.arbitrary()?;
        Ok(Formatted { value: Int256::from_words(words), base, unsigned })
    }
}
