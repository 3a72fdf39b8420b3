#![no_main]
extern crate arbitrary;
extern crate keystretch;

use libfuzzer_sys::fuzz_target;

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub a: Box<[u8]>,
    pub b: Box<[u8]>,
}

fuzz_target!(|input: Input| {
    assert_eq!(keystretch::compare(&input.a, &input.b), input.a == input.b);
    assert!(keystretch::compare(&input.a, &input.a));
});
