#![no_main]
extern crate arbitrary;

use libfuzzer_sys::fuzz_target;

use keystretch_cipher_traits::primitives::HmacInstance as _;
use keystretch_ciphers::HashAlgorithm;

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub algorithm: u8,
    pub key: Box<[u8]>,
    pub data: Box<[u8]>,
}

fuzz_target!(|input: Input| {
    let algo = HashAlgorithm::ALL[input.algorithm as usize % HashAlgorithm::ALL.len()];
    let mut out = vec![0u8; algo.hash_len()];

    algo.hmac(&input.key, &input.data, &mut out).unwrap();
});
