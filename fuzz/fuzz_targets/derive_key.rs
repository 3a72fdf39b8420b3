#![no_main]
extern crate arbitrary;
extern crate keystretch;

use libfuzzer_sys::fuzz_target;

use keystretch::{derive_key, Error};

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub algorithm: String,
    pub password: Box<[u8]>,
    pub salt: Box<[u8]>,
    pub iterations: u8,
    pub output_len: u16,
}

fuzz_target!(|input: Input| {
    // Bound the work per run
    let iterations = (input.iterations % 8) as u32;
    let output_len = (input.output_len % 512) as usize;

    match derive_key(
        &input.algorithm,
        &input.password,
        &input.salt,
        iterations,
        output_len,
    ) {
        Ok(key) => assert_eq!(key.len(), output_len),
        Err(Error::UnsupportedAlgorithm(_)) => {
            assert!(input.algorithm.parse::<keystretch::HashAlgorithm>().is_err())
        }
        Err(Error::InvalidIterationCount(0)) => assert_eq!(iterations, 0),
        Err(e) => panic!("unexpected error: {e}"),
    }
});
