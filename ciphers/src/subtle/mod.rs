//! Implementations of the primitives in [keystretch_cipher_traits], grouped by backend.

pub mod rust_crypto;
