//! Implementations backed by RustCrypto

pub mod hmac;
