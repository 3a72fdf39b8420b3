//! Traits for the cryptographic primitives consumed by keystretch, specifically HMAC.

pub(crate) mod hmac;

pub use hmac::{Error as HmacError, Hmac, HmacInstance, InferHmac};
