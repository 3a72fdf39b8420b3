//! Keystretch internal traits describing the hashing collaborator of the key derivation.
//!
//! The derivation only ever talks to an [HmacInstance]: something that knows its tag length and
//! can compute an HMAC under an arbitrary-length key. [algorithms] pins down the tag lengths of
//! all hash functions keystretch supports.

pub mod algorithms;
pub mod primitives;

pub use algorithms::*;
pub use primitives::*;
