//! Key stretching with PBKDF2 and constant-time comparison of secrets.
//!
//! Both primitives are pure functions over byte strings: no I/O, no shared state, safe to call
//! from any number of threads at once. PBKDF2 runs to completion on the calling thread; its cost
//! is controlled by the iteration count alone.
//!
//! ```rust
//! use keystretch::{compare, derive_key};
//!
//! let stored = derive_key("sha256", b"correct horse", b"per-user salt", 1_000, 32)?;
//! let attempt = derive_key("sha256", b"battery staple", b"per-user salt", 1_000, 32)?;
//! assert!(!compare(&stored, &attempt));
//! # Ok::<(), keystretch::Error>(())
//! ```
//!
//! The hash functions are provided by `keystretch-ciphers`; [HashAlgorithm] lists them.

pub mod config;
mod error;
mod params;
pub mod pbkdf2;

pub use error::{Error, Result};
pub use keystretch_ciphers::{HashAlgorithm, UnsupportedAlgorithm};
pub use params::{derive_key, Pbkdf2Params, DEFAULT_ITERATIONS};

/// Compares a secret with a candidate without leaking where they differ.
///
/// For inputs of equal length the running time depends only on the length. Inputs of different
/// length are unequal; that case returns immediately, leaking only the lengths.
///
/// ```rust
/// use keystretch::compare;
///
/// assert!(compare(b"", b""));
/// assert!(compare(b"tag", b"tag"));
/// assert!(!compare(b"tag", b"taG"));
/// assert!(!compare(b"tag", b"tags"));
/// ```
#[inline]
pub fn compare(known: &[u8], candidate: &[u8]) -> bool {
    keystretch_constant_time::memcmp(known, candidate)
}
