//! The hashing collaborator of keystretch.
//!
//! [subtle] contains the HMAC implementations; [hash_algorithm] is the registry that names them
//! and picks one at runtime.
//!
//! ```rust
//! use keystretch_ciphers::{HashAlgorithm, HmacInstance};
//!
//! let algo: HashAlgorithm = "sha1".parse()?;
//! let mut tag = vec![0u8; algo.hash_len()];
//! algo.hmac(b"key", b"The quick brown fox jumps over the lazy dog", &mut tag)?;
//! assert_eq!(tag[..4], [0xde, 0x7c, 0x9b, 0x85]);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod hash_algorithm;
pub mod subtle;

pub use hash_algorithm::{HashAlgorithm, UnsupportedAlgorithm};
pub use keystretch_cipher_traits::primitives::{HmacError, HmacInstance};
