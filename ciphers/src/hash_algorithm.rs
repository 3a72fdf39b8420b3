//! This module provides the registry of hash functions keystretch supports and lets callers pick
//! one at runtime (using an enum) instead of at compile time (using generics).

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use keystretch_cipher_traits::primitives::{HmacError, HmacInstance};

use crate::subtle::rust_crypto::hmac::{
    HmacBlake2b512, HmacBlake2s256, HmacSha1, HmacSha224, HmacSha256, HmacSha384, HmacSha3_224,
    HmacSha3_256, HmacSha3_384, HmacSha3_512, HmacSha512, HmacSha512_224, HmacSha512_256,
};

/// The requested hash function is not in the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported hash algorithm {0:?}")]
pub struct UnsupportedAlgorithm(pub String);

/// Closed set of hash functions usable as HMAC for key derivation.
///
/// Implements [`HmacInstance`] to allow computing the HMAC using the respective algorithm.
/// Names are matched exactly and are case-sensitive.
///
/// ```rust
/// use keystretch_ciphers::HashAlgorithm;
/// use keystretch_cipher_traits::primitives::HmacInstance;
///
/// let algo: HashAlgorithm = "sha256".parse()?;
/// assert_eq!(algo, HashAlgorithm::Sha256);
/// assert_eq!(algo.hash_len(), 32);
/// assert_eq!(algo.to_string(), "sha256");
///
/// assert!("SHA256".parse::<HashAlgorithm>().is_err());
/// assert!("md4".parse::<HashAlgorithm>().is_err());
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashAlgorithm {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b512,
    Blake2s256,
}

impl HashAlgorithm {
    /// Every supported algorithm, in registry order.
    pub const ALL: [HashAlgorithm; 13] = [
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha512_224,
        Self::Sha512_256,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Blake2b512,
        Self::Blake2s256,
    ];

    /// The registry name of this algorithm
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha512_224 => "sha512/224",
            Self::Sha512_256 => "sha512/256",
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
            Self::Blake2b512 => "blake2b512",
            Self::Blake2s256 => "blake2s256",
        }
    }

    /// Digest length of the algorithm in bytes
    pub const fn hash_len(self) -> usize {
        use keystretch_cipher_traits::algorithms::*;
        match self {
            Self::Sha1 => hmac_sha1::HASH_LEN,
            Self::Sha224 => hmac_sha224::HASH_LEN,
            Self::Sha256 => hmac_sha256::HASH_LEN,
            Self::Sha384 => hmac_sha384::HASH_LEN,
            Self::Sha512 => hmac_sha512::HASH_LEN,
            Self::Sha512_224 => hmac_sha512_224::HASH_LEN,
            Self::Sha512_256 => hmac_sha512_256::HASH_LEN,
            Self::Sha3_224 => hmac_sha3_224::HASH_LEN,
            Self::Sha3_256 => hmac_sha3_256::HASH_LEN,
            Self::Sha3_384 => hmac_sha3_384::HASH_LEN,
            Self::Sha3_512 => hmac_sha3_512::HASH_LEN,
            Self::Blake2b512 => hmac_blake2b512::HASH_LEN,
            Self::Blake2s256 => hmac_blake2s256::HASH_LEN,
        }
    }

    /// Looks up an algorithm by its registry name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algo| algo.name() == name)
    }

    /// Names of all supported algorithms
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::name)
    }
}

impl HmacInstance for HashAlgorithm {
    type Error = HmacError;

    fn hash_len(&self) -> usize {
        HashAlgorithm::hash_len(*self)
    }

    fn hmac(&self, key: &[u8], data: &[u8], out: &mut [u8]) -> Result<(), Self::Error> {
        match self {
            Self::Sha1 => HmacSha1::new().hmac(key, data, out),
            Self::Sha224 => HmacSha224::new().hmac(key, data, out),
            Self::Sha256 => HmacSha256::new().hmac(key, data, out),
            Self::Sha384 => HmacSha384::new().hmac(key, data, out),
            Self::Sha512 => HmacSha512::new().hmac(key, data, out),
            Self::Sha512_224 => HmacSha512_224::new().hmac(key, data, out),
            Self::Sha512_256 => HmacSha512_256::new().hmac(key, data, out),
            Self::Sha3_224 => HmacSha3_224::new().hmac(key, data, out),
            Self::Sha3_256 => HmacSha3_256::new().hmac(key, data, out),
            Self::Sha3_384 => HmacSha3_384::new().hmac(key, data, out),
            Self::Sha3_512 => HmacSha3_512::new().hmac(key, data, out),
            Self::Blake2b512 => HmacBlake2b512::new().hmac(key, data, out),
            Self::Blake2s256 => HmacBlake2s256::new().hmac(key, data, out),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = UnsupportedAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnsupportedAlgorithm(s.to_owned()))
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = UnsupportedAlgorithm;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HashAlgorithm> for String {
    fn from(algo: HashAlgorithm) -> Self {
        algo.name().to_owned()
    }
}

impl Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_registry() {
        for algo in HashAlgorithm::ALL {
            assert_eq!(HashAlgorithm::from_name(algo.name()), Some(algo));
        }
        assert_eq!(HashAlgorithm::names().count(), HashAlgorithm::ALL.len());
    }

    #[test]
    fn unknown_names_are_unsupported() {
        for name in ["", "not-a-real-hash", "SHA1", " sha1", "sha3_256", "md5"] {
            assert_eq!(
                name.parse::<HashAlgorithm>(),
                Err(UnsupportedAlgorithm(name.to_owned()))
            );
        }
    }

    #[test]
    fn hmac_dispatch_produces_hash_len_bytes() -> anyhow::Result<()> {
        for algo in HashAlgorithm::ALL {
            let mut out = vec![0u8; HmacInstance::hash_len(&algo)];
            algo.hmac(b"key", b"message", &mut out)?;
            assert!(out.iter().any(|b| *b != 0), "{algo} produced an all-zero tag");
        }
        Ok(())
    }

    #[test]
    fn hmac_dispatch_checks_output_buffer() {
        let mut out = [0u8; 21];
        assert_eq!(
            HashAlgorithm::Sha1.hmac(b"key", b"message", &mut out),
            Err(HmacError::InvalidOutputLength {
                expected: 20,
                actual: 21
            })
        );
    }

    #[test]
    fn algorithms_serialize_as_names() -> anyhow::Result<()> {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            algorithm: HashAlgorithm,
        }

        let text = toml::to_string(&Wrapper {
            algorithm: HashAlgorithm::Sha512_256,
        })?;
        assert_eq!(text.trim(), r#"algorithm = "sha512/256""#);

        let parsed: Wrapper = toml::from_str(r#"algorithm = "sha3-384""#)?;
        assert_eq!(parsed.algorithm, HashAlgorithm::Sha3_384);

        assert!(toml::from_str::<Wrapper>(r#"algorithm = "whirlpool""#).is_err());
        Ok(())
    }
}
