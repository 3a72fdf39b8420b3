use std::fmt;

use zeroize::Zeroizing;

use keystretch_ciphers::HashAlgorithm;

use crate::pbkdf2::{pbkdf2, pbkdf2_into};
use crate::Result;

/// Iteration count used when none is given explicitly.
///
/// This is the OWASP recommendation for PBKDF2-HMAC-SHA256 as of 2023.
pub const DEFAULT_ITERATIONS: u32 = 600_000;

/// The parameters of a single PBKDF2 derivation.
///
/// Borrows password and salt; nothing here is ever persisted.
///
/// # Examples
///
/// ```rust
/// use keystretch::{HashAlgorithm, Pbkdf2Params};
///
/// let params = Pbkdf2Params::new(HashAlgorithm::Sha256, b"password", b"salt")
///     .iterations(1)
///     .output_len(16);
/// let key = params.derive()?;
/// assert_eq!(key.len(), 16);
/// assert!(params.verify(&key)?);
/// # Ok::<(), keystretch::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Pbkdf2Params<'a> {
    pub algorithm: HashAlgorithm,
    pub password: &'a [u8],
    pub salt: &'a [u8],
    pub iterations: u32,
    pub output_len: usize,
}

impl<'a> Pbkdf2Params<'a> {
    /// Parameters with [DEFAULT_ITERATIONS] and one hash length of output.
    pub fn new(algorithm: HashAlgorithm, password: &'a [u8], salt: &'a [u8]) -> Self {
        Self {
            algorithm,
            password,
            salt,
            iterations: DEFAULT_ITERATIONS,
            output_len: algorithm.hash_len(),
        }
    }

    /// Set iteration count
    #[must_use]
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the number of bytes to derive
    #[must_use]
    pub fn output_len(mut self, output_len: usize) -> Self {
        self.output_len = output_len;
        self
    }

    /// Derives `output_len` bytes
    pub fn derive(&self) -> Result<Vec<u8>> {
        pbkdf2(
            &self.algorithm,
            self.password,
            self.salt,
            self.iterations,
            self.output_len,
        )
    }

    /// Derives `out.len()` bytes into `out`, ignoring `output_len`
    pub fn derive_into(&self, out: &mut [u8]) -> Result<()> {
        pbkdf2_into(
            &self.algorithm,
            self.password,
            self.salt,
            self.iterations,
            out,
        )
    }

    /// Derives the key and compares it with `expected` in constant time.
    ///
    /// Returns `Ok(false)` if `expected` is not `output_len` bytes long.
    pub fn verify(&self, expected: &[u8]) -> Result<bool> {
        let derived = Zeroizing::new(self.derive()?);
        Ok(crate::compare(expected, &derived))
    }
}

impl fmt::Debug for Pbkdf2Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pbkdf2Params")
            .field("algorithm", &self.algorithm)
            .field("password", &"<SECRET>")
            .field("salt", &format_args!("<{} bytes>", self.salt.len()))
            .field("iterations", &self.iterations)
            .field("output_len", &self.output_len)
            .finish()
    }
}

/// Derives a key with PBKDF2, naming the hash function by its registry name.
///
/// Unknown names fail with [crate::Error::UnsupportedAlgorithm] before any work is done.
///
/// ```rust
/// // RFC 6070, test case 1
/// let key = keystretch::derive_key("sha1", b"password", b"salt", 1, 20)?;
/// assert_eq!(key[..4], [0x0c, 0x60, 0xc8, 0x0f]);
///
/// assert!(matches!(
///     keystretch::derive_key("not-a-real-hash", b"password", b"salt", 1, 20),
///     Err(keystretch::Error::UnsupportedAlgorithm(_))
/// ));
/// # Ok::<(), keystretch::Error>(())
/// ```
pub fn derive_key(
    algorithm: &str,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Result<Vec<u8>> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    Pbkdf2Params {
        algorithm,
        password,
        salt,
        iterations,
        output_len,
    }
    .derive()
}
