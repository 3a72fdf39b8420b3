use std::marker::PhantomData;

use thiserror::Error;

/// Models HMAC (RFC 2104) over a fixed hash function using an associated function (i.e. without
/// `&self` receiver).
///
/// Unlike most keyed primitives, HMAC accepts keys of arbitrary length: keys longer than the
/// block size of the underlying hash are hashed first, shorter keys are zero-padded. PBKDF2 relies
/// on this, since it keys the HMAC with the password.
pub trait Hmac<const HASH_LEN: usize> {
    /// The error type used to signal what went wrong.
    type Error;

    /// Computes the HMAC of `data` under `key` and writes the tag to `out`
    fn hmac(key: &[u8], data: &[u8], out: &mut [u8; HASH_LEN]) -> Result<(), Self::Error>;
}

/// Models HMAC using a method (i.e. with a `&self` receiver) and a tag length known only at
/// runtime.
///
/// This is the capability the key derivation consumes. It can be implemented by an enum
/// choosing between several hash functions at runtime (like `HashAlgorithm` in
/// `keystretch-ciphers`) or by any static [`Hmac`] through [`InferHmac`].
///
/// ```
/// use keystretch_cipher_traits::primitives::{HmacError, HmacInstance};
///
/// /// Not a MAC at all; just shows the calling convention.
/// struct XorTag;
///
/// impl HmacInstance for XorTag {
///     type Error = HmacError;
///
///     fn hash_len(&self) -> usize {
///         1
///     }
///
///     fn hmac(&self, key: &[u8], data: &[u8], out: &mut [u8]) -> Result<(), HmacError> {
///         HmacError::check_output_len(self.hash_len(), out.len())?;
///         out[0] = key.iter().chain(data).fold(0u8, |acc, b| acc ^ b);
///         Ok(())
///     }
/// }
///
/// let mut tag = [0u8; 1];
/// XorTag.hmac(b"\x01", b"\x02", &mut tag)?;
/// assert_eq!(tag, [3]);
/// assert!(XorTag.hmac(b"", b"", &mut [0u8; 2]).is_err());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub trait HmacInstance {
    /// The error type used to signal what went wrong.
    type Error;

    /// Length of the produced tag in bytes; the digest length of the underlying hash.
    fn hash_len(&self) -> usize;

    /// Computes the HMAC of `data` under `key` and writes the tag to `out`.
    ///
    /// `out` must be exactly [Self::hash_len] bytes long.
    fn hmac(&self, key: &[u8], data: &[u8], out: &mut [u8]) -> Result<(), Self::Error>;
}

/// This is a helper to allow for type parameter inference when calling functions
/// that need a [HmacInstance].
///
/// Really just binds the [Hmac] trait to a dummy variable, so the type of this dummy variable
/// can be used for type inference.
#[derive(Debug, PartialEq, Eq)]
pub struct InferHmac<Static, const HASH_LEN: usize>
where
    Static: Hmac<HASH_LEN>,
{
    pub _phantom_hmac: PhantomData<*const Static>,
}

impl<Static, const HASH_LEN: usize> InferHmac<Static, HASH_LEN>
where
    Static: Hmac<HASH_LEN>,
{
    pub const HASH_LEN: usize = HASH_LEN;

    pub const fn new() -> Self {
        Self {
            _phantom_hmac: PhantomData,
        }
    }

    pub const fn hash_len(self) -> usize {
        Self::HASH_LEN
    }
}

impl<Static, const HASH_LEN: usize> HmacInstance for InferHmac<Static, HASH_LEN>
where
    Static: Hmac<HASH_LEN, Error = Error>,
{
    type Error = Error;

    fn hash_len(&self) -> usize {
        HASH_LEN
    }

    fn hmac(&self, key: &[u8], data: &[u8], out: &mut [u8]) -> Result<(), Error> {
        let actual = out.len();
        let out: &mut [u8; HASH_LEN] = out.try_into().map_err(|_| Error::InvalidOutputLength {
            expected: HASH_LEN,
            actual,
        })?;
        Static::hmac(key, data, out)
    }
}

// Helper traits /////////////////////////////////////////////

impl<Static, const HASH_LEN: usize> Default for InferHmac<Static, HASH_LEN>
where
    Static: Hmac<HASH_LEN>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Static, const HASH_LEN: usize> Clone for InferHmac<Static, HASH_LEN>
where
    Static: Hmac<HASH_LEN>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<Static, const HASH_LEN: usize> Copy for InferHmac<Static, HASH_LEN> where Static: Hmac<HASH_LEN> {}

/// The error returned by HMAC operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An internal error occurred. This should never happen and indicates an error in the
    /// HMAC implementation.
    #[error("internal error")]
    InternalError,

    /// The output buffer does not match the tag length of the hash function.
    #[error("output buffer has length {actual}, but the hash produces {expected} bytes")]
    InvalidOutputLength { expected: usize, actual: usize },
}

impl Error {
    /// Helper function to check an output buffer size
    pub fn check_output_len(expected: usize, actual: usize) -> Result<(), Self> {
        if expected != actual {
            Err(Self::InvalidOutputLength { expected, actual })
        } else {
            Ok(())
        }
    }
}
