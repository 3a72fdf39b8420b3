//! PBKDF2 (RFC 8018, section 5.2) over any [HmacInstance].
//!
//! The hash function is a capability handed in by the caller; this module only implements the
//! block chaining. Use [crate::Pbkdf2Params] or [crate::derive_key] to pick a hash function from
//! the registry.

use keystretch_cipher_traits::primitives::HmacInstance;
use keystretch_constant_time::xor;
use zeroize::{Zeroize, Zeroizing};

use crate::{Error, Result};

/// The block index is encoded as a 32-bit big-endian integer, so there are at most this many
/// blocks.
pub const MAX_BLOCK_COUNT: u32 = u32::MAX;

/// Maximum number of bytes PBKDF2 can derive with a hash producing `hash_len` bytes
pub fn max_output_len(hash_len: usize) -> usize {
    (MAX_BLOCK_COUNT as usize).saturating_mul(hash_len)
}

/// Derives `output_len` bytes from `password` and `salt`.
///
/// Performs `iterations` HMAC evaluations per block of `prf.hash_len()` bytes. Fails with
/// [Error::InvalidIterationCount] for zero iterations and with [Error::OutputTooLong] if
/// `output_len` exceeds [max_output_len]; both checks run before any HMAC is evaluated.
///
/// A hash function with an empty output cannot produce any key material; in that case an empty
/// vector is returned.
///
/// # Examples
///
/// ```rust
/// use keystretch::pbkdf2::pbkdf2;
/// use keystretch::HashAlgorithm;
///
/// // RFC 6070, test case 2
/// let dk = pbkdf2(&HashAlgorithm::Sha1, b"password", b"salt", 2, 20)?;
/// assert_eq!(dk[..4], [0xea, 0x6c, 0x01, 0x4d]);
/// # Ok::<(), keystretch::Error>(())
/// ```
pub fn pbkdf2<H>(
    prf: &H,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Result<Vec<u8>>
where
    H: HmacInstance,
    Error: From<H::Error>,
{
    if prf.hash_len() == 0 {
        Error::check_iterations(iterations)?;
        log::warn!("hash function produces no output, deriving an empty key");
        return Ok(Vec::new());
    }
    check_params(prf.hash_len(), iterations, output_len)?;

    let mut out = Zeroizing::new(vec![0u8; output_len]);
    pbkdf2_into(prf, password, salt, iterations, &mut out)?;
    Ok(std::mem::take(&mut *out))
}

/// Fills `out` with PBKDF2 output; the output length is `out.len()`.
///
/// Same as [pbkdf2], except that a hash function with an empty output can only fill an empty
/// buffer; for a non-empty buffer this fails with [Error::OutputTooLong]. If an HMAC evaluation
/// fails, `out` is zeroized before the error is returned.
pub fn pbkdf2_into<H>(
    prf: &H,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<()>
where
    H: HmacInstance,
    Error: From<H::Error>,
{
    let hash_len = prf.hash_len();
    check_params(hash_len, iterations, out.len())?;
    if out.is_empty() {
        return Ok(());
    }

    log::debug!(
        "deriving {} bytes in {} blocks of {hash_len} bytes, {iterations} iterations",
        out.len(),
        out.len().div_ceil(hash_len)
    );

    let res = fill_blocks(prf, password, salt, iterations, out);
    if res.is_err() {
        out.zeroize();
    }
    res
}

fn check_params(hash_len: usize, iterations: u32, output_len: usize) -> Result<()> {
    Error::check_iterations(iterations)?;
    Error::check_output_len(output_len, max_output_len(hash_len))
}

/// Computes `T_i = U_1 ^ U_2 ^ ... ^ U_c` for every block and writes it to `out`, truncating
/// the last block.
fn fill_blocks<H>(
    prf: &H,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<()>
where
    H: HmacInstance,
    Error: From<H::Error>,
{
    let hash_len = prf.hash_len();

    let mut message = Zeroizing::new(Vec::with_capacity(salt.len() + 4));
    let mut u = Zeroizing::new(vec![0u8; hash_len]);
    let mut next = Zeroizing::new(vec![0u8; hash_len]);
    let mut t = Zeroizing::new(vec![0u8; hash_len]);

    for (block, index) in out.chunks_mut(hash_len).zip(1..=MAX_BLOCK_COUNT) {
        log::trace!("computing block {index}");

        // U_1 = PRF(P, S || INT(i))
        message.clear();
        message.extend_from_slice(salt);
        message.extend_from_slice(&index.to_be_bytes());
        prf.hmac(password, &message, &mut u)?;
        t.copy_from_slice(&u);

        // U_j = PRF(P, U_{j-1})
        for _ in 1..iterations {
            prf.hmac(password, &u, &mut next)?;
            xor(&mut t, &next);
            std::mem::swap(&mut u, &mut next);
        }

        block.copy_from_slice(&t[..block.len()]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use keystretch_cipher_traits::primitives::HmacError;

    use super::*;

    /// Records every call; the tag is the big-endian call counter repeated over the output.
    struct Recording {
        hash_len: usize,
        calls: Cell<usize>,
        messages: RefCell<Vec<Vec<u8>>>,
        fail_at: Option<usize>,
    }

    impl Recording {
        fn new(hash_len: usize) -> Self {
            Self {
                hash_len,
                calls: Cell::new(0),
                messages: RefCell::new(Vec::new()),
                fail_at: None,
            }
        }
    }

    impl HmacInstance for Recording {
        type Error = HmacError;

        fn hash_len(&self) -> usize {
            self.hash_len
        }

        fn hmac(&self, _key: &[u8], data: &[u8], out: &mut [u8]) -> Result<(), HmacError> {
            HmacError::check_output_len(self.hash_len, out.len())?;
            let call = self.calls.get() + 1;
            self.calls.set(call);
            self.messages.borrow_mut().push(data.to_vec());
            if self.fail_at == Some(call) {
                return Err(HmacError::InternalError);
            }
            out.fill(call as u8);
            Ok(())
        }
    }

    #[test]
    fn iterations_is_number_of_hmac_calls_per_block() -> anyhow::Result<()> {
        for iterations in [1u32, 2, 3, 17] {
            let prf = Recording::new(4);
            let out = pbkdf2(&prf, b"pw", b"salt", iterations, 10)?;
            assert_eq!(out.len(), 10);
            // 3 blocks of 4 bytes for 10 bytes of output
            assert_eq!(prf.calls.get(), 3 * iterations as usize);
        }
        Ok(())
    }

    #[test]
    fn first_message_is_salt_and_big_endian_block_index() -> anyhow::Result<()> {
        let prf = Recording::new(2);
        pbkdf2(&prf, b"pw", b"NaCl", 2, 6)?;

        let messages = prf.messages.borrow();
        assert_eq!(messages.len(), 6);
        assert_eq!(messages[0], b"NaCl\x00\x00\x00\x01");
        // subsequent messages are the previous tag
        assert_eq!(messages[1], [1, 1]);
        assert_eq!(messages[2], b"NaCl\x00\x00\x00\x02");
        assert_eq!(messages[3], [3, 3]);
        assert_eq!(messages[4], b"NaCl\x00\x00\x00\x03");
        Ok(())
    }

    #[test]
    fn blocks_are_xor_of_all_tags() -> anyhow::Result<()> {
        // tags are 1, 2, 3 in block one and 4, 5, 6 in block two
        let prf = Recording::new(2);
        let out = pbkdf2(&prf, b"", b"", 3, 3)?;
        assert_eq!(out, [1 ^ 2 ^ 3, 1 ^ 2 ^ 3, 4 ^ 5 ^ 6]);
        Ok(())
    }

    #[test]
    fn zero_iterations_is_rejected_before_hashing() {
        let prf = Recording::new(4);
        assert!(matches!(
            pbkdf2(&prf, b"pw", b"salt", 0, 16),
            Err(Error::InvalidIterationCount(0))
        ));
        assert!(matches!(
            pbkdf2_into(&prf, b"pw", b"salt", 0, &mut [0u8; 16]),
            Err(Error::InvalidIterationCount(0))
        ));
        assert_eq!(prf.calls.get(), 0);
    }

    #[test]
    fn empty_output_needs_no_hmac() -> anyhow::Result<()> {
        let prf = Recording::new(4);
        assert!(pbkdf2(&prf, b"pw", b"salt", 1000, 0)?.is_empty());
        assert_eq!(prf.calls.get(), 0);
        Ok(())
    }

    #[test]
    fn zero_length_hash_yields_empty_key() -> anyhow::Result<()> {
        let prf = Recording::new(0);
        assert!(pbkdf2(&prf, b"pw", b"salt", 5, 32)?.is_empty());
        assert!(matches!(
            pbkdf2_into(&prf, b"pw", b"salt", 5, &mut [0u8; 32]),
            Err(Error::OutputTooLong {
                requested: 32,
                max: 0
            })
        ));
        pbkdf2_into(&prf, b"pw", b"salt", 5, &mut [])?;
        assert_eq!(prf.calls.get(), 0);
        Ok(())
    }

    #[test]
    fn output_length_is_bounded_by_block_counter() {
        assert_eq!(max_output_len(20), u32::MAX as usize * 20);
        assert!(Error::check_output_len(max_output_len(1), max_output_len(1)).is_ok());

        #[cfg(target_pointer_width = "64")]
        {
            let prf = Recording::new(1);
            assert!(matches!(
                pbkdf2(&prf, b"pw", b"salt", 1, u32::MAX as usize + 1),
                Err(Error::OutputTooLong { .. })
            ));
            assert_eq!(prf.calls.get(), 0);
        }
    }

    #[test]
    fn failed_hmac_wipes_partial_output() {
        let mut prf = Recording::new(4);
        // fails in the second block
        prf.fail_at = Some(3);

        let mut out = [0xffu8; 8];
        assert!(matches!(
            pbkdf2_into(&prf, b"pw", b"salt", 2, &mut out),
            Err(Error::Hmac(HmacError::InternalError))
        ));
        assert_eq!(out, [0u8; 8]);
    }
}
