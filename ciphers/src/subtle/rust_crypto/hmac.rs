use std::marker::PhantomData;

use hmac::digest::crypto_common::BlockSizeUser;
use hmac::digest::typenum::Unsigned;
use hmac::digest::{Digest, OutputSizeUser};
use hmac::{Mac, SimpleHmac};
use static_assertions::const_assert_eq;
use zeroize::Zeroize;

use keystretch_cipher_traits::algorithms::*;
use keystretch_cipher_traits::primitives::{Hmac, HmacError, InferHmac};

/// An implementation of the [`Hmac`] trait backed by the RustCrypto implementation of HMAC
/// ([SimpleHmac]) over the hash function `D`.
///
/// `HASH_LEN` must equal the digest length of `D`; the aliases in this module are checked at
/// compile time, any other instantiation fails at runtime with
/// [HmacError::InvalidOutputLength].
///
/// # Examples
///
/// ```rust
/// use keystretch_ciphers::subtle::rust_crypto::hmac::HmacSha256Core;
/// use keystretch_cipher_traits::primitives::Hmac;
///
/// let mut tag = [0u8; 32];
/// HmacSha256Core::hmac(b"Jefe", b"what do ya want for nothing?", &mut tag)?;
/// assert_eq!(tag[..4], [0x5b, 0xdc, 0xc1, 0x46]);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct RustCryptoHmac<D, const HASH_LEN: usize>(PhantomData<D>);

impl<D, const HASH_LEN: usize> Hmac<HASH_LEN> for RustCryptoHmac<D, HASH_LEN>
where
    D: Digest + BlockSizeUser,
{
    type Error = HmacError;

    fn hmac(key: &[u8], data: &[u8], out: &mut [u8; HASH_LEN]) -> Result<(), Self::Error> {
        // HMAC accepts keys of any length, so this does not fail in practice
        let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(key)
            .map_err(|_| HmacError::InternalError)?;
        Mac::update(&mut mac, data);

        let mut tag = Mac::finalize(mac).into_bytes();
        let res = HmacError::check_output_len(tag.len(), HASH_LEN);
        if res.is_ok() {
            out.copy_from_slice(&tag);
        }
        tag.as_mut_slice().zeroize();
        res
    }
}

/// Binds a RustCrypto hash function to an [InferHmac] alias and checks its digest length
/// against the constant from [keystretch_cipher_traits::algorithms].
macro_rules! rust_crypto_hmac {
    ($(#[$attr:meta])* $core:ident, $instance:ident, $digest:ty, $module:ident :: $marker:ident) => {
        $(#[$attr])*
        pub type $core = RustCryptoHmac<$digest, { $module::HASH_LEN }>;

        #[doc = concat!("[InferHmac] over [", stringify!($core), "], usable as an `HmacInstance`.")]
        pub type $instance = InferHmac<$core, { $module::HASH_LEN }>;

        const_assert_eq!(
            <<$digest as OutputSizeUser>::OutputSize as Unsigned>::USIZE,
            $module::HASH_LEN
        );

        impl $module::$marker for $core {}
    };
}

rust_crypto_hmac!(
    /// HMAC-SHA1
    HmacSha1Core, HmacSha1, sha1::Sha1, hmac_sha1::HmacSha1
);
rust_crypto_hmac!(
    /// HMAC-SHA224
    HmacSha224Core, HmacSha224, sha2::Sha224, hmac_sha224::HmacSha224
);
rust_crypto_hmac!(
    /// HMAC-SHA256
    HmacSha256Core, HmacSha256, sha2::Sha256, hmac_sha256::HmacSha256
);
rust_crypto_hmac!(
    /// HMAC-SHA384
    HmacSha384Core, HmacSha384, sha2::Sha384, hmac_sha384::HmacSha384
);
rust_crypto_hmac!(
    /// HMAC-SHA512
    HmacSha512Core, HmacSha512, sha2::Sha512, hmac_sha512::HmacSha512
);
rust_crypto_hmac!(
    /// HMAC-SHA512/224
    HmacSha512_224Core, HmacSha512_224, sha2::Sha512_224, hmac_sha512_224::HmacSha512_224
);
rust_crypto_hmac!(
    /// HMAC-SHA512/256
    HmacSha512_256Core, HmacSha512_256, sha2::Sha512_256, hmac_sha512_256::HmacSha512_256
);
rust_crypto_hmac!(
    /// HMAC-SHA3-224
    HmacSha3_224Core, HmacSha3_224, sha3::Sha3_224, hmac_sha3_224::HmacSha3_224
);
rust_crypto_hmac!(
    /// HMAC-SHA3-256
    HmacSha3_256Core, HmacSha3_256, sha3::Sha3_256, hmac_sha3_256::HmacSha3_256
);
rust_crypto_hmac!(
    /// HMAC-SHA3-384
    HmacSha3_384Core, HmacSha3_384, sha3::Sha3_384, hmac_sha3_384::HmacSha3_384
);
rust_crypto_hmac!(
    /// HMAC-SHA3-512
    HmacSha3_512Core, HmacSha3_512, sha3::Sha3_512, hmac_sha3_512::HmacSha3_512
);
rust_crypto_hmac!(
    /// HMAC over unkeyed BLAKE2b-512
    HmacBlake2b512Core, HmacBlake2b512, blake2::Blake2b512, hmac_blake2b512::HmacBlake2b512
);
rust_crypto_hmac!(
    /// HMAC over unkeyed BLAKE2s-256
    HmacBlake2s256Core, HmacBlake2s256, blake2::Blake2s256, hmac_blake2s256::HmacBlake2s256
);

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use keystretch_cipher_traits::primitives::HmacInstance;

    const KEY: &[u8] = b"Jefe";
    const DATA: &[u8] = b"what do ya want for nothing?";

    // RFC 2202 / RFC 4231 test case 2
    #[test]
    fn hmac_sha1_rfc2202() -> Result<(), HmacError> {
        let mut out = [0u8; 20];
        HmacSha1Core::hmac(KEY, DATA, &mut out)?;
        assert_eq!(out, hex!("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"));
        Ok(())
    }

    #[test]
    fn hmac_sha2_rfc4231() -> Result<(), HmacError> {
        let mut out = [0u8; 28];
        HmacSha224Core::hmac(KEY, DATA, &mut out)?;
        assert_eq!(
            out,
            hex!("a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44")
        );

        let mut out = [0u8; 32];
        HmacSha256Core::hmac(KEY, DATA, &mut out)?;
        assert_eq!(
            out,
            hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
        );

        let mut out = [0u8; 48];
        HmacSha384Core::hmac(KEY, DATA, &mut out)?;
        assert_eq!(
            out,
            hex!(
                "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e"
                "8e2240ca5e69e2c78b3239ecfab21649"
            )
        );

        let mut out = [0u8; 64];
        HmacSha512Core::hmac(KEY, DATA, &mut out)?;
        assert_eq!(
            out,
            hex!(
                "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554"
                "9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
            )
        );
        Ok(())
    }

    #[test]
    fn hmac_sha256_long_key_is_hashed_first() -> Result<(), HmacError> {
        // RFC 4231 test case 6, 131 byte key
        let key = [0xaau8; 131];
        let mut out = [0u8; 32];
        HmacSha256Core::hmac(
            &key,
            b"Test Using Larger Than Block-Size Key - Hash Key First",
            &mut out,
        )?;
        assert_eq!(
            out,
            hex!("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54")
        );
        Ok(())
    }

    #[test]
    fn hmac_sha3_and_blake2() -> Result<(), HmacError> {
        let mut out = [0u8; 32];
        HmacSha3_256::new().hmac(KEY, DATA, &mut out)?;
        assert_eq!(
            out,
            hex!("c7d4072e788877ae3596bbb0da73b887c9171f93095b294ae857fbe2645e1ba5")
        );

        HmacBlake2s256::new().hmac(KEY, DATA, &mut out)?;
        assert_eq!(
            out,
            hex!("90b6281e2f3038c9056af0b4a7e763cae6fe5d9eb4386a0ec95237890c104ff0")
        );
        Ok(())
    }

    #[test]
    fn mismatched_hash_len_is_rejected() {
        // SHA-256 produces 32 bytes, not 20
        let mut out = [0u8; 20];
        assert_eq!(
            RustCryptoHmac::<sha2::Sha256, 20>::hmac(KEY, DATA, &mut out),
            Err(HmacError::InvalidOutputLength {
                expected: 32,
                actual: 20
            })
        );
        assert_eq!(out, [0u8; 20]);
    }
}
