//! Tag lengths of the HMAC instantiations keystretch supports, one module per hash function.

pub mod hmac_sha1 {
    use crate::primitives::hmac::*;

    // SHA-1 (FIPS 180-4). Kept for interoperability, e.g. RFC 6070 and legacy password hashes.
    pub const HASH_LEN: usize = 20;

    pub trait HmacSha1: Hmac<HASH_LEN> {}
}

pub mod hmac_sha224 {
    use crate::primitives::hmac::*;

    pub const HASH_LEN: usize = 28;

    pub trait HmacSha224: Hmac<HASH_LEN> {}
}

pub mod hmac_sha256 {
    use crate::primitives::hmac::*;

    pub const HASH_LEN: usize = 32;

    pub trait HmacSha256: Hmac<HASH_LEN> {}
}

pub mod hmac_sha384 {
    use crate::primitives::hmac::*;

    pub const HASH_LEN: usize = 48;

    pub trait HmacSha384: Hmac<HASH_LEN> {}
}

pub mod hmac_sha512 {
    use crate::primitives::hmac::*;

    pub const HASH_LEN: usize = 64;

    pub trait HmacSha512: Hmac<HASH_LEN> {}
}

pub mod hmac_sha512_224 {
    use crate::primitives::hmac::*;

    // SHA-512 truncated to 224 bits, with its own initial values (FIPS 180-4, 5.3.6.1).
    pub const HASH_LEN: usize = 28;

    pub trait HmacSha512_224: Hmac<HASH_LEN> {}
}

pub mod hmac_sha512_256 {
    use crate::primitives::hmac::*;

    // SHA-512 truncated to 256 bits, with its own initial values (FIPS 180-4, 5.3.6.2).
    pub const HASH_LEN: usize = 32;

    pub trait HmacSha512_256: Hmac<HASH_LEN> {}
}

pub mod hmac_sha3_224 {
    use crate::primitives::hmac::*;

    pub const HASH_LEN: usize = 28;

    pub trait HmacSha3_224: Hmac<HASH_LEN> {}
}

pub mod hmac_sha3_256 {
    use crate::primitives::hmac::*;

    pub const HASH_LEN: usize = 32;

    pub trait HmacSha3_256: Hmac<HASH_LEN> {}
}

pub mod hmac_sha3_384 {
    use crate::primitives::hmac::*;

    pub const HASH_LEN: usize = 48;

    pub trait HmacSha3_384: Hmac<HASH_LEN> {}
}

pub mod hmac_sha3_512 {
    use crate::primitives::hmac::*;

    pub const HASH_LEN: usize = 64;

    pub trait HmacSha3_512: Hmac<HASH_LEN> {}
}

pub mod hmac_blake2b512 {
    use crate::primitives::hmac::*;

    // Unkeyed BLAKE2b with 512 bit output, keyed through the HMAC construction (not BLAKE2b's native keying).
    pub const HASH_LEN: usize = 64;

    pub trait HmacBlake2b512: Hmac<HASH_LEN> {}
}

pub mod hmac_blake2s256 {
    use crate::primitives::hmac::*;

    // Unkeyed BLAKE2s with 256 bit output, keyed through the HMAC construction.
    pub const HASH_LEN: usize = 32;

    pub trait HmacBlake2s256: Hmac<HASH_LEN> {}
}

pub use hmac_sha1::HmacSha1;
pub use hmac_sha224::HmacSha224;
pub use hmac_sha256::HmacSha256;
pub use hmac_sha384::HmacSha384;
pub use hmac_sha512::HmacSha512;
pub use hmac_sha512_224::HmacSha512_224;
pub use hmac_sha512_256::HmacSha512_256;
pub use hmac_sha3_224::HmacSha3_224;
pub use hmac_sha3_256::HmacSha3_256;
pub use hmac_sha3_384::HmacSha3_384;
pub use hmac_sha3_512::HmacSha3_512;
pub use hmac_blake2b512::HmacBlake2b512;
pub use hmac_blake2s256::HmacBlake2s256;
