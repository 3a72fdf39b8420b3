//! xor

use core::hint::black_box;

/// Xors the source into the destination
///
/// Performs a constant-time XOR operation between two byte slices, in place: `dst[i] ^= src[i]`.
///
/// # Panics
/// If source and destination are of different sizes.
///
/// # Leaks
/// This function may leak timing information in the following ways:
///
/// - The function execution time is linearly proportional to the input length
/// - Length mismatches between source and destination are immediately detectable via panic
/// - Memory access patterns follow a predictable sequential pattern
///
/// These leaks are generally considered acceptable in most cryptographic contexts
/// as they don't reveal information about the actual content being XORed.
///
/// # Examples
///
/// ```
/// use keystretch_constant_time::xor;
/// let mut dst = b"hello".to_vec();
/// xor(&mut dst, b"world");
/// assert_eq!(dst, b"\x1f\n\x1e\x00\x0b");
/// ```
#[inline]
pub fn xor(dst: &mut [u8], src: &[u8]) {
    assert!(black_box(src.len()) == black_box(dst.len()));
    for (dv, sv) in dst.iter_mut().zip(src.iter()) {
        *black_box(dv) ^= black_box(*sv);
    }
}
