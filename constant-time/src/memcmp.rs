//! memcmp

use core::hint::black_box;

use subtle::ConstantTimeEq;

/// Compares two slices of memory content and returns whether they are equal
///
/// All bytes are folded into a single accumulator (`acc |= a[i] ^ b[i]`); the loop never
/// exits early. The final test of the accumulator against zero is done with
/// [subtle::ConstantTimeEq], so the result only becomes a `bool` after passing through
/// [subtle::Choice] and its optimization barrier.
///
/// ## Leaks
/// If the two slices have differents lengths, the function will return immediately. This
/// effectively leaks the information whether the slices have equal length or not. This is widely
/// considered safe.
///
/// The execution time of the function grows approx. linear with the length of the input. This is
/// considered safe.
///
/// The loop itself is kept free of data-dependent branches by construction and by
/// [black_box]; neither is a hard guarantee against a sufficiently clever compiler.
///
/// ## Examples
///
/// ```rust
/// use keystretch_constant_time::memcmp;
/// let a = [0, 0, 0, 0];
/// let b = [0, 0, 0, 1];
/// let c = [0, 0, 0];
/// assert!(memcmp(&a, &a));
/// assert!(!memcmp(&a, &b));
/// assert!(!memcmp(&a, &c));
/// assert!(memcmp(&[], &[]));
/// ```
#[inline]
pub fn memcmp(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(accumulate_difference(a, b).ct_eq(&0u8))
}

/// OR of the XOR of all byte pairs; zero iff the slices are equal.
#[inline(never)]
fn accumulate_difference(a: &[u8], b: &[u8]) -> u8 {
    let mut acc = 0u8;
    for (av, bv) in a.iter().zip(b.iter()) {
        *black_box(&mut acc) |= black_box(*av) ^ black_box(*bv);
    }
    black_box(acc)
}
