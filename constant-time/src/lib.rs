#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
//! constant-time implementations of some primitives
//!
//! Keystretch internal library providing basic constant-time operations on byte strings.
//!
//! # Examples
//!
//! ```rust
//! use keystretch_constant_time::{memcmp, xor};
//!
//! let a = [1, 2, 3, 4];
//! let b = [1, 2, 3, 4];
//! let c = [1, 2, 3, 5];
//!
//! // Compare for equality
//! assert!(memcmp(&a, &b));
//! assert!(!memcmp(&a, &c));
//!
//! // Xor in place
//! let mut d = a;
//! xor(&mut d, &c);
//! assert_eq!(d, [0, 0, 0, 1]);
//! ```
//!
//! # Security Notes
//!
//! While these functions aim to be constant-time, they may leak timing information in some cases:
//!
//! - Length mismatches between inputs are immediately detectable
//! - Execution time scales linearly with input size

mod memcmp;
mod xor;

pub use memcmp::memcmp;
pub use xor::xor;
