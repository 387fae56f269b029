//! Fixed-width bit-vector arithmetic core.
//!
//! This crate supplies [`Bits`], an immutable N-bit value (`1 <= N <= 512`)
//! with strict modulo-2^N semantics for arithmetic, bitwise, shift,
//! comparison, indexing, and slice-assignment operations, plus
//! [`BitsWithNext`], a dual-buffered "next / present" register variant for
//! simulating clocked registers with non-blocking assignment.
//!
//! `Bits` picks between two internal payload representations depending on
//! its width: a single machine word when `nbits <= 63`, and a normalised
//! big-integer digit array otherwise. Both representations are kept
//! observationally indistinguishable; the choice only affects performance,
//! never results (see [`hwbits_internals`] for the digit-array primitives
//! that back the big form).
//!
//! # Example
//!
//! ```
//! use hwbits::Bits;
//!
//! let a = Bits::from_u64(8, 0xFE).unwrap();
//! let b = Bits::from_u64(8, 3).unwrap();
//! let sum = &a + &b;
//! assert_eq!(sum.uint(), 1);
//! assert_eq!(sum.int(), 1);
//! ```

mod data;
mod logic;

pub use data::{Bits, BitsWithNext};
pub use hwbits_internals::{BitsError, TypeErrorKind, ValueErrorKind, WidthError, SHIFT};

/// Common imports for downstream crates, mirroring the teacher workspace's
/// `prelude` module convention.
pub mod prelude {
    pub use crate::{Bits, BitsError, BitsWithNext};
}
