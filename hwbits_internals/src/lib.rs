//! Developer utilities shared by the `hwbits` crate: the digit-array
//! primitives that back the big-integer ("big form") representation of
//! `hwbits::Bits`, the process-wide mask cache, and the error type surfaced
//! at the `hwbits` API boundary.
//!
//! Most users of `hwbits` never need anything in this crate directly; it
//! exists as a separate compilation unit so the low-level digit routines can
//! be unit-tested in isolation from the `Bits` value type that wraps them.

mod error;
mod mask;
mod ubig;

pub use error::{BitsError, TypeErrorKind, ValueErrorKind, WidthError};
pub use mask::mask;
pub use ubig::UBig;

/// Bit width of one digit in the big-integer representation.
///
/// The original PyPy implementation this crate is modeled on used 63 on
/// 64-bit builds and 31 on 32-bit builds (one bit below the native word size,
/// so that digit-level carries never need an extra widening step beyond a
/// single native multiply). This crate targets 64-bit hosts and fixes
/// `SHIFT` at 63.
pub const SHIFT: usize = 63;

/// Maximum width, in bits, of any `hwbits::Bits` value.
pub const MAX_NBITS: usize = 512;

/// All-ones mask of width `SHIFT`, as a `Digit`.
pub const DIGIT_MASK: Digit = (1u64 << SHIFT) - 1;

/// The unsigned element type of a big-form digit array. Only the low
/// [`SHIFT`] bits of a `Digit` are ever significant; the top bit is always
/// zero. This mirrors `awint_internals::Digit`, except fixed at `u64` rather
/// than being a feature-selected type alias, since `hwbits` is not `no_std`
/// and has no embedded-target story to support.
pub type Digit = u64;

/// Number of [`Digit`]s needed to hold `nbits` significant bits.
#[inline]
#[must_use]
pub const fn total_digits(nbits: usize) -> usize {
    (nbits - 1) / SHIFT + 1
}

/// Returns the all-ones value of width `k` bits, masked to fit in a `Digit`.
/// Panics if `k > SHIFT`; callers needing a full-width mask of more than
/// `SHIFT` bits should use [`mask`] instead.
#[inline]
#[must_use]
pub const fn digit_mask(k: u32) -> Digit {
    if k == 0 {
        0
    } else {
        (1u64 << k) - 1
    }
}
