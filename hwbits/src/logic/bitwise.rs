//! Bitwise: `&`, `|`, `^`, `~`. See spec.md §4.6.
//!
//! No overflow is possible (both operands are already bounded below
//! `2^result_width`), so unlike arithmetic, no masking is needed after
//! combining bits at either width. `~b` is defined as `mask(N) - b`, which
//! does require a (cheap, non-negative) subtraction.

use hwbits_internals::{Digit, SHIFT};

use crate::data::Bits;

#[derive(Clone, Copy)]
enum BitwiseKind {
    And,
    Or,
    Xor,
}

impl Bits {
    fn bitwise_op(&self, rhs: &Bits, kind: BitwiseKind) -> Bits {
        let result_width = self.nbits().max(rhs.nbits());
        let nbits = Bits::check_nbits(result_width).expect("result width always in 1..=512");
        if result_width <= SHIFT {
            let l = self.as_word_value();
            let r = rhs.as_word_value();
            let raw: Digit = match kind {
                BitwiseKind::And => l & r,
                BitwiseKind::Or => l | r,
                BitwiseKind::Xor => l ^ r,
            };
            Bits::from_word_unchecked(nbits, raw)
        } else {
            let l = self.as_ubig();
            let r = rhs.as_ubig();
            let result = match kind {
                BitwiseKind::And => l.bitand(&r),
                BitwiseKind::Or => l.bitor(&r),
                BitwiseKind::Xor => l.bitxor(&r),
            };
            Bits::from_big_unchecked(nbits, result)
        }
    }

    /// Bitwise AND. Result width is `max(self.nbits(), rhs.nbits())`.
    #[must_use]
    pub fn and_bits(&self, rhs: &Bits) -> Bits {
        self.bitwise_op(rhs, BitwiseKind::And)
    }

    /// Bitwise OR. Result width is `max(self.nbits(), rhs.nbits())`.
    #[must_use]
    pub fn or_bits(&self, rhs: &Bits) -> Bits {
        self.bitwise_op(rhs, BitwiseKind::Or)
    }

    /// Bitwise XOR. Result width is `max(self.nbits(), rhs.nbits())`.
    #[must_use]
    pub fn xor_bits(&self, rhs: &Bits) -> Bits {
        self.bitwise_op(rhs, BitwiseKind::Xor)
    }

    /// Bitwise NOT: `mask(N) - self`.
    #[must_use]
    pub fn not(&self) -> Bits {
        let nbits = self.nbits_nonzero();
        if self.nbits() <= SHIFT {
            let mask = hwbits_internals::digit_mask(self.nbits() as u32);
            Bits::from_word_unchecked(nbits, mask - self.as_word_value())
        } else {
            let mask = hwbits_internals::mask(self.nbits());
            let inv = mask.sub_wrapping(&self.as_ubig(), self.nbits());
            Bits::from_big_unchecked(nbits, inv)
        }
    }
}
