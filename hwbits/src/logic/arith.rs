//! Arithmetic: `+`, `-`, `*`. See spec.md §4.5.
//!
//! Result width: `max(N_left, N_right)` when both operands are `Bits`;
//! `N_left` when the RHS is a machine integer. Results are always reduced
//! modulo `2^result_width` — overflow is the defined behavior, never an
//! error (spec.md §7).

use hwbits_internals::{Digit, UBig, SHIFT};

use crate::data::Bits;

#[derive(Clone, Copy)]
enum ArithKind {
    Add,
    Sub,
    Mul,
}

/// Reduces a signed machine integer modulo `2^width`, producing the
/// non-negative `UBig` representation spec.md requires internally. Negative
/// values become their `width`-bit two's-complement truncation (spec.md
/// §4.2), computed without ever materialising a negative `UBig`.
pub(crate) fn ubig_from_i64(v: i64, width: usize) -> UBig {
    if v >= 0 {
        UBig::from_u64(v as u64).mask_off_high(width)
    } else {
        // i64::MIN negated overflows i64, so widen to i128 first.
        let magnitude = (-(v as i128)) as u128;
        let magnitude_big = UBig::from_u64(magnitude as u64);
        UBig::zero().sub_wrapping(&magnitude_big, width)
    }
}

impl Bits {
    fn result_width_with_bits(&self, rhs: &Bits) -> usize {
        self.nbits().max(rhs.nbits())
    }

    fn binary_op(&self, rhs: &UBig, result_width: usize, kind: ArithKind) -> Bits {
        let nbits = Bits::check_nbits(result_width).expect("result width always in 1..=512");
        if result_width <= SHIFT {
            let lhs_word = self.as_word_value();
            let rhs_word = rhs.to_u64().expect("rhs already reduced to <= SHIFT bits");
            let mask = hwbits_internals::digit_mask(result_width as u32);
            let raw: Digit = match kind {
                ArithKind::Add => lhs_word.wrapping_add(rhs_word),
                ArithKind::Sub => lhs_word.wrapping_sub(rhs_word),
                ArithKind::Mul => lhs_word.wrapping_mul(rhs_word),
            };
            Bits::from_word_unchecked(nbits, raw & mask)
        } else {
            let lhs_big = self.as_ubig();
            let result = match kind {
                // + and x: the intermediate is non-negative, so mask-off-high
                // is the correct (and cheaper) reducer.
                ArithKind::Add => lhs_big.add(rhs).mask_off_high(result_width),
                ArithKind::Mul => lhs_big.mul(rhs).mask_off_high(result_width),
                // -: the intermediate may be negative, so the N-bit AND
                // (two's complement wrap) is required.
                ArithKind::Sub => lhs_big.sub_wrapping(rhs, result_width),
            };
            Bits::from_big_unchecked(nbits, result)
        }
    }

    /// `self + rhs`, widened to `max(self.nbits(), rhs.nbits())`.
    #[must_use]
    pub fn add_bits(&self, rhs: &Bits) -> Bits {
        let w = self.result_width_with_bits(rhs);
        self.binary_op(&rhs.as_ubig(), w, ArithKind::Add)
    }

    /// `self + rhs`, at `self.nbits()`.
    #[must_use]
    pub fn add_u64(&self, rhs: u64) -> Bits {
        self.binary_op(&UBig::from_u64(rhs), self.nbits(), ArithKind::Add)
    }

    /// `self + rhs`, at `self.nbits()`.
    #[must_use]
    pub fn add_i64(&self, rhs: i64) -> Bits {
        self.binary_op(&ubig_from_i64(rhs, self.nbits()), self.nbits(), ArithKind::Add)
    }

    /// `self - rhs`, widened to `max(self.nbits(), rhs.nbits())`.
    #[must_use]
    pub fn sub_bits(&self, rhs: &Bits) -> Bits {
        let w = self.result_width_with_bits(rhs);
        self.binary_op(&rhs.as_ubig(), w, ArithKind::Sub)
    }

    /// `self - rhs`, at `self.nbits()`.
    #[must_use]
    pub fn sub_u64(&self, rhs: u64) -> Bits {
        self.binary_op(&UBig::from_u64(rhs), self.nbits(), ArithKind::Sub)
    }

    /// `self - rhs`, at `self.nbits()`.
    #[must_use]
    pub fn sub_i64(&self, rhs: i64) -> Bits {
        self.binary_op(&ubig_from_i64(rhs, self.nbits()), self.nbits(), ArithKind::Sub)
    }

    /// `lhs - self`, at `self.nbits()`. The reverse-subtraction path noted in
    /// spec.md §4.5; `+` and `*` reuse the forward operator by commutativity
    /// instead of needing a dedicated reverse method.
    #[must_use]
    pub fn u64_sub(&self, lhs: u64) -> Bits {
        let w = self.nbits();
        let nbits = Bits::check_nbits(w).expect("width always valid");
        if w <= SHIFT {
            let raw = lhs.wrapping_sub(self.as_word_value()) & hwbits_internals::digit_mask(w as u32);
            Bits::from_word_unchecked(nbits, raw)
        } else {
            let result = UBig::from_u64(lhs).sub_wrapping(&self.as_ubig(), w);
            Bits::from_big_unchecked(nbits, result)
        }
    }

    /// `lhs - self`, at `self.nbits()`.
    #[must_use]
    pub fn i64_sub(&self, lhs: i64) -> Bits {
        let w = self.nbits();
        let nbits = Bits::check_nbits(w).expect("width always valid");
        let lhs_reduced = ubig_from_i64(lhs, w);
        if w <= SHIFT {
            let raw = lhs_reduced.to_u64().unwrap().wrapping_sub(self.as_word_value())
                & hwbits_internals::digit_mask(w as u32);
            Bits::from_word_unchecked(nbits, raw)
        } else {
            let result = lhs_reduced.sub_wrapping(&self.as_ubig(), w);
            Bits::from_big_unchecked(nbits, result)
        }
    }

    /// `self * rhs`, widened to `max(self.nbits(), rhs.nbits())`.
    #[must_use]
    pub fn mul_bits(&self, rhs: &Bits) -> Bits {
        let w = self.result_width_with_bits(rhs);
        self.binary_op(&rhs.as_ubig(), w, ArithKind::Mul)
    }

    /// `self * rhs`, at `self.nbits()`.
    #[must_use]
    pub fn mul_u64(&self, rhs: u64) -> Bits {
        self.binary_op(&UBig::from_u64(rhs), self.nbits(), ArithKind::Mul)
    }

    /// `self * rhs`, at `self.nbits()`.
    #[must_use]
    pub fn mul_i64(&self, rhs: i64) -> Bits {
        self.binary_op(&ubig_from_i64(rhs, self.nbits()), self.nbits(), ArithKind::Mul)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wraps_modulo_width() {
        let a = Bits::from_u64(8, 0xFE).unwrap();
        let b = Bits::from_u64(8, 3).unwrap();
        let sum = a.add_bits(&b);
        assert_eq!(sum.nbits(), 8);
        assert_eq!(sum.as_ubig().to_u64().unwrap(), 1);
    }

    #[test]
    fn sub_wraps_negative_modulo_width() {
        let a = Bits::from_u64(4, 10).unwrap();
        let b = Bits::from_u64(4, 12).unwrap();
        let diff = a.sub_bits(&b);
        assert_eq!(diff.as_ubig().to_u64().unwrap(), 14);
    }

    #[test]
    fn big_form_arith_matches_word_form_shape() {
        let a = Bits::from_u64(128, 1).unwrap();
        let b = Bits::from_u64(128, 1).unwrap();
        let sum = a.add_bits(&b);
        assert!(!sum.is_word_form());
        assert_eq!(sum.as_ubig().to_u64().unwrap(), 2);
    }

    #[test]
    fn result_width_is_max_of_operand_widths() {
        let a = Bits::from_u64(8, 5).unwrap();
        let b = Bits::from_u64(16, 5).unwrap();
        let sum = a.add_bits(&b);
        assert_eq!(sum.nbits(), 16);
    }

    /// Regression for the `mask_off_high` `masksize == numdigits` bug: a
    /// big-form wrapping subtraction whose result occupies exactly
    /// `total_digits(128)` digits (here, `2^128 - 2`) must still have its
    /// top digit masked down to the 2 significant bits `128 % SHIFT` allows,
    /// not left with the full unmasked digit from the two's-complement
    /// intermediate.
    #[test]
    fn big_form_sub_masks_top_digit_at_exact_digit_boundary() {
        let a = Bits::from_u64(128, 10).unwrap();
        let b = Bits::from_u64(128, 12).unwrap();
        let diff = a.sub_bits(&b).as_ubig();
        assert_eq!(diff.numdigits(), 3);
        assert_eq!(diff.digit(0), hwbits_internals::DIGIT_MASK - 1);
        assert_eq!(diff.digit(1), hwbits_internals::DIGIT_MASK);
        assert_eq!(diff.digit(2), 0b11);
    }

    /// Regression for the same bug reached via `from_i64`'s negative path:
    /// `ubig_from_i64` reduces through `sub_wrapping`, which ends in
    /// `mask_off_high`.
    #[test]
    fn from_i64_negative_truncates_to_word_width() {
        assert_eq!(Bits::from_i64(8, -1).unwrap().uint(), 0xFF);
    }
}
