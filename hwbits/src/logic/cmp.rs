//! Comparisons. See spec.md §4.4.
//!
//! The spec's comparison operators compare by unsigned magnitude regardless
//! of width (a narrower value is implicitly zero-extended, matching spec.md
//! §4.5's width-promotion rule for binary operators). This is deliberately
//! *not* the same relation as `Bits`'s `PartialEq`/`Eq`/`Hash` (see
//! `data::bits`'s doc comment): those are structural over `(nbits,
//! payload)`, to stay consistent with the spec's tuple-hash recipe, while
//! these inherent methods implement the width-independent `==`/`<`/etc.
//! operators spec.md §4.4 and §6 describe. Mixed word/big-form operands
//! always go through the big-form comparator rather than special-casing
//! same-form pairs, since promoting a word to a one-digit `UBig` is cheap
//! and keeps this module's logic in one place.

use core::cmp::Ordering;

use crate::data::Bits;

impl Bits {
    /// Unsigned magnitude comparison against another `Bits`, independent of
    /// either operand's width.
    #[must_use]
    pub fn cmp_magnitude(&self, rhs: &Bits) -> Ordering {
        if self.is_word_form() && rhs.is_word_form() {
            self.as_word_value().cmp(&rhs.as_word_value())
        } else {
            self.as_ubig().cmp(&rhs.as_ubig())
        }
    }

    /// `self == rhs` by unsigned magnitude, independent of width. A `Bits<4>`
    /// holding `3` equals a `Bits<400>` holding `3`.
    #[must_use]
    pub fn eq_bits(&self, rhs: &Bits) -> bool {
        self.cmp_magnitude(rhs) == Ordering::Equal
    }

    /// `self < rhs`.
    #[must_use]
    pub fn lt_bits(&self, rhs: &Bits) -> bool {
        self.cmp_magnitude(rhs) == Ordering::Less
    }

    /// `self <= rhs`.
    #[must_use]
    pub fn le_bits(&self, rhs: &Bits) -> bool {
        self.cmp_magnitude(rhs) != Ordering::Greater
    }

    /// `self > rhs`.
    #[must_use]
    pub fn gt_bits(&self, rhs: &Bits) -> bool {
        self.cmp_magnitude(rhs) == Ordering::Greater
    }

    /// `self >= rhs`.
    #[must_use]
    pub fn ge_bits(&self, rhs: &Bits) -> bool {
        self.cmp_magnitude(rhs) != Ordering::Less
    }

    /// `self == rhs` against a machine integer.
    #[must_use]
    pub fn eq_u64(&self, rhs: u64) -> bool {
        if self.is_word_form() {
            self.as_word_value() == rhs
        } else {
            self.as_ubig().to_u64() == Some(rhs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_bits_ignores_width_but_struct_eq_does_not() {
        let narrow = Bits::from_u64(4, 3).unwrap();
        let wide = Bits::from_u64(400, 3).unwrap();
        assert!(narrow.eq_bits(&wide));
        assert_ne!(narrow, wide);
        assert!(narrow.eq_u64(3));
    }

    #[test]
    fn ordering_is_by_magnitude() {
        let a = Bits::from_u64(8, 5).unwrap();
        let b = Bits::from_u64(512, 200).unwrap();
        assert!(a.lt_bits(&b));
        assert!(b.gt_bits(&a));
        assert!(a.le_bits(&a));
    }
}
