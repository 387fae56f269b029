use std::ops;

use hwbits_internals::{BitsError, TypeErrorKind, ValueErrorKind};

use crate::data::Bits;

/// A dual-buffered register: a current value plus a shadow "next" value of
/// identical width, modelling a clocked-register update (spec.md §4.9).
///
/// A plain `Bits` has no `flip` method and cannot be the target of a
/// non-blocking assign in place — in the source, promoting a `Bits` into a
/// `BitsWithNext` on its first non-blocking assign is a concern of the host
/// language binding, not of this core (spec.md §9), so here it is just
/// [`Bits::non_blocking_assign`], an inherent method that *returns* a new
/// `BitsWithNext` rather than mutating its receiver in place (a `Bits` stays
/// immutable; there is no operation that changes one variable's type at
/// runtime). Once you hold a `BitsWithNext`, further assigns mutate it via
/// [`BitsWithNext::non_blocking_assign`] or the `<<=` operator.
///
/// `TypeErrorKind::FlipOnPlainBits` and `TypeErrorKind::NonBlockingAssignRhs`
/// are never actually raised by this crate: the first has no way to occur
/// because `flip` isn't a method plain `Bits` has, and the second because the
/// RHS of a non-blocking assign is statically typed as `&Bits`. Both are
/// structural, compile-time versions of what the original source checks at
/// runtime.
#[derive(Debug, Clone)]
pub struct BitsWithNext {
    current: Bits,
    next: Bits,
}

impl BitsWithNext {
    /// The current (pre-flip) value.
    #[must_use]
    pub fn current(&self) -> &Bits {
        &self.current
    }

    /// The shadow (scheduled) value.
    #[must_use]
    pub fn next(&self) -> &Bits {
        &self.next
    }

    /// The width shared by both payload slots.
    #[must_use]
    pub fn nbits(&self) -> usize {
        self.current.nbits()
    }

    /// Schedules `rhs` to become the current value on the next [`flip`].
    /// `rhs` must share this register's width.
    ///
    /// [`flip`]: BitsWithNext::flip
    pub fn non_blocking_assign(&mut self, rhs: &Bits) -> Result<(), BitsError> {
        if rhs.nbits() != self.nbits() {
            return Err(
                ValueErrorKind::BitwidthMismatch { lhs_nbits: self.nbits(), rhs_nbits: rhs.nbits() }.into()
            );
        }
        self.next = rhs.clone();
        Ok(())
    }

    /// Atomically replaces the current value with the shadow value. The
    /// shadow slot is **not** cleared afterward (spec.md §4.9, preserved
    /// from the original source per `DESIGN.md`): two `flip()` calls with no
    /// intervening non-blocking assign leave the value unchanged, since the
    /// same shadow value is re-applied.
    pub fn flip(&mut self) {
        self.current = self.next.clone();
    }
}

impl ops::ShlAssign<&Bits> for BitsWithNext {
    /// `register <<= rhs`, the non-blocking assign operator. Panics on a
    /// bitwidth mismatch; call [`BitsWithNext::non_blocking_assign`] directly
    /// for the recoverable form.
    fn shl_assign(&mut self, rhs: &Bits) {
        if let Err(e) = self.non_blocking_assign(rhs) {
            panic!("{e}");
        }
    }
}

impl Bits {
    /// Promotes this value into a [`BitsWithNext`], scheduling `rhs` as the
    /// shadow value. `rhs` must share `self`'s width. This is the "first
    /// non-blocking assign on a plain value" case described in spec.md §4.9;
    /// see the type-level note on [`BitsWithNext`] for why there is no
    /// in-place version of this particular step.
    pub fn non_blocking_assign(&self, rhs: &Bits) -> Result<BitsWithNext, BitsError> {
        if rhs.nbits() != self.nbits() {
            return Err(
                ValueErrorKind::BitwidthMismatch { lhs_nbits: self.nbits(), rhs_nbits: rhs.nbits() }.into()
            );
        }
        Ok(BitsWithNext { current: self.clone(), next: rhs.clone() })
    }
}

/// Never raised; see the type-level note on [`BitsWithNext`].
#[allow(dead_code)]
const NON_BLOCKING_ASSIGN_RHS: TypeErrorKind = TypeErrorKind::NonBlockingAssignRhs;
/// Never raised; see the type-level note on [`BitsWithNext`].
#[allow(dead_code)]
const FLIP_ON_PLAIN_BITS: TypeErrorKind = TypeErrorKind::FlipOnPlainBits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promote_then_flip_matches_spec_scenario() {
        let r = Bits::from_u64(8, 0x11).unwrap();
        let mut reg = r.non_blocking_assign(&Bits::from_u64(8, 0x22).unwrap()).unwrap();
        assert_eq!(reg.current().uint(), 0x11);
        reg.flip();
        assert_eq!(reg.current().uint(), 0x22);
    }

    #[test]
    fn double_flip_without_reassign_is_a_no_op() {
        let r = Bits::from_u64(8, 1).unwrap();
        let mut reg = r.non_blocking_assign(&Bits::from_u64(8, 9).unwrap()).unwrap();
        reg.flip();
        assert_eq!(reg.current().uint(), 9);
        reg.flip();
        assert_eq!(reg.current().uint(), 9);
    }

    #[test]
    fn bitwidth_mismatch_on_assign_is_an_error() {
        let r = Bits::from_u64(8, 1).unwrap();
        assert!(r.non_blocking_assign(&Bits::from_u64(16, 1).unwrap()).is_err());
    }

    #[test]
    fn shl_assign_operator_mutates_shadow() {
        let mut reg = Bits::from_u64(8, 1).unwrap().non_blocking_assign(&Bits::from_u64(8, 2).unwrap()).unwrap();
        reg <<= &Bits::from_u64(8, 3).unwrap();
        assert_eq!(reg.next().uint(), 3);
        reg.flip();
        assert_eq!(reg.current().uint(), 3);
    }
}
