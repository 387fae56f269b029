//! Process-wide, initialise-once, read-only cache of all-ones masks for
//! widths `0..=MAX_NBITS`, as spec.md §5/§9 describe.
//!
//! Grounded on `awint`'s compile-time digit/mask tables
//! (`awint_internals::LB_I3F13` and friends in `serde_common.rs`), adapted
//! here to a runtime-initialised table since the mask values depend on
//! [`UBig`], which is not (and should not be made) `const`-constructible.

use std::sync::OnceLock;

use crate::UBig;

static MASKS: OnceLock<Vec<UBig>> = OnceLock::new();

fn build_masks() -> Vec<UBig> {
    let mut masks = Vec::with_capacity(crate::MAX_NBITS + 1);
    masks.push(UBig::zero());
    let mut running = UBig::zero();
    for k in 1..=crate::MAX_NBITS {
        // running = running * 2 + 1, i.e. the all-ones value of width k.
        running = running.add(&running);
        running = running.add(&UBig::from_digit(1));
        masks.push(running.clone());
    }
    masks
}

/// Returns `2^k - 1` as a [`UBig`], for `k` in `0..=MAX_NBITS`. The table is
/// built lazily on first use and shared read-only for the life of the
/// process; building it does not require a `Bits` operation to have already
/// run (it is self-contained), satisfying the "must complete before any
/// `Bits` operation" ordering requirement by construction rather than by an
/// explicit init call.
///
/// # Panics
///
/// Panics if `k > MAX_NBITS`.
#[must_use]
pub fn mask(k: usize) -> UBig {
    let table = MASKS.get_or_init(build_masks);
    table[k].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_values_are_all_ones() {
        assert!(mask(0).is_zero());
        assert_eq!(mask(8).to_u64().unwrap(), 0xFF);
        assert_eq!(mask(16).to_u64().unwrap(), 0xFFFF);
        assert_eq!(mask(512).numdigits(), crate::total_digits(512));
    }
}
