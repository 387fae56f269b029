//! Sign projection, integer conversion, and hashing. See spec.md §4.8, §6,
//! §9.

use std::hash::{Hash, Hasher};

use crate::data::Bits;

/// A cheap, deterministic digest of an arbitrary-width non-negative value
/// down to a single machine word, used as the `hV` input to the hash recipe
/// below. Word-form payloads already are a single word; big-form payloads
/// fold their digits together. Not specified further by the source beyond
/// "hash of the payload as an unsigned integer", so this digest's exact
/// shape isn't part of the portable contract, only the top-level recipe is.
fn hash_int_u64(v: u64) -> u64 {
    v
}

fn hash_int_ubig(big: &hwbits_internals::UBig) -> u64 {
    let mut acc: u64 = 0;
    for &d in big.as_digits() {
        acc = acc.wrapping_mul(1_000_003).wrapping_add(d);
    }
    acc
}

impl Bits {
    /// The unsigned integer value of the payload. Always fits in `u64` when
    /// `nbits <= 64`; for wider values, prefer reading via
    /// [`Bits::as_ubig`] or comparing against another `Bits`.
    #[must_use]
    pub fn uint(&self) -> u64 {
        if self.is_word_form() {
            self.as_word_value()
        } else {
            self.as_ubig().to_u64().unwrap_or(0)
        }
    }

    /// Same as [`Bits::uint`]; spec.md §4.8 treats `index`/`positive`/`long`
    /// as synonyms for the unsigned projection.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.uint()
    }

    /// The signed two's-complement interpretation: if bit `nbits - 1` (the
    /// sign bit) is `0`, this is `uint()`; if `1`, this is `uint() - 2^nbits`.
    #[must_use]
    pub fn int(&self) -> i128 {
        let nbits = self.nbits();
        let msb = if self.is_word_form() {
            (self.as_word_value() >> (nbits - 1)) & 1
        } else {
            self.as_ubig().get_bit(nbits - 1) as u64
        };
        let unsigned = if self.is_word_form() {
            self.as_word_value() as i128
        } else {
            i128_from_ubig(&self.as_ubig())
        };
        if msb == 0 {
            unsigned
        } else {
            unsigned - (1i128 << nbits.min(127))
        }
    }

    /// `true` iff the payload is nonzero.
    #[must_use]
    pub fn bool(&self) -> bool {
        if self.is_word_form() {
            self.as_word_value() != 0
        } else {
            !self.as_ubig().is_zero()
        }
    }

    /// The combined `(nbits, payload)` hash, following the fixed mixing
    /// recipe spec.md §6 records (chosen to agree with a legacy runtime's
    /// 2-tuple hash; the constants are preserved bit-for-bit, not tunable).
    #[must_use]
    pub fn hash_value(&self) -> u64 {
        let h_n = hash_int_u64(self.nbits() as u64);
        let h_v = if self.is_word_form() {
            hash_int_u64(self.as_word_value())
        } else {
            hash_int_ubig(&self.as_ubig())
        };
        let mut x: u64 = 0x345678;
        x = (x ^ h_n).wrapping_mul(1_000_003);
        x = (x ^ h_v).wrapping_mul(1_082_525);
        x = x.wrapping_add(97_531);
        x
    }
}

/// Widens a `UBig` of up to 512 bits into an `i128` for the signed
/// projection's unsigned half. `int()` on widths beyond 127 bits loses
/// precision past the `i128` range; callers needing the full-width signed
/// value should instead subtract `mask(nbits) + 1` from `uint`-equivalent
/// big arithmetic directly.
fn i128_from_ubig(big: &hwbits_internals::UBig) -> i128 {
    let mut acc: i128 = 0;
    for (i, &d) in big.as_digits().iter().enumerate().take(3) {
        acc |= (d as i128) << (i * hwbits_internals::SHIFT);
    }
    acc
}

impl Hash for Bits {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}
