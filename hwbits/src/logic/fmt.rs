//! Formatting. See spec.md §6: `str` is `"0xHHH"` zero-padded to `⌈N/4⌉` hex
//! digits; `repr` is `"BitsN( 0xHHH )"`; the `oct`/`hex` projections give the
//! plain unsigned value in those bases with no padding (source parity with
//! `descr_oct`/`descr_hex`, which pad to neither width).
//!
//! Digit extraction goes through [`hwbits_internals::UBig::rshift_and_mask_to_word`]
//! uniformly for both payload forms (promoting a word payload to a one-digit
//! `UBig` is cheap) rather than forking word/big formatting paths, since
//! formatting isn't a hot path the way arithmetic is.

use core::fmt;

use crate::data::Bits;

fn digits_for(nbits: usize, bits_per_digit: usize) -> usize {
    (nbits + bits_per_digit - 1) / bits_per_digit
}

fn nibble(value: &Bits, position: usize) -> u8 {
    value.as_ubig().rshift_and_mask_to_word(position * 4, 4) as u8
}

fn octal_digit(value: &Bits, position: usize) -> u8 {
    value.as_ubig().rshift_and_mask_to_word(position * 3, 3) as u8
}

fn render(ndigits: usize, radix: u32, digit_at: impl Fn(usize) -> u8) -> String {
    let mut s = String::with_capacity(ndigits);
    for p in (0..ndigits).rev() {
        s.push(char::from_digit(digit_at(p) as u32, radix).expect("digit in range for radix"));
    }
    s
}

fn strip_leading_zeros(s: String) -> String {
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

impl Bits {
    fn hex_digits_zero_padded(&self) -> String {
        let ndigits = digits_for(self.nbits(), 4);
        render(ndigits, 16, |p| nibble(self, p))
    }

    fn oct_digits_zero_padded(&self) -> String {
        let ndigits = digits_for(self.nbits(), 3);
        render(ndigits, 8, |p| octal_digit(self, p))
    }

    /// The unsigned value rendered as lowercase hex, with no padding and no
    /// prefix (source parity with `descr_hex`). See [`fmt::Display`] for the
    /// zero-padded `"0xHHH"` string form spec.md §6 calls `str`.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        strip_leading_zeros(self.hex_digits_zero_padded())
    }

    /// The unsigned value rendered as octal, with no padding and no prefix
    /// (source parity with `descr_oct`).
    #[must_use]
    pub fn to_oct_string(&self) -> String {
        strip_leading_zeros(self.oct_digits_zero_padded())
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex_digits_zero_padded())
    }
}

impl fmt::Debug for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bits{}( 0x{} )", self.nbits(), self.hex_digits_zero_padded())
    }
}

impl fmt::LowerHex for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::UpperHex for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string().to_ascii_uppercase())
    }
}

impl fmt::Octal for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_oct_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_zero_pads_to_nibble_count() {
        let x = Bits::from_u64(16, 0x34).unwrap();
        assert_eq!(format!("{x}"), "0x0034");
    }

    #[test]
    fn debug_matches_spec_repr_shape() {
        let x = Bits::from_u64(16, 0x34).unwrap();
        assert_eq!(format!("{x:?}"), "Bits16( 0x0034 )");
    }

    #[test]
    fn hex_projection_has_no_padding() {
        let x = Bits::from_u64(128, 0xDEAD_BEEF).unwrap();
        assert_eq!(x.to_hex_string(), "deadbeef");
    }

    #[test]
    fn oct_projection_of_zero_is_single_digit() {
        let x = Bits::zero(32).unwrap();
        assert_eq!(x.to_oct_string(), "0");
    }
}
