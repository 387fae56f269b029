//! Indexing and slicing. See spec.md §4.3.
//!
//! Index and shift-amount operands accept a machine integer, a `Bits`, or
//! (conceptually) an arbitrary-precision integer; a `Bits` operand is taken
//! as its unsigned value, and one with more magnitude than fits in a single
//! digit is rejected as out of range rather than ever being compared
//! (spec.md §4.3). Slice-set RHS values are validated against the slice
//! width and raise rather than truncate for an over-wide *non-negative*
//! value (spec.md scenario 8); a negative machine-integer RHS is instead
//! reduced modulo `2^(stop-start)`, matching the word-form slice-set-source
//! contract in spec.md §4.1 (signed values are wrapped, not rejected).

use hwbits_internals::{BitsError, UBig, ValueErrorKind, SHIFT};

use crate::data::Bits;
use crate::logic::arith::ubig_from_i64;

impl Bits {
    fn check_index(&self, i: usize) -> Result<(), BitsError> {
        if i >= self.nbits() {
            return Err(ValueErrorKind::IndexOutOfRange { index: i as i128, nbits: self.nbits() }.into());
        }
        Ok(())
    }

    fn check_slice(&self, start: usize, stop: usize) -> Result<(), BitsError> {
        if start >= stop || stop > self.nbits() {
            return Err(ValueErrorKind::InvalidSlice { start, stop, nbits: self.nbits() }.into());
        }
        Ok(())
    }

    /// `self[i]`, as a `Bits<1>`.
    pub fn get_bit(&self, i: usize) -> Result<Bits, BitsError> {
        self.check_index(i)?;
        let bit = if self.is_word_form() { (self.as_word_value() >> i) & 1 } else { self.as_ubig().get_bit(i) as u64 };
        Ok(Bits::from_word_unchecked(Bits::check_nbits(1).unwrap(), bit))
    }

    /// `self[i]`, with a signed index (negative is out of range).
    pub fn get_bit_i64(&self, i: i64) -> Result<Bits, BitsError> {
        if i < 0 {
            return Err(ValueErrorKind::IndexOutOfRange { index: i as i128, nbits: self.nbits() }.into());
        }
        self.get_bit(i as usize)
    }

    /// `self[i]`, with the index taken from another `Bits`'s unsigned value.
    /// An index with more than a single digit's worth of magnitude can never
    /// be in range, and is rejected directly rather than ever being compared.
    pub fn get_bit_bits(&self, i: &Bits) -> Result<Bits, BitsError> {
        let idx = i.as_ubig().to_u64().ok_or(ValueErrorKind::IndexTooWide)?;
        self.get_bit(idx as usize)
    }

    /// `self[start:stop]`. Result width is `stop - start`.
    pub fn get_slice(&self, start: usize, stop: usize) -> Result<Bits, BitsError> {
        self.check_slice(start, stop)?;
        let width = stop - start;
        let nbits = Bits::check_nbits(width).expect("slice width always in 1..=nbits <= 512");
        if self.is_word_form() {
            let mask = hwbits_internals::digit_mask(width as u32);
            Ok(Bits::from_word_unchecked(nbits, (self.as_word_value() >> start) & mask))
        } else if width <= SHIFT {
            let word = self.as_ubig().rshift_and_mask_to_word(start, width);
            Ok(Bits::from_word_unchecked(nbits, word))
        } else {
            let big = self.as_ubig().rshift_and_mask(start, width);
            Ok(Bits::from_big_unchecked(nbits, big))
        }
    }

    fn validate_value_fits(value: &UBig, dest_bits: usize) -> Result<(), BitsError> {
        match value.to_u64() {
            Some(v) if dest_bits < 64 => {
                if v >= (1u64 << dest_bits) {
                    return Err(ValueErrorKind::ValueTooWide { value_bits: 64, dest_bits }.into());
                }
            }
            Some(_) => {}
            None => {
                return Err(ValueErrorKind::ValueTooWide { value_bits: value.numdigits() * SHIFT, dest_bits }.into());
            }
        }
        Ok(())
    }

    fn write_slice(&self, start: usize, stop: usize, value: &UBig) -> Bits {
        let width = stop - start;
        if self.is_word_form() {
            let keep_mask = !(hwbits_internals::digit_mask(width as u32) << start) & hwbits_internals::digit_mask(self.nbits() as u32);
            let source_word = value.to_u64().unwrap_or(0);
            let raw = (self.as_word_value() & keep_mask) | (source_word << start);
            Bits::from_word_unchecked(self.nbits_nonzero(), raw)
        } else {
            let result = self.as_ubig().slice_set_from_big(value, start, stop);
            Bits::from_big_unchecked(self.nbits_nonzero(), result)
        }
    }

    /// `self[start:stop] = v`. `v` must fit in `stop - start` bits if
    /// non-negative.
    pub fn set_slice_u64(&self, start: usize, stop: usize, v: u64) -> Result<Bits, BitsError> {
        self.check_slice(start, stop)?;
        let width = stop - start;
        let value = UBig::from_u64(v);
        Self::validate_value_fits(&value, width)?;
        Ok(self.write_slice(start, stop, &value))
    }

    /// `self[start:stop] = v`. A negative `v` is reduced modulo
    /// `2^(stop-start)` rather than validated, matching the original
    /// source's word-source slice-set contract.
    pub fn set_slice_i64(&self, start: usize, stop: usize, v: i64) -> Result<Bits, BitsError> {
        self.check_slice(start, stop)?;
        let width = stop - start;
        if v < 0 {
            let reduced = ubig_from_i64(v, width);
            return Ok(self.write_slice(start, stop, &reduced));
        }
        let value = UBig::from_u64(v as u64);
        Self::validate_value_fits(&value, width)?;
        Ok(self.write_slice(start, stop, &value))
    }

    /// `self[start:stop] = v`. `v` must not be wider than the slice.
    pub fn set_slice_bits(&self, start: usize, stop: usize, v: &Bits) -> Result<Bits, BitsError> {
        self.check_slice(start, stop)?;
        let width = stop - start;
        if v.nbits() > width {
            return Err(ValueErrorKind::ValueTooWide { value_bits: v.nbits(), dest_bits: width }.into());
        }
        Ok(self.write_slice(start, stop, &v.as_ubig()))
    }

    /// `self[i] = v`, where `v` is `0` or `1`.
    pub fn set_bit_u64(&self, i: usize, v: u64) -> Result<Bits, BitsError> {
        self.check_index(i)?;
        if v > 1 {
            return Err(ValueErrorKind::ValueTooWide { value_bits: 64, dest_bits: 1 }.into());
        }
        Ok(self.write_bit(i, v))
    }

    /// `self[i] = v`, where `v` is a `Bits<1>`.
    pub fn set_bit_bits(&self, i: usize, v: &Bits) -> Result<Bits, BitsError> {
        self.check_index(i)?;
        if v.nbits() > 1 {
            return Err(ValueErrorKind::ValueTooWide { value_bits: v.nbits(), dest_bits: 1 }.into());
        }
        Ok(self.write_bit(i, v.uint()))
    }

    fn write_bit(&self, i: usize, v: u64) -> Bits {
        if self.is_word_form() {
            let raw = (self.as_word_value() & !(1u64 << i)) | (v << i);
            Bits::from_word_unchecked(self.nbits_nonzero(), raw)
        } else {
            let result = self.as_ubig().set_bit(i, v as u8);
            Bits::from_big_unchecked(self.nbits_nonzero(), result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_bit_matches_shift_and_mask() {
        let x = Bits::from_u64(8, 0b0010_0000).unwrap();
        assert_eq!(x.get_bit(5).unwrap().uint(), 1);
        assert_eq!(x.get_bit(4).unwrap().uint(), 0);
    }

    #[test]
    fn slice_round_trip_matches_spec_scenario() {
        let x = Bits::zero(128).unwrap();
        let patch = Bits::from_u64(32, 0xDEAD_BEEF).unwrap();
        let x = x.set_slice_bits(64, 96, &patch).unwrap();
        assert_eq!(x.get_slice(64, 96).unwrap().uint(), 0xDEAD_BEEF);
        assert_eq!(x.get_slice(0, 64).unwrap().uint(), 0);
        assert_eq!(x.get_slice(96, 128).unwrap().uint(), 0);
    }

    #[test]
    fn over_wide_slice_set_value_is_an_error() {
        let x = Bits::zero(8).unwrap();
        assert!(x.set_slice_u64(0, 8, 0x100).is_err());
    }

    #[test]
    fn negative_slice_set_value_wraps_instead_of_erroring() {
        let x = Bits::zero(8).unwrap();
        let written = x.set_slice_i64(0, 8, -1).unwrap();
        assert_eq!(written.uint(), 0xFF);
    }

    #[test]
    fn index_too_wide_is_rejected() {
        let x = Bits::zero(8).unwrap();
        let huge = Bits::from_u64(128, 0).unwrap().shl_usize(100).add_bits(&Bits::from_u64(128, 1).unwrap());
        assert!(x.get_bit_bits(&huge).is_err());
    }
}
