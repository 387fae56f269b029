//! `std::ops` operator sugar over the inherent methods defined in
//! `arith`/`bitwise`/`shift`. See spec.md §6's operator surface table.
//!
//! Arithmetic, bitwise, and unsigned-shift methods never fail, so their
//! operator impls call straight through. The signed-shift-amount methods can
//! fail (a negative shift amount is a value-error, spec.md §7); their
//! operator impls panic with the error's `Display` message, mirroring
//! `awint_core::logic::std_ops`'s convention of infallible operator sugar
//! wrapping a fallible checked method — callers who want the recoverable
//! form call `shl_i64`/`shr_i64` directly instead of going through `<<`/`>>`.
//!
//! Indexing (`b[i]`, `b[a:b]`) and the comparison operators (`==`, `<`, ...)
//! are deliberately *not* implemented as `std::ops::Index` / `PartialOrd` /
//! `PartialEq` here: spec.md defines indexing as returning a fresh `Bits<1>`
//! by value (not a borrowed `Output`, which `std::ops::Index` requires) and
//! comparisons as returning a `Bits<1>` rather than `bool`/`Ordering`. Both
//! stay as the inherent methods in `logic::index` and `logic::cmp`.

use std::ops;

use crate::data::Bits;

macro_rules! panic_on_err {
    ($result:expr) => {
        match $result {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    };
}

impl ops::Add<&Bits> for &Bits {
    type Output = Bits;
    fn add(self, rhs: &Bits) -> Bits {
        self.add_bits(rhs)
    }
}

impl ops::Add<u64> for &Bits {
    type Output = Bits;
    fn add(self, rhs: u64) -> Bits {
        self.add_u64(rhs)
    }
}

impl ops::Add<i64> for &Bits {
    type Output = Bits;
    fn add(self, rhs: i64) -> Bits {
        self.add_i64(rhs)
    }
}

impl ops::Sub<&Bits> for &Bits {
    type Output = Bits;
    fn sub(self, rhs: &Bits) -> Bits {
        self.sub_bits(rhs)
    }
}

impl ops::Sub<u64> for &Bits {
    type Output = Bits;
    fn sub(self, rhs: u64) -> Bits {
        self.sub_u64(rhs)
    }
}

impl ops::Sub<i64> for &Bits {
    type Output = Bits;
    fn sub(self, rhs: i64) -> Bits {
        self.sub_i64(rhs)
    }
}

impl ops::Mul<&Bits> for &Bits {
    type Output = Bits;
    fn mul(self, rhs: &Bits) -> Bits {
        self.mul_bits(rhs)
    }
}

impl ops::Mul<u64> for &Bits {
    type Output = Bits;
    fn mul(self, rhs: u64) -> Bits {
        self.mul_u64(rhs)
    }
}

impl ops::Mul<i64> for &Bits {
    type Output = Bits;
    fn mul(self, rhs: i64) -> Bits {
        self.mul_i64(rhs)
    }
}

impl ops::BitAnd<&Bits> for &Bits {
    type Output = Bits;
    fn bitand(self, rhs: &Bits) -> Bits {
        self.and_bits(rhs)
    }
}

impl ops::BitOr<&Bits> for &Bits {
    type Output = Bits;
    fn bitor(self, rhs: &Bits) -> Bits {
        self.or_bits(rhs)
    }
}

impl ops::BitXor<&Bits> for &Bits {
    type Output = Bits;
    fn bitxor(self, rhs: &Bits) -> Bits {
        self.xor_bits(rhs)
    }
}

impl ops::Not for &Bits {
    type Output = Bits;
    fn not(self) -> Bits {
        Bits::not(self)
    }
}

impl ops::Shl<usize> for &Bits {
    type Output = Bits;
    fn shl(self, rhs: usize) -> Bits {
        self.shl_usize(rhs)
    }
}

impl ops::Shl<&Bits> for &Bits {
    type Output = Bits;
    fn shl(self, rhs: &Bits) -> Bits {
        self.shl_bits(rhs)
    }
}

impl ops::Shl<i64> for &Bits {
    type Output = Bits;
    fn shl(self, rhs: i64) -> Bits {
        panic_on_err!(self.shl_i64(rhs))
    }
}

impl ops::Shr<usize> for &Bits {
    type Output = Bits;
    fn shr(self, rhs: usize) -> Bits {
        self.shr_usize(rhs)
    }
}

impl ops::Shr<&Bits> for &Bits {
    type Output = Bits;
    fn shr(self, rhs: &Bits) -> Bits {
        self.shr_bits(rhs)
    }
}

impl ops::Shr<i64> for &Bits {
    type Output = Bits;
    fn shr(self, rhs: i64) -> Bits {
        panic_on_err!(self.shr_i64(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_sugar_matches_inherent_methods() {
        let a = Bits::from_u64(8, 200).unwrap();
        let b = Bits::from_u64(8, 100).unwrap();
        assert_eq!((&a + &b).uint(), a.add_bits(&b).uint());
        assert_eq!((&a & &b).uint(), a.and_bits(&b).uint());
        assert_eq!((!&a).uint(), a.not().uint());
        assert_eq!((&a << 3usize).uint(), a.shl_usize(3).uint());
    }

    #[test]
    #[should_panic]
    fn negative_shift_operator_panics() {
        let a = Bits::from_u64(8, 1).unwrap();
        let _ = &a << -1i64;
    }
}
