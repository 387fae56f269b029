use core::fmt;

/// The error raised by a fallible `hwbits` operation.
///
/// Grounded on `awint_internals::SerdeError`: a plain enum with a manual
/// [`fmt::Display`] impl rather than a `thiserror` derive, since nothing in
/// the teacher workspace this crate is modeled on pulls in an error-derive
/// crate. The three top-level variants correspond to the three error kinds
/// spec.md §7 defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsError {
    /// `nbits` given at construction was outside `1..=512`.
    Width(WidthError),
    /// An operand was of a kind the operation does not support.
    Type(TypeErrorKind),
    /// An operand was of a supported kind but an invalid value.
    Value(ValueErrorKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthError {
    pub nbits: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeErrorKind {
    /// RHS of a non-blocking assign (`<<=`) was not a `Bits` of the same
    /// width as the register.
    NonBlockingAssignRhs,
    /// `flip` was called on a plain `Bits` rather than a `BitsWithNext`.
    FlipOnPlainBits,
    /// A reverse shift (`int << Bits`, `int >> Bits`) was attempted; the
    /// result width would be ambiguous, so this is rejected rather than
    /// guessed at.
    ReverseShiftUndefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueErrorKind {
    /// Index was negative (not representable; surfaced when a negative
    /// machine integer is used as an index) or `>= nbits`.
    IndexOutOfRange { index: i128, nbits: usize },
    /// Slice bounds did not satisfy `0 <= start < stop <= nbits`.
    InvalidSlice { start: usize, stop: usize, nbits: usize },
    /// A negative shift amount was given.
    NegativeShift { amount: i128 },
    /// A value used as a slice-set or bit-set source did not fit the
    /// destination width.
    ValueTooWide { value_bits: usize, dest_bits: usize },
    /// A `Bits` index had more than a single digit's worth of magnitude and
    /// so can never compare less than any in-range index.
    IndexTooWide,
    /// Bitwidth mismatch on a non-blocking assign.
    BitwidthMismatch { lhs_nbits: usize, rhs_nbits: usize },
}

impl fmt::Display for BitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitsError::Width(e) => write!(
                f,
                "invalid bitwidth {}: Bits widths must satisfy 1 <= nbits <= 512",
                e.nbits
            ),
            BitsError::Type(e) => match e {
                TypeErrorKind::NonBlockingAssignRhs => {
                    write!(f, "RHS of a non-blocking assign must be a Bits value")
                }
                TypeErrorKind::FlipOnPlainBits => {
                    write!(f, "flip() called on a Bits value with no shadow next value")
                }
                TypeErrorKind::ReverseShiftUndefined => {
                    write!(f, "reverse shift (integer << Bits or integer >> Bits) is undefined")
                }
            },
            BitsError::Value(e) => match e {
                ValueErrorKind::IndexOutOfRange { index, nbits } => {
                    write!(f, "index {index} out of range for a {nbits}-bit value")
                }
                ValueErrorKind::InvalidSlice { start, stop, nbits } => {
                    write!(
                        f,
                        "invalid slice [{start}:{stop}] of a {nbits}-bit value: require 0 <= \
                         start < stop <= nbits"
                    )
                }
                ValueErrorKind::NegativeShift { amount } => {
                    write!(f, "negative shift amount {amount}")
                }
                ValueErrorKind::ValueTooWide { value_bits, dest_bits } => {
                    write!(
                        f,
                        "value needs {value_bits} bits, too wide for a {dest_bits}-bit \
                         destination"
                    )
                }
                ValueErrorKind::IndexTooWide => {
                    write!(f, "index value has more magnitude than any valid in-range index")
                }
                ValueErrorKind::BitwidthMismatch { lhs_nbits, rhs_nbits } => {
                    write!(f, "bitwidth mismatch Bits{lhs_nbits} <> Bits{rhs_nbits}")
                }
            },
        }
    }
}

impl std::error::Error for BitsError {}

impl From<WidthError> for BitsError {
    fn from(e: WidthError) -> Self {
        BitsError::Width(e)
    }
}

impl From<TypeErrorKind> for BitsError {
    fn from(e: TypeErrorKind) -> Self {
        BitsError::Type(e)
    }
}

impl From<ValueErrorKind> for BitsError {
    fn from(e: ValueErrorKind) -> Self {
        BitsError::Value(e)
    }
}
