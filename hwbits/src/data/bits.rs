use std::num::NonZeroUsize;

use hwbits_internals::{BitsError, UBig, WidthError, SHIFT};

/// Exactly one of the two payload forms is live at a time, selected by
/// `nbits <= SHIFT`. See the crate-level invariants in spec.md §3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Payload {
    /// `nbits <= SHIFT`: a single machine word, `0 <= w < 2^nbits`.
    Word(u64),
    /// `nbits > SHIFT`: a normalised, non-negative big integer,
    /// `0 <= b < 2^nbits`.
    Big(UBig),
}

/// An immutable N-bit value, `1 <= N <= 512`, with strict modulo-2^N
/// semantics.
///
/// `N` is carried as a runtime field rather than a const generic parameter;
/// see `DESIGN.md` for why. `Bits` is cheap to clone (a machine word, or a
/// digit array of at most nine `u64`s) and is safe to share read-only across
/// threads; see the crate's concurrency notes for [`BitsWithNext`], the only
/// mutable member of this family.
///
/// `Bits` implements Rust's `PartialEq`/`Eq`/`Hash` structurally, over the
/// pair `(nbits, payload)` — this matches the `hash` recipe in spec.md §6,
/// which is explicitly a hash of the `(N, payload)` tuple, so a value of
/// one width is never equal (or hash-equal) to a numerically-equal value of
/// a different width. The spec's comparison *operators* (`==`, `<`, ...,
/// spec.md §4.4) are a distinct, width-independent magnitude comparison;
/// those live as inherent methods in `logic::cmp` rather than on these
/// traits, precisely to avoid the two notions of equality colliding.
///
/// `Debug` is implemented by hand in `logic::fmt` (`"BitsN( 0xHHH )"` per
/// spec.md §6) rather than derived, since the derived field-dump form isn't
/// the representation spec.md specifies.
#[derive(Clone, PartialEq, Eq)]
pub struct Bits {
    nbits: NonZeroUsize,
    pub(crate) payload: Payload,
}

impl Bits {
    /// Validates `nbits` is in `1..=512` and returns it as a `NonZeroUsize`.
    pub(crate) fn check_nbits(nbits: usize) -> Result<NonZeroUsize, BitsError> {
        if nbits == 0 || nbits > hwbits_internals::MAX_NBITS {
            return Err(BitsError::Width(WidthError { nbits }));
        }
        // Safety net: nbits == 0 already rejected above.
        Ok(NonZeroUsize::new(nbits).expect("nbits was just checked nonzero"))
    }

    pub(crate) fn from_word_unchecked(nbits: NonZeroUsize, word: u64) -> Self {
        debug_assert!(nbits.get() <= SHIFT);
        Bits { nbits, payload: Payload::Word(word) }
    }

    pub(crate) fn from_big_unchecked(nbits: NonZeroUsize, big: UBig) -> Self {
        debug_assert!(nbits.get() > SHIFT);
        Bits { nbits, payload: Payload::Big(big) }
    }

    /// Builds a value of the given width from an already-reduced `UBig`
    /// (`big < 2^nbits`), choosing the word or big payload form as
    /// appropriate.
    pub(crate) fn from_reduced_ubig(nbits: NonZeroUsize, big: UBig) -> Self {
        if nbits.get() <= SHIFT {
            Self::from_word_unchecked(nbits, big.to_u64().unwrap_or(0))
        } else {
            Self::from_big_unchecked(nbits, big)
        }
    }

    /// Constructs a `Bits<nbits>` from an unsigned machine integer, reducing
    /// it modulo `2^nbits`.
    pub fn from_u64(nbits: usize, value: u64) -> Result<Self, BitsError> {
        let nbits = Self::check_nbits(nbits)?;
        if nbits.get() <= SHIFT {
            Ok(Self::from_word_unchecked(nbits, value & hwbits_internals::digit_mask(nbits.get() as u32)))
        } else {
            let big = UBig::from_u64(value).mask_off_high(nbits.get());
            Ok(Self::from_big_unchecked(nbits, big))
        }
    }

    /// Constructs a `Bits<nbits>` from a signed machine integer. A negative
    /// `value` is reduced to its `nbits`-bit two's-complement truncation, per
    /// spec.md §4.2.
    pub fn from_i64(nbits: usize, value: i64) -> Result<Self, BitsError> {
        let nbits = Self::check_nbits(nbits)?;
        let reduced = crate::logic::arith::ubig_from_i64(value, nbits.get());
        Ok(Self::from_reduced_ubig(nbits, reduced))
    }

    /// Constructs a `Bits<nbits>` from another `Bits` value of any width,
    /// reducing it modulo `2^nbits` (truncating or zero-extending as
    /// needed).
    pub fn from_bits(nbits: usize, value: &Bits) -> Result<Self, BitsError> {
        let nbits = Self::check_nbits(nbits)?;
        let reduced = value.as_ubig().mask_off_high(nbits.get());
        Ok(Self::from_reduced_ubig(nbits, reduced))
    }

    /// The zero value of the given width.
    pub fn zero(nbits: usize) -> Result<Self, BitsError> {
        Self::from_u64(nbits, 0)
    }

    /// The width of this value, in bits.
    #[must_use]
    pub fn nbits(&self) -> usize {
        self.nbits.get()
    }

    pub(crate) fn nbits_nonzero(&self) -> NonZeroUsize {
        self.nbits
    }

    /// `true` if this value uses the word payload form (`nbits <= SHIFT`).
    #[must_use]
    pub fn is_word_form(&self) -> bool {
        matches!(self.payload, Payload::Word(_))
    }

    /// The payload as a machine word. Only valid (and only ever called
    /// internally) when `self.nbits() <= SHIFT`, which is exactly when
    /// `Payload::Word` is the live variant.
    pub(crate) fn as_word_value(&self) -> u64 {
        match &self.payload {
            Payload::Word(w) => *w,
            Payload::Big(_) => unreachable!("as_word_value called on a big-form Bits"),
        }
    }

    /// The payload promoted to a [`UBig`], regardless of which form is live.
    pub(crate) fn as_ubig(&self) -> UBig {
        match &self.payload {
            Payload::Word(w) => UBig::from_u64(*w),
            Payload::Big(b) => b.clone(),
        }
    }
}
