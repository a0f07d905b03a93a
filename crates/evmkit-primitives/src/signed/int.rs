use super::{errors::ParseSignedError, utils::twos_complement, Sign};
use alloc::string::String;
use core::{cmp::Ordering, fmt, str::FromStr};
use ruint::Uint;

/// A fixed-width two's-complement signed integer, backed by a `ruint::Uint`
/// of the same bit width.
///
/// The high bit of the underlying [`Uint`] is the sign bit, exactly as in
/// the EVM's 32-byte word representation of `intN`: `Signed::<256, 4>` is a
/// Solidity `int256`, and decoding/encoding it is a matter of reading or
/// writing that 32-byte word directly.
#[derive(Clone, Copy, Default, Hash)]
#[repr(transparent)]
pub struct Signed<const BITS: usize, const LIMBS: usize>(pub(crate) Uint<BITS, LIMBS>);

impl<const BITS: usize, const LIMBS: usize> Signed<BITS, LIMBS> {
    /// The value zero.
    pub const ZERO: Self = Self(Uint::<BITS, LIMBS>::ZERO);

    /// The minimum representable value: `-2^(BITS-1)`.
    pub fn min_value() -> Self {
        if BITS == 0 {
            return Self::ZERO;
        }
        let mut limbs = [0u64; LIMBS];
        let bit = BITS - 1;
        limbs[bit / 64] = 1u64 << (bit % 64);
        Self(Uint::from_limbs(limbs))
    }

    /// The maximum representable value: `2^(BITS-1) - 1`.
    pub fn max_value() -> Self {
        if BITS == 0 {
            return Self::ZERO;
        }
        // Flipping every bit of `MIN` (`1000...0`) yields `0111...1`, i.e. `MAX`.
        Self(!Self::min_value().0)
    }

    /// Returns the sign of this value.
    #[inline]
    pub fn sign(&self) -> Sign {
        if BITS == 0 {
            return Sign::Positive;
        }
        let bit = BITS - 1;
        let limb = self.0.as_limbs()[bit / 64];
        if limb & (1u64 << (bit % 64)) == 0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// Returns `true` if this value is `>= 0`.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign().is_positive()
    }

    /// Returns `true` if this value is `< 0`.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign().is_negative()
    }

    /// The number of bits required to represent the magnitude of this value,
    /// not counting the sign.
    #[inline]
    pub fn bits(&self) -> usize {
        match self.sign() {
            Sign::Positive => self.0.bit_len(),
            Sign::Negative => twos_complement(self.0).bit_len(),
        }
    }

    /// Returns the raw, two's-complement `Uint` representation.
    #[inline]
    pub const fn into_raw(self) -> Uint<BITS, LIMBS> {
        self.0
    }

    /// Wraps a raw two's-complement `Uint` without reinterpreting it.
    #[inline]
    pub const fn from_raw(raw: Uint<BITS, LIMBS>) -> Self {
        Self(raw)
    }

    /// Builds a value from a sign and an unsigned magnitude, failing if the
    /// magnitude does not fit in `BITS - 1` bits.
    pub fn checked_from_sign_and_abs(sign: Sign, abs: Uint<BITS, LIMBS>) -> Option<Self> {
        let value = match sign {
            Sign::Positive => Self(abs),
            Sign::Negative => Self(twos_complement(abs)),
        };
        if value.sign() == sign || abs.is_zero() {
            Some(value)
        } else {
            None
        }
    }

    /// Returns the absolute value as an unsigned `Uint` of the same width.
    #[inline]
    pub fn unsigned_abs(&self) -> Uint<BITS, LIMBS> {
        match self.sign() {
            Sign::Positive => self.0,
            Sign::Negative => twos_complement(self.0),
        }
    }

    /// Parses a decimal string, with an optional leading `-`.
    pub fn from_dec_str(value: &str) -> Result<Self, ParseSignedError> {
        let (sign, value) = match value.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, value.strip_prefix('+').unwrap_or(value)),
        };
        let abs = Uint::<BITS, LIMBS>::from_str_radix(value, 10)
            .map_err(ParseSignedError::Digits)?;
        Self::checked_from_sign_and_abs(sign, abs).ok_or(ParseSignedError::Overflow)
    }

    /// Parses a `0x`-prefixed (optionally `-`-signed) hex string.
    pub fn from_hex_str(value: &str) -> Result<Self, ParseSignedError> {
        let (sign, value) = match value.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, value.strip_prefix('+').unwrap_or(value)),
        };
        let value = value.strip_prefix("0x").unwrap_or(value);
        let abs =
            Uint::<BITS, LIMBS>::from_str_radix(value, 16).map_err(ParseSignedError::Digits)?;
        Self::checked_from_sign_and_abs(sign, abs).ok_or(ParseSignedError::Overflow)
    }
}

impl<const BITS: usize, const LIMBS: usize> PartialEq for Signed<BITS, LIMBS> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const BITS: usize, const LIMBS: usize> Eq for Signed<BITS, LIMBS> {}

impl<const BITS: usize, const LIMBS: usize> PartialOrd for Signed<BITS, LIMBS> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const BITS: usize, const LIMBS: usize> Ord for Signed<BITS, LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign(), other.sign()) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.0.cmp(&other.0),
            (Sign::Negative, Sign::Negative) => other.0.cmp(&self.0),
        }
    }
}

impl<const BITS: usize, const LIMBS: usize> core::ops::Neg for Signed<BITS, LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(twos_complement(self.0))
    }
}

impl<const BITS: usize, const LIMBS: usize> fmt::Debug for Signed<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<const BITS: usize, const LIMBS: usize> fmt::Display for Signed<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl<const BITS: usize, const LIMBS: usize> fmt::LowerHex for Signed<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
