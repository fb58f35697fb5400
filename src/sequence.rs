//! The [BitSequence] type: construction and access.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::{
    bits::{self, check_bits, int_to_bits, read_bit_at},
    errors::BitsError,
    order::ByteOrder,
};

/// An ordered sequence of bits, most-significant bit first.
///
/// Every element is 0 or 1. The empty sequence is a valid value of its own and
/// is not the same as `[0]`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitSequence {
    bits: Vec<u8>,
}

impl BitSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps bits that are already known to be 0 or 1.
    pub(crate) fn from_vec_unchecked(bits: Vec<u8>) -> Self {
        debug_assert!(check_bits(&bits).is_ok());
        BitSequence { bits }
    }

    /// Builds a sequence from raw bit values. Fails on any element other than 0 or 1.
    pub fn from_bits(bits: &[u8]) -> Result<Self, BitsError> {
        check_bits(bits)?;
        Ok(Self::from_vec_unchecked(bits.to_vec()))
    }

    /// Represents `value` in binary.
    ///
    /// With `num_bits == None` the natural width is used and 0 gives an empty
    /// sequence. With `Some(n)` the sequence has exactly `n` bits: zeros are
    /// prepended when `value` is narrower, and only its low-order `n` bits are
    /// kept when it is wider, in which case `value` is no longer faithfully
    /// represented.
    ///
    /// See the `From<BigUint>` impl for a constructor where 0 gives `[0]`.
    pub fn from_int(value: &BigUint, num_bits: Option<usize>) -> Self {
        Self::from_vec_unchecked(int_to_bits(value, num_bits))
    }

    /// [BitSequence::from_int] for values that fit in a `u128`.
    pub fn from_u128(value: u128, num_bits: Option<usize>) -> Self {
        Self::from_int(&BigUint::from(value), num_bits)
    }

    /// Like [BitSequence::from_int] for signed input. Negative values are rejected.
    pub fn from_signed(value: impl Into<BigInt>, num_bits: Option<usize>) -> Result<Self, BitsError> {
        let value = value.into();
        let unsigned = value
            .to_biguint()
            .ok_or_else(|| BitsError::NegativeInteger(value.clone()))?;
        Ok(Self::from_int(&unsigned, num_bits))
    }

    /// Interprets `data` as an unsigned integer in the given byte order and
    /// renders it on `8 * data.len()` bits, so leading zero bytes are kept.
    pub fn from_bytes(data: &[u8], order: ByteOrder) -> Self {
        let bit_count = data.len() * 8;
        let bits: Vec<u8> = match order {
            ByteOrder::Big => (0..bit_count)
                .filter_map(|pos| read_bit_at(data, pos))
                .collect(),
            ByteOrder::Little => data
                .iter()
                .rev()
                .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1))
                .collect(),
        };

        Self::from_vec_unchecked(bits)
    }

    /// Replaces the content of this sequence with the representation of `value`.
    ///
    /// `num_bits` behaves as in [BitSequence::from_int]. When `explicit_zero` is
    /// set and `value` is 0, the result is `[0]` whatever `num_bits` is.
    pub fn set_value(&mut self, value: &BigUint, num_bits: Option<usize>, explicit_zero: bool) {
        self.bits = if explicit_zero && value.is_zero() {
            vec![0]
        } else {
            int_to_bits(value, num_bits)
        };
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits as a slice of 0s and 1s.
    pub fn as_bits(&self) -> &[u8] {
        &self.bits
    }

    /// Consumes the sequence and returns its bits.
    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }

    /// Returns the bit at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }

    /// Bits as booleans, MSB first.
    pub fn to_bools(&self) -> Vec<bool> {
        self.bits.iter().map(|&bit| bit == 1).collect()
    }

    /// Packs the bits into bytes MSB first; see [bits::bits_to_bytes].
    pub fn to_bytes(&self) -> Vec<u8> {
        bits::bits_to_bytes(&self.bits)
    }
}

/// Natural-width representation, except that 0 gives `[0]` rather than an
/// empty sequence.
impl From<&BigUint> for BitSequence {
    fn from(value: &BigUint) -> Self {
        let mut sequence = BitSequence::new();
        sequence.set_value(value, None, true);
        sequence
    }
}

impl From<BigUint> for BitSequence {
    fn from(value: BigUint) -> Self {
        BitSequence::from(&value)
    }
}

macro_rules! impl_from_unsigned {
    ($($type:ty),*) => {
        $(
            impl From<$type> for BitSequence {
                fn from(value: $type) -> Self {
                    BitSequence::from(&BigUint::from(value))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl TryFrom<&[u8]> for BitSequence {
    type Error = BitsError;

    fn try_from(bits: &[u8]) -> Result<Self, Self::Error> {
        BitSequence::from_bits(bits)
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_vec_unchecked(iter.into_iter().map(u8::from).collect())
    }
}

impl AsRef<[u8]> for BitSequence {
    fn as_ref(&self) -> &[u8] {
        &self.bits
    }
}
