//! Packing bits into fixed-width characters and integers.

use std::slice::ChunksExact;

use num_bigint::BigUint;

use crate::{bits::bits_to_int, order::ByteOrder, sequence::BitSequence};

impl BitSequence {
    /// Splits the bits into characters of `char_width` bits.
    ///
    /// `None` when the sequence is empty, `char_width` is 0, or the length is not
    /// a multiple of `char_width`.
    pub(crate) fn chars(&self, char_width: usize) -> Option<ChunksExact<'_, u8>> {
        let len = self.len();
        if len == 0 || char_width == 0 || len % char_width != 0 {
            return None;
        }

        Some(self.as_bits().chunks_exact(char_width))
    }

    /// Packs groups of `char_width` bits into integers, first group first.
    ///
    /// Returns `None` under the same conditions as [BitSequence::lrc]. Characters
    /// may be of any width.
    ///
    /// ```
    /// use bitseq::{BigUint, BitSequence};
    ///
    /// let bits = BitSequence::from_hex_str("ABCD").unwrap();
    /// let bytes: Vec<BigUint> = [0xABu8, 0xCD].into_iter().map(BigUint::from).collect();
    /// assert_eq!(bits.pack_chars(8), Some(bytes));
    /// assert_eq!(bits.pack_chars(3), None);
    /// ```
    pub fn pack_chars(&self, char_width: usize) -> Option<Vec<BigUint>> {
        let chars = self.chars(char_width)?;
        Some(chars.map(|character| bits_to_int(character, ByteOrder::Big)).collect())
    }

    /// The unsigned integer these bits represent; see [bits_to_int].
    pub fn to_int(&self, order: ByteOrder) -> BigUint {
        bits_to_int(self.as_bits(), order)
    }
}

impl From<&BitSequence> for BigUint {
    fn from(bits: &BitSequence) -> Self {
        bits.to_int(ByteOrder::Big)
    }
}
