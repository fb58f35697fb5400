//! XOR, parity, LRC and Luhn checks.
//!
//! These are simple legacy error-detection codes, not cryptographic checksums.

use num_traits::ToPrimitive;

use crate::{bits::xor_bits, order::Parity, sequence::BitSequence};

impl BitSequence {
    /// XORs these bits with `other`, which is expected to have the same length.
    ///
    /// Mismatched lengths are not an error: the result is as long as the shorter
    /// input. See [crate::bits::xor_bits].
    pub fn xor(&self, other: &BitSequence) -> BitSequence {
        BitSequence::from_vec_unchecked(xor_bits(self.as_bits(), other.as_bits()))
    }

    /// Returns the parity bit of these bits.
    ///
    /// The bits are XOR-folded starting from 1 for [Parity::Odd] and 0 for
    /// [Parity::Even], so an empty sequence gives the seed itself.
    pub fn parity_bit(&self, parity: Parity) -> u8 {
        self.iter().fold(parity.seed(), |pb, bit| pb ^ bit)
    }

    /// Longitudinal redundancy check: the XOR of all `char_width`-bit characters.
    ///
    /// Returns `None` when the sequence is empty, `char_width` is 0, or the
    /// length is not a multiple of `char_width`. Parity bits embedded in each
    /// character are XORed along with the data.
    ///
    /// ```
    /// use bitseq::BitSequence;
    ///
    /// let bits = BitSequence::from_bit_str("0000 1000 0100 1100");
    /// assert_eq!(bits.lrc(8).unwrap().to_string(), "01000100");
    /// assert_eq!(bits.lrc(6), None);
    /// ```
    pub fn lrc(&self, char_width: usize) -> Option<BitSequence> {
        let mut chars = self.chars(char_width)?;
        let first = chars.next()?.to_vec();
        let lrc_char = chars.fold(first, |acc, character| xor_bits(&acc, character));

        Some(BitSequence::from_vec_unchecked(lrc_char))
    }

    /// Luhn mod-10 check digit of the packed characters.
    ///
    /// Characters are packed with [BitSequence::pack_chars] and must all be
    /// decimal digits (e.g. BCD with `char_width` 4). Returns `None` when they
    /// cannot be packed or a character is greater than 9.
    pub fn luhn(&self, char_width: usize) -> Option<u8> {
        let digits = self.decimal_digits(char_width)?;
        let sum = luhn_sum(digits.iter().rev(), 0);

        Some(((10 - sum % 10) % 10) as u8)
    }

    /// Whether the packed characters, check digit last, pass the Luhn check.
    ///
    /// `None` under the same conditions as [BitSequence::luhn]. A single
    /// character is never valid.
    pub fn is_luhn_valid(&self, char_width: usize) -> Option<bool> {
        let digits = self.decimal_digits(char_width)?;
        if digits.len() < 2 {
            return Some(false);
        }

        Some(luhn_sum(digits.iter().rev(), 1) % 10 == 0)
    }

    fn decimal_digits(&self, char_width: usize) -> Option<Vec<u32>> {
        self.pack_chars(char_width)?
            .into_iter()
            .map(|character| character.to_u32().filter(|&d| d <= 9))
            .collect()
    }
}

// Sums digits taken from the right, doubling those whose position has the
// parity of `doubled`.
fn luhn_sum<'a>(digits_from_right: impl Iterator<Item = &'a u32>, doubled: usize) -> u32 {
    digits_from_right
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == doubled {
                let twice = d * 2;
                if twice > 9 { twice - 9 } else { twice }
            } else {
                d
            }
        })
        .sum()
}
