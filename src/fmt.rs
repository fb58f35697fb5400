//! String rendering of bit sequences.

use std::fmt::{self, Binary, Debug, Display, Write};

use crate::sequence::BitSequence;

impl BitSequence {
    /// Renders the bits with `sep` between groups of `group_by` bits, counting
    /// from the most-significant bit. The last group may be shorter.
    ///
    /// A `group_by` of 0 disables grouping.
    ///
    /// ```
    /// use bitseq::BitSequence;
    ///
    /// let bits = BitSequence::from_hex_str("B4B120").unwrap();
    /// assert_eq!(bits.format(5, " "), "10110 10010 11000 10010 0000");
    /// ```
    pub fn format(&self, group_by: usize, sep: &str) -> String {
        let separators = match group_by {
            0 => 0,
            n => self.len().saturating_sub(1) / n,
        };
        let mut formatted = String::with_capacity(self.len() + separators * sep.len());

        for (i, bit) in self.iter().enumerate() {
            if group_by > 0 && i > 0 && i % group_by == 0 {
                formatted.push_str(sep);
            }
            formatted.push(bit_char(bit));
        }

        formatted
    }

    /// Like [BitSequence::format], but zeros are prepended so every group,
    /// including the first, has exactly `group_by` bits.
    ///
    /// ```
    /// use bitseq::BitSequence;
    ///
    /// let bits = BitSequence::from_hex_str("FF0F").unwrap();
    /// assert_eq!(bits.format_padded(5, " "), "00001 11111 11000 01111");
    /// ```
    pub fn format_padded(&self, group_by: usize, sep: &str) -> String {
        let pad = match group_by {
            0 => 0,
            n => (n - self.len() % n) % n,
        };
        let mut padded = vec![0; pad];
        padded.extend(self.iter());

        BitSequence::from_vec_unchecked(padded).format(group_by, sep)
    }

    fn write_bits(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_char(bit_char(bit))?;
        }

        Ok(())
    }
}

fn bit_char(bit: u8) -> char {
    if bit == 0 { '0' } else { '1' }
}

impl Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Binary::fmt(self, f)
    }
}

impl Binary for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() && !self.is_empty() {
            f.write_str("0b")?;
        }

        self.write_bits(f)
    }
}

impl Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        self.write_bits(f)?;
        f.write_char('"')
    }
}
