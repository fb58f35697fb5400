//! Parsing of hex strings and bit-pattern strings.
//!
//! Both parsers are lenient about separators: anything that is not a digit of
//! the expected radix is dropped, so `"DE AD"` and `"110,1010"` are accepted.
//! [BitSequence::from_bit_str_strict] only skips the usual separators and
//! rejects anything else.

use crate::{errors::BitsError, order::ByteOrder, sequence::BitSequence};

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> &'a str {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &s[prefix.len()..],
        _ => s,
    }
}

/// Decodes hex digits, ignoring every other character, into bytes.
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>, BitsError> {
    let digits: Vec<u8> = strip_prefix_ignore_case(s, "0x")
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();

    if digits.len() % 2 != 0 {
        return Err(BitsError::OddHexLength(digits.len()));
    }

    Ok(digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

impl BitSequence {
    /// Parses a string of hex digits, with an optional `0x` prefix.
    ///
    /// Non-hex characters are skipped. The remaining digits must come in pairs.
    ///
    /// ```
    /// use bitseq::BitSequence;
    ///
    /// let bits = BitSequence::from_hex_str("0xDE AD").unwrap();
    /// assert_eq!(bits.to_string(), "1101111010101101");
    /// ```
    pub fn from_hex_str(s: &str) -> Result<Self, BitsError> {
        let bytes = hex_to_bytes(s)?;
        Ok(Self::from_bytes(&bytes, ByteOrder::Big))
    }

    /// Parses a string of `0` and `1`, with an optional `0b` prefix.
    ///
    /// Every other character is skipped; width and order are kept exactly.
    pub fn from_bit_str(s: &str) -> Self {
        let bits = strip_prefix_ignore_case(s, "0b")
            .bytes()
            .filter_map(|c| match c {
                b'0' => Some(0),
                b'1' => Some(1),
                _ => None,
            })
            .collect();

        Self::from_vec_unchecked(bits)
    }

    /// Parses a string of `0` and `1`, with an optional `0b` prefix, failing on
    /// any character other than a bit or a separator (ASCII whitespace, `,`,
    /// `_`, `:` or `-`).
    ///
    /// ```
    /// use bitseq::{BitSequence, BitsError};
    ///
    /// let bits = BitSequence::from_bit_str_strict("0b1010_0101").unwrap();
    /// assert_eq!(bits.to_string(), "10100101");
    /// assert_eq!(
    ///     BitSequence::from_bit_str_strict("10x1").unwrap_err(),
    ///     BitsError::InvalidBitChar { index: 2, found: 'x' }
    /// );
    /// ```
    pub fn from_bit_str_strict(s: &str) -> Result<Self, BitsError> {
        let body = strip_prefix_ignore_case(s, "0b");
        let offset = s.len() - body.len();
        let mut bits = Vec::with_capacity(body.len());

        for (index, found) in body.char_indices() {
            match found {
                '0' => bits.push(0),
                '1' => bits.push(1),
                ',' | '_' | ':' | '-' => {}
                c if c.is_ascii_whitespace() => {}
                _ => {
                    return Err(BitsError::InvalidBitChar {
                        index: index + offset,
                        found,
                    });
                }
            }
        }

        Ok(Self::from_vec_unchecked(bits))
    }
}
