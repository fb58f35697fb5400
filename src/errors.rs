//! Error type for malformed input.
//!
//! Structural mismatches in checksum and packing operations (empty input, zero
//! character width, length not divisible by the width) are not errors: those
//! operations return `None` instead.

use std::fmt;

use num_bigint::BigInt;

/// Errors produced when an input cannot be turned into a bit sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitsError {
    /// The hex digit stream has an odd number of digits after filtering.
    OddHexLength(usize),
    /// A negative integer was given where only unsigned values are accepted.
    NegativeInteger(BigInt),
    /// An element of a raw bit slice is neither 0 nor 1.
    InvalidBit { index: usize, value: u8 },
    /// A strict bit string holds a character that is neither a bit nor a separator.
    InvalidBitChar { index: usize, found: char },
}

impl fmt::Display for BitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitsError::OddHexLength(digits) => {
                write!(f, "odd number of hex digits: {}", digits)
            }
            BitsError::NegativeInteger(value) => {
                write!(f, "negative integer has no bit representation: {}", value)
            }
            BitsError::InvalidBit { index, value } => {
                write!(f, "invalid bit value {} at index {}", value, index)
            }
            BitsError::InvalidBitChar { index, found } => {
                write!(f, "invalid character {:?} at byte {} of bit string", found, index)
            }
        }
    }
}

impl std::error::Error for BitsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            BitsError::OddHexLength(3).to_string(),
            "odd number of hex digits: 3"
        );
        assert_eq!(
            BitsError::InvalidBit { index: 2, value: 7 }.to_string(),
            "invalid bit value 7 at index 2"
        );
        assert_eq!(
            BitsError::InvalidBitChar { index: 1, found: 'x' }.to_string(),
            "invalid character 'x' at byte 1 of bit string"
        );
    }

    #[test]
    fn test_boxed() {
        let err: Box<dyn std::error::Error> =
            Box::new(BitsError::NegativeInteger(BigInt::from(-1)));
        assert_eq!(
            err.to_string(),
            "negative integer has no bit representation: -1"
        );
    }
}
