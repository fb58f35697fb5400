//! Byte order and parity mode options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which a byte buffer or a bit slice is read as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ByteOrder {
    /// Most-significant part first.
    #[default]
    Big,
    /// Least-significant part first.
    Little,
}

/// Evenness the parity bit establishes over a group of bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parity {
    #[default]
    Odd,
    Even,
}

impl Parity {
    /// Value the parity fold starts from.
    pub fn seed(self) -> u8 {
        match self {
            Parity::Odd => 1,
            Parity::Even => 0,
        }
    }
}
