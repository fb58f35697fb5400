//! # bitseq
//!
//! Arbitrary-length bit sequences built from integers, byte buffers, hex strings
//! or bit-pattern strings, with simple XOR-based checks over them.
//!
//! Bits are stored most-significant first. Constructors keep the width of their
//! source: a byte buffer always gives `8 * len` bits, a bit string gives exactly
//! the digits it contains. Checks that need the bits to split into fixed-width
//! characters ([BitSequence::lrc], [BitSequence::pack_chars]) return `None` when
//! they don't, while malformed input (odd hex digit count, negative integer)
//! is reported as a [BitsError]. Integers are arbitrary precision ([BigUint]),
//! so any sequence converts to a value and back.
//!
//! ## Example
//!
//! ```
//! use bitseq::{BigUint, BitSequence, ByteOrder, Parity};
//!
//! let bits = BitSequence::from_hex_str("DE AD").unwrap();
//! assert_eq!(bits.format(4, " "), "1101 1110 1010 1101");
//! assert_eq!(bits.parity_bit(Parity::Odd), 0);
//! assert_eq!(bits.lrc(8).unwrap().to_string(), "01110011");
//! assert_eq!(bits.pack_chars(16), Some(vec![BigUint::from(0xDEADu16)]));
//! assert_eq!(bits.to_int(ByteOrder::Big), BigUint::from(0xDEADu16));
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [BitSequence] (as a bit string),
//!   [ByteOrder] and [Parity].

pub mod bits;
mod checksum;
pub mod errors;
mod fmt;
pub mod order;
mod pack;
pub mod parse;
pub mod sequence;
#[cfg(feature = "serde")]
mod serde;

pub use errors::BitsError;
pub use num_bigint::BigUint;
pub use order::{ByteOrder, Parity};
pub use sequence::BitSequence;
