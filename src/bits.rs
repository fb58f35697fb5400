//! Low-level utilities over bit slices.
//!
//! A bit slice is a `&[u8]` whose elements are each 0 or 1, most-significant
//! bit first. Packed byte buffers are addressed the same way: bit 0 is the high
//! bit of the first byte.

use num_bigint::BigUint;

use crate::{errors::BitsError, order::ByteOrder};

/// Reads a single bit at `bit_pos` of a packed byte buffer (0 = MSB of first byte).
pub fn read_bit_at(data: &[u8], bit_pos: usize) -> Option<u8> {
    let byte = *data.get(bit_pos / 8)?;
    let bit_index = bit_pos % 8;

    Some((byte >> (7 - bit_index)) & 1)
}

/// Checks that every element of `bits` is 0 or 1.
pub fn check_bits(bits: &[u8]) -> Result<(), BitsError> {
    match bits.iter().position(|&bit| bit > 1) {
        Some(index) => Err(BitsError::InvalidBit {
            index,
            value: bits[index],
        }),
        None => Ok(()),
    }
}

/// XORs two bit slices element-wise.
///
/// Both slices are expected to have the same length. When they don't, pairs are
/// formed up to the shorter length and the rest of the longer slice is dropped:
/// `xor_bits(&[1, 0, 1], &[1])` is `[0]`.
pub fn xor_bits(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

/// Renders `value` MSB-first.
///
/// Without `num_bits` the natural width is used, so 0 renders as nothing. With
/// `num_bits` the result has exactly that many bits: the low-order bits of
/// `value` are kept when it is too narrow, zeros are prepended when it is wider.
pub fn int_to_bits(value: &BigUint, num_bits: Option<usize>) -> Vec<u8> {
    let width = num_bits.unwrap_or(value.bits() as usize);

    (0..width)
        .rev()
        .map(|i| u8::from(value.bit(i as u64)))
        .collect()
}

/// Converts a bit slice to the unsigned integer it represents.
///
/// With [ByteOrder::Little] the slice is reversed before folding. An empty slice
/// is 0.
pub fn bits_to_int(bits: &[u8], order: ByteOrder) -> BigUint {
    let ordered: Vec<u8> = match order {
        ByteOrder::Big => bits.to_vec(),
        ByteOrder::Little => bits.iter().rev().copied().collect(),
    };

    // Left-pad to whole bytes so the value is aligned on the low end.
    let pad = (8 - ordered.len() % 8) % 8;
    let aligned: Vec<u8> = std::iter::repeat(0).take(pad).chain(ordered).collect();

    BigUint::from_bytes_be(&bits_to_bytes(&aligned))
}

/// Packs a bit slice into bytes, MSB first. A trailing partial byte is padded
/// with zero bits on its low end.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let n_bytes = bits.len().div_ceil(8);
    let mut out = vec![0u8; n_bytes];

    for (i, &bit) in bits.iter().enumerate() {
        out[i / 8] |= (bit & 1) << (7 - (i % 8));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: u128) -> BigUint {
        BigUint::from(value)
    }

    #[test]
    fn test_read_bit_at() {
        let data = [0b1000_0001];
        assert_eq!(read_bit_at(&data, 0), Some(1));
        assert_eq!(read_bit_at(&data, 1), Some(0));
        assert_eq!(read_bit_at(&data, 7), Some(1));
        assert_eq!(read_bit_at(&data, 8), None);
    }

    #[test]
    fn test_check_bits() {
        assert_eq!(check_bits(&[]), Ok(()));
        assert_eq!(check_bits(&[0, 1, 1]), Ok(()));
        assert_eq!(
            check_bits(&[0, 1, 2, 5]).unwrap_err(),
            BitsError::InvalidBit { index: 2, value: 2 }
        );
    }

    #[test]
    fn test_xor_bits() {
        assert_eq!(xor_bits(&[], &[]), Vec::<u8>::new());
        assert_eq!(xor_bits(&[0], &[0]), vec![0]);
        assert_eq!(xor_bits(&[1], &[0]), vec![1]);
        assert_eq!(xor_bits(&[0], &[1]), vec![1]);
        assert_eq!(xor_bits(&[1], &[1]), vec![0]);
        assert_eq!(
            xor_bits(&[0, 0, 1, 0, 1], &[1, 1, 1, 1, 0]),
            vec![1, 1, 0, 1, 1]
        );
    }

    #[test]
    fn test_xor_bits_mismatched_lengths_truncate() {
        // Known edge: the longer input's tail is silently dropped.
        assert_eq!(xor_bits(&[1, 0, 1], &[1]), vec![0]);
        assert_eq!(xor_bits(&[1], &[0, 1, 1, 1]), vec![1]);
        assert_eq!(xor_bits(&[], &[1, 1]), Vec::<u8>::new());
    }

    #[test]
    fn test_int_to_bits_natural_width() {
        assert_eq!(int_to_bits(&big(0), None), Vec::<u8>::new());
        assert_eq!(int_to_bits(&big(1), None), vec![1]);
        assert_eq!(int_to_bits(&big(10), None), vec![1, 0, 1, 0]);
        assert_eq!(int_to_bits(&big(255), None), vec![1; 8]);
        assert_eq!(int_to_bits(&big(u128::MAX), None), vec![1; 128]);
    }

    #[test]
    fn test_int_to_bits_with_width() {
        assert_eq!(int_to_bits(&big(0), Some(0)), Vec::<u8>::new());
        assert_eq!(int_to_bits(&big(1), Some(0)), Vec::<u8>::new());
        assert_eq!(int_to_bits(&big(0), Some(1)), vec![0]);
        assert_eq!(int_to_bits(&big(1), Some(1)), vec![1]);
        assert_eq!(int_to_bits(&big(0xFF), Some(4)), vec![1, 1, 1, 1]);
        assert_eq!(int_to_bits(&big(0xFF), Some(8)), vec![1; 8]);
        assert_eq!(
            int_to_bits(&big(0xFF), Some(10)),
            vec![0, 0, 1, 1, 1, 1, 1, 1, 1, 1]
        );
    }

    #[test]
    fn test_int_to_bits_truncates_low_order() {
        assert_eq!(int_to_bits(&big(0b1011_0110), Some(3)), vec![1, 1, 0]);
    }

    #[test]
    fn test_int_to_bits_wider_than_u128() {
        let value = BigUint::from(1u8) << 130u32;
        let bits = int_to_bits(&value, None);
        assert_eq!(bits.len(), 131);
        assert_eq!(bits[0], 1);
        assert!(bits[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_bits_to_int() {
        assert_eq!(bits_to_int(&[], ByteOrder::Big), big(0));
        assert_eq!(bits_to_int(&[0], ByteOrder::Big), big(0));
        assert_eq!(bits_to_int(&[1], ByteOrder::Big), big(1));
        assert_eq!(bits_to_int(&[0, 1], ByteOrder::Big), big(1));
        assert_eq!(bits_to_int(&[1, 0], ByteOrder::Big), big(2));
        assert_eq!(bits_to_int(&[1, 0, 0, 1], ByteOrder::Big), big(0b1001));
        assert_eq!(bits_to_int(&[1, 0, 1, 1], ByteOrder::Big), big(0b1011));
        assert_eq!(bits_to_int(&[1; 8], ByteOrder::Big), big(0xFF));
        assert_eq!(bits_to_int(&[1; 9], ByteOrder::Big), big(0x1FF));
    }

    #[test]
    fn test_bits_to_int_little() {
        assert_eq!(bits_to_int(&[1, 0, 1, 1], ByteOrder::Little), big(0b1101));
        assert_eq!(bits_to_int(&[], ByteOrder::Little), big(0));
    }

    #[test]
    fn test_bits_to_int_leading_zeros() {
        let mut bits = vec![0; 200];
        bits.push(1);
        assert_eq!(bits_to_int(&bits, ByteOrder::Big), big(1));
    }

    #[test]
    fn test_bits_to_int_wider_than_u128() {
        let value = bits_to_int(&[1; 136], ByteOrder::Big);
        assert_eq!(value.bits(), 136);
        assert_eq!(value, (BigUint::from(1u8) << 136u32) - 1u8);
        assert_eq!(int_to_bits(&value, None), vec![1; 136]);
    }

    #[test]
    fn test_bits_to_bytes() {
        assert_eq!(bits_to_bytes(&[]), Vec::<u8>::new());
        assert_eq!(bits_to_bytes(&[1, 1, 0, 1, 1, 1, 1, 0]), vec![0xDE]);
        assert_eq!(bits_to_bytes(&[1, 0, 1]), vec![0b1010_0000]);
    }
}
