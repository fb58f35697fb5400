//! Serde support, enabled with the `serde` feature.
//!
//! A [BitSequence] is serialized as its bit string (`"1101"`) and deserialized
//! through [BitSequence::from_bit_str_strict]: separators and a `0b` prefix are
//! accepted on input, any other character is an error.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

use crate::sequence::BitSequence;

impl Serialize for BitSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct BitStrVisitor;

impl Visitor<'_> for BitStrVisitor {
    type Value = BitSequence;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string of 0 and 1")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        BitSequence::from_bit_str_strict(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for BitSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(BitStrVisitor)
    }
}
