/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt::{Display, Formatter};
use core::str::FromStr;

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::codec::{
    CodecError, decode_canonical, decode_traditional, encode_canonical, encode_traditional,
    show_tree_canonical, show_tree_traditional,
};
use crate::traits::{ByteRead, ByteWrite};

/// An enum whose variants represent the two stream formats.
///
/// Both [`Display`] and [`FromStr`] are implemented for this enum in a dual
/// way, which makes it possible to store the chosen variant as a string in a
/// configuration file, and then parse it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Frequency counts in the header, tree rebuilt on decode, in-band
    /// end-of-stream symbol.
    Traditional,
    /// Code lengths in the header, canonical code rebuilt on decode,
    /// length-framed payload.
    Canonical,
}

impl Variant {
    /// Dispatch to the encoder of this variant.
    #[inline]
    pub fn encode<R: ByteRead, W: ByteWrite>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), CodecError<R::Error, W::Error>> {
        match self {
            Variant::Traditional => encode_traditional(reader, writer),
            Variant::Canonical => encode_canonical(reader, writer),
        }
    }

    /// Dispatch to the decoder of this variant.
    #[inline]
    pub fn decode<R: ByteRead, W: ByteWrite>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), CodecError<R::Error, W::Error>> {
        match self {
            Variant::Traditional => decode_traditional(reader, writer),
            Variant::Canonical => decode_canonical(reader, writer),
        }
    }

    /// Dispatch to the code listing of this variant.
    #[inline]
    pub fn show_tree<R: ByteRead, W: ByteWrite>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), CodecError<R::Error, W::Error>> {
        match self {
            Variant::Traditional => show_tree_traditional(reader, writer),
            Variant::Canonical => show_tree_canonical(reader, writer),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Variant::Traditional => write!(f, "traditional"),
            Variant::Canonical => write!(f, "canonical"),
        }
    }
}

/// The error returned when parsing a [`Variant`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantParseError;

impl Display for VariantParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Expected \"traditional\" or \"canonical\"")
    }
}

impl core::error::Error for VariantParseError {}

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traditional" => Ok(Variant::Traditional),
            "canonical" => Ok(Variant::Canonical),
            _ => Err(VariantParseError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn test_display_from_str_duality() {
        for variant in [Variant::Traditional, Variant::Canonical] {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
        assert_eq!("huffman".parse::<Variant>(), Err(VariantParseError));
        assert_eq!(format!("{}", Variant::Canonical), "canonical");
    }
}
