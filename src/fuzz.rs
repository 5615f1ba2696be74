/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Harnesses exercised by the fuzz targets in `fuzz/`.

use alloc::vec::Vec;
use arbitrary::Arbitrary;

use crate::codec::{
    decode_canonical, decode_traditional, encode_canonical, encode_traditional,
};
use crate::impls::{MemByteReader, MemByteWriter};

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    pub data: Vec<u8>,
}

/// Round-trip `data` through the traditional variant.
pub fn traditional(case: FuzzCase) {
    let mut reader = MemByteReader::new(&case.data[..]);
    let mut writer = MemByteWriter::new(Vec::new());
    encode_traditional(&mut reader, &mut writer).unwrap();
    let encoded = writer.into_inner();

    let mut reader = MemByteReader::new(&encoded[..]);
    let mut writer = MemByteWriter::new(Vec::new());
    decode_traditional(&mut reader, &mut writer).unwrap();
    assert_eq!(writer.into_inner(), case.data);
}

/// Round-trip `data` through the canonical variant.
pub fn canonical(case: FuzzCase) {
    let mut reader = MemByteReader::new(&case.data[..]);
    let mut writer = MemByteWriter::new(Vec::new());
    encode_canonical(&mut reader, &mut writer).unwrap();
    let encoded = writer.into_inner();

    let mut reader = MemByteReader::new(&encoded[..]);
    let mut writer = MemByteWriter::new(Vec::new());
    decode_canonical(&mut reader, &mut writer).unwrap();
    assert_eq!(writer.into_inner(), case.data);
}

/// Decode arbitrary bytes with both variants; anything may come out, but
/// never a panic.
pub fn decode_garbage(case: FuzzCase) {
    let mut reader = MemByteReader::new(&case.data[..]);
    let mut writer = MemByteWriter::new(Vec::new());
    let _ = decode_traditional(&mut reader, &mut writer);

    let mut reader = MemByteReader::new(&case.data[..]);
    let mut writer = MemByteWriter::new(Vec::new());
    let _ = decode_canonical(&mut reader, &mut writer);
}
