/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use huff_codec::prelude::*;

#[test]
fn test_dispatch_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let data = b"a rose is a rose is a rose";
    for variant in [Variant::Traditional, Variant::Canonical] {
        let mut reader = MemByteReader::new(data.as_slice());
        let mut writer = MemByteWriter::new(Vec::new());
        variant.encode(&mut reader, &mut writer)?;
        let encoded = writer.into_inner();

        let mut reader = MemByteReader::new(&encoded[..]);
        let mut writer = MemByteWriter::new(Vec::new());
        variant.decode(&mut reader, &mut writer)?;
        assert_eq!(writer.into_inner(), data);
    }
    Ok(())
}

#[test]
fn test_parsed_variant_dispatches() -> Result<(), Box<dyn std::error::Error>> {
    let variant: Variant = "canonical".parse()?;
    let mut reader = MemByteReader::new(b"xyzzy".as_slice());
    let mut writer = MemByteWriter::new(Vec::new());
    variant.show_tree(&mut reader, &mut writer)?;
    let listing = String::from_utf8(writer.into_inner())?;
    assert!(listing.contains("0x78"));
    Ok(())
}
