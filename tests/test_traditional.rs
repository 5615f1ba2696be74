/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use huff_codec::prelude::*;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn encode(data: &[u8]) -> Vec<u8> {
    let mut reader = MemByteReader::new(data);
    let mut writer = MemByteWriter::new(Vec::new());
    encode_traditional(&mut reader, &mut writer).unwrap();
    writer.into_inner()
}

fn decode(data: &[u8]) -> Result<Vec<u8>, CodecError<std::convert::Infallible, std::convert::Infallible>> {
    let mut reader = MemByteReader::new(data);
    let mut writer = MemByteWriter::new(Vec::new());
    decode_traditional(&mut reader, &mut writer)?;
    Ok(writer.into_inner())
}

fn round_trip(data: &[u8]) {
    assert_eq!(decode(&encode(data)).unwrap(), data, "round trip failed for {:?}", data);
}

#[test]
fn test_round_trip_fixed() {
    round_trip(b"");
    round_trip(b"A");
    round_trip(b"AAAAAAAAAA");
    round_trip(b"AB");
    round_trip(b"ABBCCCDDDD");
    round_trip(b"so much depends upon a red wheel barrow");
    round_trip(&[0u8; 1000]);
    let all_bytes: Vec<u8> = (0..=255).collect();
    round_trip(&all_bytes);
}

#[test]
fn test_round_trip_random() {
    let mut rng = SmallRng::seed_from_u64(0);
    for len in 0..200 {
        let data: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        round_trip(&data);
    }
    // a longer, skewed input
    let data: Vec<u8> = (0..50_000)
        .map(|_| {
            let byte: u8 = rng.random();
            byte & byte.rotate_left(3)
        })
        .collect();
    round_trip(&data);
}

#[test]
fn test_skewed_input_compresses() {
    let data: Vec<u8> = (0..10_000)
        .map(|i| if i % 10 == 0 { b'x' } else { b'e' })
        .collect();
    let encoded = encode(&data);
    assert!(encoded.len() < data.len() / 4);
}

#[test]
fn test_single_repeated_byte() {
    // a lone input symbol still gets a one-bit code, so ten bytes cost ten
    // bits plus the end-of-stream bit
    let encoded = encode(b"AAAAAAAAAA");
    // one record, the terminator, and two payload bytes
    assert_eq!(encoded.len(), 5 + 5 + 2);
    assert_eq!(decode(&encoded).unwrap(), b"AAAAAAAAAA");
}

#[test]
fn test_truncated_payload() {
    let data = b"ABBCCCDDDD";
    let encoded = encode(data);
    // drop the last byte: the end-of-stream code can no longer be reached
    let result = decode(&encoded[..encoded.len() - 1]);
    assert!(matches!(result, Err(CodecError::TruncatedStream)));
}

#[test]
fn test_truncated_header() {
    let encoded = encode(b"ABBCCCDDDD");
    for cut in [1, 3, 7] {
        let result = decode(&encoded[..cut]);
        assert!(matches!(result, Err(CodecError::MalformedHeader)));
    }
}

#[test]
fn test_empty_stream_is_rejected() {
    assert!(matches!(decode(b""), Err(CodecError::MalformedHeader)));
}

#[test]
fn test_adapter_file_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let data = b"twinkle twinkle little star";
    let path = std::env::temp_dir().join("huff_codec_traditional");
    {
        let mut reader = MemByteReader::new(data.as_slice());
        let mut writer = ByteAdapter::new(std::fs::File::create(&path)?);
        encode_traditional(&mut reader, &mut writer)?;
    }
    {
        let mut reader = ByteAdapter::new(std::fs::File::open(&path)?);
        let mut writer = MemByteWriter::new(Vec::new());
        decode_traditional(&mut reader, &mut writer)?;
        assert_eq!(writer.into_inner(), data);
    }
    Ok(())
}
