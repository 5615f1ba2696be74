/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::format;
use alloc::string::String;

use crate::codec::traditional::symbol_label;
use crate::codec::{CodecError, tally, write_str};
use crate::codes::{CODE_BITS, CanonicalCode, HuffmanTree, MAX_CODE_LEN, Symbol, header};
use crate::impls::{BitReader, BitWriter};
use crate::traits::{BitRead, BitWrite, ByteRead, ByteWrite};
use crate::utils::BitArray;

/// Extract the canonical per-symbol code lengths for the content of
/// `reader`, together with the input length in bytes.
fn code_lengths<R: ByteRead, WE: core::error::Error + Send + Sync + 'static>(
    reader: &mut R,
) -> Result<([u8; 256], u64), CodecError<R::Error, WE>> {
    let (freqs, input_len) = tally(reader)?;
    let tree = HuffmanTree::from_frequencies(&freqs);
    let mut lengths = [0u8; 256];
    tree.for_each_leaf(|symbol, _count, _code, len| {
        debug_assert!(len as usize <= MAX_CODE_LEN);
        lengths[symbol as usize] = len as u8;
    });
    Ok((lengths, input_len))
}

/// Encode `reader` into `writer` using the canonical variant.
///
/// Only the per-symbol code lengths travel in the header, preceded by the
/// input length that frames the payload; there is no in-band end-of-stream
/// marker. An empty input produces a header announcing zero bytes, all-zero
/// lengths and no payload.
pub fn encode_canonical<R: ByteRead, W: ByteWrite>(
    reader: &mut R,
    writer: &mut W,
) -> Result<(), CodecError<R::Error, W::Error>> {
    let (lengths, input_len) = code_lengths(reader)?;
    let code = CanonicalCode::from_lengths(&lengths);

    let mut bits = BitWriter::new(writer);
    header::write_lengths(&mut bits, input_len, &lengths).map_err(CodecError::Write)?;

    reader.rewind().map_err(CodecError::Read)?;
    while let Some(byte) = reader.read_byte().map_err(CodecError::Read)? {
        let entry = code.entry(byte);
        bits.write_bits(entry.code.as_bytes(), entry.len as usize)
            .map_err(CodecError::Write)?;
    }
    bits.flush().map_err(CodecError::Write)
}

/// Decode a canonical-variant stream from `reader` into `writer`.
///
/// The canonical code is rebuilt from the header lengths exactly as the
/// encoder built it. Bits accumulate in a register compared against the
/// group of codes of the current length; every match emits a byte, until
/// the framed number of bytes has been produced. Running out of bits first
/// is a [`TruncatedStream`](CodecError::TruncatedStream) error, and a
/// register outgrowing the longest possible code is an
/// [`InvalidCode`](CodecError::InvalidCode) error.
pub fn decode_canonical<R: ByteRead, W: ByteWrite>(
    reader: &mut R,
    writer: &mut W,
) -> Result<(), CodecError<R::Error, W::Error>> {
    let mut bits = BitReader::new(reader);
    let (input_len, lengths) = header::read_lengths(&mut bits)?;
    let code = CanonicalCode::from_lengths(&lengths);

    let mut register = BitArray::new(CODE_BITS);
    let mut len = 0usize;
    let mut emitted = 0u64;
    while emitted < input_len {
        let Some(bit) = bits.read_bit().map_err(CodecError::Read)? else {
            return Err(CodecError::TruncatedStream);
        };
        if bit {
            register.set(len);
        }
        len += 1;
        if len > MAX_CODE_LEN {
            return Err(CodecError::InvalidCode);
        }
        if let Some(symbol) = code.lookup(&register, len) {
            writer.write_byte(symbol).map_err(CodecError::Write)?;
            emitted += 1;
            register.clear_all();
            len = 0;
        }
    }
    writer.flush().map_err(CodecError::Write)
}

/// Write a human-readable listing of the canonical code for the content of
/// `reader`: one line per coded symbol with its code length and code bits.
pub fn show_tree_canonical<R: ByteRead, W: ByteWrite>(
    reader: &mut R,
    writer: &mut W,
) -> Result<(), CodecError<R::Error, W::Error>> {
    let (lengths, _) = code_lengths(reader)?;
    let code = CanonicalCode::from_lengths(&lengths);

    let mut listing = String::new();
    listing.push_str("symbol  length  code\n");
    for symbol in 0..=255u8 {
        let entry = code.entry(symbol);
        if entry.len == 0 {
            continue;
        }
        listing.push_str(&format!(
            "{}  {:>6}  ",
            symbol_label(symbol as Symbol),
            entry.len
        ));
        for index in 0..entry.len as usize {
            listing.push(if entry.code.test(index) { '1' } else { '0' });
        }
        listing.push('\n');
    }
    write_str(writer, &listing).map_err(CodecError::Write)?;
    writer.flush().map_err(CodecError::Write)
}
