/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Serialization of the two stream headers.

The traditional header is a sequence of `[symbol, count]` records, one per
active byte symbol, each five bytes long (one byte of symbol, four
little-endian bytes of count), closed by an all-zero record. The end-of-stream
symbol travels implicitly: the parser re-activates it with a count of one, so
both sides build their tree from identical tables.

The canonical header is fixed-size: an eight-byte little-endian input length
followed by one code-length byte per byte symbol. The input length frames the
payload, so the decoder emits exactly as many bytes as were encoded and the
zero padding of the last byte can never decode to a spurious symbol.

Headers are written and parsed through the bit-stream traits, so a driver can
continue emitting code bits right after the header without realigning.

*/

use core::error::Error;
use core::fmt::{Display, Formatter};

use crate::codes::{EOF_SYMBOL, FrequencyTable, HuffmanTree, Symbol};
use crate::traits::{BitRead, BitWrite};

/// The number of bytes of a record of the traditional header.
const RECORD_BYTES: usize = 5;

/// The error returned when parsing a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError<E: Error + Send + Sync + 'static> {
    /// The underlying stream failed.
    Io(E),
    /// The stream ended in the middle of the header.
    Malformed,
}

impl<E: Error + Send + Sync + 'static> Display for HeaderError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            HeaderError::Io(error) => write!(f, "I/O error while reading header: {}", error),
            HeaderError::Malformed => write!(f, "Stream ended in the middle of the header"),
        }
    }
}

impl<E: Error + Send + Sync + 'static> Error for HeaderError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HeaderError::Io(error) => Some(error),
            HeaderError::Malformed => None,
        }
    }
}

/// Write the traditional header: one record per active byte symbol, in the
/// order of a left-first walk of `tree`, then the terminator record.
pub fn write_frequencies<W: BitWrite>(writer: &mut W, tree: &HuffmanTree) -> Result<(), W::Error> {
    tree.visit_leaves(|symbol, count, _code, _len| {
        if symbol == EOF_SYMBOL {
            return Ok(());
        }
        writer.write_byte(symbol as u8)?;
        for byte in count.to_le_bytes() {
            writer.write_byte(byte)?;
        }
        Ok(())
    })?;
    // The terminator is the record of symbol 0 with count 0. It collides
    // with a genuine symbol 0 of count zero, but count-zero symbols are
    // inactive and never emitted, so the collision is benign.
    for _ in 0..RECORD_BYTES {
        writer.write_byte(0)?;
    }
    Ok(())
}

/// Parse the traditional header into a [`FrequencyTable`], re-activating the
/// end-of-stream symbol.
pub fn read_frequencies<R: BitRead>(
    reader: &mut R,
) -> Result<FrequencyTable, HeaderError<R::Error>> {
    let mut freqs = FrequencyTable::new();
    loop {
        let mut record = [0u8; RECORD_BYTES];
        for byte in &mut record {
            *byte = reader
                .read_byte()
                .map_err(HeaderError::Io)?
                .ok_or(HeaderError::Malformed)?;
        }
        let symbol = record[0] as Symbol;
        let count = u32::from_le_bytes([record[1], record[2], record[3], record[4]]);
        if symbol == 0 && count == 0 {
            break;
        }
        freqs.set(symbol, count);
    }
    freqs.mark_eof();
    Ok(freqs)
}

/// Write the canonical header: the input length followed by the 256
/// per-symbol code lengths.
pub fn write_lengths<W: BitWrite>(
    writer: &mut W,
    input_len: u64,
    lengths: &[u8; 256],
) -> Result<(), W::Error> {
    for byte in input_len.to_le_bytes() {
        writer.write_byte(byte)?;
    }
    for &len in lengths {
        writer.write_byte(len)?;
    }
    Ok(())
}

/// Parse the canonical header, returning the input length and the per-symbol
/// code lengths.
pub fn read_lengths<R: BitRead>(
    reader: &mut R,
) -> Result<(u64, [u8; 256]), HeaderError<R::Error>> {
    let mut raw_len = [0u8; 8];
    for byte in &mut raw_len {
        *byte = reader
            .read_byte()
            .map_err(HeaderError::Io)?
            .ok_or(HeaderError::Malformed)?;
    }
    let mut lengths = [0u8; 256];
    for len in &mut lengths {
        *len = reader
            .read_byte()
            .map_err(HeaderError::Io)?
            .ok_or(HeaderError::Malformed)?;
    }
    Ok((u64::from_le_bytes(raw_len), lengths))
}
