/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::format;
use alloc::string::String;

use crate::codec::{CodecError, tally, write_str};
use crate::codes::{CodeTable, EOF_SYMBOL, HuffmanTree, SYMBOL_COUNT, Symbol, header};
use crate::impls::{BitReader, BitWriter};
use crate::traits::{BitRead, BitWrite, ByteRead, ByteWrite};

/// Encode `reader` into `writer` using the traditional variant.
///
/// The stream carries the frequency counts in its header and is terminated
/// by the code of the reserved end-of-stream symbol, which is always given a
/// count of one. An empty input produces a terminator-only header followed
/// by the end-of-stream code.
pub fn encode_traditional<R: ByteRead, W: ByteWrite>(
    reader: &mut R,
    writer: &mut W,
) -> Result<(), CodecError<R::Error, W::Error>> {
    let (mut freqs, _) = tally(reader)?;
    freqs.mark_eof();
    let tree = HuffmanTree::from_frequencies(&freqs);
    let table = CodeTable::from_tree(&tree);

    let mut bits = BitWriter::new(writer);
    header::write_frequencies(&mut bits, &tree).map_err(CodecError::Write)?;

    reader.rewind().map_err(CodecError::Read)?;
    while let Some(byte) = reader.read_byte().map_err(CodecError::Read)? {
        let entry = table.entry(byte as Symbol);
        bits.write_bits(entry.code.as_bytes(), entry.len as usize)
            .map_err(CodecError::Write)?;
    }
    let eof = table.entry(EOF_SYMBOL);
    bits.write_bits(eof.code.as_bytes(), eof.len as usize)
        .map_err(CodecError::Write)?;
    bits.flush().map_err(CodecError::Write)
}

/// Decode a traditional-variant stream from `reader` into `writer`.
///
/// The tree is rebuilt from the header counts with the same selection rule
/// the encoder used, so the codes match bit for bit. Decoding walks the tree
/// on each bit and stops at the end-of-stream symbol; running out of bits
/// first is a [`TruncatedStream`](CodecError::TruncatedStream) error.
pub fn decode_traditional<R: ByteRead, W: ByteWrite>(
    reader: &mut R,
    writer: &mut W,
) -> Result<(), CodecError<R::Error, W::Error>> {
    let mut bits = BitReader::new(reader);
    let freqs = header::read_frequencies(&mut bits)?;
    let tree = HuffmanTree::from_frequencies(&freqs);
    // the end-of-stream symbol is always active, so the tree cannot be empty
    let Some(root) = tree.root() else {
        return Err(CodecError::MalformedHeader);
    };

    let mut node = root;
    loop {
        let Some(bit) = bits.read_bit().map_err(CodecError::Read)? else {
            return Err(CodecError::TruncatedStream);
        };
        // a lone-leaf tree decodes one symbol per bit from the root itself
        if let Some((left, right)) = node.children() {
            node = if bit { right } else { left };
        }
        if let Some(symbol) = node.symbol() {
            if symbol == EOF_SYMBOL {
                break;
            }
            writer.write_byte(symbol as u8).map_err(CodecError::Write)?;
            node = root;
        }
    }
    writer.flush().map_err(CodecError::Write)
}

/// Write a human-readable listing of the traditional code for the content of
/// `reader`: one line per active symbol with its count and code bits.
pub fn show_tree_traditional<R: ByteRead, W: ByteWrite>(
    reader: &mut R,
    writer: &mut W,
) -> Result<(), CodecError<R::Error, W::Error>> {
    let (mut freqs, _) = tally(reader)?;
    freqs.mark_eof();
    let tree = HuffmanTree::from_frequencies(&freqs);
    let table = CodeTable::from_tree(&tree);

    let mut listing = String::new();
    listing.push_str("symbol      count  code\n");
    for symbol in 0..SYMBOL_COUNT as Symbol {
        let entry = table.entry(symbol);
        if entry.len == 0 {
            continue;
        }
        listing.push_str(&format!(
            "{}  {:>9}  ",
            symbol_label(symbol),
            freqs.count(symbol)
        ));
        for index in 0..entry.len as usize {
            listing.push(if entry.code.test(index) { '1' } else { '0' });
        }
        listing.push('\n');
    }
    write_str(writer, &listing).map_err(CodecError::Write)?;
    writer.flush().map_err(CodecError::Write)
}

pub(crate) fn symbol_label(symbol: Symbol) -> String {
    if symbol == EOF_SYMBOL {
        String::from(" EOF")
    } else {
        format!("0x{:02x}", symbol)
    }
}
