/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Encode/decode drivers for the two stream variants.

Each driver takes a [`ByteRead`](crate::traits::ByteRead) to consume and a
[`ByteWrite`](crate::traits::ByteWrite) to produce, owns every intermediate
structure (frequency table, tree, code tables, bit streams) for the duration
of the call, and returns a [`CodecError`] wrapping either backend's error or
one of the format failures. There is no shared state between calls:
independent runs can proceed in parallel.

The traditional variant stores frequency counts and terminates its payload
with the code of [`EOF_SYMBOL`](crate::codes::EOF_SYMBOL); the canonical
variant stores code lengths only and frames the payload with the input
length. Encoders scan their input twice (once counting, once emitting), which
is why [`ByteRead`](crate::traits::ByteRead) requires
[`rewind`](crate::traits::ByteRead::rewind).

The `show_tree_*` functions write a human-readable listing of the code a
given input would be assigned, one line per active symbol.

*/

use core::error::Error;

use crate::codes::{FrequencyTable, Symbol, header::HeaderError};
use crate::traits::{ByteRead, ByteWrite};

mod error;
pub use error::CodecError;

mod traditional;
pub use traditional::{decode_traditional, encode_traditional, show_tree_traditional};

mod canonical;
pub use canonical::{decode_canonical, encode_canonical, show_tree_canonical};

mod variant;
pub use variant::{Variant, VariantParseError};

/// Count symbol occurrences in one pass, returning the table and the input
/// length in bytes.
fn tally<R: ByteRead, WE: Error + Send + Sync + 'static>(
    reader: &mut R,
) -> Result<(FrequencyTable, u64), CodecError<R::Error, WE>> {
    let mut freqs = FrequencyTable::new();
    let mut input_len = 0u64;
    while let Some(byte) = reader.read_byte().map_err(CodecError::Read)? {
        freqs
            .record(byte as Symbol)
            .map_err(|_| CodecError::InputTooLarge)?;
        input_len += 1;
    }
    Ok((freqs, input_len))
}

/// Write a string to a byte stream.
fn write_str<W: ByteWrite>(writer: &mut W, s: &str) -> Result<(), W::Error> {
    for &byte in s.as_bytes() {
        writer.write_byte(byte)?;
    }
    Ok(())
}

impl<RE, WE> From<HeaderError<RE>> for CodecError<RE, WE>
where
    RE: Error + Send + Sync + 'static,
    WE: Error + Send + Sync + 'static,
{
    fn from(error: HeaderError<RE>) -> Self {
        match error {
            HeaderError::Io(error) => CodecError::Read(error),
            HeaderError::Malformed => CodecError::MalformedHeader,
        }
    }
}
