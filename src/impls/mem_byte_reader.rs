/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::convert::Infallible;

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::traits::ByteRead;

/// An implementation of [`ByteRead`] for a slice of bytes.
///
/// The backend can be anything dereferencing to a byte slice, owned or
/// borrowed. Reads past the end of the slice return [`None`] and never fail,
/// so the error type is [`Infallible`].
///
/// ### Example
/// ```
/// use huff_codec::prelude::*;
///
/// let mut reader = MemByteReader::new([0xca_u8, 0xfe].as_slice());
/// assert_eq!(reader.read_byte(), Ok(Some(0xca)));
/// assert_eq!(reader.read_byte(), Ok(Some(0xfe)));
/// assert_eq!(reader.read_byte(), Ok(None));
/// reader.rewind().unwrap();
/// assert_eq!(reader.read_byte(), Ok(Some(0xca)));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteReader<B: AsRef<[u8]>> {
    data: B,
    position: usize,
}

impl<B: AsRef<[u8]>> MemByteReader<B> {
    pub fn new(data: B) -> Self {
        Self { data, position: 0 }
    }

    /// Return the current position in bytes from the start of the slice.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Return the backend.
    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsRef<[u8]>> ByteRead for MemByteReader<B> {
    type Error = Infallible;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let byte = self.data.as_ref().get(self.position).copied();
        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    #[inline(always)]
    fn rewind(&mut self) -> Result<(), Self::Error> {
        self.position = 0;
        Ok(())
    }
}
