/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};

use crate::traits::{ByteRead, ByteWrite};

/// An adapter from [`Read`] + [`Seek`] and [`Write`] to
/// [`ByteRead`] and [`ByteWrite`], respectively.
///
/// Instances of this struct can be created using [`ByteAdapter::new`]. They
/// turn every standard seekable source or destination of bytes (such as
/// [`std::fs::File`], [`std::io::Cursor`], etc.) into a byte stream usable by
/// the codec.
///
/// Reads and writes go through the backend one byte at a time, so wrapping
/// files in a [`std::io::BufReader`] or [`std::io::BufWriter`] is strongly
/// advised.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct ByteAdapter<B> {
    backend: B,
}

impl<B> ByteAdapter<B> {
    /// Create a new ByteAdapter
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<B: Read + Seek> ByteRead for ByteAdapter<B> {
    type Error = std::io::Error;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, std::io::Error> {
        let mut buf = [0u8; 1];
        loop {
            match self.backend.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(ref e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    #[inline(always)]
    fn rewind(&mut self) -> Result<(), std::io::Error> {
        self.backend.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

impl<B: Write> ByteWrite for ByteAdapter<B> {
    type Error = std::io::Error;

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), std::io::Error> {
        self.backend.write_all(&[byte])
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.backend.flush()
    }
}
